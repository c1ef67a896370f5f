use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer, TokenizerStats};

/// Text analysis pipeline
///
/// Owns its tokenizer, so tokenizer statistics cover exactly the text this
/// analyzer has seen. Use one analyzer per indexing run.
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&mut self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// e.g. `russian: standard -> stemmer`
    pub fn describe(&self) -> String {
        let mut stages = vec![self.tokenizer.name()];
        stages.extend(self.filters.iter().map(|f| f.name()));
        format!("{}: {}", self.name, stages.join(" -> "))
    }

    pub fn tokenizer_stats(&self) -> TokenizerStats {
        self.tokenizer.stats()
    }

    /// Standard tokenizer followed by the Russian stemmer
    pub fn russian() -> Self {
        Analyzer::new("russian".to_string(),
                      Box::new(StandardTokenizer::new()))
            .add_filter(Box::new(StemmerFilter::russian()))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::russian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_pipeline() {
        let mut analyzer = Analyzer::russian();
        let tokens = analyzer.analyze("Великие войны, 1812");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["велик", "войн"]);
        assert_eq!(tokens[1].position, 15);
        assert_eq!(analyzer.tokenizer_stats().total_tokens, 2);
    }

    #[test]
    fn describes_pipeline() {
        assert_eq!(Analyzer::russian().describe(), "russian: standard -> stemmer");
    }
}
