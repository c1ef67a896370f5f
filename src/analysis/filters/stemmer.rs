use crate::analysis::filter::TokenFilter;
use crate::analysis::language::russian::RussianStemmer;
use crate::analysis::token::Token;

/// Replaces each token's text with its stem, keeping its position.
#[derive(Debug, Clone, Default)]
pub struct StemmerFilter {
    pub stemmer: RussianStemmer,
}

impl StemmerFilter {
    pub fn new(stemmer: RussianStemmer) -> Self {
        StemmerFilter { stemmer }
    }

    pub fn russian() -> Self {
        StemmerFilter::new(RussianStemmer::new())
    }
}

impl TokenFilter for StemmerFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.text = self.stemmer.stem(&token.text);
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "stemmer"
    }
}
