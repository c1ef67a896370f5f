use serde::{Deserialize, Serialize};
use crate::analysis::token::Token;

pub trait Tokenizer: Send {
    fn tokenize(&mut self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    /// Statistics accumulated over every `tokenize` call on this instance.
    fn stats(&self) -> TokenizerStats;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizerStats {
    pub total_tokens: usize,
    pub avg_length: f64,    // Mean token length in bytes
}

/// Punctuation that always ends a word, in addition to ASCII control
/// characters and space.
const DELIMITERS: &[char] = &[
    ',', '.', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
    '<', '>', '/', '\\', '|', '=', '+', '*', '&',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Delimiter,
    Cyrillic,
    Latin,
    Joiner,  // digit or hyphen, only valid inside a word
    Other,
}

fn classify(ch: char) -> CharClass {
    if (ch as u32) <= 0x20 || DELIMITERS.contains(&ch) {
        CharClass::Delimiter
    } else if ('\u{0400}'..='\u{047F}').contains(&ch) {
        // Exactly the code points whose UTF-8 lead byte is 0xD0 or 0xD1
        CharClass::Cyrillic
    } else if ch.is_ascii_alphabetic() {
        CharClass::Latin
    } else if ch.is_ascii_digit() || ch == '-' {
        CharClass::Joiner
    } else {
        CharClass::Other
    }
}

/// Lowercase ASCII letters and the basic Russian alphabet (А–Я, Ё).
/// Every other character is passed through unchanged.
pub fn lowercase(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'A'..='Z' => ch.to_ascii_lowercase(),
            'А'..='Я' => char::from_u32(ch as u32 + 0x20).unwrap_or(ch),
            'Ё' => 'ё',
            _ => ch,
        })
        .collect()
}

/// Word tokenizer for mixed Russian/English text.
///
/// Words are runs of Latin letters and Cyrillic characters; digits and
/// hyphens may continue a word but never start one. Runs shorter than two
/// bytes and purely numeric runs are dropped.
#[derive(Debug, Clone, Default)]
pub struct StandardTokenizer {
    total_tokens: usize,
    total_length: usize,
}

impl StandardTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self, current: &mut String, start: usize, tokens: &mut Vec<Token>) {
        if current.len() >= 2 && !current.bytes().all(|b| b.is_ascii_digit()) {
            let text = lowercase(current);
            self.total_length += text.len();
            tokens.push(Token::new(text, start));
        }
        current.clear();
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&mut self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start = 0;

        for (offset, ch) in text.char_indices() {
            let extends_word = match classify(ch) {
                CharClass::Cyrillic | CharClass::Latin => true,
                CharClass::Joiner => !current.is_empty(),
                CharClass::Delimiter | CharClass::Other => false,
            };

            if extends_word {
                current.push(ch);
            } else {
                self.flush(&mut current, start, &mut tokens);
                start = offset + ch.len_utf8();
            }
        }
        self.flush(&mut current, start, &mut tokens);

        self.total_tokens += tokens.len();
        tokens
    }

    fn name(&self) -> &str {
        "standard"
    }

    fn stats(&self) -> TokenizerStats {
        let avg_length = if self.total_tokens > 0 {
            self.total_length as f64 / self.total_tokens as f64
        } else {
            0.0
        };

        TokenizerStats {
            total_tokens: self.total_tokens,
            avg_length,
        }
    }
}
