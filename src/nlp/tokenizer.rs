//! Text tokenizer
//!
//! Turns a raw post into lowercase word tokens. Short emoticons such as
//! `:)` or `<3` are kept verbatim as single tokens.

/// Characters an emoticon can be built from
pub const EMOTICON_SYMBOLS: &[char] = &[':', ';', ')', '(', '-', '=', '<', '3', 'D', 'P', 'X', '/'];

const MIN_EMOTICON_LEN: usize = 2;
const MAX_EMOTICON_LEN: usize = 3;

/// Character-level tokenizer for short posts
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Keep emoticons as atomic tokens
    preserve_emoticons: bool,
}

impl Tokenizer {
    /// Create a tokenizer that preserves emoticons
    pub fn new() -> Self {
        Self {
            preserve_emoticons: true,
        }
    }

    /// Toggle emoticon preservation
    pub fn preserve_emoticons(mut self, preserve: bool) -> Self {
        self.preserve_emoticons = preserve;
        self
    }

    /// Tokenize a text.
    ///
    /// The text is scanned one character at a time. Letters are lowercased,
    /// an emoticon that starts a space-delimited word is copied unchanged,
    /// and every other character acts as a separator.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut cleaned = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let at_word_start = i == 0 || chars[i - 1] == ' ';

            if self.preserve_emoticons && at_word_start {
                if let Some(len) = emoticon_len(&chars[i..]) {
                    cleaned.extend(&chars[i..i + len]);
                    i += len;
                    continue;
                }
            }

            let c = chars[i];
            if c.is_alphabetic() {
                cleaned.extend(c.to_lowercase());
            } else {
                cleaned.push(' ');
            }
            i += 1;
        }

        cleaned.split_whitespace().map(str::to_string).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the emoticon at the head of `chars`, if there is one.
///
/// An emoticon is a run of 2 or 3 symbols followed by a space or the end
/// of the text.
fn emoticon_len(chars: &[char]) -> Option<usize> {
    let run = chars
        .iter()
        .take(MAX_EMOTICON_LEN + 1)
        .take_while(|c| EMOTICON_SYMBOLS.contains(c))
        .count();

    if !(MIN_EMOTICON_LEN..=MAX_EMOTICON_LEN).contains(&run) {
        return None;
    }

    match chars.get(run) {
        None | Some(' ') => Some(run),
        Some(_) => None,
    }
}

/// Tokenize with the default settings
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}
