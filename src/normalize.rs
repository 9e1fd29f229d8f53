//! Brace normalization: isolate every unquoted `{` and `}` so that each structural token
//! ends up on its own line before classification.
//!
//! Text between a pair of double quotes is passed through untouched (curly brackets show up
//! in as-path expressions and descriptions). Normalized lines keep the source line they came
//! from so errors can point back at the input.

use crate::convert::ConvertError;
use crate::options::QuoteHandling;

/// Normalized configuration text plus the source line of every normalized line.
#[derive(Debug, Clone)]
pub struct Normalized {
    text: String,
    origins: Vec<usize>,
}

impl Normalized {
    pub fn into_string(self) -> String {
        self.text
    }

    /// Iterate normalized lines as `(source_line, line)`, source lines being 1-based.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.origins.iter().copied().zip(self.text.split('\n'))
    }
}

/// Normalize `source`, isolating every unquoted brace on its own line.
///
/// Fails with [`ConvertError::UnbalancedQuotes`] when the text holds an odd number of `"`
/// and `quotes` is [`QuoteHandling::Reject`]. With [`QuoteHandling::Reference`] the text after
/// the last quote is treated as quoted.
pub fn normalize(source: &str, quotes: QuoteHandling) -> Result<Normalized, ConvertError> {
    let count = source.matches('"').count();
    if count % 2 == 1 {
        match quotes {
            QuoteHandling::Reject => return Err(ConvertError::UnbalancedQuotes { count }),
            QuoteHandling::Reference => {
                log::warn!("odd number of double quotes ({}), text after the last one is left as is", count);
            }
        }
    }

    let mut text = String::with_capacity(source.len() + source.len() / 8);
    let mut origins = vec![1];
    let mut line = 1usize;
    let mut quoted = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                text.push(c);
            }
            '\n' => {
                line += 1;
                text.push(c);
                origins.push(line);
            }
            '{' if !quoted => {
                text.push(c);
                if chars.peek() != Some(&'\n') {
                    text.push('\n');
                    origins.push(line);
                }
            }
            '}' if !quoted => {
                if !text.ends_with('\n') {
                    text.push('\n');
                    origins.push(line);
                }
                text.push(c);
            }
            _ => text.push(c),
        }
    }

    Ok(Normalized { text, origins })
}

/// Normalize and keep only the text.
pub fn normalize_braces(source: &str, quotes: QuoteHandling) -> Result<String, ConvertError> {
    normalize(source, quotes).map(Normalized::into_string)
}
