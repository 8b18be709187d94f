// src/core/tokenizer.rs
use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::unwrap_used, reason = "Pattern is a compile-time constant")]
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}']+").unwrap());

/// The words of one line, lower-cased.
///
/// Iteration is lazy and can be repeated; every call to [`Tokens::iter`]
/// starts again from the beginning of the line.
#[derive(Debug, Clone)]
pub struct Tokens {
    lowered: String,
}

impl Tokens {
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        WORD.find_iter(&self.lowered).map(|m| m.as_str())
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a str;
    type IntoIter = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Splits `line` into maximal runs of letters, digits and apostrophes after
/// lower-casing it.
#[inline]
#[must_use]
pub fn tokenize(line: &str) -> Tokens {
    Tokens {
        lowered: line.to_lowercase(),
    }
}
