// src/core/analyzer.rs
use crate::core::tokenizer::tokenize;
use crate::models::TextStats;

/// Counts lines, characters and words of a chunk and builds its local
/// word-frequency table.
///
/// Characters are Unicode scalar values; line terminators are not part of
/// the input and are not counted. The result is fresh and unshared, the
/// caller merges it wherever it belongs.
#[inline]
#[must_use]
pub fn analyze<S: AsRef<str>>(lines: &[S]) -> TextStats {
    let mut stats = TextStats::new("chunk");

    for line in lines {
        let line = line.as_ref();
        stats.lines = stats.lines.saturating_add(1);
        stats.chars = stats
            .chars
            .saturating_add(u64::try_from(line.chars().count()).unwrap_or(u64::MAX));

        for word in &tokenize(line) {
            stats.record_word(word);
        }
    }

    stats
}
