// src/models/text_stats.rs
use std::collections::HashMap;

/// Line, character and word counts plus a word-frequency table.
///
/// One instance exists per chunk result, per file, per batch and for the
/// grand total. The only mutation after construction is [`TextStats::merge`],
/// which takes the other side by value so an accumulator can never be merged
/// into itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStats {
    pub label: String,
    pub lines: u64,
    pub chars: u64,
    pub words: u64,
    pub frequency: HashMap<String, u64>,
}

impl TextStats {
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Folds `other` into `self`. Scalar counters are summed and frequency
    /// counts are added key by key. The label of `self` is kept.
    #[inline]
    pub fn merge(&mut self, other: Self) {
        self.lines = self.lines.saturating_add(other.lines);
        self.chars = self.chars.saturating_add(other.chars);
        self.words = self.words.saturating_add(other.words);

        if self.frequency.is_empty() {
            self.frequency = other.frequency;
            return;
        }
        for (word, count) in other.frequency {
            self.frequency
                .entry(word)
                .and_modify(|existing| *existing = existing.saturating_add(count))
                .or_insert(count);
        }
    }

    /// Records one occurrence of `word`.
    #[inline]
    pub fn record_word(&mut self, word: &str) {
        self.words = self.words.saturating_add(1);
        if let Some(count) = self.frequency.get_mut(word) {
            *count = count.saturating_add(1);
        } else {
            self.frequency.insert(word.to_owned(), 1);
        }
    }

    #[inline]
    #[must_use]
    pub fn unique_words(&self) -> usize {
        self.frequency.len()
    }

    /// The `k` most frequent words, by descending count and then ascending
    /// word so equal counts always come out in the same order.
    #[inline]
    #[must_use]
    pub fn top_words(&self, k: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .frequency
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(k);
        ranked
    }

    /// Sum of all frequency values. Always equal to `words`.
    #[inline]
    #[must_use]
    pub fn frequency_total(&self) -> u64 {
        self.frequency.values().copied().sum()
    }
}
