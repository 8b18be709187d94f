// src/models/summary.rs
use serde::Serialize;

use crate::models::TextStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Read-only view of a [`TextStats`] as it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub label: String,
    pub lines: u64,
    pub chars: u64,
    pub words: u64,
    pub unique_words: usize,
    pub top_words: Vec<WordCount>,
}

impl Summary {
    #[inline]
    #[must_use]
    pub fn from_stats(stats: &TextStats, top: usize) -> Self {
        Self {
            label: stats.label.clone(),
            lines: stats.lines,
            chars: stats.chars,
            words: stats.words,
            unique_words: stats.unique_words(),
            top_words: stats
                .top_words(top)
                .into_iter()
                .map(|(word, count)| WordCount {
                    word: word.to_owned(),
                    count,
                })
                .collect(),
        }
    }
}
