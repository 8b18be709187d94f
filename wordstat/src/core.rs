// src/core.rs
pub mod analyzer;
pub mod coordinator;
pub mod file_processor;
pub mod lines;
pub mod partition;
pub mod pools;
pub mod scanner;
pub mod tokenizer;
#[cfg(test)]
pub mod test_utils;
