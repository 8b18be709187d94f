// src/core/test_utils.rs
use anyhow::Result;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::core::lines::LineSource;
use crate::models::{BatchInfo, BatchReport, TextStats};
use crate::report::Reporter;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// One line of an in-memory file.
#[derive(Debug, Clone)]
pub enum Line {
    Text(String),
    Fail,
    Panic,
}

/// Serves files from memory so read failures and panics can be staged.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, Vec<Line>>,
}

impl MemorySource {
    pub fn with_file(mut self, path: &str, lines: &[&str]) -> Self {
        self.files.insert(
            PathBuf::from(path),
            lines.iter().map(|l| Line::Text((*l).to_owned())).collect(),
        );
        self
    }

    pub fn with_lines(mut self, path: &str, lines: Vec<Line>) -> Self {
        self.files.insert(PathBuf::from(path), lines);
        self
    }
}

impl LineSource for MemorySource {
    type Lines = std::vec::IntoIter<io::Result<String>>;

    fn open(&self, path: &Path) -> io::Result<Self::Lines> {
        let lines = self
            .files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;

        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            match line {
                Line::Text(text) => out.push(Ok(text.clone())),
                Line::Fail => out.push(Err(io::Error::other("read failed"))),
                Line::Panic => panic!("line source exploded"),
            }
        }
        Ok(out.into_iter())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    RunStarted(usize, usize),
    BatchStarted(BatchInfo),
    BatchFinished {
        index: usize,
        files: Vec<String>,
        failed: Vec<String>,
        stats: TextStats,
    },
    Finished(TextStats),
}

/// Keeps every event it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn batches(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::BatchFinished { .. }))
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn run_started(&mut self, total_files: usize, batches: usize) -> Result<()> {
        self.events.push(Event::RunStarted(total_files, batches));
        Ok(())
    }

    fn batch_started(&mut self, info: &BatchInfo) -> Result<()> {
        self.events.push(Event::BatchStarted(*info));
        Ok(())
    }

    fn batch_finished(&mut self, report: &BatchReport) -> Result<()> {
        self.events.push(Event::BatchFinished {
            index: report.info.index,
            files: report.files.iter().map(|f| f.name.clone()).collect(),
            failed: report
                .files
                .iter()
                .filter(|f| f.result.is_err())
                .map(|f| f.name.clone())
                .collect(),
            stats: report.stats.clone(),
        });
        Ok(())
    }

    fn finished(&mut self, total: &TextStats) -> Result<()> {
        self.events.push(Event::Finished(total.clone()));
        Ok(())
    }
}
