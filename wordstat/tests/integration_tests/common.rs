// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::num::NonZeroUsize;
use std::path::Path;
use tempfile::TempDir;
use wordstat::{BatchInfo, BatchReport, Reporter, Settings, TextStats};

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// `count` files named `doc00.txt`, `doc01.txt`, ... each with two lines.
pub fn setup_numbered_directory(count: usize) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    for i in 0..count {
        create_test_file(
            temp_dir.path(),
            &format!("doc{i:02}.txt"),
            &format!("Document {i} begins here\nand the document ends\n"),
        )?;
    }
    Ok(temp_dir)
}

pub fn settings(workers: usize) -> Settings {
    Settings {
        workers: NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN),
        ..Settings::default()
    }
}

#[derive(Debug, Default)]
pub struct BatchRecord {
    pub info: Option<BatchInfo>,
    pub files: Vec<String>,
    pub failed: Vec<String>,
    pub stats: TextStats,
}

/// Collects finished batches and the final total.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub started: Vec<BatchInfo>,
    pub batches: Vec<BatchRecord>,
    pub total: Option<TextStats>,
}

impl Reporter for CollectingReporter {
    fn run_started(&mut self, _total_files: usize, _batches: usize) -> Result<()> {
        Ok(())
    }

    fn batch_started(&mut self, info: &BatchInfo) -> Result<()> {
        assert_eq!(
            self.started.len(),
            self.batches.len(),
            "batch started before the previous one finished"
        );
        self.started.push(*info);
        Ok(())
    }

    fn batch_finished(&mut self, report: &BatchReport) -> Result<()> {
        self.batches.push(BatchRecord {
            info: Some(report.info),
            files: report.files.iter().map(|f| f.name.clone()).collect(),
            failed: report
                .failures()
                .map(|err| err.path().display().to_string())
                .collect(),
            stats: report.stats.clone(),
        });
        Ok(())
    }

    fn finished(&mut self, total: &TextStats) -> Result<()> {
        self.total = Some(total.clone());
        Ok(())
    }
}
