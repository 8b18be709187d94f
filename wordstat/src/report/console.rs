// src/report/console.rs
use anyhow::Result;
use std::error::Error as _;
use std::io::Write;

use crate::models::{BatchInfo, BatchReport, Summary, TextStats};
use crate::report::Reporter;

const RULE: &str = "=====================================";
const THIN_RULE: &str = "-------------------------------------";

/// Human-readable report, one block per batch.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    top: usize,
}

impl<W: Write> ConsoleReporter<W> {
    #[inline]
    pub const fn new(out: W, top: usize) -> Self {
        Self { out, top }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_summary(&mut self, stats: &TextStats, title: &str) -> Result<()> {
        let summary = Summary::from_stats(stats, self.top);
        writeln!(self.out, "\n=== {title} ===")?;
        writeln!(self.out, "Line Count: {}", summary.lines)?;
        writeln!(self.out, "Character Count: {}", summary.chars)?;
        writeln!(self.out, "Word Count: {}", summary.words)?;
        writeln!(self.out, "Unique Word Count: {}", summary.unique_words)?;
        writeln!(self.out, "\nTop {} Most Frequent Words:", self.top)?;
        for entry in &summary.top_words {
            writeln!(self.out, "{:<10} : {}", entry.word, entry.count)?;
        }
        writeln!(self.out, "\n---------------------------------------")?;
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, total_files: usize, batches: usize) -> Result<()> {
        writeln!(self.out, "\n{RULE}")?;
        writeln!(self.out, "Total files: {total_files}")?;
        writeln!(self.out, "Processing in {batches} batch(es) in order...")?;
        writeln!(self.out, "{RULE}")?;
        Ok(())
    }

    fn batch_started(&mut self, info: &BatchInfo) -> Result<()> {
        writeln!(self.out, "\n{THIN_RULE}")?;
        writeln!(self.out, "BATCH {} STARTING...", info.index)?;
        writeln!(
            self.out,
            "Processing files {} to {} of {}",
            info.first, info.last, info.total_files
        )?;
        writeln!(self.out, "{THIN_RULE}")?;
        Ok(())
    }

    fn batch_finished(&mut self, report: &BatchReport) -> Result<()> {
        writeln!(self.out, "\nTHREAD ASSIGNMENTS (Batch {}):", report.info.index)?;
        for file in &report.files {
            let worker = file
                .worker
                .map_or_else(|| String::from("caller"), |id| id.to_string());
            writeln!(self.out, "Thread {worker:<20} -> File: {}", file.name)?;
        }

        for file in &report.files {
            match &file.result {
                Ok(stats) => self.write_summary(stats, &format!("FILE SUMMARY: {}", file.name))?,
                Err(err) => {
                    writeln!(self.out, "\n=== FILE FAILED: {} ===", file.name)?;
                    writeln!(self.out, "{err}")?;
                    if let Some(cause) = err.source() {
                        writeln!(self.out, "Caused by: {cause}")?;
                    }
                }
            }
        }

        writeln!(self.out, "\n{RULE}")?;
        self.write_summary(&report.stats, &format!("BATCH {} SUMMARY", report.info.index))?;
        self.out.flush()?;
        Ok(())
    }

    fn finished(&mut self, total: &TextStats) -> Result<()> {
        writeln!(self.out, "\n{RULE}")?;
        self.write_summary(total, "FINAL RESULTS (ALL FILES)")?;
        self.out.flush()?;
        Ok(())
    }
}
