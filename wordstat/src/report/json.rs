// src/report/json.rs
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::models::{BatchInfo, BatchReport, Summary, TextStats};
use crate::report::Reporter;

#[derive(Debug, Serialize)]
struct Assignment<'a> {
    worker: Option<usize>,
    file: &'a str,
}

#[derive(Debug, Serialize)]
struct Failure<'a> {
    file: &'a str,
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    RunStarted {
        total_files: usize,
        batches: usize,
    },
    BatchStarted {
        batch: usize,
        first: usize,
        last: usize,
        total_files: usize,
    },
    BatchFinished {
        batch: usize,
        assignments: Vec<Assignment<'a>>,
        files: Vec<Summary>,
        failures: Vec<Failure<'a>>,
        summary: Summary,
    },
    Finished {
        summary: Summary,
    },
}

/// Writes one JSON object per line for every reporting event.
#[derive(Debug)]
pub struct JsonReporter<W> {
    out: W,
    top: usize,
}

impl<W: Write> JsonReporter<W> {
    #[inline]
    pub const fn new(out: W, top: usize) -> Self {
        Self { out, top }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn run_started(&mut self, total_files: usize, batches: usize) -> Result<()> {
        self.emit(&Event::RunStarted {
            total_files,
            batches,
        })
    }

    fn batch_started(&mut self, info: &BatchInfo) -> Result<()> {
        self.emit(&Event::BatchStarted {
            batch: info.index,
            first: info.first,
            last: info.last,
            total_files: info.total_files,
        })
    }

    fn batch_finished(&mut self, report: &BatchReport) -> Result<()> {
        let top = self.top;
        let event = Event::BatchFinished {
            batch: report.info.index,
            assignments: report
                .files
                .iter()
                .map(|file| Assignment {
                    worker: file.worker.map(|id| id.0),
                    file: &file.name,
                })
                .collect(),
            files: report
                .succeeded()
                .map(|stats| Summary::from_stats(stats, top))
                .collect(),
            failures: report
                .files
                .iter()
                .filter_map(|file| {
                    file.result.as_ref().err().map(|err| Failure {
                        file: &file.name,
                        error: err.to_string(),
                    })
                })
                .collect(),
            summary: Summary::from_stats(&report.stats, top),
        };
        self.emit(&event)?;
        self.out.flush()?;
        Ok(())
    }

    fn finished(&mut self, total: &TextStats) -> Result<()> {
        self.emit(&Event::Finished {
            summary: Summary::from_stats(total, self.top),
        })?;
        self.out.flush()?;
        Ok(())
    }
}
