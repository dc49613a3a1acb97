use std::path::Path;
use std::time::Duration;

use crate::error::ReconcileError;
use crate::reconcile::{MergeDetail, ReconcileResult};

/// Plain-text summary of one harvest-and-reconcile run.
#[derive(Debug, Default)]
pub struct RunReport<'a> {
    result: Option<&'a ReconcileResult>,
    counts: Vec<(String, usize)>,
    timings: Vec<(String, Duration)>,
}

impl<'a> RunReport<'a> {
    pub fn new(result: &'a ReconcileResult) -> Self {
        Self {
            result: Some(result),
            ..Default::default()
        }
    }

    /// Record how many weapons a source produced.
    pub fn add_count(&mut self, label: impl Into<String>, count: usize) {
        self.counts.push((label.into(), count));
    }

    pub fn add_timing(&mut self, label: impl Into<String>, elapsed: Duration) {
        self.timings.push((label.into(), elapsed));
    }

    /// Write the report to a file.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ReconcileError> {
        let mut text = String::new();
        self.render(&mut text)
            .map_err(|e| ReconcileError::io(path, std::io::Error::other(e)))?;
        std::fs::write(path, text).map_err(|e| ReconcileError::io(path, e))
    }

    fn render(&self, out: &mut String) -> std::fmt::Result {
        use std::fmt::Write;

        writeln!(out, "=== Reconcile Log ===")?;
        writeln!(
            out,
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out)?;

        writeln!(out, "--- Harvest ---")?;
        for (label, count) in &self.counts {
            writeln!(out, "{label}: {count} weapons")?;
        }
        writeln!(out)?;

        writeln!(out, "--- Timings ---")?;
        for (label, elapsed) in &self.timings {
            writeln!(out, "{label}: {:.3}s", elapsed.as_secs_f64())?;
        }
        writeln!(out)?;

        let Some(result) = self.result else {
            return Ok(());
        };
        let stats = &result.stats;
        writeln!(out, "--- Summary ---")?;
        writeln!(out, "Categories: {}", stats.categories)?;
        writeln!(out, "Mapped: {}", stats.mapped)?;
        writeln!(out, "Ambiguous: {}", stats.ambiguous)?;
        writeln!(out, "Unmatched: {}", stats.unmatched)?;
        writeln!(out, "Merged: {}", stats.merged)?;
        writeln!(out, "Duplicates: {}", stats.duplicates)?;
        writeln!(out)?;

        writeln!(out, "--- Details ---")?;
        writeln!(out)?;
        for detail in &result.details {
            match detail {
                MergeDetail::Ambiguous {
                    category,
                    alternate,
                    candidates,
                } => {
                    writeln!(out, "[AMBIGUOUS] {category}: {alternate}")?;
                    for candidate in candidates {
                        writeln!(out, "  - {candidate}")?;
                    }
                }
                MergeDetail::Unmatched {
                    category,
                    alternate,
                } => {
                    writeln!(out, "[UNMATCHED] {category}: {alternate}")?;
                }
                MergeDetail::Duplicate {
                    category,
                    alternate,
                    reference,
                } => {
                    writeln!(
                        out,
                        "[DUPLICATE] {category}: {alternate} -> {reference} (already merged)"
                    )?;
                }
            }
        }
        Ok(())
    }
}
