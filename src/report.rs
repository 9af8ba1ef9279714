//! Streaming diagnostics and counters for a generation run
//!
//! Skips are announced as they happen rather than batched, so long runs show
//! progress; the written-line count feeds the final summary.

/// Collects counts for a run and emits per-event diagnostic lines.
#[derive(Debug, Default)]
pub struct Report {
    written: usize,
    skipped: usize,
    missing_colors: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node whose texture was not found in the index.
    pub fn skip(&mut self, node: &str) {
        println!("skip {node} texture not found");
        self.skipped += 1;
    }

    /// Record a texture that decoded fine but had no opaque pixels.
    pub fn missing_color(&mut self, file_name: &str) {
        eprintln!("didn't find color for '{file_name}'");
        self.missing_colors += 1;
    }

    /// Record one line written to the output.
    pub fn line_written(&mut self) {
        self.written += 1;
    }

    /// Number of data lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of records skipped because their texture was missing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Final summary line for the run.
    pub fn summary(&self) -> String {
        format!("Done, {} entries written.", self.written)
    }
}
