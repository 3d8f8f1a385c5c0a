//! Extraction run metrics.
//!
//! `Extractor::run` collects stage timings only; `Extractor::run_with_traces`
//! additionally records a [`Trace`] per fragment. Traces allocate, so they are
//! opt-in.

use super::language::CueScan;
use crate::{Classification, ProcessedTask};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub(crate) struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent segmenting the input.
    pub segment: Duration,
    /// Time spent detecting, classifying, extracting and assembling.
    pub annotate: Duration,
    /// Pieces dropped by the minimum-length filter.
    pub dropped: usize,
}

/// Decision record for one fragment.
#[derive(Debug, Clone)]
pub(crate) struct Trace {
    pub index: usize,
    pub text: String,
    pub cues: CueScan,
    pub category_id: String,
    pub classification: Classification,
    pub priority_marker: Option<String>,
}

/// Extractor output bundled with timing information.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub tasks: Vec<ProcessedTask>,
    /// Empty unless the run was asked for traces.
    pub traces: Vec<Trace>,
    pub metrics: RunMetrics,
}
