extern crate self as taskflow;

#[macro_use]
mod macros;
mod api;
pub mod board;
pub mod calendar;
mod engine;
pub mod export;
mod rules;

pub use api::{
    CONFIDENCE, ExtractDetails, ExtractResult, ExtractResultVerbose, FragmentTrace, Language, Options, Priority,
    ProcessedTask, default_extractor, extract_tasks, extract_tasks_verbose_with, extract_tasks_with,
};
pub use engine::{CategoryClassifier, CompiledCategory, CompiledTaxonomy, Extractor, KeywordClassifier};
pub use rules::taxonomy::{CategoryDef, Taxonomy, TaxonomyError};

// --- Classification results ---------------------------------------------------

/// Why a fragment ended up in its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyReason {
    /// The caller's hint was confirmed by the hinted category's own rule.
    HintConfirmed,
    /// The first matching rule in taxonomy order.
    Rule,
    /// Nothing matched; the (recognized) hint was used as-is.
    HintFallback,
    /// Nothing matched and there was no usable hint.
    Default,
}

/// Output of a [`CategoryClassifier`].
///
/// `index` points into the [`CompiledTaxonomy`] the classifier was handed.
/// `evidence` is the matched text (after diacritic folding) when a rule fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub index: usize,
    pub reason: ClassifyReason,
    pub evidence: Option<String>,
}

impl Classification {
    pub fn new(index: usize, reason: ClassifyReason) -> Self {
        Classification { index, reason, evidence: None }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

// --- Internal types -----------------------------------------------------------

/// A retained fragment together with its position in the segmented input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fragment<'a> {
    pub index: usize,
    pub text: &'a str,
}
