use crate::ClassifyReason;
use crate::engine::{self, Extractor};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(Extractor::builtin);

/// Confidence attached to every extracted task.
///
/// The engine is a fixed rule table, so this is a constant rather than a
/// computed probability.
pub const CONFIDENCE: f32 = 0.85;

/// Language of a fragment, decided from cue words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ro,
    En,
    Mixed,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ro => "ro",
            Language::En => "en",
            Language::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate task extracted from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTask {
    /// The fragment as typed (trimmed, never empty).
    pub text: String,
    /// Clock time or day-part phrase, as typed.
    pub time: Option<String>,
    /// Display label of the resolved taxonomy category.
    pub category: String,
    /// Stable identifier of the resolved taxonomy category.
    pub category_id: String,
    /// Relative-day phrase ("tomorrow", "mâine", ...), as typed.
    pub deadline: Option<String>,
    pub priority: Priority,
    pub language: Language,
    pub confidence: f32,
}

/// Options that affect extraction.
#[derive(Debug, Clone)]
pub struct Options {
    /// Fragments shorter than this (in characters, after trimming) are noise.
    pub min_fragment_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { min_fragment_len: 6 }
    }
}

/// Result from [`extract_tasks_with`].
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// The input text.
    pub text: String,
    /// Extracted tasks, in fragment order.
    pub tasks: Vec<ProcessedTask>,
    /// Total elapsed time spent extracting.
    pub elapsed: Duration,
}

/// Per-fragment decision trace, for debugging rule tables.
#[derive(Debug, Clone, Serialize)]
pub struct FragmentTrace {
    /// Position of the fragment among the retained fragments.
    pub index: usize,
    pub text: String,
    /// Romanian cue words found (diacritic letters are reported as-is).
    pub romanian_cues: Vec<String>,
    pub english_cues: Vec<String>,
    pub category_id: String,
    pub reason: ClassifyReason,
    /// Matched keyword or pattern text, if a rule fired.
    pub evidence: Option<String>,
    /// Marker word that set a non-default priority.
    pub priority_marker: Option<String>,
}

/// Additional details returned by [`extract_tasks_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractDetails {
    pub total: Duration,
    /// Time spent splitting the input into fragments.
    pub segment: Duration,
    /// Time spent annotating and assembling fragments.
    pub annotate: Duration,
    /// Pieces discarded by the minimum-length filter.
    pub dropped: usize,
    /// Hint as resolved against the taxonomy (`None` if absent or unknown).
    pub hint: Option<String>,
    /// Category ids in evaluation order.
    pub taxonomy: Vec<String>,
    pub fragments: Vec<FragmentTrace>,
}

/// Result from [`extract_tasks_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractResultVerbose {
    pub text: String,
    pub tasks: Vec<ProcessedTask>,
    pub elapsed: Duration,
    pub details: ExtractDetails,
}

/// The process-wide extractor built from the embedded taxonomy.
pub fn default_extractor() -> &'static Extractor {
    &DEFAULT_EXTRACTOR
}

/// Extract tasks from `text` with the built-in taxonomy and default [`Options`].
///
/// `hint` is a taxonomy id ("finance", "schedule", ...). Unknown hints are
/// ignored.
///
/// # Example
/// ```
/// use taskflow::{Language, extract_tasks};
///
/// let tasks = extract_tasks("Trebuie să plătesc factura la lumină", None);
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].category, "Finance");
/// assert_eq!(tasks[0].language, Language::Ro);
/// ```
pub fn extract_tasks(text: &str, hint: Option<&str>) -> Vec<ProcessedTask> {
    extract_tasks_with(default_extractor(), text, hint, &Options::default()).tasks
}

/// Extract tasks using `extractor` and the provided `options`.
pub fn extract_tasks_with(extractor: &Extractor, text: &str, hint: Option<&str>, options: &Options) -> ExtractResult {
    let run = extractor.run(text, hint, options);

    ExtractResult { text: text.to_string(), tasks: run.tasks, elapsed: run.metrics.total }
}

/// Extract tasks and return per-stage timings plus per-fragment traces.
///
/// The default [`extract_tasks_with`] path does not build these traces.
pub fn extract_tasks_verbose_with(
    extractor: &Extractor,
    text: &str,
    hint: Option<&str>,
    options: &Options,
) -> ExtractResultVerbose {
    let hint_index = extractor.resolve_hint(hint);
    let run = extractor.run_with_traces(text, hint, options);
    let taxonomy = extractor.taxonomy();

    let details = ExtractDetails {
        total: run.metrics.total,
        segment: run.metrics.segment,
        annotate: run.metrics.annotate,
        dropped: run.metrics.dropped,
        hint: hint_index.and_then(|idx| taxonomy.get(idx)).map(|c| c.id.clone()),
        taxonomy: taxonomy.categories().iter().map(|c| c.id.clone()).collect(),
        fragments: run.traces.into_iter().map(trace_to_public).collect(),
    };

    ExtractResultVerbose { text: text.to_string(), tasks: run.tasks, elapsed: run.metrics.total, details }
}

fn trace_to_public(trace: engine::Trace) -> FragmentTrace {
    FragmentTrace {
        index: trace.index,
        text: trace.text,
        romanian_cues: trace.cues.romanian,
        english_cues: trace.cues.english,
        category_id: trace.category_id,
        reason: trace.classification.reason,
        evidence: trace.classification.evidence,
        priority_marker: trace.priority_marker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_with_returns_tasks_and_text() {
        let res = extract_tasks_with(default_extractor(), "Call the bank tomorrow.", None, &Options::default());

        assert_eq!(res.text, "Call the bank tomorrow.");
        assert!(res.elapsed >= Duration::ZERO);
        assert_eq!(res.tasks.len(), 1);
        assert_eq!(res.tasks[0].text, "Call the bank tomorrow");
        assert_eq!(res.tasks[0].category, "Finance");
        assert_eq!(res.tasks[0].deadline.as_deref(), Some("tomorrow"));
    }

    #[test]
    fn verbose_includes_traces_and_taxonomy_order() {
        let res = extract_tasks_verbose_with(
            default_extractor(),
            "Pay rent! ok. Send the report to Ana",
            Some("MAIL"),
            &Options::default(),
        );

        assert_eq!(res.elapsed, res.details.total);
        assert!(res.details.segment <= res.details.total);
        assert_eq!(res.details.dropped, 1);
        assert_eq!(res.details.hint.as_deref(), Some("mail"));
        assert_eq!(res.details.taxonomy, vec!["finance", "schedule", "mail", "notes"]);
        assert_eq!(res.details.fragments.len(), 2);

        let first = &res.details.fragments[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.category_id, "finance");
        assert_eq!(first.reason, ClassifyReason::Rule);
        assert_eq!(first.evidence.as_deref(), Some("pay"));

        let second = &res.details.fragments[1];
        assert_eq!(second.category_id, "mail");
        assert_eq!(second.reason, ClassifyReason::HintConfirmed);
        assert!(second.english_cues.contains(&"the".to_string()));
    }

    #[test]
    fn verbose_reports_unknown_hint_as_absent() {
        let res = extract_tasks_verbose_with(default_extractor(), "Write a poem", Some("poetry"), &Options::default());
        assert_eq!(res.details.hint, None);
        assert_eq!(res.tasks[0].category, "Mail Report");
    }

    #[test]
    fn options_control_minimum_fragment_length() {
        let opts = Options { min_fragment_len: 3 };
        let res = extract_tasks_with(default_extractor(), "Buy milk", None, &opts);
        assert_eq!(res.tasks.len(), 1);

        let strict = Options { min_fragment_len: 20 };
        let res = extract_tasks_with(default_extractor(), "Buy milk", None, &strict);
        assert!(res.tasks.is_empty());
    }

    #[test]
    fn language_and_priority_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Mixed).unwrap(), "\"mixed\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
