//! Orchestration and assembly.
//!
//! [`Extractor`] owns one compiled taxonomy and one classifier strategy. For
//! every fragment the segmenter yields, it runs the three independent stages
//! and merges their output into a [`ProcessedTask`]:
//!
//! ```text
//! fragment ─┬─ CueScan::scan         ─▶ language
//!           ├─ classifier.classify   ─▶ category (clamped to taxonomy)
//!           └─ Attributes::extract   ─▶ time, deadline, priority
//!                      │
//!                      ▼
//!               ProcessedTask { confidence: CONFIDENCE, .. }
//! ```
//!
//! No fragment that passes the segmenter is dropped, so the number of tasks
//! equals the number of retained fragments. The extractor holds no mutable
//! state; `&Extractor` can be shared freely.

use super::attributes::Attributes;
use super::classifier::{CategoryClassifier, KeywordClassifier};
use super::compiled_taxonomy::CompiledTaxonomy;
use super::language::CueScan;
use super::metrics::{RunMetrics, RunResult, Trace};
use super::segment::segments;
use crate::rules::taxonomy::{Taxonomy, TaxonomyError};
use crate::{CONFIDENCE, Classification, ClassifyReason, Fragment, Options, ProcessedTask};
use std::time::Instant;

pub struct Extractor {
    taxonomy: CompiledTaxonomy,
    classifier: Box<dyn CategoryClassifier>,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("taxonomy", &self.taxonomy.categories().iter().map(|c| c.id.as_str()).collect::<Vec<_>>())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

impl Extractor {
    /// Extractor over `taxonomy` with the keyword classifier.
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, TaxonomyError> {
        Self::with_classifier(taxonomy, Box::new(KeywordClassifier))
    }

    /// Extractor over `taxonomy` with a custom classifier strategy.
    pub fn with_classifier(
        taxonomy: &Taxonomy,
        classifier: Box<dyn CategoryClassifier>,
    ) -> Result<Self, TaxonomyError> {
        Ok(Extractor { taxonomy: CompiledTaxonomy::new(taxonomy)?, classifier })
    }

    /// Extractor over the embedded taxonomy.
    pub fn builtin() -> Self {
        // Compiled in tests.
        Self::new(&Taxonomy::builtin()).expect("embedded taxonomy compiles")
    }

    pub fn taxonomy(&self) -> &CompiledTaxonomy {
        &self.taxonomy
    }

    /// Resolve a caller hint to a taxonomy index. Unknown hints are dropped.
    pub fn resolve_hint(&self, hint: Option<&str>) -> Option<usize> {
        let raw = hint?;
        if raw.trim().is_empty() {
            return None;
        }
        let resolved = self.taxonomy.lookup(raw);
        if resolved.is_none() {
            tracing::debug!(hint = raw, "ignoring unknown category hint");
        }
        resolved
    }

    /// Lazily extract tasks from `text`, one per retained fragment.
    pub fn tasks<'a>(
        &'a self,
        text: &'a str,
        hint: Option<&str>,
        options: &Options,
    ) -> impl Iterator<Item = ProcessedTask> + 'a {
        let hint = self.resolve_hint(hint);
        segments(text, options.min_fragment_len)
            .enumerate()
            .map(move |(index, text)| self.annotate(Fragment { index, text }, hint).0)
    }

    /// Extract all tasks from `text`.
    pub fn extract(&self, text: &str, hint: Option<&str>, options: &Options) -> Vec<ProcessedTask> {
        self.tasks(text, hint, options).collect()
    }

    pub(crate) fn run(&self, text: &str, hint: Option<&str>, options: &Options) -> RunResult {
        self.run_inner(text, hint, options, false)
    }

    pub(crate) fn run_with_traces(&self, text: &str, hint: Option<&str>, options: &Options) -> RunResult {
        self.run_inner(text, hint, options, true)
    }

    fn run_inner(&self, text: &str, hint: Option<&str>, options: &Options, keep_traces: bool) -> RunResult {
        let total_start = Instant::now();
        let hint = self.resolve_hint(hint);

        let segment_start = Instant::now();
        let mut pieces = segments(text, options.min_fragment_len);
        let fragments: Vec<Fragment> =
            pieces.by_ref().enumerate().map(|(index, text)| Fragment { index, text }).collect();
        let dropped = pieces.dropped();
        let segment = segment_start.elapsed();

        let annotate_start = Instant::now();
        let mut tasks = Vec::with_capacity(fragments.len());
        let mut traces = Vec::new();
        for fragment in fragments {
            let (task, trace) = self.annotate(fragment, hint);
            tasks.push(task);
            if keep_traces {
                traces.push(trace);
            }
        }
        let annotate = annotate_start.elapsed();

        tracing::debug!(tasks = tasks.len(), dropped, "extraction finished");

        RunResult { tasks, traces, metrics: RunMetrics { total: total_start.elapsed(), segment, annotate, dropped } }
    }

    /// Run every stage on one fragment and assemble the task.
    fn annotate(&self, fragment: Fragment<'_>, hint: Option<usize>) -> (ProcessedTask, Trace) {
        let cues = CueScan::scan(fragment.text);
        let classification = self.checked_classify(fragment.text, hint);
        let attrs = Attributes::extract(fragment.text);

        let category = &self.taxonomy.categories()[classification.index];
        let language = cues.language();

        tracing::debug!(
            index = fragment.index,
            category = %category.id,
            reason = ?classification.reason,
            %language,
            priority = %attrs.priority,
            "annotated fragment"
        );

        let task = ProcessedTask {
            text: fragment.text.to_string(),
            time: attrs.time.map(str::to_string),
            category: category.label.clone(),
            category_id: category.id.clone(),
            deadline: attrs.deadline.map(str::to_string),
            priority: attrs.priority,
            language,
            confidence: CONFIDENCE,
        };
        let trace = Trace {
            index: fragment.index,
            text: fragment.text.to_string(),
            cues,
            category_id: category.id.clone(),
            classification,
            priority_marker: attrs.priority_marker.map(str::to_string),
        };
        (task, trace)
    }

    /// Classify with the configured strategy, replacing out-of-range indices
    /// with the taxonomy default.
    fn checked_classify(&self, text: &str, hint: Option<usize>) -> Classification {
        let classification = self.classifier.classify(text, hint, &self.taxonomy);
        if classification.index < self.taxonomy.len() {
            return classification;
        }
        tracing::warn!(
            classifier = self.classifier.name(),
            index = classification.index,
            "classifier returned an index outside the taxonomy; using default"
        );
        Classification::new(self.taxonomy.default_index(), ClassifyReason::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, Priority};

    struct Always(usize);

    impl CategoryClassifier for Always {
        fn classify(&self, _fragment: &str, _hint: Option<usize>, _taxonomy: &CompiledTaxonomy) -> Classification {
            Classification::new(self.0, ClassifyReason::Rule)
        }
    }

    #[test]
    fn one_task_per_retained_fragment_in_order() {
        let ex = Extractor::builtin();
        let tasks = ex.extract("Pay rent! ok. Call Ana tomorrow. Buy bread", None, &Options::default());
        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Pay rent", "Call Ana tomorrow", "Buy bread"]);
        assert!(tasks.iter().all(|t| t.confidence == CONFIDENCE));
    }

    #[test]
    fn lazy_iterator_matches_extract() {
        let ex = Extractor::builtin();
        let input = "Trimite emailul. Cumpără pâine mâine dimineața";
        let lazy: Vec<ProcessedTask> = ex.tasks(input, None, &Options::default()).collect();
        assert_eq!(lazy, ex.extract(input, None, &Options::default()));
        assert_eq!(lazy.len(), 2);
    }

    #[test]
    fn assembles_all_attributes() {
        let ex = Extractor::builtin();
        let tasks = ex.extract("Poate cumpăr pâine mâine dimineața", None, &Options::default());
        let task = &tasks[0];
        assert_eq!(task.category, "Notes");
        assert_eq!(task.category_id, "notes");
        assert_eq!(task.language, Language::Ro);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.deadline.as_deref(), Some("mâine"));
        assert_eq!(task.time.as_deref(), Some("dimineața"));
    }

    #[test]
    fn custom_classifier_replaces_rule_table() {
        let ex = Extractor::with_classifier(&Taxonomy::builtin(), Box::new(Always(2))).unwrap();
        let tasks = ex.extract("Pay the electricity bill", None, &Options::default());
        assert_eq!(tasks[0].category, "Mail Report");
    }

    #[test]
    fn out_of_range_classifier_result_falls_back_to_default() {
        let ex = Extractor::with_classifier(&Taxonomy::builtin(), Box::new(Always(99))).unwrap();
        let tasks = ex.extract("Pay the electricity bill", None, &Options::default());
        assert_eq!(tasks[0].category, "Notes");
    }

    #[test]
    fn run_counts_dropped_and_skips_traces() {
        let ex = Extractor::builtin();
        let run = ex.run("Hi. Send the weekly report", None, &Options::default());
        assert_eq!(run.tasks.len(), 1);
        assert_eq!(run.metrics.dropped, 1);
        assert!(run.traces.is_empty());

        let run = ex.run_with_traces("Hi. Send the weekly report", None, &Options::default());
        assert_eq!(run.traces.len(), 1);
        assert_eq!(run.traces[0].category_id, "mail");
    }

    #[test]
    fn resolve_hint_ignores_unknown_and_blank() {
        let ex = Extractor::builtin();
        assert_eq!(ex.resolve_hint(Some("Schedule")), Some(1));
        assert_eq!(ex.resolve_hint(Some("groceries")), None);
        assert_eq!(ex.resolve_hint(Some("  ")), None);
        assert_eq!(ex.resolve_hint(None), None);
    }

    #[test]
    fn extractor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Extractor>();

        let ex = Extractor::builtin();
        let input = "Plătește chiria mâine. Call Ana tonight";
        let expected = ex.extract(input, None, &Options::default());
        std::thread::scope(|s| {
            let handles: Vec<_> =
                (0..4).map(|_| s.spawn(|| ex.extract(input, None, &Options::default()))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn debug_lists_taxonomy_and_classifier() {
        let dbg = format!("{:?}", Extractor::builtin());
        assert!(dbg.contains("finance"));
        assert!(dbg.contains("keyword"));
    }
}
