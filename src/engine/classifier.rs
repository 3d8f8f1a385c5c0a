//! Category classification.
//!
//! [`CategoryClassifier`] is the seam between the engine and whatever decides
//! a fragment's category. The engine only relies on the contract
//! `(fragment, hint) -> index into the taxonomy`; [`KeywordClassifier`] is the
//! rule-table implementation, and a learned model can be dropped in without
//! touching the rest of the pipeline.
//!
//! Keyword resolution order:
//!
//! ```text
//! hint given and hint's own rule matches ──▶ hint        (HintConfirmed)
//! first rule in taxonomy order matches   ──▶ that rule   (Rule)
//! hint given                             ──▶ hint        (HintFallback)
//! otherwise                              ──▶ default     (Default)
//! ```
//!
//! Matching is plain regex over the folded fragment; negation and context are
//! not understood ("don't pay the bill" is still Finance).

use super::compiled_taxonomy::CompiledTaxonomy;
use super::fold::fold_diacritics;
use crate::{Classification, ClassifyReason};

/// Strategy that maps a fragment to a taxonomy category.
///
/// `hint` is already resolved against `taxonomy` (unknown hints arrive as
/// `None`). Implementations must be deterministic for the engine's
/// determinism guarantee to hold. A returned index outside the taxonomy is
/// replaced by the taxonomy default.
pub trait CategoryClassifier: Send + Sync {
    /// Short name used in logs and traces.
    fn name(&self) -> &'static str {
        "custom"
    }

    fn classify(&self, fragment: &str, hint: Option<usize>, taxonomy: &CompiledTaxonomy) -> Classification;
}

/// The rule-table classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl CategoryClassifier for KeywordClassifier {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, fragment: &str, hint: Option<usize>, taxonomy: &CompiledTaxonomy) -> Classification {
        let folded = fold_diacritics(fragment);

        if let Some(idx) = hint {
            if let Some(hit) = taxonomy.get(idx).and_then(|c| c.find(&folded)) {
                return Classification::new(idx, ClassifyReason::HintConfirmed).with_evidence(hit);
            }
        }

        if let Some((idx, hit)) = taxonomy.first_match(&folded) {
            return Classification::new(idx, ClassifyReason::Rule).with_evidence(hit);
        }

        match hint {
            Some(idx) => Classification::new(idx, ClassifyReason::HintFallback),
            None => Classification::new(taxonomy.default_index(), ClassifyReason::Default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::taxonomy::Taxonomy;

    fn taxonomy() -> CompiledTaxonomy {
        CompiledTaxonomy::new(&Taxonomy::builtin()).unwrap()
    }

    fn classify(text: &str, hint: Option<&str>) -> (String, ClassifyReason) {
        let tax = taxonomy();
        let hint = hint.and_then(|h| tax.lookup(h));
        let c = KeywordClassifier.classify(text, hint, &tax);
        (tax.get(c.index).unwrap().id.clone(), c.reason)
    }

    #[test]
    fn rules_are_evaluated_in_taxonomy_order() {
        // "pay" (finance) and "meeting" (schedule) both match; finance comes first.
        assert_eq!(classify("pay for the meeting room", None), ("finance".into(), ClassifyReason::Rule));
        assert_eq!(classify("meeting with Ana", None), ("schedule".into(), ClassifyReason::Rule));
        assert_eq!(classify("trimite raportul", None), ("mail".into(), ClassifyReason::Rule));
        assert_eq!(classify("cumpără lapte", None), ("notes".into(), ClassifyReason::Rule));
    }

    #[test]
    fn confirmed_hint_short_circuits_order() {
        assert_eq!(
            classify("pay for the meeting room", Some("schedule")),
            ("schedule".into(), ClassifyReason::HintConfirmed)
        );
    }

    #[test]
    fn unconfirmed_hint_does_not_override_a_matching_rule() {
        assert_eq!(classify("Pay the electricity bill", Some("schedule")), ("finance".into(), ClassifyReason::Rule));
    }

    #[test]
    fn hint_is_the_fallback_when_nothing_matches() {
        assert_eq!(classify("walk the dog", Some("mail")), ("mail".into(), ClassifyReason::HintFallback));
        assert_eq!(classify("walk the dog", None), ("notes".into(), ClassifyReason::Default));
    }

    #[test]
    fn matching_ignores_diacritics_and_case() {
        assert_eq!(classify("PLATESC FACTURA", None).0, "finance");
        assert_eq!(classify("Ședință cu echipa", None).0, "schedule");
        assert_eq!(classify("sedinta cu echipa", None).0, "schedule");
    }

    #[test]
    fn negation_is_not_understood() {
        assert_eq!(classify("don't pay the bill", None).0, "finance");
    }

    #[test]
    fn evidence_names_the_matched_keyword() {
        let tax = taxonomy();
        let c = KeywordClassifier.classify("Plătește factura", None, &tax);
        assert_eq!(c.evidence.as_deref(), Some("plateste"));
    }
}
