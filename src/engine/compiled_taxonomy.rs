//! Taxonomy compilation.
//!
//! This is the *static* side of the engine: a validated [`Taxonomy`] is turned
//! into a structure that is cheap to evaluate per fragment.
//!
//! Per category, all keywords are folded, escaped and joined into a single
//! word-bounded alternation; raw `patterns` are compiled separately:
//!
//! ```text
//! keywords ["plătesc", "pay", "să fac"]
//!   └─▶ (?i)\b(?:platesc|pay|sa\s+fac)\b
//! patterns ['\b\d+\s*lei\b']
//!   └─▶ (?i)\b\d+\s*lei\b
//! ```
//!
//! ## Invariants
//!
//! - Category indices follow taxonomy order and index `categories`.
//! - `default` is always a valid index (guaranteed by `Taxonomy::validate`).
//! - Ids are looked up case-insensitively; `by_id` keys are lowercased.

use super::fold::fold_diacritics;
use crate::rules::taxonomy::{Taxonomy, TaxonomyError};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// One category with its compiled rule.
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub id: String,
    pub label: String,
    keywords: Option<Regex>,
    patterns: Vec<Regex>,
}

impl CompiledCategory {
    /// Return the first matched text (lowercased) in an already folded
    /// fragment, or `None` if the rule does not match.
    ///
    /// Keywords are tried before patterns.
    pub fn find(&self, folded: &str) -> Option<String> {
        if let Some(m) = self.keywords.as_ref().and_then(|re| re.find(folded)) {
            return Some(m.as_str().to_lowercase());
        }
        self.patterns.iter().find_map(|re| re.find(folded)).map(|m| m.as_str().to_lowercase())
    }

    /// Does the rule match anywhere in an already folded fragment?
    pub fn is_match(&self, folded: &str) -> bool {
        self.keywords.as_ref().is_some_and(|re| re.is_match(folded))
            || self.patterns.iter().any(|re| re.is_match(folded))
    }
}

/// Compiled, ordered taxonomy with an id index.
#[derive(Debug, Clone)]
pub struct CompiledTaxonomy {
    categories: Vec<CompiledCategory>,
    default: usize,
    by_id: HashMap<String, usize>,
}

impl CompiledTaxonomy {
    /// Validate and compile `taxonomy`.
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, TaxonomyError> {
        taxonomy.validate()?;

        let mut categories = Vec::with_capacity(taxonomy.categories.len());
        let mut by_id = HashMap::new();

        for (idx, def) in taxonomy.categories.iter().enumerate() {
            let id = def.id.trim().to_string();
            let keywords = compile_keywords(&def.keywords)
                .map_err(|source| TaxonomyError::InvalidPattern { id: id.clone(), source })?;
            let patterns = def
                .patterns
                .iter()
                .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| TaxonomyError::InvalidPattern { id: id.clone(), source })?;

            by_id.insert(id.to_lowercase(), idx);
            categories.push(CompiledCategory { id, label: def.label.clone(), keywords, patterns });
        }

        let default = by_id
            .get(&taxonomy.default.trim().to_lowercase())
            .copied()
            .ok_or_else(|| TaxonomyError::UnknownDefault(taxonomy.default.clone()))?;

        Ok(CompiledTaxonomy { categories, default, by_id })
    }

    pub fn categories(&self) -> &[CompiledCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CompiledCategory> {
        self.categories.get(index)
    }

    pub fn default_index(&self) -> usize {
        self.default
    }

    pub fn default_category(&self) -> &CompiledCategory {
        &self.categories[self.default]
    }

    /// Resolve a category id (case-insensitive, surrounding whitespace ignored).
    pub fn lookup(&self, id: &str) -> Option<usize> {
        self.by_id.get(&id.trim().to_lowercase()).copied()
    }

    /// Index of the first category, in taxonomy order, whose rule matches the
    /// folded fragment, together with the matched text.
    pub fn first_match(&self, folded: &str) -> Option<(usize, String)> {
        self.categories.iter().enumerate().find_map(|(idx, c)| c.find(folded).map(|hit| (idx, hit)))
    }
}

/// Build one case-insensitive, word-bounded alternation from a keyword list.
///
/// Returns `Ok(None)` when the list holds no usable keyword (the category is
/// pattern-only).
fn compile_keywords(keywords: &[String]) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|k| fold_diacritics(k.trim()).to_lowercase())
        .filter(|k| !k.is_empty())
        .map(|k| k.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(r"\s+"))
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
    RegexBuilder::new(&pattern).case_insensitive(true).build().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled() -> CompiledTaxonomy {
        CompiledTaxonomy::new(&Taxonomy::builtin()).unwrap()
    }

    #[test]
    fn keeps_taxonomy_order_and_default() {
        let tax = compiled();
        let ids: Vec<&str> = tax.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["finance", "schedule", "mail", "notes"]);
        assert_eq!(tax.default_category().label, "Notes");
        assert_eq!(tax.len(), 4);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let tax = compiled();
        assert_eq!(tax.lookup("Finance"), Some(0));
        assert_eq!(tax.lookup("  MAIL "), Some(2));
        assert_eq!(tax.lookup("work"), None);
    }

    #[test]
    fn keywords_match_on_word_boundaries() {
        let tax = compiled();
        let finance = tax.get(0).unwrap();
        assert!(finance.is_match("pay the bill"));
        assert!(!finance.is_match("payload upload"));
        assert_eq!(finance.find("PAY now"), Some("pay".to_string()));
    }

    #[test]
    fn multi_word_keywords_span_whitespace() {
        let tax = compiled();
        let notes = tax.get(3).unwrap();
        assert!(notes.is_match("azi sa   fac curat"));
    }

    #[test]
    fn patterns_are_consulted_after_keywords() {
        let tax = compiled();
        let finance = tax.get(0).unwrap();
        assert_eq!(finance.find("transfer 250 lei"), Some("lei".to_string()));
        assert_eq!(finance.find("transfer 250lei"), Some("250lei".to_string()));
    }

    #[test]
    fn invalid_pattern_is_reported_with_category() {
        let mut taxonomy = Taxonomy::builtin();
        taxonomy.categories[1].patterns.push("(unclosed".to_string());
        let err = CompiledTaxonomy::new(&taxonomy).unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidPattern { ref id, .. } if id == "schedule"));
    }

    #[test]
    fn pattern_only_category_compiles() {
        let taxonomy = Taxonomy::from_toml_str(
            r#"
            default = "money"
            [[category]]
            id = "money"
            label = "Money"
            patterns = ['\$\d+']
            "#,
        )
        .unwrap();
        let tax = CompiledTaxonomy::new(&taxonomy).unwrap();
        assert!(tax.get(0).unwrap().is_match("costs $40"));
        assert_eq!(tax.first_match("nothing here"), None);
    }
}
