//! Language detection by cue words.
//!
//! The scan folds diacritics, runs both cue sets over the fragment and
//! records which sets fired. A Romanian-only letter (ă, ș, ...) in the raw
//! fragment counts as a Romanian cue on its own.
//!
//! ```text
//! ROMANIAN | ENGLISH  -> mixed
//! ROMANIAN            -> ro
//! ENGLISH             -> en
//! (none)              -> en
//! ```
//!
//! English is the fallback, not a "no signal" state: a fragment with no cue
//! words at all is reported as `en`.

use super::fold::{fold_diacritics, is_romanian_letter};
use crate::Language;
use crate::rules::language::{english_cues, romanian_cues};

bitflags::bitflags! {
    /// Which cue sets fired for a fragment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CueMask: u8 {
        const ROMANIAN = 1 << 0;
        const ENGLISH  = 1 << 1;
    }
}

impl CueMask {
    pub fn language(self) -> Language {
        if self.contains(CueMask::ROMANIAN | CueMask::ENGLISH) {
            Language::Mixed
        } else if self.contains(CueMask::ROMANIAN) {
            Language::Ro
        } else {
            Language::En
        }
    }
}

/// Cue words found in one fragment.
#[derive(Debug, Clone, Default)]
pub(crate) struct CueScan {
    pub mask: CueMask,
    /// Lowercased, folded Romanian cue words, plus any Romanian-only letters.
    pub romanian: Vec<String>,
    /// Lowercased English cue words.
    pub english: Vec<String>,
}

impl Default for CueMask {
    fn default() -> Self {
        CueMask::empty()
    }
}

impl CueScan {
    pub fn scan(fragment: &str) -> Self {
        let folded = fold_diacritics(fragment);
        let mut scan = CueScan::default();

        for m in romanian_cues().find_iter(&folded) {
            scan.romanian.push(m.as_str().to_lowercase());
        }
        for c in fragment.chars().filter(|c| is_romanian_letter(*c)) {
            let letter = c.to_lowercase().to_string();
            if !scan.romanian.contains(&letter) {
                scan.romanian.push(letter);
            }
        }
        for m in english_cues().find_iter(&folded) {
            scan.english.push(m.as_str().to_lowercase());
        }

        if !scan.romanian.is_empty() {
            scan.mask |= CueMask::ROMANIAN;
        }
        if !scan.english.is_empty() {
            scan.mask |= CueMask::ENGLISH;
        }

        tracing::trace!(romanian = ?scan.romanian, english = ?scan.english, "cue scan");
        scan
    }

    pub fn language(&self) -> Language {
        self.mask.language()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn romanian_sentence_is_ro() {
        let scan = CueScan::scan("Trebuie să plătesc factura la lumină");
        assert_eq!(scan.language(), Language::Ro);
        assert!(scan.romanian.contains(&"trebuie".to_string()));
        assert!(scan.romanian.contains(&"ă".to_string()));
        assert!(scan.english.is_empty());
    }

    #[test]
    fn romanian_without_diacritics_is_ro() {
        assert_eq!(CueScan::scan("Trebuie sa platesc factura").language(), Language::Ro);
    }

    #[test]
    fn english_sentence_is_en() {
        let scan = CueScan::scan("I have a meeting tomorrow at 3 PM");
        assert_eq!(scan.language(), Language::En);
        assert_eq!(scan.english, vec!["have", "meeting", "tomorrow", "at"]);
    }

    #[test]
    fn both_sets_make_mixed() {
        assert_eq!(CueScan::scan("Trebuie să call the bank").language(), Language::Mixed);
    }

    #[test]
    fn no_cues_falls_back_to_english() {
        let scan = CueScan::scan("Xyz qwerty 42");
        assert!(scan.mask.is_empty());
        assert_eq!(scan.language(), Language::En);
    }

    #[test]
    fn shared_words_are_not_cues() {
        let scan = CueScan::scan("Urgent email");
        assert!(scan.mask.is_empty());
    }
}
