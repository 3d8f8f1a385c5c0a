//! Language cue words.
//!
//! Both sets are matched against diacritic-folded text, so every entry is
//! written without diacritics ("sa" covers both "să" and "sa").
//!
//! Words the two languages share in everyday task notes ("urgent",
//! "important", "email", "a", "are") belong to neither set.

use regex::Regex;

/// Romanian function words and frequent task words.
pub fn romanian_cues() -> &'static Regex {
    word_set![
        "sa",
        "si",
        "trebuie",
        "pentru",
        "maine",
        "poimaine",
        "astazi",
        "azi",
        "diseara",
        "cu",
        "la",
        "pe",
        "din",
        "este",
        "sunt",
        "nu",
        "de",
        "un",
        "niste",
        "vreau",
        "fac",
        "ora",
        "dimineata",
        "seara",
        "factura",
        "plateste",
        "platesc",
        "cumpar",
        "intalnire",
        "sedinta",
        "mesaj",
        "poate",
        "imediat",
    ]
}

/// English function words and frequent task words.
pub fn english_cues() -> &'static Regex {
    word_set![
        "the",
        "and",
        "to",
        "have",
        "has",
        "need",
        "needs",
        "with",
        "for",
        "my",
        "is",
        "at",
        "on",
        "of",
        "tomorrow",
        "today",
        "tonight",
        "meeting",
        "please",
        "call",
        "buy",
        "pay",
        "send",
        "remember",
        "maybe",
        "perhaps",
        "bill",
        "bills",
    ]
}
