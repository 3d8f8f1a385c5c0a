//! Attribute patterns: time tokens, relative-day deadlines and priority
//! markers.
//!
//! These run on the original (unfolded) fragment so that the returned token is
//! exactly what the user typed. Romanian words therefore spell out both the
//! diacritic and the plain forms.

use regex::Regex;

/// Clock times and day-part phrases, in either language.
///
/// ```text
/// 14:30  3:30pm  7 a.m.  8 dimineața  9 seara
/// this morning  in the evening  tonight  după-amiază  diseară
/// ```
///
/// Alternatives are ordered so a clock time wins over a bare day-part at the
/// same position ("8 dimineața" rather than "dimineața").
pub fn time_token() -> &'static Regex {
    regex!(
        r"(?i)\b(?:\d{1,2}:\d{2}(?:\s*[ap]\.?m\b\.?|\b)|\d{1,2}\s*(?:[ap]\.?m\b\.?|(?:diminea[țţt][aă]|sear[aă])\b)|(?:in\s+the|this)\s+(?:morning|afternoon|evening)\b|(?:tonight|morning|afternoon|evening|night|diminea[țţt][aă]|disear[aă]|sear[aă]|noaptea|dup[ăa][\s-]+amiaz[aă])\b)"
    )
}

/// Relative-day markers. This is the only deadline pass; absolute dates
/// ("până pe 15", "by September 15th") are not recognized.
pub fn relative_day() -> &'static Regex {
    word_set![r"day\s+after\s+tomorrow", "tomorrow", "today", r"poim[âa]ine", r"m[âa]ine", r"ast[ăa]zi", "azi"]
}

/// Markers that force `high` priority.
pub fn high_priority() -> &'static Regex {
    word_set![r"urgen[tțţ]\w*", r"important\w*", "asap", r"imediat\w*", r"c[âa]t\s+mai\s+repede"]
}

/// Hedging markers that force `low` priority when no high marker is present.
pub fn low_priority() -> &'static Regex {
    word_set!["maybe", "perhaps", "possibly", "poate", "eventual"]
}
