#[macro_export]
macro_rules! regex {
    ($pat:expr) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Case-insensitive, word-bounded alternation over a fixed list of literal
/// words, compiled once.
///
/// ```text
/// word_set!["maybe", "perhaps"]  ==  regex!(r"(?i)\b(?:maybe|perhaps)\b")
/// ```
///
/// Entries are spliced verbatim, so they may carry small regex fragments
/// (`urgent\w*`, `cât\s+mai\s+repede`).
#[macro_export]
macro_rules! word_set {
    [ $first:literal $(, $rest:literal)* $(,)? ] => {
        $crate::regex!(concat!(r"(?i)\b(?:", $first, $("|", $rest,)* r")\b"))
    };
}
