//! Romanian diacritic folding.
//!
//! Users type Romanian with and without diacritics, and with either the comma
//! (ș, ț) or the legacy cedilla (ş, ţ) forms. Keyword rules are matched against
//! folded text so that "factura", "factură" and "FACTURĂ" all hit the same rule.
//!
//! Folding maps one char to one char, but not byte-for-byte: `ă` is two bytes
//! and `a` is one. Byte offsets found in folded text must never be used to
//! slice the original.

use std::borrow::Cow;

/// Returns true for the letters that only occur in Romanian among the two
/// supported languages.
pub(crate) fn is_romanian_letter(c: char) -> bool {
    matches!(c, 'ă' | 'â' | 'î' | 'ș' | 'ş' | 'ț' | 'ţ' | 'Ă' | 'Â' | 'Î' | 'Ș' | 'Ş' | 'Ț' | 'Ţ')
}

fn fold_char(c: char) -> char {
    match c {
        'ă' | 'â' => 'a',
        'Ă' | 'Â' => 'A',
        'î' => 'i',
        'Î' => 'I',
        'ș' | 'ş' => 's',
        'Ș' | 'Ş' => 'S',
        'ț' | 'ţ' => 't',
        'Ț' | 'Ţ' => 'T',
        other => other,
    }
}

/// Fold Romanian diacritics to their base letters. Borrows when there is
/// nothing to fold.
pub(crate) fn fold_diacritics(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_romanian_letter) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(fold_char).collect())
}
