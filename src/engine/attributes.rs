//! Attribute extraction: time token, relative-day deadline and priority.
//!
//! Three independent passes over the raw fragment, one regex each (two for
//! priority). Tokens are returned as slices of the fragment, exactly as typed.
//!
//! ```text
//! "Urgent: sună la bancă mâine la 10:30"
//!   time      ─▶ "10:30"
//!   deadline  ─▶ "mâine"
//!   priority  ─▶ High   (marker "Urgent")
//! ```
//!
//! Time and deadline never share a token: day-parts ("tonight") are times,
//! relative days ("tomorrow") are deadlines.

use crate::Priority;
use crate::rules::attributes::{high_priority, low_priority, relative_day, time_token};

/// Attributes pulled out of one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Attributes<'a> {
    pub time: Option<&'a str>,
    pub deadline: Option<&'a str>,
    pub priority: Priority,
    /// The marker that moved priority away from `Medium`.
    pub priority_marker: Option<&'a str>,
}

impl<'a> Attributes<'a> {
    pub fn extract(fragment: &'a str) -> Self {
        let (priority, priority_marker) = priority(fragment);
        Attributes { time: time(fragment), deadline: deadline(fragment), priority, priority_marker }
    }
}

/// First clock time or day-part phrase.
pub(crate) fn time(fragment: &str) -> Option<&str> {
    time_token().find(fragment).map(|m| m.as_str().trim())
}

/// First relative-day marker.
pub(crate) fn deadline(fragment: &str) -> Option<&str> {
    relative_day().find(fragment).map(|m| m.as_str())
}

/// High markers are checked first and win over hedging markers.
pub(crate) fn priority(fragment: &str) -> (Priority, Option<&str>) {
    if let Some(m) = high_priority().find(fragment) {
        return (Priority::High, Some(m.as_str()));
    }
    if let Some(m) = low_priority().find(fragment) {
        return (Priority::Low, Some(m.as_str()));
    }
    (Priority::Medium, None)
}
