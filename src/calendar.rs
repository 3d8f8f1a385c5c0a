//! Calendar mirroring.
//!
//! Tasks can be pushed to a calendar backend through [`CalendarSync`]. The
//! only backend shipped here is [`InMemoryCalendar`], which keeps events in a
//! `Vec` and requires an explicit `connect()` before it accepts writes.
//!
//! [`mirror_task`] turns a task's deadline and time into a start datetime with
//! `chrono-english`. Only English phrasing resolves ("tomorrow 3pm"); Romanian
//! phrases and unparseable tokens yield no start and the backend picks one.

use crate::ProcessedTask;
use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_english::{Dialect, parse_date_string};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("calendar is not connected")]
    NotConnected,
    #[error("event title is empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: u64,
    pub title: String,
    pub start: NaiveDateTime,
    pub description: String,
}

/// A calendar backend that accepts new events.
pub trait CalendarSync {
    fn create_event(&mut self, title: &str, start: Option<NaiveDateTime>) -> Result<CalendarEvent, CalendarError>;
}

/// Calendar held in memory. Events without a start are placed at `reference`.
#[derive(Debug, Clone)]
pub struct InMemoryCalendar {
    reference: NaiveDateTime,
    connected: bool,
    next_id: u64,
    events: Vec<CalendarEvent>,
}

impl InMemoryCalendar {
    /// A disconnected calendar anchored at `reference`.
    pub fn new(reference: NaiveDateTime) -> Self {
        InMemoryCalendar { reference, connected: false, next_id: 1, events: Vec::new() }
    }

    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Disconnecting drops every synced event.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.events.clear();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

impl CalendarSync for InMemoryCalendar {
    fn create_event(&mut self, title: &str, start: Option<NaiveDateTime>) -> Result<CalendarEvent, CalendarError> {
        if !self.connected {
            return Err(CalendarError::NotConnected);
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(CalendarError::EmptyTitle);
        }

        let event = CalendarEvent {
            id: self.next_id,
            title: title.to_string(),
            start: start.unwrap_or(self.reference),
            description: format!("Task created by taskflow: {title}"),
        };
        self.next_id += 1;
        self.events.push(event.clone());
        tracing::debug!(id = event.id, start = %event.start, "calendar event created");
        Ok(event)
    }
}

/// Resolve a task's deadline and time against `reference`.
///
/// Returns `None` when the task has neither, or when `chrono-english` cannot
/// read the phrase.
pub fn resolve_start(task: &ProcessedTask, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let phrase = match (task.deadline.as_deref(), task.time.as_deref()) {
        (None, None) => return None,
        (Some(day), None) => day.to_string(),
        (None, Some(time)) => format!("today {}", compact_meridiem(time)),
        (Some(day), Some(time)) => format!("{day} {}", compact_meridiem(time)),
    };

    let now = Utc.from_utc_datetime(&reference);
    match parse_date_string(&phrase.to_lowercase(), now, Dialect::Uk) {
        Ok(resolved) => Some(resolved.naive_utc()),
        Err(err) => {
            tracing::debug!(phrase = %phrase, error = %err, "could not resolve task start");
            None
        }
    }
}

/// "3 PM" -> "3pm", "7 a.m." -> "7am".
fn compact_meridiem(time: &str) -> String {
    let lowered = time.to_lowercase();
    let trimmed = lowered.trim_end_matches('.');
    for (long, short) in [(" a.m", "am"), (" p.m", "pm"), ("a.m", "am"), ("p.m", "pm"), (" am", "am"), (" pm", "pm")] {
        if let Some(head) = trimmed.strip_suffix(long) {
            return format!("{head}{short}");
        }
    }
    trimmed.to_string()
}

/// Create a calendar event for `task`, resolving its start when possible.
pub fn mirror_task<C: CalendarSync + ?Sized>(
    calendar: &mut C,
    task: &ProcessedTask,
    reference: NaiveDateTime,
) -> Result<CalendarEvent, CalendarError> {
    calendar.create_event(&task.text, resolve_start(task, reference))
}
