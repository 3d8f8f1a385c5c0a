//! CSV export of extracted tasks.
//!
//! Column order is fixed: `task,category,time,deadline,priority`. Every
//! free-text column is double-quoted with embedded quotes doubled, and missing
//! values are written as `""`. Priority is written bare (`low`, `medium`,
//! `high`).

use crate::ProcessedTask;
use std::io::{self, Write};

pub const HEADER: &str = "task,category,time,deadline,priority";

/// Render `tasks` as CSV, header included, one `\n`-terminated line per task.
pub fn to_csv(tasks: &[ProcessedTask]) -> String {
    let mut out = Vec::new();
    write_csv(&mut out, tasks).expect("writing to a Vec<u8> cannot fail");
    String::from_utf8(out).expect("csv output is built from UTF-8 strings")
}

/// Stream `tasks` as CSV into `writer`.
pub fn write_csv<W: Write>(mut writer: W, tasks: &[ProcessedTask]) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for task in tasks {
        writeln!(
            writer,
            "{},{},{},{},{}",
            quoted(&task.text),
            quoted(&task.category),
            quoted(task.time.as_deref().unwrap_or("")),
            quoted(task.deadline.as_deref().unwrap_or("")),
            task.priority
        )?;
    }
    writer.flush()
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CONFIDENCE, Language, Priority};

    fn task(text: &str, time: Option<&str>, deadline: Option<&str>, priority: Priority) -> ProcessedTask {
        ProcessedTask {
            text: text.to_string(),
            time: time.map(str::to_string),
            category: "Schedule".to_string(),
            category_id: "schedule".to_string(),
            deadline: deadline.map(str::to_string),
            priority,
            language: Language::En,
            confidence: CONFIDENCE,
        }
    }

    #[test]
    fn header_only_for_no_tasks() {
        assert_eq!(to_csv(&[]), "task,category,time,deadline,priority\n");
    }

    #[test]
    fn fields_are_quoted_in_order() {
        let csv = to_csv(&[task("Meeting with Ana", Some("3 PM"), Some("tomorrow"), Priority::High)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#""Meeting with Ana","Schedule","3 PM","tomorrow",high"#);
    }

    #[test]
    fn absent_values_are_empty_quoted() {
        let csv = to_csv(&[task("Walk the dog", None, None, Priority::Medium)]);
        assert!(csv.ends_with("\"Walk the dog\",\"Schedule\",\"\",\"\",medium\n"));
    }

    #[test]
    fn embedded_quotes_and_commas_survive() {
        let csv = to_csv(&[task(r#"Read "Dune", then sleep"#, None, None, Priority::Low)]);
        assert!(csv.contains(r#""Read ""Dune"", then sleep""#));
    }

    #[test]
    fn write_csv_streams_into_any_writer() {
        let tasks = crate::extract_tasks("Plătește factura mâine. Maybe buy flowers", None);
        let mut buf = Vec::new();
        write_csv(&mut buf, &tasks).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, to_csv(&tasks));
        assert!(text.contains("\"Plătește factura mâine\",\"Finance\",\"\",\"mâine\",medium"));
        assert!(text.contains("\"Maybe buy flowers\",\"Notes\",\"\",\"\",low"));
    }
}
