mod debug_report;

use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use taskflow::calendar::{self, CalendarEvent, InMemoryCalendar};
use taskflow::{Extractor, FragmentTrace, Options, ProcessedTask, Taxonomy, extract_tasks_verbose_with};

/// Extract structured tasks from free-form Romanian/English notes.
#[derive(Debug, Parser)]
#[command(name = "taskflow", version, about)]
struct Cli {
    /// Input text. Reads stdin when neither this nor --input is given.
    #[arg(conflicts_with = "input", num_args = 0..)]
    text: Vec<String>,

    /// Input text, as a single argument.
    #[arg(short, long)]
    input: Option<String>,

    /// Preferred category id (finance, schedule, mail, notes, ...).
    #[arg(long)]
    hint: Option<String>,

    /// Load the category taxonomy from a TOML file instead of the built-in one.
    #[arg(short, long, value_name = "FILE")]
    taxonomy: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Show per-fragment decisions and stage timings.
    #[arg(long)]
    explain: bool,

    /// Mirror every task into an in-memory calendar.
    #[arg(long)]
    calendar: bool,

    /// Reference time for calendar resolution, YYYY-MM-DDTHH:MM:SS. Defaults to now.
    #[arg(long, value_parser = parse_reference)]
    reference: Option<NaiveDateTime>,

    /// Minimum fragment length in characters.
    #[arg(long, default_value_t = Options::default().min_fragment_len)]
    min_len: usize,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, overrides_with = "color")]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    tasks: &'a [ProcessedTask],
    #[serde(skip_serializing_if = "Option::is_none")]
    fragments: Option<&'a [FragmentTrace]>,
}

fn main() -> ExitCode {
    if std::env::var("TASKFLOW_DEBUG").is_ok() {
        tracing_subscriber::fmt().with_env_filter("taskflow=debug").with_writer(io::stderr).init();
    }

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let extractor = match &cli.taxonomy {
        Some(path) => {
            let taxonomy = Taxonomy::from_file(path).map_err(|err| err.to_string())?;
            Extractor::new(&taxonomy).map_err(|err| err.to_string())?
        }
        None => Extractor::builtin(),
    };

    let input = match (cli.input, cli.text.is_empty()) {
        (Some(value), _) => value,
        (None, false) => cli.text.join(" "),
        (None, true) => read_stdin_input()?,
    };
    if input.trim().is_empty() {
        return Err("no input provided (pass text, --input, or pipe stdin)".to_string());
    }

    let options = Options { min_fragment_len: cli.min_len };
    let res = extract_tasks_verbose_with(&extractor, &input, cli.hint.as_deref(), &options);

    let events = if cli.calendar {
        let reference = cli.reference.unwrap_or_else(|| chrono::Local::now().naive_local());
        mirror_all(&res.tasks, reference)?
    } else {
        Vec::new()
    };

    let color = if cli.no_color {
        false
    } else {
        cli.color || io::stdout().is_terminal()
    };

    match cli.format {
        Format::Text => {
            let palette = debug_report::Palette::new(color);
            debug_report::print_tasks(&res.tasks, &palette);
            if cli.calendar {
                debug_report::print_calendar(&events, &palette);
            }
            if cli.explain {
                debug_report::print_explain(&input, &res.details, &palette);
            }
        }
        Format::Json => {
            let report = JsonReport {
                tasks: &res.tasks,
                fragments: cli.explain.then_some(res.details.fragments.as_slice()),
            };
            let json = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
            println!("{json}");
        }
        Format::Csv => {
            taskflow::export::write_csv(io::stdout().lock(), &res.tasks)
                .map_err(|err| format!("failed to write csv: {err}"))?;
        }
    }

    Ok(())
}

fn mirror_all(tasks: &[ProcessedTask], reference: NaiveDateTime) -> Result<Vec<CalendarEvent>, String> {
    let mut cal = InMemoryCalendar::new(reference);
    cal.connect();
    for task in tasks {
        calendar::mirror_task(&mut cal, task, reference).map_err(|err| err.to_string())?;
    }
    Ok(cal.events().to_vec())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("invalid reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}
