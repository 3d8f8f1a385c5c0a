use taskflow::calendar::CalendarEvent;
use taskflow::{ClassifyReason, ExtractDetails, Priority, ProcessedTask};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
        if self.enabled { format!("{}{}{}", color, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }

    fn bold(&self, s: impl AsRef<str>) -> String {
        self.paint(s, ansi::BOLD)
    }

    fn dim(&self, s: impl AsRef<str>) -> String {
        self.paint(s, ansi::DIM)
    }

    fn rule(&self, title: &str) {
        println!("\n{}", self.paint(format!("━━━ {title} ━━━"), ansi::GRAY));
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => ansi::RED,
        Priority::Medium => ansi::YELLOW,
        Priority::Low => ansi::GREEN,
    }
}

pub fn print_tasks(tasks: &[ProcessedTask], palette: &Palette) {
    if tasks.is_empty() {
        println!("{}", palette.dim("No tasks found"));
        return;
    }

    let noun = if tasks.len() == 1 { "task" } else { "tasks" };
    println!("{}", palette.bold(palette.paint(format!("Found {} {noun}", tasks.len()), ansi::CYAN)));

    for (idx, task) in tasks.iter().enumerate() {
        println!(
            "\n  {} {}",
            palette.paint(format!("[{}]", idx + 1), ansi::GRAY),
            palette.bold(&task.text),
        );
        println!(
            "      {} {}  {} {}  {} {}",
            palette.dim("category:"),
            palette.paint(&task.category, ansi::BLUE),
            palette.dim("│ priority:"),
            palette.paint(task.priority.as_str(), priority_color(task.priority)),
            palette.dim("│ lang:"),
            task.language,
        );
        if task.time.is_some() || task.deadline.is_some() {
            println!(
                "      {} {}  {} {}",
                palette.dim("time:"),
                palette.paint(task.time.as_deref().unwrap_or("-"), ansi::YELLOW),
                palette.dim("│ deadline:"),
                palette.paint(task.deadline.as_deref().unwrap_or("-"), ansi::YELLOW),
            );
        }
    }
}

pub fn print_calendar(events: &[CalendarEvent], palette: &Palette) {
    palette.rule("Calendar");
    if events.is_empty() {
        println!("{}", palette.dim("  Nothing to sync"));
        return;
    }
    for event in events {
        println!(
            "  {} {} {}",
            palette.paint(format!("#{}", event.id), ansi::GRAY),
            palette.paint(event.start.format("%Y-%m-%d %H:%M").to_string(), ansi::GREEN),
            event.title,
        );
    }
}

pub fn print_explain(input: &str, details: &ExtractDetails, palette: &Palette) {
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Input: \"{}\"", input.trim()), ansi::CYAN)));

    palette.rule("Taxonomy");
    println!(
        "  {}  {} {}",
        details.taxonomy.join(" → "),
        palette.dim("│ hint:"),
        palette.paint(details.hint.as_deref().unwrap_or("none"), ansi::BLUE),
    );

    palette.rule("Fragments");
    if details.fragments.is_empty() {
        println!("{}", palette.dim("  No fragments retained"));
    }
    for frag in &details.fragments {
        println!("  {} {}", palette.paint(format!("[{}]", frag.index), ansi::GRAY), frag.text);
        let why = match frag.reason {
            ClassifyReason::HintConfirmed => "hint confirmed",
            ClassifyReason::Rule => "rule",
            ClassifyReason::HintFallback => "hint fallback",
            ClassifyReason::Default => "default",
        };
        println!(
            "      {} {} {}",
            palette.dim("category:"),
            palette.paint(&frag.category_id, ansi::BLUE),
            palette.dim(match &frag.evidence {
                Some(hit) => format!("({why}: \"{hit}\")"),
                None => format!("({why})"),
            }),
        );
        println!(
            "      {} ro {:?}  en {:?}",
            palette.dim("cues:"),
            frag.romanian_cues,
            frag.english_cues,
        );
        if let Some(marker) = &frag.priority_marker {
            println!("      {} {}", palette.dim("priority marker:"), palette.paint(marker, ansi::YELLOW));
        }
    }
    if details.dropped > 0 {
        println!("{}", palette.dim(format!("  {} piece(s) below the length threshold dropped", details.dropped)));
    }

    palette.rule("Timing");
    println!(
        "  Total: {}  │  Segment: {}  │  Annotate: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.segment), ansi::CYAN),
        palette.dim(format!("{:?}", details.annotate)),
    );
    println!("\n{}", palette.dim("  Tip: set TASKFLOW_DEBUG=1 to log every decision"));
}
