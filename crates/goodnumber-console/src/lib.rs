//! Colorful console output for Good Number.
//!
//! Provides a custom `tracing` layer that formats planner and server events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: targets found, gaps solved, requests served
//! - **WARN**: gaps refused by the solver limit, rejected requests
//! - **DEBUG**: unreachable gaps
//! - **TRACE**: per-family candidates

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Targets whose events this layer renders.
const TARGETS: [&str; 3] = ["goodnumber_core", "goodnumber_server", "goodnumber"];

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. Good Number crates log at `info`;
/// `RUST_LOG` sets the level for everything else.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();
        install(default_filter());
    });
}

/// Initializes tracing without the banner, for command line output.
pub fn init_quiet() {
    INIT.get_or_init(|| install(default_filter()));
}

fn default_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
        .add_directive("goodnumber=info".parse().expect("static directive"))
        .add_directive("goodnumber_core=info".parse().expect("static directive"))
        .add_directive("goodnumber_server=info".parse().expect("static directive"))
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer)
        .try_init();
}

fn print_banner() {
    let banner = r#"
  ____                 _   _   _                 _
 / ___| ___   ___   __| | | \ | |_   _ _ __ ___ | |__   ___ _ __
| |  _ / _ \ / _ \ / _` | |  \| | | | | '_ ` _ \| '_ \ / _ \ '__|
| |_| | (_) | (_) | (_| | | |\  | |_| | | | | | | |_) |  __/ |
 \____|\___/ \___/ \__,_| |_| \_|\__,_|_| |_| |_|_.__/ \___|_|
"#;

    let version_line = format!("          v{} - Ingress Good Number\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats Good Number events with colors.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !TARGETS.iter().any(|t| target.starts_with(t)) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    message: Option<String>,
    family: Option<String>,
    addr: Option<String>,
    error: Option<String>,
    ap: Option<u64>,
    target: Option<u64>,
    gap: Option<u64>,
    gap_limit: Option<u64>,
    parts: Option<u64>,
    duration_us: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(s),
            "family" => self.family = Some(s.trim_matches('"').to_string()),
            "addr" => self.addr = Some(s.trim_matches('"').to_string()),
            "error" => self.error = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "ap" => self.ap = Some(value),
            "target" => self.target = Some(value),
            "gap" => self.gap = Some(value),
            "gap_limit" => self.gap_limit = Some(value),
            "parts" => self.parts = Some(value),
            "duration_us" => self.duration_us = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "family" => self.family = Some(value.to_string()),
            "addr" => self.addr = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let msg = v.message.as_deref().unwrap_or("");

    match msg {
        "Target found" => format_target_found(v),
        "Gap solved" => format_gap_solved(v),
        "Gap over limit" => format_gap_over_limit(v),
        "Gap unreachable" => format_gap_unreachable(v),
        "Server started" => format_server_started(v),
        _ => format_generic(msg, v, level),
    }
}

fn format_target_found(v: &EventVisitor) -> String {
    format!(
        "{} {} {} AP {} -> target {} ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Finder]".bright_cyan(),
        number(v.ap).bright_yellow(),
        number(v.target).bright_magenta().bold(),
        v.family.as_deref().unwrap_or("unknown").white()
    )
}

fn format_gap_solved(v: &EventVisitor) -> String {
    format!(
        "{} {} {} gap {} in {} parts, time spent ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        number(v.gap).bright_yellow(),
        number(v.parts).bright_magenta().bold(),
        format_duration_us(v.duration_us.unwrap_or(0)).yellow()
    )
}

fn format_gap_over_limit(v: &EventVisitor) -> String {
    format!(
        "{} {} {} gap {} exceeds limit {}, skipped",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Solver]".bright_cyan(),
        number(v.gap).bright_red(),
        number(v.gap_limit).white()
    )
}

fn format_gap_unreachable(v: &EventVisitor) -> String {
    format!(
        "{} {} {} gap {} is unreachable",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        "[Solver]".bright_cyan(),
        number(v.gap).bright_red()
    )
}

fn format_server_started(v: &EventVisitor) -> String {
    format!(
        "{} Server listening on {}",
        "▸".bright_green(),
        format!("http://{}", v.addr.as_deref().unwrap_or("?"))
            .bright_cyan()
            .underline()
    )
}

fn format_generic(msg: &str, v: &EventVisitor, level: Level) -> String {
    if msg.is_empty() {
        return String::new();
    }
    let level_str = match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => "WARN".bright_yellow().to_string(),
        Level::INFO => "INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        _ => "TRACE".bright_black().to_string(),
    };
    let mut output = format!("{} {} {}", timestamp().bright_black(), level_str, msg);
    if let Some(error) = &v.error {
        output.push_str(&format!(": {}", error.bright_red()));
    }
    output
}

fn number(value: Option<u64>) -> String {
    value.map_or_else(
        || "N/A".to_string(),
        |n| n.to_formatted_string(&Locale::en),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}
