//! Colorful console output for FormPredict.
//!
//! Provides a custom `tracing` layer that formats prediction events with
//! colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (artifact loaded, variant registered, server listening)
//! - **DEBUG**: One line per served prediction
//! - **WARN**: Rejected requests and other problems

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "formpredict=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the FormPredict banner and sets up tracing.
pub fn init() {
    install(true);
}

/// Sets up tracing like [`init`] but without the banner.
///
/// For one-shot commands whose stdout is the result. Shares the same
/// once-only guard as [`init`].
pub fn init_logging() {
    install(false);
}

/// Whether a console subscriber has been installed.
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}

fn install(banner: bool) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        if banner {
            print_banner();
        }

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FormPredictConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

/// Prints the startup banner to stdout.
pub fn print_banner() {
    let banner = r#"
 _____                    ____               _ _      _
|  ___|__  _ __ _ __ ___ |  _ \ _ __ ___  __| (_) ___| |_
| |_ / _ \| '__| '_ ` _ \| |_) | '__/ _ \/ _` | |/ __| __|
|  _| (_) | |  | | | | | |  __/| | |  __/ (_| | | (__| |_
|_|  \___/|_|  |_| |_| |_|_|   |_|  \___|\__,_|_|\___|\__|
"#;

    let version_line = format!(
        "                   v{} - Schema-Checked Form Inference\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats FormPredict events with colors.
pub struct FormPredictConsoleLayer;

impl<S: Subscriber> Layer<S> for FormPredictConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Only handle formpredict crates
        if !metadata.target().starts_with("formpredict") {
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

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    variant: Option<String>,
    title: Option<String>,
    path: Option<String>,
    kind: Option<String>,
    schema: Option<String>,
    result: Option<String>,
    error: Option<String>,
    addr: Option<String>,
    features: Option<u64>,
    variants: Option<u64>,
}

impl EventVisitor {
    fn set_str(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "variant" => self.variant = Some(value),
            "title" => self.title = Some(value),
            "path" => self.path = Some(value),
            "kind" => self.kind = Some(value),
            "schema" => self.schema = Some(value),
            "result" => self.result = Some(value),
            "error" => self.error = Some(value),
            "addr" => self.addr = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "features" => self.features = Some(value),
            "variants" => self.variants = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "artifact_loaded" => format_artifact_loaded(v),
        "variant_registered" => format_variant_registered(v),
        "server_listening" => format_server_listening(v),
        "prediction" => format_prediction(v),
        "rejected" => format_rejected(v),
        _ if level <= Level::WARN => format_problem(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_artifact_loaded(v: &EventVisitor) -> String {
    let kind = v.kind.as_deref().unwrap_or("model");
    let features = v.features.unwrap_or(0);
    let schema = v.schema.as_deref().unwrap_or("?");
    let path = v.path.as_deref().unwrap_or("");

    format!(
        "{} {} Artifact loaded │ {} │ {} features │ {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        kind.white().bold(),
        format_count(features).bright_yellow(),
        schema.bright_magenta(),
        path.bright_black()
    )
}

fn format_variant_registered(v: &EventVisitor) -> String {
    let variant = v.variant.as_deref().unwrap_or("?");
    let features = v.features.unwrap_or(0);

    let mut output = format!(
        "{} {} Variant {} │ {} fields",
        format_elapsed(),
        "●".bright_blue(),
        variant.white().bold(),
        format_count(features).bright_yellow()
    );
    if let Some(title) = &v.title {
        output.push_str(&format!(" │ {}", title));
    }
    output
}

fn format_server_listening(v: &EventVisitor) -> String {
    let addr = v.addr.as_deref().unwrap_or("?");
    let variants = v.variants.unwrap_or(0);

    format!(
        "{} {} Listening on {} │ {} variants",
        format_elapsed(),
        "▸".bright_green(),
        format!("http://{}", addr).bright_cyan().underline(),
        format_count(variants).bright_yellow()
    )
}

fn format_prediction(v: &EventVisitor) -> String {
    let variant = v.variant.as_deref().unwrap_or("?");
    let features = v.features.unwrap_or(0);
    let result = v.result.as_deref().unwrap_or("N/A");

    format!(
        "{} {} {} │ {} features │ {}",
        format_elapsed(),
        "✓".bright_green(),
        variant.white(),
        format_count(features).bright_black(),
        result.bright_magenta().bold()
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    let variant = v.variant.as_deref().unwrap_or("?");
    let error = v.error.as_deref().unwrap_or("unknown error");

    format!(
        "{} {} {} │ {}",
        format_elapsed(),
        "✗".bright_red(),
        variant.white(),
        error.yellow()
    )
}

fn format_problem(v: &EventVisitor, level: Level) -> String {
    let message = v.message.as_deref().unwrap_or("");
    let tag = if level == Level::ERROR {
        "ERROR".bright_red().bold().to_string()
    } else {
        "WARN".yellow().bold().to_string()
    };

    let mut output = format!("{} {} {}", format_elapsed(), tag, message);
    if let Some(error) = &v.error {
        output.push_str(&format!(" │ {}", error.yellow()));
    }
    output
}
