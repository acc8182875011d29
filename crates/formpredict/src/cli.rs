//! Command-line interface.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use formpredict_config::AppConfig;
use formpredict_core::{AnswerSet, FieldKind, FormPredictError, Rendered, Variant};
use formpredict_web::AppState;
use owo_colors::OwoColorize;

use crate::error::{Error, Result};
use crate::registry::{build_registry, build_variant};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "formpredict.toml";

#[derive(Debug, Parser)]
#[command(name = "formpredict", version, about = "Schema-checked form inference")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTML forms and the JSON API
    Serve {
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one prediction and print the result
    Predict {
        #[arg(long, short)]
        variant: String,

        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Answers as FIELD=VALUE pairs
        #[arg(value_name = "FIELD=VALUE")]
        answers: Vec<String>,
    },

    /// Print a variant's fields and options
    Schema {
        #[arg(long, short)]
        variant: String,

        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

/// Runs a parsed command.
///
/// `serve` prints the banner; the one-shot commands install the same
/// console logging without it.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { config, port } => {
            formpredict_console::init();
            let mut config = load_config(config.as_deref())?;
            if let Some(port) = port {
                config = config.with_port(port);
            }
            let addr = config.server.socket_addr()?;
            let registry = build_registry(&config)?;
            if registry.is_empty() {
                tracing::warn!(event = "no_variants", "No variants configured");
            }
            formpredict_web::serve(Arc::new(AppState::new(registry)), addr).await?;
            Ok(())
        }
        Command::Predict {
            variant,
            config,
            answers,
        } => {
            formpredict_console::init_logging();
            let config = load_config(config.as_deref())?;
            let variant = load_variant(&config, &variant)?;
            let answers = parse_answers(&answers)?;
            let rendered = variant.respond(&answers).map_err(Error::Usage)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", colorize(&rendered))?;
            Ok(())
        }
        Command::Schema { variant, config } => {
            formpredict_console::init_logging();
            let config = load_config(config.as_deref())?;
            let variant = load_variant(&config, &variant)?;
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", describe(&variant))?;
            Ok(())
        }
    }
}

/// Reads the config, falling back to defaults when the default file is absent.
///
/// An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => Ok(AppConfig::load(path)?),
        None if Path::new(DEFAULT_CONFIG).exists() => Ok(AppConfig::load(DEFAULT_CONFIG)?),
        None => Ok(AppConfig::default()),
    }
}

fn load_variant(config: &AppConfig, id: &str) -> Result<Variant> {
    let variant_config = config
        .variant(id)
        .ok_or_else(|| FormPredictError::UnknownVariant(id.to_string()))?;
    build_variant(variant_config)
}

/// Parses `FIELD=VALUE` arguments. The value may contain `=`.
pub fn parse_answers(args: &[String]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    for arg in args {
        let (field, value) = arg
            .split_once('=')
            .ok_or_else(|| Error::Usage(format!("expected FIELD=VALUE, got '{}'", arg)))?;
        let field = field.trim();
        if field.is_empty() {
            return Err(Error::Usage(format!("missing field name in '{}'", arg)));
        }
        answers.insert(field, value);
    }
    Ok(answers)
}

/// Colors the rendered text with its style when it is a `#rrggbb` hex color.
pub fn colorize(rendered: &Rendered) -> String {
    match rendered.color.as_deref().and_then(parse_hex) {
        Some((r, g, b)) => rendered.text.truecolor(r, g, b).bold().to_string(),
        None => rendered.text.clone(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Human-readable field listing for a variant.
pub fn describe(variant: &Variant) -> String {
    let schema = variant.schema();
    let mut out = format!(
        "{} ({}, schema {})\n",
        variant.title(),
        variant.id(),
        schema.tag()
    );
    for (i, field) in schema.fields().iter().enumerate() {
        let detail = match &field.kind {
            FieldKind::Categorical { options } => options
                .iter()
                .map(|o| format!("{}={}", o.label, o.code))
                .collect::<Vec<_>>()
                .join(", "),
            FieldKind::Numeric { min, max, .. } => match (min, max) {
                (Some(lo), Some(hi)) => format!("number {}..{}", lo, hi),
                (Some(lo), None) => format!("number >= {}", lo),
                (None, Some(hi)) => format!("number <= {}", hi),
                (None, None) => "number".to_string(),
            },
        };
        out.push_str(&format!("{:>3}. {:<28} {}\n", i, field.name, detail));
    }
    out
}
