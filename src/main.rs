use std::path::PathBuf;

use anyhow::{Context, Result};
use argrouter::config::ExpansionMode;
use argrouter::{ArgumentRouter, OptionLookup, RouterConfig};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Expand {
    Auto,
    Always,
    Never,
}

impl From<Expand> for ExpansionMode {
    fn from(value: Expand) -> Self {
        match value {
            Expand::Auto => ExpansionMode::Auto,
            Expand::Always => ExpansionMode::Always,
            Expand::Never => ExpansionMode::Never,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "argrouter",
    version,
    about = "Show how an argument list splits into flags, options and positionals."
)]
struct Cli {
    /// Flag token to query (repeatable, queried in order).
    #[arg(long = "flag", value_name = "NAME", allow_hyphen_values = true)]
    flags: Vec<String>,

    /// Option token to query after all flags (repeatable, queried in order).
    #[arg(long = "option", value_name = "NAME", allow_hyphen_values = true)]
    options: Vec<String>,

    /// Override the configured pattern expansion mode.
    #[arg(long, value_enum)]
    expand: Option<Expand>,

    /// Read settings from this file instead of the default config path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Arguments to route.
    #[arg(value_name = "ARG", last = true)]
    args: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FlagReport {
    name: String,
    present: bool,
}

#[derive(Debug, Serialize)]
struct OptionReport {
    name: String,
    /// One of `absent`, `missing` or `value`.
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl OptionReport {
    fn new(name: &str, lookup: OptionLookup) -> Self {
        let (status, value) = match lookup {
            OptionLookup::Absent => ("absent", None),
            OptionLookup::Missing => ("missing", None),
            OptionLookup::Value(v) => ("value", Some(v)),
        };
        Self {
            name: name.to_string(),
            status,
            value,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    script_directory: String,
    script_base_name: String,
    original: Vec<String>,
    flags: Vec<FlagReport>,
    options: Vec<OptionReport>,
    remaining: Vec<String>,
}

fn main() -> Result<()> {
    argrouter::logging::init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let program = std::env::args_os()
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let report = route(&program, &cli, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<RouterConfig> {
    let mut config = match &cli.config {
        Some(path) => RouterConfig::load_from(path)
            .with_context(|| format!("Could not load --config {}", path.display()))?
            .with_env_overrides(),
        None => RouterConfig::load()?,
    };

    if let Some(expand) = cli.expand {
        config.expansion.mode = expand.into();
    }
    tracing::info!(mode = ?config.expansion.mode, "Using expansion mode");
    Ok(config)
}

fn route(program: &str, cli: &Cli, config: &RouterConfig) -> Report {
    let mut router = ArgumentRouter::with_config(program, &cli.args, config);

    let flags = cli
        .flags
        .iter()
        .map(|name| FlagReport {
            name: name.clone(),
            present: router.flag(name),
        })
        .collect();

    let options = cli
        .options
        .iter()
        .map(|name| OptionReport::new(name, router.lookup(name)))
        .collect();

    Report {
        script_directory: router.script_directory().to_string(),
        script_base_name: router.script_base_name().to_string(),
        original: router.original().to_vec(),
        flags,
        options,
        remaining: router.into_remaining(),
    }
}

fn print_text(report: &Report) {
    println!("script directory: {}", report.script_directory);
    println!("script base name: {}", report.script_base_name);
    println!("original: {:?}", report.original);
    for flag in &report.flags {
        println!("flag {}: {}", flag.name, flag.present);
    }
    for option in &report.options {
        match &option.value {
            Some(v) => println!("option {}: {:?}", option.name, v),
            None => println!("option {}: {}", option.name, option.status),
        }
    }
    println!("remaining: {:?}", report.remaining);
}
