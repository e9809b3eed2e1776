mod config;
mod fixtures;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pantry_core::{
    format_cooking_time, parse_ingredient_line, scale_ingredients_block, scale_recipe,
    validate_recipe, Recipe, ValidationErrors,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use unit_conversion::{convert, supported_units, unit_category, ConversionTable};

use crate::config::{parse_factor, CliConfig, ConfigError};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Scale ingredient lists and convert recipe units", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse ingredient lines and print them as JSON
    Parse {
        /// One or more ingredient lines
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Scale a block of ingredient lines (one per line)
    Scale {
        /// Scale factor (default: PANTRY_DEFAULT_FACTOR or 1)
        #[arg(long)]
        factor: Option<String>,
        /// Read ingredients from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Convert a value between units
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// Decimal places to print
        #[arg(long, default_value_t = 2)]
        precision: usize,
    },
    /// List supported units by category
    Units {
        /// Print the stored conversion table instead
        #[arg(long)]
        table: bool,
    },
    /// Validate a recipe JSON file and print it, optionally scaled
    Recipe {
        path: PathBuf,
        /// Scale factor (default: PANTRY_DEFAULT_FACTOR or 1)
        #[arg(long)]
        factor: Option<String>,
    },
    /// Maintain ingredient line golden fixtures
    Fixtures {
        #[command(subcommand)]
        command: FixturesCommands,
    },
}

#[derive(Subcommand)]
enum FixturesCommands {
    /// Rewrite fixture expectations from current parser output
    Update {
        /// Fixture root (default: PANTRY_FIXTURES_DIR)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { lines } => {
            let parsed: Vec<_> = lines.iter().map(|l| parse_ingredient_line(l)).collect();
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Commands::Scale { factor, file } => {
            let factor = resolve_factor(factor.as_deref(), CliConfig::from_env)?;
            let text = read_input(file.as_deref())?;
            println!("{}", scale_ingredients_block(&text, factor));
        }
        Commands::Convert {
            value,
            from,
            to,
            precision,
        } => {
            run_convert(value, &from, &to, precision)?;
        }
        Commands::Units { table } => {
            println!("{}", serde_json::to_string_pretty(&units_json(table)?)?);
        }
        Commands::Recipe { path, factor } => {
            let factor = resolve_factor(factor.as_deref(), CliConfig::from_env)?;
            show_recipe(&path, factor)?;
        }
        Commands::Fixtures {
            command: FixturesCommands::Update { dir },
        } => {
            let dir = match dir {
                Some(dir) => dir,
                None => CliConfig::from_env()?.fixtures_dir,
            };
            fixtures::update_fixtures(&dir)?;
        }
    }

    Ok(())
}

/// `--factor` wins; the environment is only consulted when it is absent.
fn resolve_factor<F>(arg: Option<&str>, load_config: F) -> Result<f64>
where
    F: FnOnce() -> Result<CliConfig, ConfigError>,
{
    match arg {
        Some(value) => Ok(parse_factor("--factor", value)?),
        None => Ok(load_config()?.default_factor),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read ingredients file: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read ingredients from stdin")?;
            Ok(text)
        }
    }
}

fn run_convert(value: f64, from: &str, to: &str, precision: usize) -> Result<()> {
    match convert(value, from, to) {
        Ok(result) => {
            println!("{}", format_decimal(result, precision));
            Ok(())
        }
        Err(e) => {
            let hint = match (unit_category(from), unit_category(to)) {
                (Some(a), Some(b)) if a != b => format!(" ({a} and {b} don't mix)"),
                (None, _) => format!(" (unknown unit {from:?})"),
                (_, None) => format!(" (unknown unit {to:?})"),
                _ => String::new(),
            };
            bail!("{e}{hint}")
        }
    }
}

/// Fixed-precision rendering with trailing zeros removed.
fn format_decimal(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn units_json(table: bool) -> Result<serde_json::Value> {
    let value = if table {
        serde_json::to_value(ConversionTable::global().entries())?
    } else {
        serde_json::to_value(supported_units())?
    };
    Ok(value)
}

fn load_recipe(path: &Path) -> Result<Recipe> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse recipe file: {}", path.display()))
}

/// Validate, scale, and render a recipe with its formatted cooking time.
fn render_recipe(recipe: Recipe, factor: f64) -> Result<serde_json::Value, ValidationErrors> {
    validate_recipe(&recipe)?;

    let recipe = if factor == 1.0 {
        recipe
    } else {
        tracing::debug!(factor, "Scaling recipe");
        scale_recipe(&recipe, factor)
    };

    let cooking_time = format_cooking_time(recipe.cooking_time);
    Ok(serde_json::json!({
        "recipe": recipe,
        "cooking_time": cooking_time,
    }))
}

fn show_recipe(path: &Path, factor: f64) -> Result<()> {
    let recipe = load_recipe(path)?;

    match render_recipe(recipe, factor) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("- {}", error);
            }
            bail!("Invalid recipe: {}", path.display())
        }
    }
}
