//! Academic exercises runner.
//!
//! Each subcommand runs one exercise with inputs from `coursework.toml`
//! (or built-in defaults), overridable from the command line. `all` runs
//! every exercise in turn.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use tracing::info;

use coursework::core::radix::lab_value;
use coursework::exit_codes;
use coursework::io::config::{
    CourseworkConfig, DEFAULT_CONFIG_PATH, load_config, parse_nested, write_config,
};
use coursework::labs::{
    run_averager, run_flatten, run_mask, run_radix, run_recurrence, run_sequences,
};
use coursework::logging;

#[derive(Parser)]
#[command(
    name = "coursework",
    version,
    about = "Small academic exercises with recursive and iterative strategies"
)]
struct Cli {
    /// TOML file with default inputs; missing file means built-in defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Count words over an alphabet with a fixed first and last letter.
    Sequences {
        #[arg(long)]
        alphabet: Option<String>,
        #[arg(long)]
        length: Option<usize>,
        #[arg(long)]
        first: Option<char>,
        #[arg(long)]
        last: Option<char>,
    },
    /// Write a number in another base and count its distinct digits.
    Radix {
        /// Decimal value; defaults to 216^6 + 216^4 + 36^6 - 6^14 - 24.
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        base: Option<u32>,
    },
    /// Find numbers matching a digit mask (`?` = any digit) divisible by a divisor.
    Mask {
        #[arg(long)]
        pattern: Option<String>,
        #[arg(long)]
        divisor: Option<u64>,
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Flatten a nested JSON array recursively and iteratively.
    Flatten {
        /// JSON array, e.g. '[1, [2, [3]]]'.
        #[arg(long)]
        json: Option<String>,
    },
    /// Evaluate (a_k, b_k) recursively and iteratively.
    Recurrence {
        /// Single index; without it prints k = 1..=max_k.
        #[arg(long, allow_negative_numbers = true)]
        k: Option<i64>,
    },
    /// Feed batches of numbers to one running average.
    Average {
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
        /// Comma-separated values for one `add` call; repeatable.
        #[arg(long = "batch", allow_hyphen_values = true)]
        batches: Vec<String>,
    },
    /// Run every exercise with config defaults.
    All,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let load = || load_config(&cli.config);
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Sequences {
            alphabet,
            length,
            first,
            last,
        } => {
            let mut input = load()?.sequences;
            if let Some(alphabet) = alphabet {
                input.alphabet = alphabet;
            }
            if let Some(length) = length {
                input.length = length;
            }
            if let Some(first) = first {
                input.first = first;
            }
            if let Some(last) = last {
                input.last = last;
            }
            println!("{}", run_sequences(&input)?);
            Ok(())
        }
        Command::Radix { value, base } => {
            let value = match value {
                Some(raw) => parse_biguint(&raw)?,
                None => lab_value(),
            };
            let base = match base {
                Some(base) => base,
                None => load()?.radix.base,
            };
            println!("{}", run_radix(&value, base)?);
            Ok(())
        }
        Command::Mask {
            pattern,
            divisor,
            limit,
        } => {
            let mut input = load()?.mask;
            if let Some(pattern) = pattern {
                input.pattern = pattern;
            }
            if let Some(divisor) = divisor {
                input.divisor = divisor;
            }
            if let Some(limit) = limit {
                input.limit = limit;
            }
            println!("{}", run_mask(&input)?);
            Ok(())
        }
        Command::Flatten { json } => {
            let cfg = load()?.flatten;
            let xs = parse_nested(json.as_deref().unwrap_or(&cfg.sample))?;
            println!("{}", run_flatten(xs, cfg.recursion_limit)?);
            Ok(())
        }
        Command::Recurrence { k } => {
            let cfg = load()?.recurrence;
            let rows = match k {
                Some(k) => run_recurrence([k], cfg.recursion_limit)?,
                None => run_recurrence(1..=cfg.max_k, cfg.recursion_limit)?,
            };
            for row in rows {
                println!("{row}");
            }
            Ok(())
        }
        Command::Average {
            min,
            max,
            batches,
        } => {
            let cfg = load()?.averager;
            let batches = if batches.is_empty() {
                cfg.batches
            } else {
                batches
                    .iter()
                    .map(|raw| parse_batch(raw))
                    .collect::<Result<Vec<_>>>()?
            };
            let outcome = run_averager(min.or(cfg.min), max.or(cfg.max), &batches)?;
            println!("{outcome}");
            Ok(())
        }
        Command::All => cmd_all(&load()?),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        println!("init: config={} written=false", path.display());
        return Ok(());
    }
    write_config(path, &CourseworkConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote default config");
    println!("init: config={} written=true", path.display());
    Ok(())
}

fn cmd_all(cfg: &CourseworkConfig) -> Result<()> {
    println!("{}", run_sequences(&cfg.sequences)?);
    println!("{}", run_radix(&lab_value(), cfg.radix.base)?);
    println!("{}", run_mask(&cfg.mask)?);
    let xs = parse_nested(&cfg.flatten.sample)?;
    println!("{}", run_flatten(xs, cfg.flatten.recursion_limit)?);
    for row in run_recurrence(1..=cfg.recurrence.max_k, cfg.recurrence.recursion_limit)? {
        println!("{row}");
    }
    println!(
        "{}",
        run_averager(cfg.averager.min, cfg.averager.max, &cfg.averager.batches)?
    );
    Ok(())
}

fn parse_biguint(raw: &str) -> Result<BigUint> {
    raw.trim()
        .parse::<BigUint>()
        .with_context(|| format!("parse {raw:?} as a non-negative decimal integer"))
}

/// Parse `"10, 20,30"` into values; an empty string is an empty batch.
fn parse_batch(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .with_context(|| format!("parse batch value {part:?}"))
        })
        .collect()
}
