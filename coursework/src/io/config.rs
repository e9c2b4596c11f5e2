//! Demo defaults stored in `coursework.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::averager::Averager;
use crate::core::mask::MaskSearch;
use crate::core::nested::Nested;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "coursework.toml";

/// Largest `recursion_limit` accepted; deeper recursion overflows the main
/// thread's stack.
pub const MAX_RECURSION_LIMIT: usize = 10_000;

/// Inputs each exercise uses when the command line does not override them.
///
/// Missing sections and fields fall back to the lab's original values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CourseworkConfig {
    pub sequences: SequencesConfig,
    pub radix: RadixConfig,
    pub mask: MaskConfig,
    pub recurrence: RecurrenceConfig,
    pub flatten: FlattenConfig,
    pub averager: AveragerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SequencesConfig {
    pub alphabet: String,
    pub length: usize,
    pub first: char,
    pub last: char,
}

impl Default for SequencesConfig {
    fn default() -> Self {
        Self {
            alphabet: "KATEP".to_string(),
            length: 6,
            first: 'P',
            last: 'K',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RadixConfig {
    pub base: u32,
}

impl Default for RadixConfig {
    fn default() -> Self {
        Self { base: 6 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MaskConfig {
    /// Decimal digits with `?` for any single digit.
    pub pattern: String,
    pub divisor: u64,
    /// Largest value a match may take.
    pub limit: u64,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            pattern: "12345??8?".to_string(),
            divisor: 23,
            limit: 1_000_000_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecurrenceConfig {
    /// Last index printed by the table.
    pub max_k: i64,
    /// Largest k evaluated with the recursive strategy.
    pub recursion_limit: i64,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            max_k: 7,
            recursion_limit: 10_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlattenConfig {
    /// JSON array flattened when no input is given.
    pub sample: String,
    /// Deepest input flattened with the recursive strategy. JSON input is
    /// itself capped at 128 levels by `serde_json`.
    pub recursion_limit: usize,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            sample: "[1, 2, [3, 4, [5, [6, []]]]]".to_string(),
            recursion_limit: 64,
        }
    }
}

/// A bound missing from an `[averager]` table means "unbounded"; the 0..=100
/// bounds apply only when the whole table is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AveragerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Batches passed to successive `add` calls.
    pub batches: Vec<Vec<f64>>,
}

impl Default for AveragerConfig {
    fn default() -> Self {
        Self {
            min: Some(0.0),
            max: Some(100.0),
            batches: vec![vec![10.0, 20.0, 30.0], vec![40.0], vec![-5.0]],
        }
    }
}

impl CourseworkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sequences.alphabet.is_empty() {
            return Err(anyhow!("sequences.alphabet must not be empty"));
        }
        if self.sequences.length < 2 {
            return Err(anyhow!("sequences.length must be >= 2"));
        }
        if !(2..=36).contains(&self.radix.base) {
            return Err(anyhow!("radix.base must be between 2 and 36"));
        }
        MaskSearch::new(&self.mask.pattern, self.mask.divisor, self.mask.limit)
            .map_err(|err| anyhow!("mask: {err}"))?;
        if self.recurrence.max_k < 1 {
            return Err(anyhow!("recurrence.max_k must be >= 1"));
        }
        if !(1..=MAX_RECURSION_LIMIT as i64).contains(&self.recurrence.recursion_limit) {
            return Err(anyhow!(
                "recurrence.recursion_limit must be between 1 and {MAX_RECURSION_LIMIT}"
            ));
        }
        if !(1..=MAX_RECURSION_LIMIT).contains(&self.flatten.recursion_limit) {
            return Err(anyhow!(
                "flatten.recursion_limit must be between 1 and {MAX_RECURSION_LIMIT}"
            ));
        }
        parse_nested(&self.flatten.sample).context("flatten.sample")?;
        Averager::new(self.averager.min, self.averager.max)
            .map_err(|err| anyhow!("averager: {err}"))?;
        Ok(())
    }
}

/// Parse a JSON array into a top-level nested sequence.
pub fn parse_nested(raw: &str) -> Result<Vec<Nested<Value>>> {
    serde_json::from_str(raw).context("parse nested sequence (expected a JSON array)")
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CourseworkConfig::default()`.
pub fn load_config(path: &Path) -> Result<CourseworkConfig> {
    if !path.exists() {
        let cfg = CourseworkConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CourseworkConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CourseworkConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
