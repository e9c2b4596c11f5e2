//! Test-only helpers for building nested sequences and config fixtures.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::{CourseworkConfig, write_config};

/// Build a `Vec<Nested<_>>` from list-literal syntax.
///
/// `nested![1, [2, []]]` is `[Leaf(1), List([Leaf(2), List([])])]`. Leaves
/// must be single tokens (literals or identifiers).
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::core::nested::Nested::List($crate::nested![$($inner)*])
    };
    (@item $leaf:expr) => {
        $crate::core::nested::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@item $item)),*]
    };
}

/// Write `cfg` into a fresh temp dir, returning the dir guard and file path.
pub fn config_fixture(cfg: &CourseworkConfig) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let path = dir.path().join("coursework.toml");
    write_config(&path, cfg)?;
    Ok((dir, path))
}
