//! Orchestration for each exercise: run core logic on configured inputs and
//! return printable outcomes.
//!
//! Each `run_*` function returns a structured outcome whose `Display` impl
//! renders the `label: key=value` lines the CLI prints.

use std::fmt;

use anyhow::{Context, Result, ensure};
use num_bigint::BigUint;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::averager::{AverageError, Averager};
use crate::core::flatten::{flatten_iterative, flatten_recursive};
use crate::core::mask::{MaskMatch, MaskSearch};
use crate::core::nested::{Nested, max_depth};
use crate::core::radix::{distinct_digits, to_base};
use crate::core::recurrence::{RecurrencePair, pair_iterative, pair_recursive};
use crate::core::sequences::count_sequences;
use crate::io::config::{MaskConfig, SequencesConfig};

fn render_list<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencesOutcome {
    pub input: SequencesConfig,
    pub count: u64,
}

impl fmt::Display for SequencesOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequences: alphabet={} length={} first={} last={} count={}",
            self.input.alphabet, self.input.length, self.input.first, self.input.last, self.count
        )
    }
}

/// Count words with a fixed first and last letter.
pub fn run_sequences(input: &SequencesConfig) -> Result<SequencesOutcome> {
    let count = count_sequences(&input.alphabet, input.length, input.first, input.last)
        .context("count sequences")?;
    debug!(alphabet = %input.alphabet, length = input.length, count, "sequences counted");
    Ok(SequencesOutcome {
        input: input.clone(),
        count,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixOutcome {
    pub value: BigUint,
    pub base: u32,
    pub digits: String,
    pub distinct: usize,
}

impl fmt::Display for RadixOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radix: value={} base={} digits={} distinct={}",
            self.value, self.base, self.digits, self.distinct
        )
    }
}

/// Write `value` in `base` and count its distinct digits.
pub fn run_radix(value: &BigUint, base: u32) -> Result<RadixOutcome> {
    let digits = to_base(value, base).context("convert base")?;
    let distinct = distinct_digits(value, base).context("count digits")?;
    debug!(base, distinct, "radix computed");
    Ok(RadixOutcome {
        value: value.clone(),
        base,
        digits,
        distinct,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    pub input: MaskConfig,
    pub matches: Vec<MaskMatch>,
}

impl fmt::Display for MaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mask: pattern={} divisor={} limit={} matches={}",
            self.input.pattern,
            self.input.divisor,
            self.input.limit,
            self.matches.len()
        )?;
        for found in &self.matches {
            write!(
                f,
                "\nmask: value={} quotient={}",
                found.value, found.quotient
            )?;
        }
        Ok(())
    }
}

/// Enumerate every number matching the mask.
pub fn run_mask(input: &MaskConfig) -> Result<MaskOutcome> {
    let search =
        MaskSearch::new(&input.pattern, input.divisor, input.limit).context("build mask search")?;
    debug!(pattern = %input.pattern, wildcards = search.wildcards(), "searching mask");
    let matches = search.matches();
    info!(pattern = %input.pattern, matches = matches.len(), "mask search finished");
    Ok(MaskOutcome {
        input: input.clone(),
        matches,
    })
}

/// Result of one strategy that may be skipped for exceeding the recursion limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy<T> {
    Computed(T),
    Skipped { limit: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlattenOutcome {
    pub input: Vec<Nested<Value>>,
    pub depth: usize,
    pub recursive: Strategy<Vec<Value>>,
    pub iterative: Vec<Value>,
}

impl fmt::Display for FlattenOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = serde_json::to_string(&self.input).map_err(|_| fmt::Error)?;
        writeln!(f, "flatten: input={} depth={}", input, self.depth)?;
        match &self.recursive {
            Strategy::Computed(result) => writeln!(
                f,
                "flatten: strategy=recursive result={}",
                render_list(result)
            )?,
            Strategy::Skipped { limit } => writeln!(
                f,
                "flatten: strategy=recursive skipped=true recursion_limit={}",
                limit
            )?,
        }
        write!(
            f,
            "flatten: strategy=iterative result={}",
            render_list(&self.iterative)
        )
    }
}

/// Flatten `xs` with both strategies and check that they agree.
///
/// The recursive strategy is skipped when the input is deeper than
/// `recursion_limit`.
pub fn run_flatten(xs: Vec<Nested<Value>>, recursion_limit: usize) -> Result<FlattenOutcome> {
    let depth = max_depth(&xs);
    let iterative = flatten_iterative(&xs);
    let recursive = if depth > recursion_limit {
        warn!(depth, recursion_limit, "input too deep for recursive flatten");
        Strategy::Skipped {
            limit: recursion_limit as u64,
        }
    } else {
        let recursive = flatten_recursive(&xs);
        ensure!(
            recursive == iterative,
            "flatten strategies disagree: recursive={} iterative={}",
            render_list(&recursive),
            render_list(&iterative)
        );
        Strategy::Computed(recursive)
    };
    debug!(depth, leaves = iterative.len(), "flattened");
    Ok(FlattenOutcome {
        input: xs,
        depth,
        recursive,
        iterative,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRow {
    pub k: i64,
    pub recursive: Strategy<RecurrencePair>,
    pub iterative: RecurrencePair,
}

impl fmt::Display for RecurrenceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.recursive {
            Strategy::Computed(pair) => write!(
                f,
                "recurrence: k={} recursive=({}) iterative=({})",
                self.k, pair, self.iterative
            ),
            Strategy::Skipped { limit } => write!(
                f,
                "recurrence: k={} recursive=skipped recursion_limit={} iterative=({})",
                self.k, limit, self.iterative
            ),
        }
    }
}

/// Evaluate `(a_k, b_k)` for each k with both strategies.
///
/// Fails on the first k outside the domain; the recursive strategy is skipped
/// for k above `recursion_limit`.
pub fn run_recurrence(
    ks: impl IntoIterator<Item = i64>,
    recursion_limit: i64,
) -> Result<Vec<RecurrenceRow>> {
    let mut rows = Vec::new();
    for k in ks {
        let iterative = pair_iterative(k).with_context(|| format!("evaluate k={k}"))?;
        let recursive = if k > recursion_limit {
            warn!(k, recursion_limit, "k too large for recursive evaluation");
            Strategy::Skipped {
                limit: recursion_limit.unsigned_abs(),
            }
        } else {
            let recursive = pair_recursive(k).with_context(|| format!("evaluate k={k}"))?;
            ensure!(
                recursive == iterative,
                "recurrence strategies disagree at k={k}: recursive=({recursive}) iterative=({iterative})"
            );
            Strategy::Computed(recursive)
        };
        debug!(k, "recurrence evaluated");
        rows.push(RecurrenceRow {
            k,
            recursive,
            iterative,
        });
    }
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Accepted { values: Vec<f64>, average: f64 },
    Rejected { values: Vec<f64>, error: AverageError },
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchOutcome::Accepted { values, average } => write!(
                f,
                "average: batch={} average={}",
                render_list(values),
                average
            ),
            BatchOutcome::Rejected { values, error } => write!(
                f,
                "average: batch={} rejected={}",
                render_list(values),
                error
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AverageOutcome {
    pub batches: Vec<BatchOutcome>,
    pub count: u64,
    pub average: Option<f64>,
}

impl AverageOutcome {
    pub fn rejected(&self) -> usize {
        self.batches
            .iter()
            .filter(|batch| matches!(batch, BatchOutcome::Rejected { .. }))
            .count()
    }
}

impl fmt::Display for AverageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for batch in &self.batches {
            writeln!(f, "{batch}")?;
        }
        match self.average {
            Some(average) => write!(f, "average: count={} final={}", self.count, average),
            None => write!(f, "average: count={} final=none", self.count),
        }
    }
}

/// Feed each batch to one [`Averager`] in order.
///
/// A rejected batch is recorded and the remaining batches still run against
/// the unchanged state. Invalid bounds fail the whole run.
pub fn run_averager(
    min: Option<f64>,
    max: Option<f64>,
    batches: &[Vec<f64>],
) -> Result<AverageOutcome> {
    let mut averager = Averager::new(min, max).context("build averager")?;
    let mut outcomes = Vec::with_capacity(batches.len());
    for values in batches {
        match averager.add(values) {
            Ok(average) => {
                debug!(batch = values.len(), average, "batch accepted");
                outcomes.push(BatchOutcome::Accepted {
                    values: values.clone(),
                    average,
                });
            }
            Err(error) => {
                warn!(%error, "batch rejected");
                outcomes.push(BatchOutcome::Rejected {
                    values: values.clone(),
                    error,
                });
            }
        }
    }
    Ok(AverageOutcome {
        batches: outcomes,
        count: averager.count(),
        average: averager.average(),
    })
}
