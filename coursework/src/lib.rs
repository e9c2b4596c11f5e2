//! Small academic exercises: combinatorial counting, base conversion, digit
//! mask search, nested-sequence flattening, a coupled linear recurrence and a
//! running average.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic for each exercise. No I/O, fully
//!   testable in isolation. Flattening and the recurrence each come in a
//!   recursive and an iterative strategy that must agree.
//! - **[`io`]**: Config file access.
//!
//! [`labs`] coordinates core logic with config to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod labs;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
