//! Deterministic, pure logic for each exercise.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod averager;
pub mod flatten;
pub mod mask;
pub mod nested;
pub mod radix;
pub mod recurrence;
pub mod sequences;
