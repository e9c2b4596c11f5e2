//! Side-effecting helpers (config file access).
//!
//! Exercise logic lives in [`crate::core`]; this module is the only place
//! that touches the filesystem.

pub mod config;
