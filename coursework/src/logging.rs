//! Stderr tracing for the exercise runners in [`crate::labs`].
//!
//! At the default `warn` level only two things surface: a recursive strategy
//! skipped because the input is deeper than `recursion_limit` (flatten depth,
//! recurrence k), and an averager batch rejected by its bounds. `debug`
//! adds per-step fields (`k`, `depth`, `batch`, `wildcards`), `info` the mask
//! search totals. Exercise results go to stdout and never depend on
//! `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber; call once from `main`.
///
/// Filter comes from `RUST_LOG`, falling back to `warn`.
///
/// ```bash
/// RUST_LOG=coursework::labs=debug coursework recurrence --k 40
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
