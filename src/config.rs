//! src/config.rs
//!
//! CLI configuration (§6 deadline policy). Replaces the teacher's
//! pyo3-exposed `Params` struct — there is no embedding boundary here, so
//! this is a plain `clap::Parser` derive instead.

use clap::Parser;
use std::time::Duration;

/// The default per-instance time budget named in §6: 5 seconds for the
/// n = 300 benchmark size, 2 seconds otherwise.
const DEFAULT_BUDGET_N300_SECS: f64 = 5.0;
const DEFAULT_BUDGET_OTHER_SECS: f64 = 2.0;
const DEFAULT_SAFETY_MARGIN_MS: u64 = 400;
const N300_THRESHOLD: usize = 300;

#[derive(Parser, Debug, Clone)]
#[command(name = "mwds", about = "Configuration-checking local search for minimum-weight dominating sets")]
pub struct Cli {
    /// Override the time budget in seconds. Defaults to the §6 policy
    /// (5s when the instance has exactly 300 vertices, 2s otherwise).
    #[arg(long)]
    pub timeout_secs: Option<f64>,

    /// Milliseconds subtracted from the budget to leave time for
    /// output formatting before the external time limit hits.
    #[arg(long, default_value_t = DEFAULT_SAFETY_MARGIN_MS)]
    pub safety_margin_ms: u64,

    /// Suppress the progress summary normally logged at the deadline.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// The wall-clock budget for an instance of `n` vertices, with the
    /// safety margin already subtracted (§6).
    pub fn budget(&self, n: usize) -> Duration {
        let base_secs = self
            .timeout_secs
            .unwrap_or(if n == N300_THRESHOLD { DEFAULT_BUDGET_N300_SECS } else { DEFAULT_BUDGET_OTHER_SECS });
        let base = Duration::from_secs_f64(base_secs.max(0.0));
        base.saturating_sub(Duration::from_millis(self.safety_margin_ms))
    }
}
