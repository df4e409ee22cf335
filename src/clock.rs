//! src/clock.rs
//!
//! The deadline clock (§4.7): a monotonic wall-clock source that gates the
//! search loop. Built on `std::time::Instant`, which is guaranteed
//! monotonic on every platform Rust supports — there is no ecosystem
//! crate in the corpus for this concern, so this is the one place the
//! ambient-stack rule of "use a crate the corpus reaches for" legitimately
//! falls back to the standard library.

use std::time::{Duration, Instant};

/// An absolute point in time at which a search must stop.
#[derive(Clone, Copy, Debug)]
pub struct Deadline(Instant);

impl Deadline {
    /// A deadline `duration` from now.
    pub fn after(duration: Duration) -> Self {
        Self(Instant::now() + duration)
    }

    /// A deadline at an explicit instant (used by callers that already
    /// computed an absolute cutoff, e.g. the CLI shell's §6 policy).
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    /// True once `now() >= deadline`. The loop predicate is `now() <
    /// deadline`, i.e. the negation of this.
    pub fn has_passed(&self) -> bool {
        Instant::now() >= self.0
    }
}
