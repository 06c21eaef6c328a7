//! Sleep abstraction
//!
//! The form lifecycle waits twice: for the simulated submission latency and
//! for the post-success reset. Both go through [`Sleeper`] so the browser can
//! back them with `setTimeout` and tests can skip the wait.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current task for a duration
#[async_trait(?Send)]
pub trait Sleeper {
    /// Resolves once `duration` has elapsed
    async fn sleep(&self, duration: Duration);
}
