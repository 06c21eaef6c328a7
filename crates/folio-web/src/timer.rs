//! `setTimeout`-backed [`Sleeper`]

use std::time::Duration;

use async_trait::async_trait;
use folio_core::Sleeper;
use gloo_timers::future::TimeoutFuture;

/// Sleeps on the browser event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
