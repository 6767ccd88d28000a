//! Burst coalescing for noisy event streams (filter keystrokes, resizes).

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Holds the latest value from a burst of updates and releases it once the
/// stream has been quiet for the configured delay.
///
/// [`set`](Self::set) replaces any pending value and re-arms the deadline, so
/// only the last update of a burst survives. [`settled`](Self::settled) never
/// resolves while the debouncer is empty, which makes it safe to poll
/// unconditionally inside `tokio::select!`.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Stage `value`, restarting the settle timer.
    pub fn set(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Resolves with the staged value once the delay elapses without another
    /// `set`. Pends forever while empty.
    pub async fn settled(&mut self) -> T {
        let deadline = match &self.pending {
            Some((_, deadline)) => *deadline,
            None => std::future::pending().await,
        };
        sleep_until(deadline).await;
        let (value, _) = self.pending.take().expect("debouncer fired while empty");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const DELAY: Duration = Duration::from_millis(200);

    #[tokio::test(start_paused = true)]
    async fn releases_after_the_delay() {
        let mut debounce = Debouncer::new(DELAY);
        debounce.set("mars");
        let value = timeout(Duration::from_millis(201), debounce.settled())
            .await
            .expect("should settle");
        assert_eq!(value, "mars");
        assert!(!debounce.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn a_second_set_restarts_the_timer_and_wins() {
        let mut debounce = Debouncer::new(DELAY);
        debounce.set("ma");
        tokio::time::advance(Duration::from_millis(150)).await;
        debounce.set("mar");

        // 199ms after the second set: still quiet.
        assert!(timeout(Duration::from_millis(199), debounce.settled())
            .await
            .is_err());
        let value = timeout(Duration::from_millis(5), debounce.settled())
            .await
            .expect("should settle");
        assert_eq!(value, "mar");
    }

    #[tokio::test(start_paused = true)]
    async fn never_fires_while_empty() {
        let mut debounce: Debouncer<&str> = Debouncer::new(DELAY);
        assert!(timeout(Duration::from_secs(10), debounce.settled())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_the_pending_value() {
        let mut debounce = Debouncer::new(DELAY);
        debounce.set("moon");
        debounce.cancel();
        assert!(!debounce.is_armed());
        assert!(timeout(Duration::from_secs(1), debounce.settled())
            .await
            .is_err());
    }
}
