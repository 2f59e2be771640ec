//! Bounded re-polling for backend state that appears with a delay
//!
//! Post-call artifacts reach the backend some seconds after a call
//! completes: the transcript and recording as the telephony provider
//! processes them, the analytics summary last. [`Reprobe`] runs an async
//! probe once and then up to a configured number of extra rounds, sleeping
//! a fixed interval between rounds, until the probe reports done.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

/// A probe that was still incomplete when its final round finished
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("still incomplete after {rounds} rounds")]
pub struct RoundsExhausted {
    /// Rounds actually run, the initial pass included
    pub rounds: u32,
}

/// What one probe round found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<T> {
    /// Everything awaited is there; stop and yield the value
    Done(T),
    /// Something is still missing; run another round if any remain
    Incomplete,
}

impl<T> Probe<T> {
    /// `Done(value)` when `done` holds, `Incomplete` otherwise
    pub fn when(done: bool, value: T) -> Self {
        if done {
            Self::Done(value)
        } else {
            Self::Incomplete
        }
    }
}

/// Fixed-interval re-poll with a bounded number of extra rounds.
///
/// The first round runs immediately; every later round waits out the delay
/// first. Zero extra rounds makes [`Reprobe::run`] a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reprobe {
    extra_rounds: u32,
    delay: Duration,
}

impl Reprobe {
    pub fn new(extra_rounds: u32, delay: Duration) -> Self {
        Self { extra_rounds, delay }
    }

    /// Total rounds [`Reprobe::run`] may attempt
    pub fn max_rounds(&self) -> u32 {
        self.extra_rounds.saturating_add(1)
    }

    /// Drive `probe` until it reports done or no rounds remain.
    ///
    /// The probe owns its partial progress across rounds; a probe that is
    /// never done leaves whatever it accumulated in place, and the error
    /// only says how many rounds ran.
    pub async fn run<F, Fut, T>(&self, mut probe: F) -> Result<T, RoundsExhausted>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Probe<T>>,
    {
        let max_rounds = self.max_rounds();
        for round in 1..=max_rounds {
            if let Probe::Done(value) = probe().await {
                if round > 1 {
                    debug!(round, "probe completed after re-polling");
                }
                return Ok(value);
            }
            if round < max_rounds {
                debug!(round, delay = ?self.delay, "probe incomplete, next round scheduled");
                tokio::time::sleep(self.delay).await;
            }
        }

        warn!(rounds = max_rounds, "probe still incomplete after its final round");
        Err(RoundsExhausted { rounds: max_rounds })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_first_round_success_needs_no_delay() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = Arc::clone(&counter);

        let reprobe = Reprobe::new(5, Duration::from_secs(60));
        let result = tokio_test::block_on(reprobe.run(|| {
            let c = Arc::clone(&counter_clone);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Probe::Done(42)
            }
        }));

        assert_eq!(result.expect("done on the first round"), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_extra_rounds_run_until_done() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = Arc::clone(&counter);

        let reprobe = Reprobe::new(3, Duration::ZERO);
        let result = reprobe
            .run(|| {
                let c = Arc::clone(&counter_clone);
                async move {
                    let round = c.fetch_add(1, Ordering::SeqCst) + 1;
                    Probe::when(round >= 3, "ready")
                }
            })
            .await;

        assert_eq!(result.expect("done on the third round"), "ready");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_round_count_is_bounded() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = Arc::clone(&counter);

        let reprobe = Reprobe::new(2, Duration::ZERO);
        let result: Result<(), _> = reprobe
            .run(|| {
                let c = Arc::clone(&counter_clone);
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Probe::Incomplete
                }
            })
            .await;

        match result {
            Err(RoundsExhausted { rounds }) => assert_eq!(rounds, 3),
            Ok(()) => panic!("probe never reports done"),
        }
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_extra_rounds_is_a_single_attempt() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = Arc::clone(&counter);

        let reprobe = Reprobe::new(0, Duration::from_secs(60));
        let result: Result<(), _> = reprobe
            .run(|| {
                let c = Arc::clone(&counter_clone);
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Probe::Incomplete
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_probe_when() {
        assert_eq!(Probe::when(true, 7), Probe::Done(7));
        assert_eq!(Probe::when(false, 7), Probe::<i32>::Incomplete);
    }

    #[test]
    fn test_rounds_exhausted_display() {
        let err = RoundsExhausted { rounds: 4 };
        assert!(err.to_string().contains("4 rounds"));
    }
}
