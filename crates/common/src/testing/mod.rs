//! Helpers for tests that wait on background pollers
//!
//! The monitors publish through shared snapshots and expose no completion
//! signal to await, so their tests poll for the state they expect instead
//! of sleeping a fixed interval and hoping the tick landed.

use std::time::Duration;

/// Cadence between condition probes in [`wait_until!`](crate::wait_until)
pub const PROBE_EVERY: Duration = Duration::from_millis(10);

/// Poll a condition until it holds.
///
/// The condition is an expression re-evaluated every [`PROBE_EVERY`] and may
/// `.await` freely; it gets at least one probe even with a zero limit. The
/// macro expands in place so the condition can borrow test locals.
///
/// # Panics
///
/// Panics when the condition is still false after the limit.
#[macro_export]
macro_rules! wait_until {
    ($limit:expr, $cond:expr $(,)?) => {{
        let limit: ::std::time::Duration = $limit;
        let deadline = ::std::time::Instant::now() + limit;
        loop {
            if $cond {
                break;
            }
            if ::std::time::Instant::now() >= deadline {
                panic!("condition still false after {limit:?}");
            }
            ::tokio::time::sleep($crate::testing::PROBE_EVERY).await;
        }
    }};
}
