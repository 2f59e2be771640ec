//! Shared utilities for the CallDeck crates.
//!
//! Everything is feature-gated so lean consumers pull only what they use:
//! - `foundation`: validation and time helpers, no side effects
//! - `observability`: adds tracing on top of the foundation tier
//! - `runtime`: async helpers on tokio (resilience)
//! - `test-utils`: polling helpers for tests that wait on background work

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod validation;

#[cfg(feature = "runtime")]
pub mod resilience;

#[cfg(any(feature = "runtime", feature = "test-utils", test))]
pub mod testing;

// Convenience re-exports at the crate root
#[cfg(feature = "runtime")]
pub use resilience::{Probe, Reprobe, RoundsExhausted};
#[cfg(feature = "foundation")]
pub use time::format::{format_duration, format_seconds};
#[cfg(feature = "foundation")]
pub use time::schedule::{combine_date_time, ScheduleError};
#[cfg(feature = "foundation")]
pub use validation::{FieldError, ValidationError, ValidationResult, Validator};
