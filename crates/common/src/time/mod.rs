//! Time utilities: duration formatting and schedule handling

pub mod format;
pub mod schedule;

pub use format::{format_duration, format_seconds};
pub use schedule::{combine_date_time, ScheduleError};
