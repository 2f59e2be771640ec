//! Resilience utilities for operations against a flaky backend

pub mod reprobe;

pub use reprobe::{Probe, Reprobe, RoundsExhausted};
