//! Client configuration sourced from disk and `CALLDECK_*` environment variables

pub mod loader;

pub use loader::{load, load_from_file, probe_config_paths};
