//! Configuration loader
//!
//! Loads application configuration from config files and environment
//! variables.
//!
//! ## Loading Strategy
//! 1. Starts from the built-in defaults
//! 2. Overlays the first config file found (every field is optional)
//! 3. Overlays `CALLDECK_*` environment variables, which always win
//!
//! ## Recognised Variables
//! - `CALLDECK_API_BASE_URL`: Backend API base URL
//! - `CALLDECK_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `CALLDECK_COUNTRY_CODE`: Default country code for bare national numbers
//! - `CALLDECK_NATIONAL_LEN`: Expected national number length
//! - `CALLDECK_POLL_INTERVAL_SECS`: Campaign monitor poll interval
//! - `CALLDECK_LIVE_POLL_INTERVAL_SECS`: Live-call monitor poll interval
//! - `CALLDECK_ANALYSIS_BATCH_SIZE`: Analysis probe batch size
//! - `CALLDECK_ANALYSIS_MAX_RETRIES`: Bounded analysis retry count
//! - `CALLDECK_ANALYSIS_RETRY_DELAY_SECS`: Delay between analysis retries
//!
//! ## Probe Order
//! Config files are searched in this order, first hit wins:
//! 1. `./config.{json,toml}` or `./calldeck.{json,toml}` (current working
//!    directory)
//! 2. `../config.{json,toml}` and `../../config.{json,toml}`
//! 3. Next to the executable

use std::path::{Path, PathBuf};

use calldeck_domain::{CallDeckError, Config, Result};

/// Load configuration with the overlay strategy.
///
/// A missing config file is not an error here; the defaults cover every
/// field and the environment can still override them.
///
/// # Errors
/// Returns `CallDeckError::Config` if a found file fails to parse or an
/// environment variable carries an unparseable value.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading configuration from file");
            read_config_file(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a specific file.
///
/// Unlike [`load`], a missing file is an error: the caller asked for this
/// file explicitly. If `path` is `None`, probes the standard locations and
/// requires a hit. Environment overrides still apply afterwards.
///
/// # Errors
/// Returns `CallDeckError::Config` if:
/// - The file does not exist (when a path is specified)
/// - No config file is found (when `path` is `None`)
/// - The file format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CallDeckError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CallDeckError::Config(
                "no config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let mut config = read_config_file(&config_path)?;
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Walk the standard config locations and return the first file that exists
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("calldeck.json"),
            cwd.join("calldeck.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("calldeck.json"),
                exe_dir.join("calldeck.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn read_config_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CallDeckError::Config(format!("failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// The extension picks the parser; anything but `.json`/`.toml` is rejected.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CallDeckError::Config(format!("invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CallDeckError::Config(format!("invalid JSON format: {}", e))),
        _ => Err(CallDeckError::Config(format!("unsupported config format: {}", extension))),
    }
}

/// Apply `CALLDECK_*` environment variables on top of the loaded config
fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(base_url) = std::env::var("CALLDECK_API_BASE_URL") {
        config.api.base_url = base_url;
    }
    if let Some(timeout) = env_parse::<u64>("CALLDECK_API_TIMEOUT_SECS")? {
        config.api.timeout_secs = timeout;
    }

    if let Ok(country_code) = std::env::var("CALLDECK_COUNTRY_CODE") {
        config.dialing.country_code = country_code;
    }
    if let Some(len) = env_parse::<usize>("CALLDECK_NATIONAL_LEN")? {
        config.dialing.national_len = len;
    }

    if let Some(interval) = env_parse::<u64>("CALLDECK_POLL_INTERVAL_SECS")? {
        config.monitor.poll_interval_secs = interval;
    }
    if let Some(interval) = env_parse::<u64>("CALLDECK_LIVE_POLL_INTERVAL_SECS")? {
        config.monitor.live_poll_interval_secs = interval;
    }
    if let Some(batch_size) = env_parse::<usize>("CALLDECK_ANALYSIS_BATCH_SIZE")? {
        config.monitor.analysis_batch_size = batch_size;
    }
    if let Some(retries) = env_parse::<u32>("CALLDECK_ANALYSIS_MAX_RETRIES")? {
        config.monitor.analysis_max_retries = retries;
    }
    if let Some(delay) = env_parse::<u64>("CALLDECK_ANALYSIS_RETRY_DELAY_SECS")? {
        config.monitor.analysis_retry_delay_secs = delay;
    }

    Ok(())
}

/// Parse an optional environment variable.
///
/// An unset variable is `None`; a set-but-unparseable one is a config error
/// so typos fail loudly instead of silently keeping the default.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| CallDeckError::Config(format!("invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}
