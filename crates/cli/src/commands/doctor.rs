//! Backend reachability check and effective-configuration report.

use anyhow::bail;

use crate::context::AppContext;
use crate::render;

/// Print the effective configuration, then probe the backend.
///
/// Transport failures count as offline, same as a non-success probe
/// answer. Offline exits nonzero so scripts can gate on it.
pub async fn run(context: &AppContext) -> anyhow::Result<()> {
    let online = match context.client.probe_server().await {
        Ok(online) => online,
        Err(err) => {
            tracing::debug!(error = %err, "status probe failed");
            false
        }
    };

    render::doctor_report(&context.config, online);

    if !online {
        bail!("backend is offline at {}", context.config.api.status_url());
    }
    Ok(())
}
