//! Call history, point-in-time status and live watching.

use std::time::Duration;

use calldeck_infra::{LiveCallMonitor, SchedulerError};

use crate::context::AppContext;
use crate::render;

/// Print a page of recent calls
pub async fn recent(context: &AppContext, limit: u32, offset: u32) -> anyhow::Result<()> {
    let page = context.calls.recent_calls(limit, offset).await?;
    render::calls_page(&page);
    Ok(())
}

/// Print the current status of one call
pub async fn status(context: &AppContext, call_uuid: &str) -> anyhow::Result<()> {
    let snapshot = context.calls.call_status(call_uuid).await?;
    render::call_status(&snapshot);
    Ok(())
}

/// Poll one call until the backend reports it completed.
///
/// The monitor winds itself down on completion; ctrl-c stops it early.
pub async fn watch(context: &AppContext, call_uuid: &str) -> anyhow::Result<()> {
    let interval = Duration::from_secs(context.config.monitor.live_poll_interval_secs);
    let mut monitor = context.live_call_monitor(call_uuid);
    monitor.start().await?;
    render::watch_header(&format!("call {call_uuid}"), interval);

    let mut last_frame = String::new();
    while monitor.is_running() {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                stop_quietly(&mut monitor).await?;
                break;
            }
            _ = tokio::time::sleep(interval) => {
                let frame =
                    render::call_frame(monitor.latest().as_ref(), monitor.last_error().as_deref());
                render::frame_if_changed(&mut last_frame, frame);
            }
        }
    }

    match monitor.latest() {
        Some(snapshot) => render::call_status(&snapshot),
        None => render::watch_ended_without_data(monitor.last_error().as_deref()),
    }
    Ok(())
}

/// Stop a monitor that may have already wound itself down
async fn stop_quietly(monitor: &mut LiveCallMonitor) -> anyhow::Result<()> {
    match monitor.stop().await {
        Ok(()) | Err(SchedulerError::NotRunning) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
