//! Campaign administration: list, inspect, steer, delete.

use anyhow::bail;

use calldeck_domain::CampaignStatus;

use crate::context::AppContext;
use crate::render;

/// List all campaigns
pub async fn list(context: &AppContext) -> anyhow::Result<()> {
    let campaigns = context.campaigns.list().await?;
    render::campaigns(&campaigns);
    Ok(())
}

/// Print the full details of one campaign
pub async fn show(context: &AppContext, id: i64) -> anyhow::Result<()> {
    let campaign = context.campaigns.get(id).await?;
    render::campaign_details(&campaign);
    Ok(())
}

/// Print the aggregated statistics of one campaign
pub async fn stats(context: &AppContext, id: i64) -> anyhow::Result<()> {
    let stats = context.campaigns.stats(id).await?;
    render::campaign_stats(&stats);
    Ok(())
}

/// List the contacts of one campaign with their call status
pub async fn contacts(context: &AppContext, id: i64) -> anyhow::Result<()> {
    let contacts = context.campaigns.contacts(id).await?;
    render::campaign_contacts(&contacts);
    Ok(())
}

/// Move a campaign to a new lifecycle status.
///
/// The adapter rejects non-updatable targets before any request is sent;
/// the command tree already makes `scheduled` unrepresentable.
pub async fn set_status(
    context: &AppContext,
    id: i64,
    status: CampaignStatus,
) -> anyhow::Result<()> {
    context.campaigns.set_status(id, status).await?;
    render::status_changed(id, status);
    Ok(())
}

/// Delete a campaign and all of its contacts.
///
/// Refuses without `--yes`; there is no interactive confirmation prompt.
pub async fn delete(context: &AppContext, id: i64, yes: bool) -> anyhow::Result<()> {
    if !yes {
        bail!("deleting campaign {id} also deletes its contacts; pass --yes to confirm");
    }

    context.campaigns.delete(id).await?;
    render::campaign_deleted(id);
    Ok(())
}
