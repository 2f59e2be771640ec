//! Agent and phone-number directory lookups.

use calldeck_domain::NumberType;

use crate::context::AppContext;
use crate::render;

/// List the calling agents configured on the backend
pub async fn list_agents(context: &AppContext) -> anyhow::Result<()> {
    let agents = context.directory.agents().await?;
    render::agents(&agents);
    Ok(())
}

/// List saved phone numbers, optionally narrowed to one kind
pub async fn list_numbers(context: &AppContext, kind: Option<NumberType>) -> anyhow::Result<()> {
    let numbers = context.directory.phone_numbers(kind).await?;
    render::numbers(&numbers);
    Ok(())
}
