use anyhow::Result;
use cimreader_application::HistoryList;
use tokio_util::sync::CancellationToken;

use super::surface;
use crate::context::AppContext;

fn history(ctx: &AppContext) -> HistoryList {
    HistoryList::new(
        ctx.gateway.clone(),
        ctx.sessions.clone(),
        ctx.notifier.clone(),
    )
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    let history = history(ctx);
    history
        .load(&CancellationToken::new())
        .await
        .map_err(surface)?;

    let records = history.records();
    if records.is_empty() {
        println!("No summaries yet. Upload a CIM to get started!");
        return Ok(());
    }

    for record in records {
        println!(
            "{}  {}  {}",
            record.id,
            record.created_at.as_deref().unwrap_or("-"),
            record.title
        );
        println!("    {}", record.artifact_url);
    }
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: &str) -> Result<()> {
    let history = history(ctx);
    history
        .remove(id, &CancellationToken::new())
        .await
        .map_err(surface)?;
    println!("Deleted {id}");
    Ok(())
}
