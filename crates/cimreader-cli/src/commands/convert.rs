use std::path::Path;

use anyhow::{Context, Result};
use cimreader_application::ConversionWorkflow;
use cimreader_core::SelectedFile;
use tokio_util::sync::CancellationToken;

use super::surface;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, path: &Path, chat: bool) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    let media_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    let workflow = ConversionWorkflow::new(
        ctx.gateway.clone(),
        ctx.sessions.clone(),
        ctx.notifier.clone(),
    );

    workflow
        .select_file(SelectedFile::new(name, media_type, bytes))
        .map_err(surface)?;

    let cancel = CancellationToken::new();
    let result = workflow.convert(&cancel).await.map_err(surface)?;

    println!("Summary ready: {}", result.artifact_url);
    println!("Document id:   {}", result.document_id);

    if chat {
        let session = workflow
            .bind_chat()
            .ok_or_else(|| anyhow::anyhow!("No conversion result to chat about"))?;
        super::chat::run_loop(&session).await?;
    }

    Ok(())
}
