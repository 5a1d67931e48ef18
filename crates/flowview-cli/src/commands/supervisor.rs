use std::path::PathBuf;

use anyhow::Result;
use cliclack::spinner;
use flowview::client::{Attachment, OrchestratorClient};

use super::{request_failed, Output};

pub async fn execute(
    client: &OrchestratorClient,
    content: String,
    file: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let attachment = match file.as_deref().map(Attachment::from_path).transpose() {
        Ok(attachment) => attachment,
        Err(err) => return request_failed(err),
    };

    let spin = (!output.json).then(spinner);
    if let Some(spin) = &spin {
        spin.start("waiting for the supervisor");
    }

    let result = client.submit(&content, attachment).await;

    if let Some(spin) = spin {
        spin.stop("");
    }

    match result {
        Ok(messages) => output.show(&messages),
        Err(err) => request_failed(err),
    }
}
