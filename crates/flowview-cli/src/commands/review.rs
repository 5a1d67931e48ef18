use anyhow::Result;
use cliclack::spinner;
use flowview::client::OrchestratorClient;

use super::{request_failed, Output};

pub async fn execute(client: &OrchestratorClient, text: String, output: &Output) -> Result<()> {
    let spin = (!output.json).then(spinner);
    if let Some(spin) = &spin {
        spin.start("waiting for the sentiment agent");
    }

    let result = client.review(&text).await;

    if let Some(spin) = spin {
        spin.stop("");
    }

    match result {
        Ok(reply) => {
            if let Some(session_id) = &reply.session_id {
                tracing::debug!(%session_id, history = reply.history.len(), "review reply");
            }
            output.show(&reply.transcript(text))
        }
        Err(err) => request_failed(err),
    }
}
