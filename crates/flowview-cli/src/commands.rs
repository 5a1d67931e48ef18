pub mod parse;
pub mod review;
pub mod supervisor;

use anyhow::{bail, Result};
use flowview::errors::OrchestratorError;
use flowview::models::message::Message;
use flowview::workflow::{extract_transitions, parse_transcript};

use crate::render::Renderer;

const GENERIC_FAILURE: &str = "An error occurred while processing your request";

/// Output options shared by every command
pub struct Output {
    pub renderer: Renderer,
    pub json: bool,
}

impl Output {
    pub fn show(&self, messages: &[Message]) -> Result<()> {
        let workflow = parse_transcript(messages);
        let transitions = extract_transitions(messages);
        tracing::debug!(
            steps = workflow.steps.len(),
            transitions = transitions.len(),
            "rendering workflow"
        );

        if self.json {
            self.renderer.print_json(&workflow, &transitions)
        } else {
            self.renderer.print_workflow(&workflow, &transitions)
        }
    }
}

/// Orchestrator failures are logged in full but reported to the user generically
fn request_failed(err: OrchestratorError) -> Result<()> {
    tracing::error!(error = %err, "orchestrator request failed");
    bail!(GENERIC_FAILURE)
}
