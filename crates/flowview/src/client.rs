pub mod config;
pub mod orchestrator;

pub use config::OrchestratorConfig;
pub use orchestrator::{Attachment, OrchestratorClient, ReviewReply};
