//! These models represent the objects passed between the orchestrator and the workflow view
//!
//! There are two related shapes we need to deal with:
//! - transcript messages, as returned by the orchestrator (see `wire` for the adapters)
//! - workflow steps, the grouped view we render for the user
//!
//! Wire documents are converted into [`message::Message`] as soon as they are received, so
//! the workflow code only ever sees the normalized form.
pub mod message;
pub mod step;
pub mod tool;
