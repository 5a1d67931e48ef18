//! Reconstruction of workflow steps from a multi-agent transcript
//!
//! The parser and the transition extractor are independent passes over the same normalized
//! transcript. Both are pure: every call derives its result from the messages it is given
//! and nothing is carried between calls.
pub mod arguments;
pub mod attribution;
pub mod parser;
pub mod transitions;

pub use arguments::decode_arguments;
pub use attribution::{agent_for, AgentResolver, TransferPrefix, HANDOFF_PREFIX, ROOT_AGENT};
pub use parser::{final_response, parse_transcript, TranscriptParser};
pub use transitions::{extract_transitions, Transition, TransitionExtractor};
