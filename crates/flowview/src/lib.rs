pub mod agents;
pub mod client;
pub mod errors;
pub mod models;
pub mod wire;
pub mod workflow;
