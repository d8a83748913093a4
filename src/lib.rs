//! Financial Document Crew
//!
//! A prompt-driven agent crew for financial document analysis:
//! - Loads a PDF report into normalized plain text
//! - Configures four agents (analyst, verifier, advisor, risk assessor)
//! - Binds four static task templates to those agents
//! - Renders prompts and hands them to an external LLM sequentially
//!
//! All analytical reasoning is delegated to the LLM provider. This crate
//! owns configuration, document loading, prompt rendering, and two
//! pass-through text tools.
//!
//! PIPELINE:
//! LOAD PDF → RENDER TASK PROMPTS → CALL LLM PER TASK → COLLECT OUTPUTS

pub mod agents;
pub mod config;
pub mod crew;
pub mod error;
pub mod llm;
pub mod loader;
pub mod tasks;
pub mod template;
pub mod tools;

pub use error::Result;

// Re-export common types
pub use agents::{AgentRoster, AgentSpec};
pub use config::LlmConfig;
pub use crew::{Crew, CrewOutput, TaskOutput};
pub use tasks::TaskSpec;
