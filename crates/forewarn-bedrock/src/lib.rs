//! forewarn-bedrock
//!
//! Bedrock model invocation: diagnosis narrative generation and the
//! consulting chat. Callers talk to the [`NarrativeGenerator`] trait so that
//! tests can substitute a scripted generator for the real client.

pub mod chat;
pub mod client;
pub mod error;
pub mod narrative;
pub mod prompt;

pub use chat::{consult, ChatContext, ChatMessage, ChatRole};
pub use error::BedrockError;
pub use narrative::{
    generate_diagnosis_narrative, BedrockGenerator, GenerationParams, NarrativeGenerator,
};
