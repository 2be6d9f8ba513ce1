//! Interactive REPL for conversation modes

pub mod repl;

pub use repl::{AssistantRepl, ReplMode};
