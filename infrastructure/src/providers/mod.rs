//! Language-model provider adapters

mod groq;

pub use groq::GroqGateway;
