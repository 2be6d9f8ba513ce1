//! Application layer for RICA
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.
//!
//! Every front-end normalizes its transport-specific input into an
//! [`Inquiry`](rica_domain::Inquiry), hands it to a use case here, and
//! renders the resulting [`Resolution`](rica_domain::Resolution) back out.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolverSettings;
pub use ports::{
    inquiry_client::{AskRequest, AskResponse, InquiryClient, InquiryClientError},
    llm_gateway::{GatewayError, LlmGateway},
    messenger::{Messenger, MessengerError},
    speech::{SpeechError, SpeechRecognizer, SpeechSynthesizer},
};
pub use use_cases::relay_update::{RelayOutcome, RelayUpdateUseCase};
pub use use_cases::resolve_inquiry::{ResolveError, ResolveInquiryUseCase};
pub use use_cases::voice_turn::{VoiceTurn, VoiceTurnError, VoiceTurnUseCase};
