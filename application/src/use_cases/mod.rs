//! Use cases: the operations front-ends invoke
//!
//! - [`resolve_inquiry`]: the draft-then-review pipeline behind every surface
//! - [`relay_update`]: the Telegram webhook's background relay
//! - [`voice_turn`]: one listen/resolve/speak cycle for the voice front-end

pub mod relay_update;
pub mod resolve_inquiry;
pub mod voice_turn;
