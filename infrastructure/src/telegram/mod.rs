//! Telegram Bot API adapter

mod api;

pub use api::TelegramApi;
