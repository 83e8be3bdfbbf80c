pub mod chat_relay;
pub mod types;

pub use chat_relay::ChatRelay;
pub use types::{ChatReply, ChatRequest};
