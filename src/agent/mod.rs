pub mod client;
pub mod interface;

pub use client::HttpChatAgent;
pub use interface::{AgentRequest, ChatAgent, PIVOT_LANG};
