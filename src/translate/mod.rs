pub mod client;
pub mod interface;

pub use client::HttpTranslator;
pub use interface::{TranslateRequest, Translator};
