mod chat;
mod health;
mod root;
mod transcribe;

pub use chat::{ChatRequest, ChatResponse, ErrorResponse, chat_handler};
pub use health::health_handler;
pub use root::root_handler;
pub use transcribe::{TranscribeResponse, transcribe_handler};
