mod artifact_stem;
mod chat_command;
mod lip_sync_document;
mod reply_message;
mod scripted_line;
mod ticker;

pub use artifact_stem::{ArtifactKind, ArtifactStem};
pub use chat_command::ChatCommand;
pub use lip_sync_document::LipSyncDocument;
pub use reply_message::ReplyMessage;
pub use scripted_line::ScriptedLine;
pub use ticker::{Ticker, TickerError};
