pub mod models;
pub mod responder;

pub use models::{ChatMessage, ChatTranscript, Sender, GREETING, REPLY_DELAY_MS};
pub use responder::{reply, ReplyCategory};
