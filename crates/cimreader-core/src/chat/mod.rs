//! Chat transcript domain types.

mod message;

pub use message::{ChatAuthor, ChatMessage};
