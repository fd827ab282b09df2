mod fetcher;
mod models;
mod parser;

pub use fetcher::{fetch_chat_data, ChatFetcher};
pub use models::{Avatar, ChatData, DialogueLine, Emoji};
pub use parser::tokenize;
