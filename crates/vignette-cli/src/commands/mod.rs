pub mod config;
pub mod dialogue;
pub mod run;
pub mod simulate;

use std::time::Duration;

use vignette_core::{fetch_chat_data, AppConfig, ChatData};

/// Dialogue for the chat scene, or the built-in set when offline
pub async fn load_chat_data(config: &AppConfig, offline: bool) -> ChatData {
    if offline {
        tracing::info!("Offline mode, using built-in dialogue");
        return ChatData::fallback();
    }
    fetch_chat_data(
        &config.chat.data_uri,
        Duration::from_secs(config.chat.fetch_timeout_secs),
    )
    .await
}
