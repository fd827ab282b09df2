//! Theme registry and loader

mod dracula;
mod gruvbox;
mod nord;

use tracing::warn;

use crate::theme::Theme;

/// Load a theme by name, falling back to gruvbox-dark for unknown names
pub fn load_theme(name: &str) -> Theme {
    match name.trim().to_lowercase().as_str() {
        // Gruvbox variants
        "gruvbox-light" => gruvbox::light(),
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),

        // Dracula
        "dracula" => dracula::default(),

        // Nord
        "nord" => nord::default(),

        other => {
            warn!("Unknown theme '{}', using gruvbox-dark", other);
            gruvbox::dark()
        }
    }
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "gruvbox-light", "dracula", "nord"]
}
