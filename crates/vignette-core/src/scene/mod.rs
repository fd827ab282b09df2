//! Animated scenes and the manager switching between them
//!
//! Every scene owns its own tween scheduler, timers and entity pools. One
//! call to [`Scene::advance`] steps them in a fixed order: tweens, then
//! particles, then timers, then the handlers of the timer events that fired.
//! The title pulse steps alongside the tweens.

mod cards;
mod chat;
mod fire;
mod manager;

pub use cards::{CardView, CardsScene};
pub use chat::{ChatScene, MessageView};
pub use fire::FireScene;
pub use manager::{ActiveScene, SceneManager};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Behaviour shared by every scene
pub trait Scene {
    fn kind(&self) -> SceneKind;

    fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// Current scale of the pulsing title, around 1.0
    fn title_scale(&self) -> f64;

    /// Step the scene by `delta` seconds; a no-op once disposed
    fn advance(&mut self, delta: f64);

    /// Cancel all tweens and timers and release every entity
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    #[default]
    Cards,
    Chat,
    Fire,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [SceneKind::Cards, SceneKind::Chat, SceneKind::Fire];

    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Cards => "Ace of Shadows",
            SceneKind::Chat => "Magic Words",
            SceneKind::Fire => "Phoenix Flame",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SceneKind::Cards => "cards",
            SceneKind::Chat => "chat",
            SceneKind::Fire => "fire",
        }
    }

    /// Following scene in menu order, wrapping around
    pub fn next(self) -> SceneKind {
        match self {
            SceneKind::Cards => SceneKind::Chat,
            SceneKind::Chat => SceneKind::Fire,
            SceneKind::Fire => SceneKind::Cards,
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cards" => Ok(SceneKind::Cards),
            "chat" => Ok(SceneKind::Chat),
            "fire" => Ok(SceneKind::Fire),
            other => Err(format!(
                "Unknown scene '{}' (expected cards, chat or fire)",
                other
            )),
        }
    }
}
