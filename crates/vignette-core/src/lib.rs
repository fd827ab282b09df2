pub mod animation;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod particles;
pub mod scene;
pub mod stack;

pub use animation::{Easing, Timers, TweenHandle, TweenScheduler};
pub use config::AppConfig;
pub use dialogue::{fetch_chat_data, ChatData};
pub use error::{Error, Result};
pub use geometry::Point;
pub use scene::{Scene, SceneKind, SceneManager};
