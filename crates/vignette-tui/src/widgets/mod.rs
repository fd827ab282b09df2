mod cards;
mod chat;
mod fire;
mod popup;
mod scene;
mod status_bar;

pub use cards::CardsWidget;
pub use chat::ChatWidget;
pub use fire::FireWidget;
pub use popup::PopupWidget;
pub use scene::SceneWidget;
pub use status_bar::StatusBarWidget;
