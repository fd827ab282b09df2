use std::time::Instant;

use anyhow::Result;
use tracing::debug;
use vignette_core::scene::ActiveScene;
use vignette_core::{AppConfig, ChatData, SceneKind, SceneManager};

use crate::fps::FpsCounter;
use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
}

/// Application state
pub struct App {
    pub manager: SceneManager,
    pub theme: Theme,
    pub keymap: Keymap,
    pub mode: Mode,
    pub should_quit: bool,
    pub fps: FpsCounter,
    pub status_message: Option<String>,
}

impl App {
    /// Build the app and start the configured scene
    pub fn new(config: AppConfig, chat_data: ChatData, theme: Theme) -> Result<Self> {
        let keymap = Keymap::from_config(&config.keymap);
        let start_scene = config.ui.start_scene;

        let mut manager = SceneManager::new(config, chat_data);
        manager.change_scene(start_scene)?;

        Ok(Self {
            manager,
            theme,
            keymap,
            mode: Mode::Normal,
            should_quit: false,
            fps: FpsCounter::new(),
            status_message: None,
        })
    }

    pub fn config(&self) -> &AppConfig {
        self.manager.config()
    }

    pub fn current_scene(&self) -> Option<&ActiveScene> {
        self.manager.active()
    }

    pub fn current_kind(&self) -> Option<SceneKind> {
        self.manager.current_kind()
    }

    /// Advance the running scene by `delta` seconds
    pub fn tick(&mut self, delta: f64) {
        self.manager.advance(delta);
    }

    /// Note that a frame was drawn
    pub fn frame_drawn(&mut self, now: Instant) {
        self.fps.record(now);
    }

    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        debug!("Action: {:?}", action);
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowScene(kind) => {
                self.manager.change_scene(kind)?;
                self.clear_status();
            }
            Action::NextScene => {
                self.manager.next_scene()?;
                self.clear_status();
            }
            Action::Faster => self.change_speed(true),
            Action::Slower => self.change_speed(false),
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                };
            }
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
        Ok(())
    }

    fn change_speed(&mut self, faster: bool) {
        let Some(ActiveScene::Cards(cards)) = self.manager.active_mut() else {
            self.set_status("Speed only applies to Ace of Shadows");
            return;
        };

        let changed = if faster { cards.faster() } else { cards.slower() };
        let interval = cards.interval_ms();
        if changed {
            self.set_status(format!("Card interval: {}ms", interval));
        } else {
            self.set_status(format!("Card interval stays at {}ms (limit)", interval));
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Stop the running scene before exit
    pub fn shutdown(&mut self) {
        self.manager.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.fire.seed = Some(1);
        App::new(config, ChatData::fallback(), Theme::default()).unwrap()
    }

    #[test]
    fn test_starts_configured_scene() {
        let mut config = AppConfig::default();
        config.ui.start_scene = SceneKind::Fire;
        let app = App::new(config, ChatData::fallback(), Theme::default()).unwrap();
        assert_eq!(app.current_kind(), Some(SceneKind::Fire));
    }

    #[test]
    fn test_scene_actions() {
        let mut app = app();
        assert_eq!(app.current_kind(), Some(SceneKind::Cards));

        app.handle_action(Action::ShowScene(SceneKind::Chat)).unwrap();
        assert_eq!(app.current_kind(), Some(SceneKind::Chat));

        app.handle_action(Action::NextScene).unwrap();
        assert_eq!(app.current_kind(), Some(SceneKind::Fire));
    }

    #[test]
    fn test_speed_actions() {
        let mut app = app();
        app.handle_action(Action::Faster).unwrap();
        match app.current_scene() {
            Some(ActiveScene::Cards(cards)) => assert_eq!(cards.interval_ms(), 800),
            _ => panic!("cards scene expected"),
        }
        assert_eq!(app.status_message.as_deref(), Some("Card interval: 800ms"));

        app.handle_action(Action::ShowScene(SceneKind::Fire)).unwrap();
        app.handle_action(Action::Slower).unwrap();
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_help_toggle_and_quit() {
        let mut app = app();
        app.handle_action(Action::ToggleHelp).unwrap();
        assert_eq!(app.mode, Mode::Help);
        app.handle_action(Action::ExitMode).unwrap();
        assert_eq!(app.mode, Mode::Normal);

        app.handle_action(Action::Quit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_advances_scene() {
        let mut app = app();
        app.tick(1.0);
        match app.current_scene() {
            Some(ActiveScene::Cards(cards)) => assert_eq!(cards.moves(), 1),
            _ => panic!("cards scene expected"),
        }
    }
}
