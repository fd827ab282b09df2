use tracing::info;

use super::{CardsScene, ChatScene, FireScene, Scene, SceneKind};
use crate::config::AppConfig;
use crate::dialogue::ChatData;
use crate::Result;

/// The one scene currently running
#[derive(Debug)]
pub enum ActiveScene {
    Cards(CardsScene),
    Chat(ChatScene),
    Fire(FireScene),
}

impl ActiveScene {
    fn as_scene(&self) -> &dyn Scene {
        match self {
            ActiveScene::Cards(scene) => scene,
            ActiveScene::Chat(scene) => scene,
            ActiveScene::Fire(scene) => scene,
        }
    }

    fn as_scene_mut(&mut self) -> &mut dyn Scene {
        match self {
            ActiveScene::Cards(scene) => scene,
            ActiveScene::Chat(scene) => scene,
            ActiveScene::Fire(scene) => scene,
        }
    }
}

impl Scene for ActiveScene {
    fn kind(&self) -> SceneKind {
        self.as_scene().kind()
    }

    fn title_scale(&self) -> f64 {
        self.as_scene().title_scale()
    }

    fn advance(&mut self, delta: f64) {
        self.as_scene_mut().advance(delta);
    }

    fn dispose(&mut self) {
        self.as_scene_mut().dispose();
    }

    fn is_disposed(&self) -> bool {
        self.as_scene().is_disposed()
    }
}

/// Owns the active scene and swaps it on request
///
/// The previous scene is disposed before the next one is built, so no
/// tween, timer or entity outlives a switch.
#[derive(Debug)]
pub struct SceneManager {
    config: AppConfig,
    chat_data: ChatData,
    active: Option<ActiveScene>,
}

impl SceneManager {
    pub fn new(config: AppConfig, chat_data: ChatData) -> Self {
        Self {
            config,
            chat_data,
            active: None,
        }
    }

    pub fn change_scene(&mut self, kind: SceneKind) -> Result<()> {
        if let Some(mut previous) = self.active.take() {
            previous.dispose();
            info!("Disposed scene: {}", previous.kind());
        }

        let scene = match kind {
            SceneKind::Cards => ActiveScene::Cards(CardsScene::new(&self.config.cards)?),
            SceneKind::Chat => {
                ActiveScene::Chat(ChatScene::new(&self.config.chat, self.chat_data.clone())?)
            }
            SceneKind::Fire => ActiveScene::Fire(FireScene::new(&self.config.fire)?),
        };
        info!("Switched to scene: {} ({})", kind, kind.title());
        self.active = Some(scene);
        Ok(())
    }

    /// Move on to the following scene in menu order
    pub fn next_scene(&mut self) -> Result<()> {
        let next = self.current_kind().map_or(SceneKind::default(), SceneKind::next);
        self.change_scene(next)
    }

    pub fn active(&self) -> Option<&ActiveScene> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveScene> {
        self.active.as_mut()
    }

    pub fn current_kind(&self) -> Option<SceneKind> {
        self.active.as_ref().map(Scene::kind)
    }

    /// Step the active scene
    pub fn advance(&mut self, delta: f64) {
        if let Some(scene) = self.active.as_mut() {
            scene.advance(delta);
        }
    }

    /// Dispose the active scene and leave nothing running
    pub fn dispose(&mut self) {
        if let Some(mut scene) = self.active.take() {
            scene.dispose();
        }
    }

    pub fn chat_data(&self) -> &ChatData {
        &self.chat_data
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
