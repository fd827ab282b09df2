use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};
use vignette_core::scene::ActiveScene;
use vignette_core::{Point, Scene};

use super::{CardsWidget, ChatWidget, FireWidget};
use crate::app::App;
use crate::theme::Theme;
use crate::viewport::Viewport;

/// Where every scene prints its title, in root space
pub const TITLE_POSITION: Point = Point { x: 10.0, y: 610.0 };

pub struct SceneWidget;

impl SceneWidget {
    /// Paint the active scene letterboxed into `area`
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let Some(scene) = app.current_scene() else {
            return;
        };
        let viewport = Viewport::new(area);
        let buf = frame.buffer_mut();

        match scene {
            ActiveScene::Cards(cards) => CardsWidget::render(buf, &viewport, cards, theme),
            ActiveScene::Chat(chat) => ChatWidget::render(buf, &viewport, chat, theme),
            ActiveScene::Fire(fire) => FireWidget::render(buf, &viewport, fire, theme),
        }

        if let Some((x, y)) = viewport.to_cell(TITLE_POSITION) {
            let inner = viewport.inner();
            buf.set_stringn(
                x,
                y,
                scene.title(),
                (inner.right() - x) as usize,
                title_style(scene.title_scale(), theme),
            );
        }
    }
}

/// Cells cannot scale, so the pulse swells to bold and shrinks to dim
pub fn title_style(scale: f64, theme: &Theme) -> Style {
    let style = Style::default().fg(theme.title);
    if scale >= 1.0 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style.add_modifier(Modifier::DIM)
    }
}
