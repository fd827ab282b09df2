use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};
use vignette_core::scene::CardsScene;
use vignette_core::Point;

use crate::theme::Theme;
use crate::viewport::Viewport;

/// Root-space width of one card
const CARD_WIDTH: f64 = 60.0;

pub struct CardsWidget;

impl CardsWidget {
    /// Paint every card back to front, then the per-stack counters
    pub fn render(buf: &mut Buffer, viewport: &Viewport, scene: &CardsScene, theme: &Theme) {
        let width = viewport.columns(CARD_WIDTH);

        let mut cards = scene.cards();
        cards.sort_by_key(|card| card.z);
        for card in &cards {
            let left = Point::new(card.position.x - CARD_WIDTH / 2.0, card.position.y);
            let Some((x, y)) = viewport.to_cell(left).or_else(|| viewport.to_cell(card.position))
            else {
                continue;
            };

            let face = if card.in_flight {
                theme.card_in_flight
            } else {
                theme.card_face
            };
            for offset in 0..width {
                let edge = offset == 0 || offset + 1 == width;
                if let Some(cell) = buf.cell_mut((x + offset, y)) {
                    cell.set_symbol(if edge { "▐" } else { "█" })
                        .set_fg(if edge { theme.card_edge } else { face })
                        .set_bg(theme.bg0);
                }
            }
        }

        let inner = viewport.inner();
        for (origin, size) in scene.stack_positions().into_iter().zip(scene.stack_sizes()) {
            let Some((x, y)) = viewport.to_cell(origin) else {
                continue;
            };
            let label = size.to_string();
            let label_x = x.saturating_sub(label.len() as u16 / 2);
            let label_y = y + 1;
            if label_y < inner.bottom() && label_x < inner.right() {
                buf.set_stringn(
                    label_x,
                    label_y,
                    &label,
                    (inner.right() - label_x) as usize,
                    Style::default().fg(theme.grey1).add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use vignette_core::config::CardsConfig;
    use vignette_core::Scene;

    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_stacks_and_counts() {
        let scene = CardsScene::new(&CardsConfig::default()).unwrap();
        let area = Rect::new(0, 0, 120, 34);
        let viewport = Viewport::new(area);
        let mut buf = Buffer::empty(area);

        CardsWidget::render(&mut buf, &viewport, &scene, &Theme::default());

        // Source stack origin (100, 400) sits on row 20, label on row 21
        assert!(row_text(&buf, 20).contains('█'));
        assert!(row_text(&buf, 21).contains("144"));
        assert_eq!(row_text(&buf, 21).matches('0').count(), 3);
    }

    #[test]
    fn test_flying_card_uses_flight_color() {
        let mut scene = CardsScene::new(&CardsConfig::default()).unwrap();
        scene.advance(1.0);
        scene.advance(1.0);
        let area = Rect::new(0, 0, 120, 34);
        let viewport = Viewport::new(area);
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);

        CardsWidget::render(&mut buf, &viewport, &scene, &theme);

        let painted = buf.content().iter().any(|cell| cell.fg == theme.card_in_flight);
        assert!(painted);
    }
}
