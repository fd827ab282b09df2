use ratatui::{buffer::Buffer, style::Style};
use vignette_core::scene::FireScene;
use vignette_core::Point;

use crate::theme::Theme;
use crate::viewport::Viewport;

/// Glyph for a particle by remaining opacity
fn flame_glyph(alpha: f64) -> &'static str {
    match alpha {
        a if a > 0.75 => "@",
        a if a > 0.5 => "*",
        a if a > 0.25 => "+",
        _ => ".",
    }
}

pub struct FireWidget;

impl FireWidget {
    pub fn render(buf: &mut Buffer, viewport: &Viewport, scene: &FireScene, theme: &Theme) {
        let campfire = scene.campfire();
        let logs = "═╩═╩═";
        if let Some((x, y)) = viewport.to_cell(Point::new(campfire.x, campfire.y)) {
            let x = x.saturating_sub(logs.chars().count() as u16 / 2);
            let inner = viewport.inner();
            if x < inner.right() {
                buf.set_stringn(
                    x,
                    y,
                    logs,
                    (inner.right() - x) as usize,
                    Style::default().fg(theme.campfire),
                );
            }
        }

        // Oldest particles first so fresh bright ones stay on top
        let mut particles: Vec<_> = scene.particles().collect();
        particles.sort_by(|a, b| a.alpha.total_cmp(&b.alpha));
        for particle in particles {
            let Some((x, y)) = viewport.to_cell(particle.position) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(flame_glyph(particle.alpha))
                    .set_fg(theme.flame(particle.alpha));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use vignette_core::config::FireConfig;

    use super::*;

    #[test]
    fn test_glyphs_fade() {
        assert_eq!(flame_glyph(1.0), "@");
        assert_eq!(flame_glyph(0.6), "*");
        assert_eq!(flame_glyph(0.3), "+");
        assert_eq!(flame_glyph(0.0), ".");
    }

    #[test]
    fn test_renders_campfire_and_flames() {
        let mut scene = FireScene::new(&FireConfig {
            seed: Some(11),
            ..FireConfig::default()
        })
        .unwrap();
        for _ in 0..5 {
            scene.spawn_particle();
        }
        let area = Rect::new(0, 0, 120, 34);
        let viewport = Viewport::new(area);
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);

        FireWidget::render(&mut buf, &viewport, &scene, &theme);

        // Campfire (600, 400) lands on row 20
        let row: String = (0..120).map(|x| buf[(x, 20)].symbol().to_string()).collect();
        assert!(row.contains("═╩═╩═"));
        // Fresh particles are fully opaque
        assert!(buf.content().iter().any(|cell| cell.symbol() == "@"));
    }
}
