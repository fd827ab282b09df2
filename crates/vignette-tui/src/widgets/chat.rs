use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};
use vignette_core::layout::{FlowToken, Side};
use vignette_core::scene::{ChatScene, MessageView};
use vignette_core::Point;

use crate::theme::Theme;
use crate::viewport::Viewport;

/// Drawn in place of an inline emoji image
pub const EMOJI_MARKER: &str = "◉";
/// Drawn when a speaker has no avatar
pub const DEFAULT_AVATAR: &str = "?";

pub struct ChatWidget;

impl ChatWidget {
    pub fn render(buf: &mut Buffer, viewport: &Viewport, scene: &ChatScene, theme: &Theme) {
        for message in scene.messages() {
            render_message(buf, viewport, &message, theme);
        }
    }
}

fn render_message(buf: &mut Buffer, viewport: &Viewport, message: &MessageView<'_>, theme: &Theme) {
    let inner = viewport.inner();
    let entry = message.entry;
    let bubble = match entry.meta.side {
        Side::Left => theme.bubble_left,
        Side::Right => theme.bubble_right,
    };
    let bubble_cols = viewport.columns(entry.block.width);

    for (index, line) in entry.block.lines.iter().enumerate() {
        let line_y = message.position.y + line.y;
        let Some((x, y)) = viewport.to_cell(Point::new(message.position.x, line_y)) else {
            continue;
        };

        for dx in 0..bubble_cols {
            if x + dx >= inner.right() {
                break;
            }
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_symbol(" ").set_bg(bubble);
            }
        }

        if index == 0 {
            render_avatar(buf, x, y, entry.meta.speaker.as_str(), entry.meta.avatar.is_some(), theme);
        }

        for placed in &line.tokens {
            let Some((tx, ty)) = viewport.to_cell(Point::new(message.position.x + placed.x, line_y))
            else {
                continue;
            };
            match &placed.token {
                FlowToken::Text(text) => {
                    buf.set_stringn(
                        tx,
                        ty,
                        text,
                        (inner.right() - tx) as usize,
                        Style::default().fg(theme.fg0).bg(bubble),
                    );
                }
                FlowToken::Image(_) => {
                    if let Some(cell) = buf.cell_mut((tx, ty)) {
                        cell.set_symbol(EMOJI_MARKER).set_fg(theme.emoji).set_bg(bubble);
                    }
                }
            }
        }
    }
}

/// Speaker initial two columns left of the bubble
fn render_avatar(buf: &mut Buffer, x: u16, y: u16, speaker: &str, has_avatar: bool, theme: &Theme) {
    let Some(avatar_x) = x.checked_sub(2) else {
        return;
    };
    let initial = speaker
        .chars()
        .next()
        .filter(|_| has_avatar)
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let style = if has_avatar {
        Style::default().fg(theme.speaker).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.grey0)
    };
    if let Some(cell) = buf.cell_mut((avatar_x, y)) {
        cell.set_symbol(&initial).set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use vignette_core::config::ChatConfig;
    use vignette_core::layout::FlowToken;
    use vignette_core::ChatData;

    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_first_message_at_baseline() {
        let mut scene = ChatScene::new(&ChatConfig::default(), ChatData::fallback()).unwrap();
        scene.next_message().unwrap();
        let area = Rect::new(0, 0, 120, 34);
        let viewport = Viewport::new(area);
        let mut buf = Buffer::empty(area);

        ChatWidget::render(&mut buf, &viewport, &scene, &Theme::default());

        // Baseline 580 maps to row 29; left column 40 to column 4
        let row = row_text(&buf, 29);
        assert!(row.contains("I admit"));
        assert!(row.contains(EMOJI_MARKER));
        assert_eq!(buf[(2, 29)].symbol(), "S");
    }

    #[test]
    fn test_speaker_without_avatar_gets_placeholder() {
        let mut scene = ChatScene::new(&ChatConfig::default(), ChatData::fallback()).unwrap();
        scene
            .insert_message("Stranger", vec![FlowToken::text("hello")])
            .unwrap();
        let area = Rect::new(0, 0, 120, 34);
        let viewport = Viewport::new(area);
        let mut buf = Buffer::empty(area);

        ChatWidget::render(&mut buf, &viewport, &scene, &Theme::default());

        // Unknown speakers sit on the right at column 64
        assert!(row_text(&buf, 29).contains("hello"));
        assert_eq!(buf[(62, 29)].symbol(), DEFAULT_AVATAR);
    }
}
