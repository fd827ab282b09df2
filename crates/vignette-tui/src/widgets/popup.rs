use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::keymap::Keymap;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overlay
    pub fn render_help(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let area = frame.area();
        let hints = keymap.hints();

        let popup_width = 40u16.min(area.width.saturating_sub(4));
        let popup_height = (hints.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = hints
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", key),
                        Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*description, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(theme.grey1),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }

    /// Render a small box while something loads
    pub fn render_loading(frame: &mut Frame, message: &str, theme: &Theme) {
        let area = frame.area();

        let popup_width = (message.chars().count() as u16 + 6).min(area.width.saturating_sub(2));
        let popup_height = 3u16.min(area.height);
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.info))
            .style(Style::default().bg(theme.bg1));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(paragraph, popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
        let clipped = centered_rect(50, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(clipped.width, 30);
    }

    #[test]
    fn test_help_lists_bindings() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let keymap = Keymap::default();
        let theme = Theme::default();
        terminal
            .draw(|frame| PopupWidget::render_help(frame, &keymap, &theme))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Keys"));
        assert!(text.contains("Phoenix Flame"));
        assert!(text.contains("<Tab>"));
    }

    #[test]
    fn test_loading_message() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| PopupWidget::render_loading(frame, "Fetching dialogue", &theme))
            .unwrap();
        assert!(screen_text(&terminal).contains("Fetching dialogue"));
    }
}
