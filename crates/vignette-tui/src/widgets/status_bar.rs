use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;
use vignette_core::scene::ActiveScene;
use vignette_core::Scene;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            Self::scene_summary(app)
        };

        let help_hint = match app.mode {
            Mode::Help => " any key: close ",
            Mode::Normal => " q:quit 1/2/3:scene tab:next +/-:speed ?:help ",
        };
        let used = status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn scene_summary(app: &App) -> String {
        let fps = app.fps.fps();
        match app.current_scene() {
            Some(ActiveScene::Cards(cards)) => format!(
                " {} | FPS: {} | Interval: {}ms | In flight: {}",
                cards.title(),
                fps,
                cards.interval_ms(),
                cards.cards_in_flight()
            ),
            Some(ActiveScene::Chat(chat)) => format!(
                " {} | FPS: {} | Lines: {}/{}",
                chat.title(),
                fps,
                chat.shown(),
                chat.data().dialogue.len()
            ),
            Some(ActiveScene::Fire(fire)) => format!(
                " {} | FPS: {} | Particles: {}/{}",
                fire.title(),
                fps,
                fire.particle_count(),
                fire.capacity()
            ),
            None => format!(" FPS: {}", fps),
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use vignette_core::{AppConfig, ChatData};

    use super::*;
    use crate::theme::Theme;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal
            .draw(|frame| StatusBarWidget::render(frame, frame.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..120).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_shows_scene_summary() {
        let app = App::new(AppConfig::default(), ChatData::fallback(), Theme::default()).unwrap();
        let text = rendered(&app);
        assert!(text.contains("Ace of Shadows"));
        assert!(text.contains("Interval: 1000ms"));
        assert!(text.contains("?:help"));
    }

    #[test]
    fn test_status_message_wins() {
        let mut app =
            App::new(AppConfig::default(), ChatData::fallback(), Theme::default()).unwrap();
        app.set_status("Card interval: 800ms");
        assert!(rendered(&app).contains("Card interval: 800ms"));
    }
}
