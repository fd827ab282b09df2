use ratatui::style::Color;

/// Runtime theme: a base palette plus the colors each scene paints with
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Palette colors
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub aqua: Color,
    pub blue: Color,
    pub purple: Color,

    // Semantic colors
    pub card_face: Color,
    pub card_edge: Color,
    pub card_in_flight: Color,
    pub bubble_left: Color,
    pub bubble_right: Color,
    pub speaker: Color,
    pub emoji: Color,
    pub flame_hot: Color,
    pub flame_warm: Color,
    pub flame_cool: Color,
    pub campfire: Color,
    pub title: Color,
    pub error: Color,
    pub info: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::load_theme("gruvbox-dark")
    }
}

impl Theme {
    /// Flame color for a particle at the given opacity
    pub fn flame(&self, alpha: f64) -> Color {
        if alpha > 0.66 {
            self.flame_hot
        } else if alpha > 0.33 {
            self.flame_warm
        } else {
            self.flame_cool
        }
    }
}
