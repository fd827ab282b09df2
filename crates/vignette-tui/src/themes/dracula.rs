//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Dracula default theme
pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36), // Background
        bg1: Color::Rgb(0x21, 0x22, 0x2c), // Current Line (darker)
        bg2: Color::Rgb(0x44, 0x47, 0x5a), // Selection
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2), // Foreground
        fg1: Color::Rgb(0xe9, 0xe9, 0xea),
        grey0: Color::Rgb(0x62, 0x72, 0xa4), // Comment
        grey1: Color::Rgb(0x7a, 0x7c, 0x8d),
        red: Color::Rgb(0xff, 0x55, 0x55),
        orange: Color::Rgb(0xff, 0xb8, 0x6c),
        yellow: Color::Rgb(0xf1, 0xfa, 0x8c),
        green: Color::Rgb(0x50, 0xfa, 0x7b),
        aqua: Color::Rgb(0x8b, 0xe9, 0xfd),   // Cyan
        blue: Color::Rgb(0xbd, 0x93, 0xf9),   // Purple (used as blue)
        purple: Color::Rgb(0xff, 0x79, 0xc6), // Pink
        card_face: Color::Rgb(0xf8, 0xf8, 0xf2),
        card_edge: Color::Rgb(0x62, 0x72, 0xa4),
        card_in_flight: Color::Rgb(0xff, 0x79, 0xc6),
        bubble_left: Color::Rgb(0x44, 0x47, 0x5a),
        bubble_right: Color::Rgb(0x21, 0x22, 0x2c),
        speaker: Color::Rgb(0xbd, 0x93, 0xf9),
        emoji: Color::Rgb(0xf1, 0xfa, 0x8c),
        flame_hot: Color::Rgb(0xf1, 0xfa, 0x8c),
        flame_warm: Color::Rgb(0xff, 0xb8, 0x6c),
        flame_cool: Color::Rgb(0xff, 0x55, 0x55),
        campfire: Color::Rgb(0x62, 0x72, 0xa4),
        title: Color::Rgb(0xf8, 0xf8, 0xf2),
        error: Color::Rgb(0xff, 0x55, 0x55),
        info: Color::Rgb(0x8b, 0xe9, 0xfd),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
    }
}
