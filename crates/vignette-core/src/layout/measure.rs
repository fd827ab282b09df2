use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measures rendered text width in scene units
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f64;

    fn char_width(&self, ch: char) -> f64;
}

/// Fixed-width font: every display column has the same width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f64,
}

impl MonospaceMeasure {
    pub fn new(char_width: f64) -> Self {
        Self { char_width }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> f64 {
        text.width() as f64 * self.char_width
    }

    fn char_width(&self, ch: char) -> f64 {
        ch.width().unwrap_or(0) as f64 * self.char_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_counts_columns() {
        let measure = MonospaceMeasure::new(10.0);
        assert_eq!(measure.text_width("hello "), 60.0);
        assert_eq!(measure.text_width(""), 0.0);
        // Wide CJK glyphs take two columns
        assert_eq!(measure.text_width("漢字"), 40.0);
        assert_eq!(measure.char_width('a'), 10.0);
    }
}
