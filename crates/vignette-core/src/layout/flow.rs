use super::{FlowToken, LaidOutLine, LayoutBlock, LayoutStyle, PlacedToken, TextMeasure};

/// Cursor walking the block left to right, top to bottom
struct Cursor<'a> {
    style: &'a LayoutStyle,
    lines: Vec<LaidOutLine>,
    x: f64,
    y: f64,
}

impl<'a> Cursor<'a> {
    fn new(style: &'a LayoutStyle) -> Self {
        Self {
            style,
            lines: vec![LaidOutLine::new(0.0, style.line_height)],
            x: 0.0,
            y: 0.0,
        }
    }

    fn place(&mut self, token: FlowToken, width: f64) {
        if self.x > 0.0 && self.x + width > self.style.max_line_width {
            self.x = 0.0;
            self.y += self.style.line_height;
            self.lines.push(LaidOutLine::new(self.y, self.style.line_height));
        }

        let Some(line) = self.lines.last_mut() else {
            return;
        };
        line.tokens.push(PlacedToken {
            token,
            x: self.x,
            y: self.y,
            width,
        });
        self.x += width;
        line.width = self.x;
    }

    fn finish(self) -> LayoutBlock {
        let width = self.lines.iter().map(|line| line.width).fold(0.0, f64::max);
        LayoutBlock {
            lines: self.lines,
            width,
            height: self.y + self.style.line_height,
        }
    }
}

/// Lay out a token stream into wrapped lines
///
/// A token wraps to a new line when it would overflow a line that already
/// holds something. Text wider than a whole line is broken into character
/// chunks; an oversized image is placed alone on its line.
pub fn layout(tokens: &[FlowToken], style: &LayoutStyle, measure: &dyn TextMeasure) -> LayoutBlock {
    let mut cursor = Cursor::new(style);

    for token in tokens {
        match token {
            FlowToken::Text(text) => {
                let width = measure.text_width(text);
                if width > style.max_line_width && style.max_line_width > 0.0 {
                    for (chunk, chunk_width) in break_text(text, style.max_line_width, measure) {
                        cursor.place(FlowToken::Text(chunk), chunk_width);
                    }
                } else {
                    cursor.place(token.clone(), width);
                }
            }
            FlowToken::Image(_) => cursor.place(token.clone(), style.image_size),
        }
    }

    cursor.finish()
}

/// Split text into chunks no wider than `max_width`
///
/// A single character wider than the limit still gets its own chunk.
fn break_text(text: &str, max_width: f64, measure: &dyn TextMeasure) -> Vec<(String, f64)> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0.0;

    for ch in text.chars() {
        let w = measure.char_width(ch);
        if !chunk.is_empty() && chunk_width + w > max_width {
            chunks.push((std::mem::take(&mut chunk), chunk_width));
            chunk_width = 0.0;
        }
        chunk.push(ch);
        chunk_width += w;
    }
    if !chunk.is_empty() {
        chunks.push((chunk, chunk_width));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceMeasure;

    fn style() -> LayoutStyle {
        LayoutStyle {
            max_line_width: 300.0,
            line_height: 24.0,
            image_size: 24.0,
        }
    }

    /// 15 columns of 10 units: 150 wide
    fn word150() -> FlowToken {
        FlowToken::text("abcdefghijklmn ")
    }

    #[test]
    fn test_three_half_lines_wrap_once() {
        let measure = MonospaceMeasure::new(10.0);
        let block = layout(&[word150(), word150(), word150()], &style(), &measure);

        assert_eq!(block.line_count(), 2);
        assert_eq!(block.lines[0].tokens.len(), 2);
        assert_eq!(block.lines[0].width, 300.0);
        assert_eq!(block.lines[1].tokens[0].x, 0.0);
        assert_eq!(block.lines[1].y, 24.0);
        assert_eq!(block.height, 48.0);
        assert_eq!(block.width, 300.0);
    }

    #[test]
    fn test_fits_on_one_line() {
        let measure = MonospaceMeasure::new(10.0);
        let tokens = vec![
            FlowToken::text("I "),
            FlowToken::text("admit "),
            FlowToken::image("satisfied"),
            FlowToken::text(" the"),
        ];
        let block = layout(&tokens, &style(), &measure);

        assert_eq!(block.line_count(), 1);
        assert_eq!(block.height, 24.0);
        let image = &block.lines[0].tokens[2];
        assert_eq!(image.x, 80.0);
        assert_eq!(image.width, 24.0);
        assert_eq!(block.line_texts(), vec!["I admit {satisfied} the".to_string()]);
    }

    #[test]
    fn test_empty_input_is_one_line() {
        let measure = MonospaceMeasure::new(10.0);
        let block = layout(&[], &style(), &measure);
        assert_eq!(block.line_count(), 1);
        assert_eq!(block.height, 24.0);
        assert_eq!(block.width, 0.0);
    }

    #[test]
    fn test_oversized_text_is_hard_broken() {
        let measure = MonospaceMeasure::new(10.0);
        let long = FlowToken::text("x".repeat(70));
        let block = layout(&[FlowToken::text("hi "), long], &style(), &measure);

        // "hi " then 30 + 30 + 10 columns
        assert_eq!(block.line_count(), 4);
        for line in &block.lines {
            assert!(line.width <= 300.0);
        }
        assert_eq!(block.lines[3].width, 100.0);
    }

    #[test]
    fn test_oversized_image_sits_alone() {
        let measure = MonospaceMeasure::new(10.0);
        let narrow = LayoutStyle {
            max_line_width: 20.0,
            ..style()
        };
        let block = layout(
            &[FlowToken::text("a"), FlowToken::image("big"), FlowToken::text("b")],
            &narrow,
            &measure,
        );
        assert_eq!(block.line_count(), 3);
        assert_eq!(block.lines[1].tokens.len(), 1);
        assert_eq!(block.lines[1].width, 24.0);
    }

    #[test]
    fn test_wrapped_lines_respect_width() {
        let measure = MonospaceMeasure::new(10.0);
        let tokens: Vec<FlowToken> = "Translation: Sheldon likes crushing cookies but won't admit it."
            .split_inclusive(' ')
            .map(FlowToken::text)
            .collect();
        let block = layout(&tokens, &style(), &measure);

        assert!(block.line_count() > 1);
        for line in &block.lines {
            assert!(line.width <= 300.0);
        }
        assert_eq!(block.height, block.line_count() as f64 * 24.0);
    }
}
