//! Flow layout of mixed text and image content
//!
//! `layout()` turns a token stream into wrapped lines of a [`LayoutBlock`];
//! [`Feed`] stacks blocks and animates older ones out of the way when a new
//! one is inserted.

mod feed;
mod flow;
mod measure;

pub use feed::{EntryId, EntryMeta, Feed, FeedEntry, Side};
pub use flow::layout;
pub use measure::{MonospaceMeasure, TextMeasure};

/// One unit of flowable content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowToken {
    Text(String),
    /// Inline image referenced by its source id
    Image(String),
}

impl FlowToken {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn image(id: impl Into<String>) -> Self {
        Self::Image(id.into())
    }
}

/// Token placed within its block
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedToken {
    pub token: FlowToken,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine {
    pub tokens: Vec<PlacedToken>,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LaidOutLine {
    fn new(y: f64, height: f64) -> Self {
        Self {
            tokens: Vec::new(),
            y,
            width: 0.0,
            height,
        }
    }
}

/// Laid-out content of one message; immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBlock {
    pub lines: Vec<LaidOutLine>,
    /// Widest line
    pub width: f64,
    pub height: f64,
}

impl LayoutBlock {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Plain text of every line, images shown as `{id}`
    pub fn line_texts(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.tokens
                    .iter()
                    .map(|placed| match &placed.token {
                        FlowToken::Text(text) => text.clone(),
                        FlowToken::Image(id) => format!("{{{id}}}"),
                    })
                    .collect::<String>()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyle {
    pub max_line_width: f64,
    pub line_height: f64,
    /// Square footprint of an inline image
    pub image_size: f64,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            max_line_width: 300.0,
            line_height: 24.0,
            image_size: 24.0,
        }
    }
}
