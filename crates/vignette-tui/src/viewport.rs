//! Mapping from scene root space onto terminal cells
//!
//! The scene is letterboxed into the available area. A terminal cell is
//! roughly twice as tall as it is wide, so one row covers twice the scene
//! units of one column.

use ratatui::layout::Rect;
use vignette_core::geometry::{SCENE_HEIGHT, SCENE_WIDTH};
use vignette_core::Point;

const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Cells actually covered by the scene
    inner: Rect,
    /// Scene units per column
    unit_x: f64,
    /// Scene units per row
    unit_y: f64,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        if area.width == 0 || area.height == 0 {
            return Self {
                inner: Rect::new(area.x, area.y, 0, 0),
                unit_x: f64::INFINITY,
                unit_y: f64::INFINITY,
            };
        }

        let unit_x = (SCENE_WIDTH / area.width as f64)
            .max(SCENE_HEIGHT / (area.height as f64 * CELL_ASPECT));
        let unit_y = unit_x * CELL_ASPECT;

        let cols = ((SCENE_WIDTH / unit_x).round() as u16).min(area.width);
        let rows = ((SCENE_HEIGHT / unit_y).round() as u16).min(area.height);
        let inner = Rect::new(
            area.x + (area.width - cols) / 2,
            area.y + (area.height - rows) / 2,
            cols,
            rows,
        );

        Self {
            inner,
            unit_x,
            unit_y,
        }
    }

    /// Cells covered by the scene
    pub fn inner(&self) -> Rect {
        self.inner
    }

    /// Terminal cell holding a root-space point, if it is on screen
    pub fn to_cell(&self, point: Point) -> Option<(u16, u16)> {
        if !point.x.is_finite() || !point.y.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.unit_x).floor();
        let row = (point.y / self.unit_y).floor();
        if col >= self.inner.width as f64 || row >= self.inner.height as f64 {
            return None;
        }
        Some((self.inner.x + col as u16, self.inner.y + row as u16))
    }

    /// Horizontal scene length in columns, at least one
    pub fn columns(&self, length: f64) -> u16 {
        ((length / self.unit_x).round() as u16).max(1)
    }

    /// Vertical scene length in rows, at least one
    pub fn rows(&self, length: f64) -> u16 {
        ((length / self.unit_y).round() as u16).max(1)
    }
}
