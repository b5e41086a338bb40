// src/viewport.rs

use crate::config::ZoomConfig;

/// Fixed horizontal extent of the content grid, in time columns.
pub const TOTAL_COLUMNS: u32 = 1000;
/// One row per MIDI pitch.
pub const PITCH_ROWS: u32 = 128;

/// Current time/pitch scale and scroll offset of the piano roll.
///
/// Scroll offsets are zero or negative: the content slides left/up under a
/// fixed viewport, and the clamp keeps the viewport inside the content
/// bounds at all times. All mutation goes through the methods here so the
/// invariants hold after every gesture.
#[derive(Debug, Clone)]
pub struct ViewportState {
    row_height: f32,
    col_width: f32,
    scroll_x: f32,
    scroll_y: f32,
    view_width: f32,
    view_height: f32,
    min_row_height: f32,
    min_col_width: f32,
}

impl ViewportState {
    pub fn new(zoom: &ZoomConfig, view_width: f32, view_height: f32) -> Self {
        ViewportState {
            row_height: zoom.initial_row_height.max(zoom.min_row_height),
            col_width: zoom.initial_col_width.max(zoom.min_col_width),
            scroll_x: 0.0,
            scroll_y: 0.0,
            view_width,
            view_height,
            min_row_height: zoom.min_row_height,
            min_col_width: zoom.min_col_width,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn col_width(&self) -> f32 {
        self.col_width
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    /// Full scrollable width at the current scale.
    pub fn content_width(&self) -> f32 {
        self.col_width * TOTAL_COLUMNS as f32
    }

    /// Full scrollable height at the current scale.
    pub fn content_height(&self) -> f32 {
        self.row_height * PITCH_ROWS as f32
    }

    /// Adjust the vertical scale, clamped to the configured minimum.
    /// Scroll is re-clamped because shrinking content can strand the
    /// current offset outside the new bounds.
    pub fn zoom_rows(&mut self, delta: f32) {
        let target = self.row_height + delta;
        if target < self.min_row_height {
            log::debug!(
                "row height {:.2} clamped to minimum {:.2}",
                target,
                self.min_row_height
            );
        }
        self.row_height = target.max(self.min_row_height);
        self.clamp_scroll();
    }

    /// Adjust the horizontal scale, clamped to the configured minimum.
    pub fn zoom_cols(&mut self, delta: f32) {
        let target = self.col_width + delta;
        if target < self.min_col_width {
            log::debug!(
                "column width {:.2} clamped to minimum {:.2}",
                target,
                self.min_col_width
            );
        }
        self.col_width = target.max(self.min_col_width);
        self.clamp_scroll();
    }

    /// Pan by a wheel delta. Positive deltas scroll content left/up.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_x -= delta_x;
        self.scroll_y -= delta_y;
        self.clamp_scroll();
    }

    /// Record a new viewport pixel size and re-clamp the scroll against it.
    /// Content geometry is untouched; only the visible clip changes.
    pub fn set_view_size(&mut self, width: f32, height: f32) {
        self.view_width = width;
        self.view_height = height;
        self.clamp_scroll();
    }

    /// Restore `scroll ∈ [-(content - view), 0]` on both axes. When the
    /// content is smaller than the view the range collapses to [0, 0].
    fn clamp_scroll(&mut self) {
        let min_x = -(self.content_width() - self.view_width).max(0.0);
        let min_y = -(self.content_height() - self.view_height).max(0.0);
        self.scroll_x = self.scroll_x.clamp(min_x, 0.0);
        self.scroll_y = self.scroll_y.clamp(min_y, 0.0);
    }
}
