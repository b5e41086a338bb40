// src/ui/input.rs

use glam::Vec2;

use crate::config::{LayoutConfig, ZoomConfig};
use crate::viewport::ViewportState;

/// What a wheel gesture does, decided by where the pointer sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    /// Pointer over the gutter intersection: reserved, nothing happens
    Corner,
    /// Pointer over the key gutter: wheel x scales row height
    ZoomVertical,
    /// Pointer over the time bar: wheel y scales column width
    ZoomHorizontal,
    /// Pointer over the content: wheel delta scrolls, clamped to bounds
    Pan,
}

/// Classifies wheel gestures and applies them to the viewport. The four
/// zones partition the plane: left of the key-gutter edge and below the
/// top bar zooms vertically, above the top bar and right of the gutter
/// zooms horizontally, the overlap is the inert corner, the rest pans.
pub struct InputController {
    layout: LayoutConfig,
    zoom: ZoomConfig,
}

impl InputController {
    pub fn new(layout: LayoutConfig, zoom: ZoomConfig) -> Self {
        InputController { layout, zoom }
    }

    pub fn classify(&self, pointer: Vec2) -> GestureMode {
        let in_key_gutter = pointer.x < self.layout.key_gutter_width;
        let in_top_bar = pointer.y < self.layout.top_bar_height;
        match (in_key_gutter, in_top_bar) {
            (true, true) => GestureMode::Corner,
            (true, false) => GestureMode::ZoomVertical,
            (false, true) => GestureMode::ZoomHorizontal,
            (false, false) => GestureMode::Pan,
        }
    }

    /// Apply one wheel gesture. Returns the mode it resolved to; every
    /// mode except `Corner` mutates the viewport and needs a redraw.
    pub fn apply_gesture(&self, vp: &mut ViewportState, pointer: Vec2, delta: Vec2) -> GestureMode {
        let mode = self.classify(pointer);
        match mode {
            GestureMode::Corner => {}
            GestureMode::ZoomVertical => {
                vp.zoom_rows(delta.x * self.zoom.row_zoom_rate);
                log::debug!("vertical zoom, row height now {:.2}", vp.row_height());
            }
            GestureMode::ZoomHorizontal => {
                vp.zoom_cols(delta.y * self.zoom.col_zoom_rate);
                log::debug!("horizontal zoom, column width now {:.2}", vp.col_width());
            }
            GestureMode::Pan => {
                vp.pan(delta.x, delta.y);
            }
        }
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> InputController {
        InputController::new(LayoutConfig::default(), ZoomConfig::default())
    }

    fn viewport() -> ViewportState {
        ViewportState::new(&ZoomConfig::default(), 800.0, 600.0)
    }

    #[test]
    fn test_zone_classification() {
        let ctl = controller();
        // Gutters are 30px; top bar is 30px.
        assert_eq!(ctl.classify(Vec2::new(10.0, 10.0)), GestureMode::Corner);
        assert_eq!(ctl.classify(Vec2::new(10.0, 200.0)), GestureMode::ZoomVertical);
        assert_eq!(ctl.classify(Vec2::new(400.0, 10.0)), GestureMode::ZoomHorizontal);
        assert_eq!(ctl.classify(Vec2::new(400.0, 300.0)), GestureMode::Pan);
    }

    #[test]
    fn test_boundary_points_fall_in_content() {
        let ctl = controller();
        assert_eq!(ctl.classify(Vec2::new(30.0, 30.0)), GestureMode::Pan);
        assert_eq!(ctl.classify(Vec2::new(29.9, 30.0)), GestureMode::ZoomVertical);
        assert_eq!(ctl.classify(Vec2::new(30.0, 29.9)), GestureMode::ZoomHorizontal);
    }

    #[test]
    fn test_vertical_zoom_uses_wheel_x() {
        let ctl = controller();
        let mut vp = viewport();
        let mode = ctl.apply_gesture(&mut vp, Vec2::new(10.0, 100.0), Vec2::new(200.0, 999.0));
        assert_eq!(mode, GestureMode::ZoomVertical);
        // rowHeight += delta.x * 0.01
        assert_eq!(vp.row_height(), 22.0);
        assert_eq!(vp.col_width(), 80.0);
    }

    #[test]
    fn test_horizontal_zoom_uses_wheel_y() {
        let ctl = controller();
        let mut vp = viewport();
        let mode = ctl.apply_gesture(&mut vp, Vec2::new(400.0, 10.0), Vec2::new(999.0, 50.0));
        assert_eq!(mode, GestureMode::ZoomHorizontal);
        // colWidth += delta.y * 0.1
        assert_eq!(vp.col_width(), 85.0);
        assert_eq!(vp.row_height(), 20.0);
    }

    #[test]
    fn test_pan_moves_scroll_within_bounds() {
        let ctl = controller();
        let mut vp = viewport();
        let mode = ctl.apply_gesture(&mut vp, Vec2::new(400.0, 300.0), Vec2::new(50.0, 30.0));
        assert_eq!(mode, GestureMode::Pan);
        assert_eq!(vp.scroll_x(), -50.0);
        assert_eq!(vp.scroll_y(), -30.0);
    }

    #[test]
    fn test_corner_gesture_is_a_no_op() {
        let ctl = controller();
        let mut vp = viewport();
        let mode = ctl.apply_gesture(&mut vp, Vec2::new(5.0, 5.0), Vec2::new(100.0, 100.0));
        assert_eq!(mode, GestureMode::Corner);
        assert_eq!(vp.row_height(), 20.0);
        assert_eq!(vp.col_width(), 80.0);
        assert_eq!(vp.scroll_x(), 0.0);
        assert_eq!(vp.scroll_y(), 0.0);
    }

    #[test]
    fn test_zoom_cannot_go_degenerate() {
        let ctl = controller();
        let mut vp = viewport();
        for _ in 0..100 {
            ctl.apply_gesture(&mut vp, Vec2::new(10.0, 100.0), Vec2::new(-5000.0, 0.0));
            ctl.apply_gesture(&mut vp, Vec2::new(400.0, 10.0), Vec2::new(0.0, -5000.0));
        }
        assert_eq!(vp.row_height(), 5.0);
        assert_eq!(vp.col_width(), 20.0);
        assert!(vp.content_height() > 0.0);
        assert!(vp.content_width() > 0.0);
    }
}
