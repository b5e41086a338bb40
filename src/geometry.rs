// src/geometry.rs
//
// Pure mappings from abstract note/grid coordinates to screen-space
// shapes under the current viewport transform. Nothing here holds state;
// renderers call these on every rebuild.

use glam::Vec2;

use crate::config::{LayoutConfig, ThemeConfig};
use crate::midi::NoteEvent;
use crate::scene::{LineShape, RectShape};
use crate::viewport::ViewportState;

/// Semitone offsets within an octave that read as white keys.
pub const DIATONIC_SET: [u32; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Gap trimmed off a note's width so adjacent notes never visually touch.
const NOTE_WIDTH_EPSILON: f32 = 0.01;

/// Row index for a pitch: row 0 is the top of the grid, pitch 127.
pub fn pitch_row(pitch: u8) -> u32 {
    127 - pitch as u32
}

/// Rows on the white-key side of the banding pattern.
pub fn is_diatonic_row(row: u32) -> bool {
    DIATONIC_SET.contains(&(row % 12))
}

/// Velocity 0 reads at half opacity, velocity 127 fully opaque.
pub fn note_opacity(velocity: u8) -> f32 {
    (velocity as f32 / 254.0 + 0.5).clamp(0.5, 1.0)
}

/// Screen rectangle for one note under the current transform.
pub fn note_rect(
    note: &NoteEvent,
    vp: &ViewportState,
    layout: &LayoutConfig,
    theme: &ThemeConfig,
) -> RectShape {
    RectShape {
        x: note.start_time * vp.col_width() + layout.x_offset(),
        y: pitch_row(note.pitch) as f32 * vp.row_height() + layout.top_bar_height,
        width: (note.duration - NOTE_WIDTH_EPSILON) * vp.col_width(),
        height: vp.row_height(),
        fill: theme.note_fill,
        opacity: note_opacity(note.velocity),
        corner_radius: theme.note_corner_radius,
    }
}

/// Full-width backdrop band for one pitch row.
pub fn pitch_row_band(
    row: u32,
    vp: &ViewportState,
    layout: &LayoutConfig,
    theme: &ThemeConfig,
) -> RectShape {
    let fill = if is_diatonic_row(row) {
        theme.band_light
    } else {
        theme.band_dark
    };
    RectShape {
        x: layout.x_offset(),
        y: row as f32 * vp.row_height() + layout.top_bar_height,
        width: vp.content_width(),
        height: vp.row_height(),
        fill,
        opacity: 1.0,
        corner_radius: 0.0,
    }
}

/// Key-color band for one pitch row in the pitch ruler's key gutter.
pub fn key_band(
    row: u32,
    vp: &ViewportState,
    layout: &LayoutConfig,
    theme: &ThemeConfig,
) -> RectShape {
    let fill = if is_diatonic_row(row) {
        theme.key_light
    } else {
        theme.key_dark
    };
    RectShape {
        x: layout.name_gutter_width,
        y: row as f32 * vp.row_height() + layout.top_bar_height,
        width: layout.key_gutter_width,
        height: vp.row_height(),
        fill,
        opacity: 1.0,
        corner_radius: 0.0,
    }
}

/// Full-height vertical gridline for one time column, emphasized on
/// measure boundaries (every 4th column).
pub fn time_gridline(
    col: u32,
    vp: &ViewportState,
    layout: &LayoutConfig,
    theme: &ThemeConfig,
) -> LineShape {
    let x = col as f32 * vp.col_width() + layout.x_offset();
    let stroke = if col % 4 == 0 {
        theme.gridline_strong
    } else {
        theme.gridline_faint
    };
    LineShape {
        from: Vec2::new(x, layout.top_bar_height),
        to: Vec2::new(x, vp.content_height() + layout.top_bar_height),
        stroke,
        width: 1.0,
    }
}

/// Vertical position of the octave divider for ruler index `i` (1..=10);
/// the label "C{10-i}" sits just above it.
pub fn octave_divider_y(i: u32, vp: &ViewportState, layout: &LayoutConfig) -> f32 {
    vp.row_height() * (i as f32 * 12.0 - 4.0) + layout.name_gutter_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoomConfig;

    fn fixtures() -> (ViewportState, LayoutConfig, ThemeConfig) {
        let zoom = ZoomConfig {
            initial_row_height: 20.0,
            initial_col_width: 80.0,
            ..ZoomConfig::default()
        };
        (
            ViewportState::new(&zoom, 800.0, 600.0),
            LayoutConfig {
                name_gutter_width: 20.0,
                key_gutter_width: 30.0,
                top_bar_height: 30.0,
            },
            ThemeConfig::default(),
        )
    }

    #[test]
    fn test_pitch_row_is_strictly_decreasing_in_pitch() {
        assert_eq!(pitch_row(127), 0);
        assert_eq!(pitch_row(0), 127);
        for p in 1..=127u8 {
            assert!(pitch_row(p) < pitch_row(p - 1));
        }
    }

    #[test]
    fn test_note_opacity_range() {
        assert_eq!(note_opacity(0), 0.5);
        assert!((note_opacity(127) - 1.0).abs() < 1e-6);
        for v in 0..=127u8 {
            let o = note_opacity(v);
            assert!((0.5..=1.0).contains(&o));
        }
    }

    #[test]
    fn test_note_rect_concrete_scenario() {
        // rowHeight=20, colWidth=80, xOffset=50, yOffset=30,
        // note (pitch=60, velocity=100, startTime=2, duration=1)
        let (vp, layout, theme) = fixtures();
        let note = NoteEvent::new(60, 100, 2.0, 1.0).unwrap();
        let rect = note_rect(&note, &vp, &layout, &theme);

        assert_eq!(rect.x, 210.0);
        assert_eq!(rect.y, 1370.0);
        assert!((rect.width - 79.2).abs() < 1e-4);
        assert_eq!(rect.height, 20.0);
        assert!((rect.opacity - 0.8937).abs() < 1e-3);
        assert_eq!(rect.fill, theme.note_fill);
        assert_eq!(rect.corner_radius, 5.0);
    }

    #[test]
    fn test_diatonic_banding_pattern() {
        for row in [0u32, 2, 3, 5, 7, 8, 10, 12, 14] {
            assert!(is_diatonic_row(row), "row {} should be light", row);
        }
        for row in [1u32, 4, 6, 9, 11, 13] {
            assert!(!is_diatonic_row(row), "row {} should be dark", row);
        }
    }

    #[test]
    fn test_band_colors_follow_diatonic_rule() {
        let (vp, layout, theme) = fixtures();
        assert_eq!(pitch_row_band(0, &vp, &layout, &theme).fill, theme.band_light);
        assert_eq!(pitch_row_band(1, &vp, &layout, &theme).fill, theme.band_dark);
        // Key gutter uses the piano palette.
        assert_eq!(key_band(0, &vp, &layout, &theme).fill, theme.key_light);
        assert_eq!(key_band(1, &vp, &layout, &theme).fill, theme.key_dark);
    }

    #[test]
    fn test_gridline_emphasis_every_fourth_column() {
        let (vp, layout, theme) = fixtures();
        assert_eq!(time_gridline(4, &vp, &layout, &theme).stroke, theme.gridline_strong);
        assert_eq!(time_gridline(8, &vp, &layout, &theme).stroke, theme.gridline_strong);
        assert_eq!(time_gridline(3, &vp, &layout, &theme).stroke, theme.gridline_faint);
        assert_eq!(time_gridline(5, &vp, &layout, &theme).stroke, theme.gridline_faint);
    }

    #[test]
    fn test_gridline_spans_content_height() {
        let (vp, layout, theme) = fixtures();
        let line = time_gridline(2, &vp, &layout, &theme);
        assert_eq!(line.from.x, 2.0 * 80.0 + 50.0);
        assert_eq!(line.from.y, 30.0);
        assert_eq!(line.to.y, vp.content_height() + 30.0);
    }

    #[test]
    fn test_octave_divider_concrete_scenario() {
        // i=5: y = rowHeight * 56 + nameGutterWidth
        let (vp, layout, _) = fixtures();
        assert_eq!(octave_divider_y(5, &vp, &layout), 20.0 * 56.0 + 20.0);
    }
}
