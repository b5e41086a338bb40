// src/renderer/axes.rs

use glam::Vec2;

use crate::config::{LayoutConfig, ThemeConfig};
use crate::geometry;
use crate::scene::{LayerId, LineShape, RectShape, Surface, TextShape};
use crate::viewport::{ViewportState, PITCH_ROWS, TOTAL_COLUMNS};

/// Badge glyph offset inside the corner rect.
const BADGE_POSITION: Vec2 = Vec2::new(11.0, -4.0);

/// Builds the three fixed overlays: the time ruler across the top, the
/// pitch ruler (octave labels + key-color bands) down the left, and the
/// static corner badge where the two gutters meet.
pub struct AxisRenderer {
    layout: LayoutConfig,
    theme: ThemeConfig,
}

impl AxisRenderer {
    pub fn new(layout: LayoutConfig, theme: ThemeConfig) -> Self {
        AxisRenderer { layout, theme }
    }

    /// One 1-based column label and divider per column, over a bar that
    /// spans the full content width.
    pub fn draw_time_ruler(&self, vp: &ViewportState, surface: &mut impl Surface) {
        let top = self.layout.top_bar_height;
        surface.add_rect(
            LayerId::TimeRuler,
            RectShape {
                x: self.layout.x_offset(),
                y: 0.0,
                width: vp.content_width(),
                height: top,
                fill: self.theme.time_ruler_fill,
                opacity: 1.0,
                corner_radius: 0.0,
            },
        );

        for col in 1..TOTAL_COLUMNS {
            let x = col as f32 * vp.col_width() + self.layout.x_offset();
            surface.add_line(
                LayerId::TimeRuler,
                LineShape {
                    from: Vec2::new(x, top - 10.0),
                    to: Vec2::new(x, top),
                    stroke: self.theme.gridline_strong,
                    width: 1.0,
                },
            );
            surface.add_text(
                LayerId::TimeRuler,
                TextShape {
                    position: Vec2::new(x + 3.0, top - 18.0),
                    content: col.to_string(),
                    font_size: self.theme.label_font_size,
                    fill: self.theme.label_fill,
                },
            );
        }
    }

    /// Name-gutter background, one "C{n}" label per octave boundary, and
    /// the alternating key-color band per row.
    pub fn draw_pitch_ruler(&self, vp: &ViewportState, surface: &mut impl Surface) {
        surface.add_rect(
            LayerId::PitchRuler,
            RectShape {
                x: 0.0,
                y: self.layout.top_bar_height,
                width: self.layout.name_gutter_width,
                height: vp.content_height(),
                fill: self.theme.pitch_ruler_fill,
                opacity: 1.0,
                corner_radius: 0.0,
            },
        );

        for i in 1..=10 {
            let y = geometry::octave_divider_y(i, vp, &self.layout);
            surface.add_line(
                LayerId::PitchRuler,
                LineShape {
                    from: Vec2::new(0.0, y),
                    to: Vec2::new(self.layout.name_gutter_width, y),
                    stroke: self.theme.gridline_strong,
                    width: 1.0,
                },
            );
            surface.add_text(
                LayerId::PitchRuler,
                TextShape {
                    position: Vec2::new(
                        (self.layout.name_gutter_width - self.theme.label_font_size) / 2.0,
                        y - 17.0,
                    ),
                    content: format!("C{}", 10 - i),
                    font_size: self.theme.label_font_size,
                    fill: self.theme.label_fill,
                },
            );
        }

        for row in 0..PITCH_ROWS {
            surface.add_rect(
                LayerId::PitchRuler,
                geometry::key_band(row, vp, &self.layout, &self.theme),
            );
        }
    }

    /// Static badge over the gutter intersection; never scrolls or zooms.
    pub fn draw_corner(&self, surface: &mut impl Surface) {
        surface.add_rect(
            LayerId::Corner,
            RectShape {
                x: 0.0,
                y: 0.0,
                width: self.layout.x_offset(),
                height: self.layout.top_bar_height,
                fill: self.theme.corner_fill,
                opacity: 1.0,
                corner_radius: 0.0,
            },
        );
        surface.add_text(
            LayerId::Corner,
            TextShape {
                position: BADGE_POSITION,
                content: self.theme.badge_glyph.clone(),
                font_size: self.theme.badge_font_size,
                fill: self.theme.label_fill,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoomConfig;
    use crate::scene::{SceneGraph, Shape};

    fn renderer() -> AxisRenderer {
        AxisRenderer::new(LayoutConfig::default(), ThemeConfig::default())
    }

    fn viewport() -> ViewportState {
        ViewportState::new(&ZoomConfig::default(), 800.0, 600.0)
    }

    #[test]
    fn test_time_ruler_labels_are_one_based() {
        let mut scene = SceneGraph::new();
        renderer().draw_time_ruler(&viewport(), &mut scene);

        let labels: Vec<&str> = scene
            .shapes(LayerId::TimeRuler)
            .iter()
            .filter_map(|s| match s {
                Shape::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 999);
        assert_eq!(labels[0], "1");
        assert_eq!(labels[998], "999");
    }

    #[test]
    fn test_pitch_ruler_octave_labels() {
        let mut scene = SceneGraph::new();
        let vp = viewport();
        renderer().draw_pitch_ruler(&vp, &mut scene);

        let labels: Vec<&TextShape> = scene
            .shapes(LayerId::PitchRuler)
            .iter()
            .filter_map(|s| match s {
                Shape::Text(t) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0].content, "C9");
        assert_eq!(labels[9].content, "C0");

        // i=5 -> "C5" label 17px above y = rowHeight*56 + nameGutterWidth
        let c5 = labels.iter().find(|t| t.content == "C5").unwrap();
        assert_eq!(c5.position.y, 20.0 * 56.0 + 30.0 - 17.0);
    }

    #[test]
    fn test_pitch_ruler_has_a_band_per_row() {
        let mut scene = SceneGraph::new();
        renderer().draw_pitch_ruler(&viewport(), &mut scene);

        let rects = scene
            .shapes(LayerId::PitchRuler)
            .iter()
            .filter(|s| matches!(s, Shape::Rect(_)))
            .count();
        // background + 128 key bands
        assert_eq!(rects, 129);
    }

    #[test]
    fn test_corner_badge_is_static() {
        let mut scene = SceneGraph::new();
        renderer().draw_corner(&mut scene);

        assert_eq!(scene.shape_count(LayerId::Corner), 2);
        let Shape::Rect(rect) = &scene.shapes(LayerId::Corner)[0] else {
            panic!("corner background should be a rect");
        };
        assert_eq!((rect.x, rect.y), (0.0, 0.0));
        assert_eq!(rect.width, 60.0);
        assert_eq!(rect.height, 30.0);
    }
}
