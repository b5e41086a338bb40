// src/renderer/notes.rs

use crate::config::{LayoutConfig, ThemeConfig};
use crate::geometry;
use crate::midi::NoteEvent;
use crate::scene::{LayerId, Surface};
use crate::viewport::ViewportState;

/// Builds one rounded rectangle per note. Invalidation is coarse: the
/// caller clears the layer first and this rebuilds from scratch, so shapes
/// from a superseded batch can never linger.
pub struct NoteRenderer {
    layout: LayoutConfig,
    theme: ThemeConfig,
}

impl NoteRenderer {
    pub fn new(layout: LayoutConfig, theme: ThemeConfig) -> Self {
        NoteRenderer { layout, theme }
    }

    pub fn draw(&self, notes: &[NoteEvent], vp: &ViewportState, surface: &mut impl Surface) {
        for note in notes {
            surface.add_rect(
                LayerId::Notes,
                geometry::note_rect(note, vp, &self.layout, &self.theme),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoomConfig;
    use crate::scene::{SceneGraph, Shape};

    #[test]
    fn test_one_rect_per_note() {
        let vp = ViewportState::new(&ZoomConfig::default(), 800.0, 600.0);
        let renderer = NoteRenderer::new(LayoutConfig::default(), ThemeConfig::default());
        let mut scene = SceneGraph::new();

        let notes = vec![
            NoteEvent::new(60, 100, 0.0, 1.0).unwrap(),
            NoteEvent::new(64, 80, 1.0, 0.5).unwrap(),
            NoteEvent::new(67, 127, 2.0, 2.0).unwrap(),
        ];
        renderer.draw(&notes, &vp, &mut scene);

        assert_eq!(scene.shape_count(LayerId::Notes), 3);
        for shape in scene.shapes(LayerId::Notes) {
            let Shape::Rect(rect) = shape else {
                panic!("note layer should only hold rects");
            };
            assert_eq!(rect.corner_radius, 5.0);
            assert!(rect.opacity >= 0.5 && rect.opacity <= 1.0);
        }
    }
}
