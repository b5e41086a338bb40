// src/renderer/grid.rs

use crate::config::{LayoutConfig, ThemeConfig};
use crate::geometry;
use crate::scene::{LayerId, Surface};
use crate::viewport::{ViewportState, PITCH_ROWS, TOTAL_COLUMNS};

/// Builds the static backdrop: one band per pitch row plus one vertical
/// gridline per time column. Depends only on the viewport, so it must be
/// rebuilt whenever either scale changes.
pub struct GridRenderer {
    layout: LayoutConfig,
    theme: ThemeConfig,
}

impl GridRenderer {
    pub fn new(layout: LayoutConfig, theme: ThemeConfig) -> Self {
        GridRenderer { layout, theme }
    }

    pub fn draw(&self, vp: &ViewportState, surface: &mut impl Surface) {
        for row in 0..PITCH_ROWS {
            surface.add_rect(
                LayerId::Backdrop,
                geometry::pitch_row_band(row, vp, &self.layout, &self.theme),
            );
        }
        for col in 1..TOTAL_COLUMNS {
            surface.add_line(
                LayerId::Backdrop,
                geometry::time_gridline(col, vp, &self.layout, &self.theme),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoomConfig;
    use crate::scene::SceneGraph;

    #[test]
    fn test_backdrop_shape_counts() {
        let vp = ViewportState::new(&ZoomConfig::default(), 800.0, 600.0);
        let renderer = GridRenderer::new(LayoutConfig::default(), ThemeConfig::default());
        let mut scene = SceneGraph::new();

        renderer.draw(&vp, &mut scene);

        // 128 row bands + 999 gridlines (columns 1..1000)
        assert_eq!(scene.shape_count(LayerId::Backdrop), 128 + 999);
        assert_eq!(scene.shape_count(LayerId::Notes), 0);
    }
}
