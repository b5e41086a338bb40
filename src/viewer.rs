// src/viewer.rs

use std::time::Instant;

use glam::Vec2;

use crate::config::AppConfig;
use crate::error::ViewerError;
use crate::feed::{self, NoteBatch};
use crate::midi::NoteEvent;
use crate::renderer::{AxisRenderer, GridRenderer, NoteRenderer};
use crate::scene::{LayerId, SceneGraph, Surface, ALL_LAYERS};
use crate::stats::RedrawStats;
use crate::ui::{GestureMode, InputController};
use crate::viewport::ViewportState;

/// The viewer core: owns the viewport, the current note set and the scene
/// graph, and runs the invalidate-and-rebuild pipeline after every state
/// change. Callers must not interleave another event while a method here
/// is running; one call is one atomic mutate-then-redraw unit.
pub struct PianoRollViewer {
    viewport: ViewportState,
    notes: Vec<NoteEvent>,
    scene: SceneGraph,
    grid: GridRenderer,
    note_renderer: NoteRenderer,
    axes: AxisRenderer,
    input: InputController,
    stats: RedrawStats,
}

impl PianoRollViewer {
    pub fn new(config: &AppConfig) -> Self {
        let mut viewer = PianoRollViewer {
            viewport: ViewportState::new(
                &config.zoom,
                config.display.width as f32,
                config.display.height as f32,
            ),
            notes: Vec::new(),
            scene: SceneGraph::new(),
            grid: GridRenderer::new(config.layout.clone(), config.theme.clone()),
            note_renderer: NoteRenderer::new(config.layout.clone(), config.theme.clone()),
            axes: AxisRenderer::new(config.layout.clone(), config.theme.clone()),
            input: InputController::new(config.layout.clone(), config.zoom.clone()),
            stats: RedrawStats::new(),
        };
        viewer.draw_all();
        viewer
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn stats(&self) -> &RedrawStats {
        &self.stats
    }

    /// Replace the note set wholesale and rebuild. Each batch fully
    /// supersedes the previous one; there is no merging.
    pub fn on_note_batch(&mut self, batch: NoteBatch) {
        if batch.rejected > 0 {
            log::warn!("batch dropped {} invalid note records", batch.rejected);
        }
        log::debug!("note set replaced: {} notes", batch.notes.len());
        self.notes = batch.notes;
        self.draw_all();
    }

    /// Decode and apply one raw feed message. A malformed message leaves
    /// the current note set and scene untouched.
    pub fn on_feed_message(&mut self, text: &str) -> Result<(), ViewerError> {
        match feed::decode_message(text) {
            Ok(batch) => {
                self.on_note_batch(batch);
                Ok(())
            }
            Err(e) => {
                log::warn!("rejecting feed message: {}", e);
                Err(e)
            }
        }
    }

    /// Route one wheel gesture and redraw if it changed the viewport.
    pub fn on_wheel(&mut self, pointer: Vec2, delta: Vec2) -> GestureMode {
        let mode = self.input.apply_gesture(&mut self.viewport, pointer, delta);
        if mode != GestureMode::Corner {
            self.draw_all();
        }
        mode
    }

    /// Adopt a new viewport pixel size. Content geometry is unchanged but
    /// the scroll bounds tighten, so the scene is rebuilt.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport.set_view_size(width, height);
        self.draw_all();
    }

    /// Clear every layer, rebuild grid, notes and axes in order, then set
    /// the per-layer scroll translations.
    pub fn draw_all(&mut self) {
        let start = Instant::now();

        for layer in ALL_LAYERS {
            self.scene.clear_layer(layer);
        }

        self.grid.draw(&self.viewport, &mut self.scene);
        self.note_renderer
            .draw(&self.notes, &self.viewport, &mut self.scene);
        self.axes.draw_pitch_ruler(&self.viewport, &mut self.scene);
        self.axes.draw_time_ruler(&self.viewport, &mut self.scene);
        self.axes.draw_corner(&mut self.scene);

        let scroll = Vec2::new(self.viewport.scroll_x(), self.viewport.scroll_y());
        self.scene.translate_layer(LayerId::Backdrop, scroll);
        self.scene.translate_layer(LayerId::Notes, scroll);
        self.scene
            .translate_layer(LayerId::TimeRuler, Vec2::new(scroll.x, 0.0));
        self.scene
            .translate_layer(LayerId::PitchRuler, Vec2::new(0.0, scroll.y));
        self.scene.translate_layer(LayerId::Corner, Vec2::ZERO);

        self.stats
            .record(start.elapsed(), self.scene.total_shape_count());
    }
}
