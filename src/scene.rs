// src/scene.rs

use glam::Vec2;

/// The five independently addressable layers of the stage.
///
/// Backdrop and notes scroll on both axes, the time ruler only follows
/// horizontal scroll, the pitch ruler only vertical, and the corner badge
/// never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    Backdrop,
    Notes,
    TimeRuler,
    PitchRuler,
    Corner,
}

pub const ALL_LAYERS: [LayerId; 5] = [
    LayerId::Backdrop,
    LayerId::Notes,
    LayerId::TimeRuler,
    LayerId::PitchRuler,
    LayerId::Corner,
];

#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: [f32; 4],
    pub opacity: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: [f32; 4],
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub position: Vec2,
    pub content: String,
    pub font_size: f32,
    pub fill: [f32; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Line(LineShape),
    Text(TextShape),
}

/// Capability interface of the rendering surface. The core emits
/// declarative shape lists per layer and never touches pixels; a concrete
/// drawing backend implements this to receive them.
pub trait Surface {
    fn add_rect(&mut self, layer: LayerId, rect: RectShape);
    fn add_line(&mut self, layer: LayerId, line: LineShape);
    fn add_text(&mut self, layer: LayerId, text: TextShape);
    fn clear_layer(&mut self, layer: LayerId);
    fn translate_layer(&mut self, layer: LayerId, offset: Vec2);
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Layer {
    shapes: Vec<Shape>,
    offset: Vec2,
}

/// In-memory retained scene graph. Backend integrations read the shape
/// lists out of this; tests observe redraw output through it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGraph {
    layers: [Layer; 5],
}

impl SceneGraph {
    pub fn new() -> Self {
        SceneGraph::default()
    }

    fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id as usize]
    }

    fn layer_mut(&mut self, id: LayerId) -> &mut Layer {
        &mut self.layers[id as usize]
    }

    pub fn shapes(&self, id: LayerId) -> &[Shape] {
        &self.layer(id).shapes
    }

    pub fn offset(&self, id: LayerId) -> Vec2 {
        self.layer(id).offset
    }

    pub fn shape_count(&self, id: LayerId) -> usize {
        self.layer(id).shapes.len()
    }

    pub fn total_shape_count(&self) -> usize {
        self.layers.iter().map(|l| l.shapes.len()).sum()
    }
}

impl Surface for SceneGraph {
    fn add_rect(&mut self, layer: LayerId, rect: RectShape) {
        self.layer_mut(layer).shapes.push(Shape::Rect(rect));
    }

    fn add_line(&mut self, layer: LayerId, line: LineShape) {
        self.layer_mut(layer).shapes.push(Shape::Line(line));
    }

    fn add_text(&mut self, layer: LayerId, text: TextShape) {
        self.layer_mut(layer).shapes.push(Shape::Text(text));
    }

    fn clear_layer(&mut self, layer: LayerId) {
        self.layer_mut(layer).shapes.clear();
    }

    fn translate_layer(&mut self, layer: LayerId, offset: Vec2) {
        self.layer_mut(layer).offset = offset;
    }
}
