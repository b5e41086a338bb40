// src/renderer/mod.rs

pub mod axes;
pub mod grid;
pub mod notes;

pub use axes::AxisRenderer;
pub use grid::GridRenderer;
pub use notes::NoteRenderer;
