// src/lib.rs

pub mod config;
pub mod error;
pub mod feed;
pub mod geometry;
pub mod midi;
pub mod renderer;
pub mod scene;
pub mod stats;
pub mod ui;
pub mod viewer;
pub mod viewport;

pub use config::AppConfig;
pub use error::ViewerError;
pub use feed::NoteBatch;
pub use midi::NoteEvent;
pub use scene::{LayerId, SceneGraph, Surface};
pub use viewer::PianoRollViewer;
pub use viewport::ViewportState;
