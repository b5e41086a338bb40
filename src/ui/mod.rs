// src/ui/mod.rs

pub mod input;

pub use input::{GestureMode, InputController};
