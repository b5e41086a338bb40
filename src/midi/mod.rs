// src/midi/mod.rs

pub mod note;
pub mod parser;

pub use note::NoteEvent;
pub use parser::MidiParser;
