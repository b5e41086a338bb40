// src/error.rs

use thiserror::Error;

/// Error types for the viewer core. None of these are fatal: the policy is
/// "last good frame retained", so callers log and carry on.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Inbound feed message failed to decode or lacks the note list
    #[error("malformed note batch: {reason}")]
    MalformedBatch { reason: String },

    /// A single note record is out of range
    #[error("invalid note record: {reason}")]
    InvalidNote { reason: String },

    /// MIDI file could not be parsed
    #[error("MIDI file error: {0}")]
    MidiFile(String),

    /// JSON (de)serialization error, config load/save
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
