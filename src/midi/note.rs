// src/midi/note.rs

use crate::error::ViewerError;

/// A single note as delivered by the feed or a MIDI file: pitch and
/// velocity in MIDI range, start and duration measured in grid columns
/// (beats). Immutable once constructed; batches replace the whole set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub pitch: u8,
    pub velocity: u8,
    pub start_time: f32,
    pub duration: f32,
}

impl NoteEvent {
    /// Validate and construct a note. Pitch and velocity must fit the MIDI
    /// 0-127 range, start must be non-negative and duration positive.
    pub fn new(pitch: i64, velocity: i64, start_time: f32, duration: f32) -> Result<Self, ViewerError> {
        if !(0..=127).contains(&pitch) {
            return Err(ViewerError::InvalidNote {
                reason: format!("pitch {} outside 0-127", pitch),
            });
        }
        if !(0..=127).contains(&velocity) {
            return Err(ViewerError::InvalidNote {
                reason: format!("velocity {} outside 0-127", velocity),
            });
        }
        if !start_time.is_finite() || start_time < 0.0 {
            return Err(ViewerError::InvalidNote {
                reason: format!("start time {} is negative or not finite", start_time),
            });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ViewerError::InvalidNote {
                reason: format!("duration {} is not positive", duration),
            });
        }
        Ok(NoteEvent {
            pitch: pitch as u8,
            velocity: velocity as u8,
            start_time,
            duration,
        })
    }

    pub fn end_time(&self) -> f32 {
        self.start_time + self.duration
    }
}
