// src/feed.rs

use serde::Deserialize;
use serde_json::Value;

use crate::error::ViewerError;
use crate::midi::NoteEvent;

/// A validated note set ready to replace the current one, plus the number
/// of records that were dropped during validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteBatch {
    pub notes: Vec<NoteEvent>,
    pub rejected: usize,
}

impl NoteBatch {
    pub fn from_notes(notes: Vec<NoteEvent>) -> Self {
        NoteBatch { notes, rejected: 0 }
    }
}

/// Wire shape of one feed message: `{"notes": [[pitch, velocity, location,
/// length], ...]}`. Records are kept loose here so one bad tuple drops
/// that record instead of the whole batch.
#[derive(Debug, Deserialize)]
struct FeedMessage {
    notes: Vec<Value>,
}

/// Decode one feed message. An unreadable message or a missing note list
/// rejects the whole batch; an out-of-range record is dropped with a
/// diagnostic and the rest of the batch survives.
pub fn decode_message(text: &str) -> Result<NoteBatch, ViewerError> {
    let message: FeedMessage =
        serde_json::from_str(text).map_err(|e| ViewerError::MalformedBatch {
            reason: e.to_string(),
        })?;

    let mut notes = Vec::with_capacity(message.notes.len());
    let mut rejected = 0;
    for record in &message.notes {
        match decode_record(record) {
            Ok(note) => notes.push(note),
            Err(e) => {
                log::warn!("dropping note record: {}", e);
                rejected += 1;
            }
        }
    }
    Ok(NoteBatch { notes, rejected })
}

fn decode_record(record: &Value) -> Result<NoteEvent, ViewerError> {
    let fields = record
        .as_array()
        .filter(|a| a.len() == 4)
        .ok_or_else(|| ViewerError::InvalidNote {
            reason: format!("expected a 4-tuple, got {}", record),
        })?;

    let pitch = int_field(&fields[0], "pitch")?;
    let velocity = int_field(&fields[1], "velocity")?;
    let start = num_field(&fields[2], "location")?;
    let duration = num_field(&fields[3], "length")?;
    NoteEvent::new(pitch, velocity, start, duration)
}

fn int_field(value: &Value, name: &str) -> Result<i64, ViewerError> {
    value.as_i64().ok_or_else(|| ViewerError::InvalidNote {
        reason: format!("{} is not an integer: {}", name, value),
    })
}

fn num_field(value: &Value, name: &str) -> Result<f32, ViewerError> {
    value
        .as_f64()
        .map(|v| v as f32)
        .ok_or_else(|| ViewerError::InvalidNote {
            reason: format!("{} is not a number: {}", name, value),
        })
}
