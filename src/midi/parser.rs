// src/midi/parser.rs

use std::collections::HashMap;

use midly::{MidiMessage, Smf, Timing, TrackEventKind};

use crate::error::ViewerError;
use crate::feed::NoteBatch;
use crate::midi::NoteEvent;

/// Loads a Standard MIDI File into the same batch shape the live feed
/// produces, with note times measured in beats (grid columns).
pub struct MidiParser;

impl MidiParser {
    pub fn new() -> Self {
        MidiParser
    }

    pub fn parse_file(&self, path: &str) -> Result<NoteBatch, ViewerError> {
        let bytes = std::fs::read(path)?;
        self.parse_bytes(&bytes)
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<NoteBatch, ViewerError> {
        let smf = Smf::parse(bytes).map_err(|e| ViewerError::MidiFile(e.to_string()))?;

        let ticks_per_beat = match smf.header.timing {
            Timing::Metrical(tpb) => tpb.as_int() as f32,
            Timing::Timecode(..) => {
                return Err(ViewerError::MidiFile(
                    "SMPTE timecode timing is not supported".to_string(),
                ))
            }
        };

        let mut notes = Vec::new();
        let mut rejected = 0;

        for track in &smf.tracks {
            // Pending note-ons per (channel, key), earliest first.
            let mut pending: HashMap<(u8, u8), Vec<(u32, u8)>> = HashMap::new();
            let mut tick: u32 = 0;

            for event in track {
                tick += event.delta.as_int();
                let TrackEventKind::Midi { channel, message } = event.kind else {
                    continue;
                };
                match message {
                    MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                        pending
                            .entry((channel.as_int(), key.as_int()))
                            .or_default()
                            .push((tick, vel.as_int()));
                    }
                    MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                        let slot = pending.get_mut(&(channel.as_int(), key.as_int()));
                        let Some((start, velocity)) = slot.and_then(|s| {
                            if s.is_empty() {
                                None
                            } else {
                                Some(s.remove(0))
                            }
                        }) else {
                            continue;
                        };
                        let start_beats = start as f32 / ticks_per_beat;
                        let duration_beats = (tick - start) as f32 / ticks_per_beat;
                        match NoteEvent::new(
                            key.as_int() as i64,
                            velocity as i64,
                            start_beats,
                            duration_beats,
                        ) {
                            Ok(note) => notes.push(note),
                            Err(e) => {
                                log::warn!("dropping MIDI note: {}", e);
                                rejected += 1;
                            }
                        }
                    }
                    _ => {}
                }
            }

            // Unterminated note-ons have no duration to show.
            rejected += pending.values().map(|s| s.len()).sum::<usize>();
        }

        notes.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        Ok(NoteBatch { notes, rejected })
    }
}

impl Default for MidiParser {
    fn default() -> Self {
        Self::new()
    }
}
