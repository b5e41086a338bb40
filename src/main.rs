// src/main.rs

use std::io::{BufRead, BufReader};
use std::net::TcpListener;
use std::sync::Arc;

use parking_lot::Mutex;

use pianoroll_rs::config::AppConfig;
use pianoroll_rs::midi::MidiParser;
use pianoroll_rs::viewer::PianoRollViewer;

const CONFIG_FILE: &str = "config.json";

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting pianoroll-rs live viewer");

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let midi_file_path = args.get(1).cloned();

    if let Some(ref path) = midi_file_path {
        log::info!("MIDI file specified: {}", path);
    } else {
        log::info!("No MIDI file specified, waiting for the note feed");
    }

    // Print controls
    println!("\n=== pianoroll-rs Controls ===");
    println!("Scroll over grid     - Pan (clamped to content bounds)");
    println!("Scroll over key bar  - Vertical zoom (row height)");
    println!("Scroll over time bar - Horizontal zoom (column width)");
    println!("Feed                 - newline-delimited JSON note batches");
    println!("=============================\n");

    // Load or create config
    let config = AppConfig::load_from_file(CONFIG_FILE).unwrap_or_else(|_| {
        log::info!("No config file found, using defaults");
        let default = AppConfig::default();
        if let Err(e) = default.save_to_file(CONFIG_FILE) {
            log::warn!("Failed to save default config: {}", e);
        }
        default
    });

    let viewer = Arc::new(Mutex::new(PianoRollViewer::new(&config)));

    // Seed the first batch from a MIDI file if one was given
    if let Some(path) = midi_file_path {
        match MidiParser::new().parse_file(&path) {
            Ok(batch) => {
                log::info!("Loaded {} notes from {}", batch.notes.len(), path);
                let mut viewer = viewer.lock();
                viewer.on_note_batch(batch);
                log::info!("{}", viewer.stats().summary());
            }
            Err(e) => {
                log::error!("Failed to load MIDI file: {}", e);
            }
        }
    }

    let listener = match TcpListener::bind(&config.feed.listen_addr) {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", config.feed.listen_addr, e);
            std::process::exit(1);
        }
    };
    log::info!("Listening for note batches on {}", config.feed.listen_addr);

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                log::warn!("Failed to accept connection: {}", e);
                continue;
            }
        };
        if let Ok(peer) = stream.peer_addr() {
            log::info!("Feed connected from {}", peer);
        }

        for line in BufReader::new(stream).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Feed read error: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            // One lock span covers decode-apply-redraw, so a batch can
            // never observe a half-updated viewport.
            let mut viewer = viewer.lock();
            if viewer.on_feed_message(&line).is_ok() {
                log::info!("{}", viewer.stats().summary());
            }
        }

        log::info!("Feed disconnected");
    }
}
