// src/config.rs

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

/// Fixed gutter metrics. The scrollable content region starts at
/// `(x_offset, top_bar_height)`; everything left of or above that line
/// belongs to the rulers and the corner badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub name_gutter_width: f32,
    pub key_gutter_width: f32,
    pub top_bar_height: f32,
}

impl LayoutConfig {
    /// Horizontal origin of the content region (name gutter + key gutter).
    pub fn x_offset(&self) -> f32 {
        self.name_gutter_width + self.key_gutter_width
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub initial_row_height: f32,
    pub initial_col_width: f32,
    /// Lower bounds on scale; zoom gestures clamp here instead of letting
    /// geometry go degenerate or negative.
    pub min_row_height: f32,
    pub min_col_width: f32,
    /// Pixels of scale change per pixel of wheel delta.
    pub row_zoom_rate: f32,
    pub col_zoom_rate: f32,
}

/// Colors are RGBA with each channel in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub band_light: [f32; 4],
    pub band_dark: [f32; 4],
    pub gridline_strong: [f32; 4],
    pub gridline_faint: [f32; 4],
    pub note_fill: [f32; 4],
    pub note_corner_radius: f32,
    pub time_ruler_fill: [f32; 4],
    pub pitch_ruler_fill: [f32; 4],
    pub key_light: [f32; 4],
    pub key_dark: [f32; 4],
    pub corner_fill: [f32; 4],
    pub label_fill: [f32; 4],
    pub label_font_size: f32,
    pub badge_glyph: String,
    pub badge_font_size: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub layout: LayoutConfig,
    pub zoom: ZoomConfig,
    pub theme: ThemeConfig,
    pub feed: FeedConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            name_gutter_width: 30.0,
            key_gutter_width: 30.0,
            top_bar_height: 30.0,
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        ZoomConfig {
            initial_row_height: 20.0,
            initial_col_width: 80.0,
            min_row_height: 5.0,
            min_col_width: 20.0,
            row_zoom_rate: 0.01,
            col_zoom_rate: 0.1,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            band_light: rgb(163, 163, 163),
            band_dark: rgb(150, 150, 150),
            gridline_strong: [0.0, 0.0, 0.0, 0.3],
            gridline_faint: [1.0, 1.0, 1.0, 0.3],
            note_fill: rgb(197, 100, 91),
            note_corner_radius: 5.0,
            time_ruler_fill: rgb(53, 53, 53),
            pitch_ruler_fill: rgb(46, 46, 46),
            key_light: rgb(200, 200, 200),
            key_dark: rgb(26, 26, 26),
            corner_fill: rgb(65, 65, 65),
            label_fill: [1.0, 1.0, 1.0, 1.0],
            label_font_size: 15.0,
            badge_glyph: "∞".to_string(),
            badge_font_size: 40.0,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            listen_addr: "127.0.0.1:8765".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display: DisplayConfig::default(),
            layout: LayoutConfig::default(),
            zoom: ZoomConfig::default(),
            theme: ThemeConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), ViewerError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ]
}
