//! # Engine Configuration
//!
//! Every tuning constant of the seat and board layers lives here so a host
//! can ship presets or load them from JSON.
//!
//! ```rust
//! use table_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let compact = EngineConfig::compact();
//! assert!(compact.seats.strip_length < config.seats.strip_length);
//! ```

use serde::{Deserialize, Serialize};

/// Lobby seat strip parameters (screen pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatConfig {
    /// Max distance from an edge for a touch to count as a join gesture (default: 120)
    pub edge_join_margin: f32,
    /// Seat strip depth, perpendicular to the edge (default: 320)
    pub strip_thickness: f32,
    /// Seat strip length along the edge (default: 520)
    pub strip_length: f32,
    /// Requested seat indicator thickness (default: 12)
    pub indicator_thickness: f32,
    /// Indicator is never thinner than this (default: 28)
    pub min_indicator_thickness: f32,
}

impl Default for SeatConfig {
    fn default() -> Self {
        Self {
            edge_join_margin: 120.0,
            strip_thickness: 320.0,
            strip_length: 520.0,
            indicator_thickness: 12.0,
            min_indicator_thickness: 28.0,
        }
    }
}

/// Shared-location grid parameters (board units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Minimum distance between neighbouring grid slots (default: 32)
    pub base_spacing: f32,
    /// Gap added to the largest token diameter (default: 4)
    pub margin: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { base_spacing: 32.0, margin: 4.0 }
    }
}

/// Timing handed to the motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Duration of one path step (default: 250ms)
    pub step_duration_ms: f64,
    /// Height of the "no movement" bounce (default: 18)
    pub bounce_height: f32,
    /// Duration of the bounce (default: 180ms)
    pub bounce_duration_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { step_duration_ms: 250.0, bounce_height: 18.0, bounce_duration_ms: 180.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub seats: SeatConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

impl EngineConfig {
    /// Small displays: shorter seat strips and a tighter token grid.
    pub fn compact() -> Self {
        let mut cfg = Self::default();
        cfg.seats.edge_join_margin = 80.0;
        cfg.seats.strip_thickness = 220.0;
        cfg.seats.strip_length = 360.0;
        cfg.grid.base_spacing = 24.0;
        cfg.grid.margin = 2.0;
        cfg.motion.step_duration_ms = 180.0;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
