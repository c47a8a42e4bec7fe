//! # table_core - Seat and Token Layout Engine for a Shared Tabletop Screen
//!
//! Players gather around one large touch screen. This crate decides where
//! each player's seat strip goes when they touch near an edge, and where game
//! tokens sit and walk on a board, without knowing anything about rendering.
//!
//! ## Modules
//! - [`geometry`] - points, rectangles and the four screen edges
//! - [`seat`] - edge resolution, seat zones, the seat arrangement solver and
//!   the lobby seat layout
//! - [`board`] - board locations, the placement registry, shared-tile grid
//!   reflow and the async path mover
//! - [`config`] - tuning constants and presets
//! - [`api`] - JSON entry points for engine bindings and the CLI
//!
//! The engine runs on the host's UI thread. Nothing here spawns threads or
//! installs a logger; it logs through the `log` facade.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod seat;

// Re-export main API functions
pub use api::{
    arrange_seats_json, grid_offsets_json, lobby_json, nearest_edge_json, seat_zone_json,
    SCHEMA_VERSION,
};
pub use error::{ApiError, ArrangeError, Result, SeatClaimError};

// Re-export geometry
pub use geometry::{Edge, Point, Rect, Size};

// Re-export seat placement
pub use seat::{
    arrange, build_seat_zone, distance_to_nearest_edge, nearest_edge, seat_zone_from_axis_center,
    SeatClaim, SeatLayout, SeatRequest, SeatZone,
};

// Re-export board types
pub use board::{
    BoardLocation, BoardManager, BoardPath, MarkerTable, MotionSink, OccupancyChange,
    PlacementRegistry, SpaceProjector, Token, TokenId,
};

pub use config::EngineConfig;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
