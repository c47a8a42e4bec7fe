//! # Board tokens
//!
//! Logical board locations, the session registry of which token sits where,
//! the grid that spreads tokens sharing a location, and the manager that
//! places tokens and walks them along paths through a host motion controller.
//!
//! ## Data flow
//!
//! ```text
//! place_token / move_path
//!        │
//!        ▼
//! PlacementRegistry::place ──► OccupancyChange { vacated, entered }
//!        │
//!        ▼
//! reflow_location (each changed location)
//!        │  MarkerTable::resolve → SpaceProjector::to_local → + grid offset
//!        ▼
//! MotionSink::set_position
//! ```

pub mod location;
pub mod manager;
pub mod ports;
pub mod reflow;
pub mod registry;
pub mod token;

pub use location::{BoardLocation, BoardPath};
pub use manager::BoardManager;
pub use ports::{
    IdentityProjector, InstantMotion, MarkerMap, MarkerTable, MotionSink, OffsetProjector,
    SpaceProjector,
};
pub use reflow::{compute_grid_offsets, grid_spacing};
pub use registry::{OccupancyChange, PlacementRegistry};
pub use token::{Occupant, Token, TokenId};
