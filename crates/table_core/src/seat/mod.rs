//! # Seat placement
//!
//! Turns raw touch points into seat strips anchored to one edge of the
//! shared screen, and keeps the strips on an edge from overlapping.
//!
//! Data flow: touch point → [`nearest_edge`] → [`build_seat_zone`] →
//! competing zones on the same edge → [`arrange`] →
//! [`seat_zone_from_axis_center`] for every resolved center.
//! [`SeatLayout`] wires the whole flow for a lobby session.

pub mod arrangement;
pub mod edge_resolver;
pub mod layout;
pub mod zone;

pub use arrangement::{arrange, SeatRequest, ARRANGE_TOLERANCE, MIN_SEAT_EXTENT};
pub use edge_resolver::{
    build_seat_zone, distance_to_nearest_edge, edge_distances, nearest_edge, project_to_edge,
    seat_zone_from_axis_center,
};
pub use layout::{SeatClaim, SeatLayout};
pub use zone::SeatZone;
