//! JSON entry points for hosts that cannot link the Rust types directly
//! (engine bindings, scripts, the `table_cli` binary).
//!
//! Every request carries a `schema_version`; responses echo it.

pub mod board_json;
pub mod seat_json;

pub use board_json::{grid_offsets_json, GridOffsetsRequest, GridOffsetsResponse, TokenOffset};
pub use seat_json::{
    arrange_seats_json, lobby_json, nearest_edge_json, seat_zone_json, ArrangeSeatsRequest,
    ArrangeSeatsResponse, LobbyAction, LobbyOutcome, LobbyRequest, LobbyResponse,
    NearestEdgeRequest, NearestEdgeResponse, SeatZoneRequest, SeatZoneResponse,
};

use crate::error::{ApiError, Result};

/// Request/response layout version understood by this build.
pub const SCHEMA_VERSION: u8 = 1;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

fn check_schema(version: u8) -> Result<()> {
    if version != SCHEMA_VERSION {
        return Err(ApiError::UnsupportedSchema(version));
    }
    Ok(())
}
