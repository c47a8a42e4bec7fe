use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SeatConfig;
use crate::error::Result;
use crate::geometry::{Edge, Point, Rect};
use crate::seat::{
    arrange, build_seat_zone, distance_to_nearest_edge, nearest_edge, project_to_edge,
    seat_zone_from_axis_center, SeatLayout, SeatRequest, SeatZone,
};

use super::{check_schema, default_schema_version, SCHEMA_VERSION};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestEdgeRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub point: Point,
    pub bounds: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestEdgeResponse {
    pub schema_version: u8,
    pub edge: Edge,
    pub distance: f32,
    /// `point` dropped perpendicularly onto the edge line.
    pub projected: Point,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatZoneRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub point: Point,
    pub bounds: Rect,
    #[serde(default)]
    pub seats: SeatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatZoneResponse {
    pub schema_version: u8,
    pub edge: Edge,
    pub distance: f32,
    /// Whether the touch is close enough to the edge to count as a join.
    pub within_join_margin: bool,
    pub zone: SeatZone,
    pub indicator: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrangeSeatsRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub edge: Edge,
    pub bounds: Rect,
    pub requests: Vec<SeatRequest>,
    #[serde(default)]
    pub seats: SeatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrangeSeatsResponse {
    pub schema_version: u8,
    pub feasible: bool,
    /// One center per request, in request order. Empty when infeasible.
    pub centers: Vec<f32>,
    pub zones: Vec<SeatZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One step of a scripted lobby session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LobbyAction {
    Claim { player: Uuid, point: Point },
    Release { player: Uuid },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub bounds: Rect,
    #[serde(default)]
    pub seats: SeatConfig,
    pub actions: Vec<LobbyAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LobbyOutcome {
    pub index: usize,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moved: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatedPlayer {
    pub player: Uuid,
    pub zone: SeatZone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyResponse {
    pub schema_version: u8,
    pub outcomes: Vec<LobbyOutcome>,
    /// Final seats, in claim order.
    pub seats: Vec<SeatedPlayer>,
}

pub fn nearest_edge_json(request_json: &str) -> Result<String> {
    let request: NearestEdgeRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let edge = nearest_edge(request.point, &request.bounds);
    let response = NearestEdgeResponse {
        schema_version: SCHEMA_VERSION,
        edge,
        distance: distance_to_nearest_edge(request.point, &request.bounds),
        projected: project_to_edge(request.point, edge, &request.bounds),
    };
    Ok(serde_json::to_string(&response)?)
}

pub fn seat_zone_json(request_json: &str) -> Result<String> {
    let request: SeatZoneRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let cfg = &request.seats;
    let edge = nearest_edge(request.point, &request.bounds);
    let distance = distance_to_nearest_edge(request.point, &request.bounds);
    let zone = build_seat_zone(
        edge,
        &request.bounds,
        cfg.strip_thickness,
        cfg.strip_length,
        request.point,
    );

    let response = SeatZoneResponse {
        schema_version: SCHEMA_VERSION,
        edge,
        distance,
        within_join_margin: distance <= cfg.edge_join_margin,
        zone,
        indicator: zone.indicator_rect(cfg.indicator_thickness, cfg.min_indicator_thickness),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Arrange seat requests along one edge.
///
/// Running out of room is a normal answer (`feasible: false`); only
/// malformed input such as NaN centers is an error.
pub fn arrange_seats_json(request_json: &str) -> Result<String> {
    let request: ArrangeSeatsRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let response = match arrange(request.edge, &request.bounds, &request.requests) {
        Ok(centers) => {
            let zones = centers
                .iter()
                .zip(&request.requests)
                .map(|(center, req)| {
                    seat_zone_from_axis_center(
                        request.edge,
                        &request.bounds,
                        request.seats.strip_thickness,
                        req.extent,
                        *center,
                    )
                })
                .collect();
            ArrangeSeatsResponse {
                schema_version: SCHEMA_VERSION,
                feasible: true,
                centers,
                zones,
                reason: None,
            }
        }
        Err(err) if err.is_infeasible() => ArrangeSeatsResponse {
            schema_version: SCHEMA_VERSION,
            feasible: false,
            centers: Vec::new(),
            zones: Vec::new(),
            reason: Some(err.to_string()),
        },
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Replay a sequence of claims and releases against a fresh lobby.
///
/// Rejected actions are reported per step and leave the lobby unchanged.
pub fn lobby_json(request_json: &str) -> Result<String> {
    let request: LobbyRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut layout = SeatLayout::new(request.seats);
    let outcomes = request
        .actions
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let result = match action {
                LobbyAction::Claim { player, point } => {
                    layout.claim(*player, *point, &request.bounds).map(|claim| claim.moved)
                }
                LobbyAction::Release { player } => layout.release(*player).map(|_| Vec::new()),
            };
            match result {
                Ok(moved) => LobbyOutcome { index, ok: true, moved, error: None },
                Err(err) => LobbyOutcome {
                    index,
                    ok: false,
                    moved: Vec::new(),
                    error: Some(err.to_string()),
                },
            }
        })
        .collect();

    let seats = layout.iter().map(|(player, zone)| SeatedPlayer { player, zone: *zone }).collect();
    let response = LobbyResponse { schema_version: SCHEMA_VERSION, outcomes, seats };
    Ok(serde_json::to_string(&response)?)
}
