//! Lobby seat bookkeeping: turns join gestures into a consistent set of seat
//! zones, re-arranging the seats already on the chosen edge.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SeatConfig;
use crate::error::SeatClaimError;
use crate::geometry::{Edge, Point, Rect};

use super::arrangement::{arrange, SeatRequest};
use super::edge_resolver::{
    build_seat_zone, distance_to_nearest_edge, nearest_edge, seat_zone_from_axis_center,
};
use super::zone::SeatZone;

/// Outcome of a successful claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatClaim {
    pub player: Uuid,
    pub zone: SeatZone,
    /// Players already seated whose zone moved to make room.
    pub moved: Vec<Uuid>,
}

/// Seats of one lobby session, in claim order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatLayout {
    config: SeatConfig,
    seats: Vec<(Uuid, SeatZone)>,
}

impl SeatLayout {
    pub fn new(config: SeatConfig) -> Self {
        Self { config, seats: Vec::new() }
    }

    pub fn config(&self) -> &SeatConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seat(&self, player: Uuid) -> Option<&SeatZone> {
        self.seats.iter().find(|(id, _)| *id == player).map(|(_, zone)| zone)
    }

    /// Seats on `edge`, in claim order.
    pub fn seats_on(&self, edge: Edge) -> impl Iterator<Item = (Uuid, &SeatZone)> + '_ {
        self.seats.iter().filter(move |(_, zone)| zone.edge == edge).map(|(id, zone)| (*id, zone))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Uuid, &SeatZone)> + '_ {
        self.seats.iter().map(|(id, zone)| (*id, zone))
    }

    /// Claim a seat for `player` near `point`.
    ///
    /// Either every affected seat is updated or none is. A player who is
    /// already seated moves to the new seat.
    pub fn claim(
        &mut self,
        player: Uuid,
        point: Point,
        bounds: &Rect,
    ) -> Result<SeatClaim, SeatClaimError> {
        let distance = distance_to_nearest_edge(point, bounds);
        if distance > self.config.edge_join_margin {
            return Err(SeatClaimError::TooFarFromEdge {
                distance,
                margin: self.config.edge_join_margin,
            });
        }

        let edge = nearest_edge(point, bounds);
        let initial = build_seat_zone(
            edge,
            bounds,
            self.config.strip_thickness,
            self.config.strip_length,
            point,
        );

        let neighbours: Vec<(Uuid, SeatZone)> = self
            .seats
            .iter()
            .filter(|(id, zone)| zone.edge == edge && *id != player)
            .copied()
            .collect();

        let mut requests: Vec<SeatRequest> = neighbours
            .iter()
            .map(|(_, zone)| SeatRequest::new(zone.axis_center(), zone.length()))
            .collect();
        requests.push(SeatRequest::new(initial.axis_center(), initial.length()));

        let centers = arrange(edge, bounds, &requests)
            .map_err(|source| SeatClaimError::NoRoom { edge, source })?;

        let mut moved = Vec::new();
        for ((id, zone), center) in neighbours.iter().zip(&centers) {
            let arranged =
                seat_zone_from_axis_center(edge, bounds, zone.thickness(), zone.length(), *center);
            if arranged.region != zone.region {
                moved.push(*id);
            }
            if let Some(slot) = self.seats.iter_mut().find(|(seated, _)| seated == id) {
                slot.1 = arranged;
            }
        }

        let new_center = centers[centers.len() - 1];
        let zone = seat_zone_from_axis_center(
            edge,
            bounds,
            self.config.strip_thickness,
            self.config.strip_length,
            new_center,
        );

        self.seats.retain(|(id, _)| *id != player);
        self.seats.push((player, zone));

        log::info!("[seat] {} claimed a seat near the {} edge ({} moved)", player, edge, moved.len());
        Ok(SeatClaim { player, zone, moved })
    }

    /// Give up `player`'s seat. Remaining seats stay where they are.
    pub fn release(&mut self, player: Uuid) -> Result<SeatZone, SeatClaimError> {
        let index = self
            .seats
            .iter()
            .position(|(id, _)| *id == player)
            .ok_or(SeatClaimError::UnknownPlayer(player))?;
        let (_, zone) = self.seats.remove(index);
        log::info!("[seat] {} released the {} edge seat", player, zone.edge);
        Ok(zone)
    }

    /// Drop every seat (new lobby session).
    pub fn clear(&mut self) {
        self.seats.clear();
    }
}
