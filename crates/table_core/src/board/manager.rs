//! Board manager: token placement, shared-tile reflow and path moves.

use std::cell::{Ref, RefCell};
use std::collections::HashSet;

use uuid::Uuid;

use crate::config::{EngineConfig, GridConfig, MotionConfig};
use crate::geometry::Point;

use super::location::{BoardLocation, BoardPath};
use super::ports::{MarkerTable, MotionSink, SpaceProjector};
use super::reflow::compute_grid_offsets;
use super::registry::{OccupancyChange, PlacementRegistry};
use super::token::{Occupant, Token, TokenId};

/// Places and moves tokens for one game session.
///
/// All methods take `&self` so a path move can be awaited while other
/// tokens are placed or moved on the same tick. The registry is only
/// borrowed between suspension points, never across one.
pub struct BoardManager<M, P, S> {
    registry: RefCell<PlacementRegistry>,
    /// Tokens mid-path. Reflow leaves them to the motion controller.
    moving: RefCell<HashSet<TokenId>>,
    markers: M,
    projector: P,
    motion: S,
    grid: GridConfig,
    timing: MotionConfig,
}

impl<M, P, S> BoardManager<M, P, S>
where
    M: MarkerTable,
    P: SpaceProjector,
    S: MotionSink,
{
    pub fn new(markers: M, projector: P, motion: S) -> Self {
        Self::with_config(markers, projector, motion, &EngineConfig::default())
    }

    pub fn with_config(markers: M, projector: P, motion: S, config: &EngineConfig) -> Self {
        Self {
            registry: RefCell::new(PlacementRegistry::new()),
            moving: RefCell::new(HashSet::new()),
            markers,
            projector,
            motion,
            grid: config.grid,
            timing: config.motion,
        }
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    pub fn motion(&self) -> &S {
        &self.motion
    }

    /// Read-only view of the placement registry.
    ///
    /// Drop the guard before the next call that places a token.
    pub fn registry(&self) -> Ref<'_, PlacementRegistry> {
        self.registry.borrow()
    }

    /// World point of `location`, before any grid offset.
    ///
    /// An empty marker id means "relative to the board root". Unknown markers
    /// fall back to the root with a warning.
    pub fn world_position_of(&self, location: &BoardLocation) -> Point {
        if !location.has_marker() {
            return self.markers.root() + location.offset;
        }

        match self.markers.resolve(&location.marker_id) {
            Some(marker) => marker + location.offset,
            None => {
                log::warn!("[board] marker not found: {}", location.marker_id);
                self.markers.root() + location.offset
            }
        }
    }

    pub fn current_location(&self, token: TokenId) -> Option<BoardLocation> {
        self.registry.borrow().current_location(token).cloned()
    }

    pub fn token_for_owner(&self, owner: Uuid) -> Option<TokenId> {
        self.registry.borrow().token_for_owner(owner)
    }

    pub fn owner_of(&self, token: TokenId) -> Option<Uuid> {
        self.registry.borrow().owner_of(token)
    }

    /// Put `token` at `location` immediately and lay out both the location it
    /// left and the one it entered.
    pub fn place_token(&self, owner: Uuid, token: Token, location: BoardLocation) -> OccupancyChange {
        let change = self.registry.borrow_mut().place(owner, token, location);
        for changed in change.changed_locations() {
            self.reflow_location(&changed);
        }
        change
    }

    /// Snap every occupant of `location` to its grid slot.
    ///
    /// Tokens that are walking a path away from `location` keep their
    /// rendered position; they still count for the layout.
    pub fn reflow_location(&self, location: &BoardLocation) {
        let occupants = self.registry.borrow().occupants(location);
        if occupants.is_empty() {
            return;
        }

        let world = self.world_position_of(location);
        for (token, offset) in compute_grid_offsets(&occupants, &self.grid) {
            if self.moving.borrow().contains(&token) {
                continue;
            }
            let local = self.projector.to_local(token, world) + offset;
            self.motion.set_position(token, local);
        }
    }

    /// Walk `token` through `path`, one step per completed animation.
    ///
    /// The registry is updated once, after the last step; until then the
    /// token still belongs to its previous location. An empty path plays the
    /// bounce and changes nothing. Dropping the future mid-path leaves the
    /// registry as it was before the move.
    pub async fn move_path(
        &self,
        owner: Uuid,
        token: Token,
        path: &BoardPath,
    ) -> Option<OccupancyChange> {
        let Some(last) = path.last() else {
            log::debug!("[board] {} has nowhere to go, bouncing", token.id);
            self.motion
                .bounce(token.id, self.timing.bounce_height, self.timing.bounce_duration_ms)
                .await;
            return None;
        };

        let walking = MoveGuard::enter(&self.moving, token.id);
        for (index, location) in path.iter().enumerate() {
            let from = self.motion.position(token.id);
            let to = self.step_target(owner, token, location);
            log::trace!(
                "[board] {} step {}/{} to {} ({}, {})",
                token.id,
                index + 1,
                path.len(),
                location,
                to.x,
                to.y
            );
            self.motion.animate_to(token.id, from, to, self.timing.step_duration_ms).await;
        }
        drop(walking);

        Some(self.place_token(owner, token, last.clone()))
    }

    /// Where `token` would sit at `location`, sharing the tile with whoever
    /// is already there.
    fn step_target(&self, owner: Uuid, token: Token, location: &BoardLocation) -> Point {
        let mut occupants: Vec<Occupant> = self
            .registry
            .borrow()
            .occupants(location)
            .into_iter()
            .filter(|o| o.token.id != token.id)
            .collect();
        occupants.push(Occupant { token, owner });

        let offset = compute_grid_offsets(&occupants, &self.grid)
            .into_iter()
            .find(|(id, _)| *id == token.id)
            .map(|(_, offset)| offset)
            .unwrap_or(Point::ZERO);

        self.projector.to_local(token.id, self.world_position_of(location)) + offset
    }

    pub fn is_moving(&self, token: TokenId) -> bool {
        self.moving.borrow().contains(&token)
    }

    /// Forget every placement (session teardown).
    pub fn reset(&self) {
        self.registry.borrow_mut().clear();
        log::info!("[board] session reset");
    }
}

/// Marks a token as mid-path until dropped, including when the move future
/// itself is dropped before settling.
struct MoveGuard<'a> {
    moving: &'a RefCell<HashSet<TokenId>>,
    token: TokenId,
}

impl<'a> MoveGuard<'a> {
    fn enter(moving: &'a RefCell<HashSet<TokenId>>, token: TokenId) -> Self {
        moving.borrow_mut().insert(token);
        Self { moving, token }
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.moving.borrow_mut().remove(&self.token);
    }
}
