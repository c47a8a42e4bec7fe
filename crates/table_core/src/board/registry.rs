//! Session-scoped bookkeeping of where every token sits and who owns it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::location::BoardLocation;
use super::token::{Occupant, Token, TokenId};

/// Locations whose occupancy changed because of one placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyChange {
    pub token: TokenId,
    /// Location the token left, if it moved away from one.
    pub vacated: Option<BoardLocation>,
    pub entered: BoardLocation,
}

impl OccupancyChange {
    /// Every location that needs its grid recomputed: vacated first.
    pub fn changed_locations(&self) -> Vec<BoardLocation> {
        let mut locations = Vec::with_capacity(2);
        if let Some(vacated) = &self.vacated {
            locations.push(vacated.clone());
        }
        locations.push(self.entered.clone());
        locations
    }
}

#[derive(Debug, Clone)]
struct Placement {
    token: Token,
    owner: Uuid,
    location: BoardLocation,
}

/// Token → location and token ↔ owner maps for one game session.
///
/// Not synchronised: callers must not place the same token from two places
/// at once.
#[derive(Debug, Clone, Default)]
pub struct PlacementRegistry {
    placements: HashMap<TokenId, Placement>,
    owner_tokens: HashMap<Uuid, TokenId>,
}

impl PlacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `token` at `location` under `owner`.
    pub fn place(&mut self, owner: Uuid, token: Token, location: BoardLocation) -> OccupancyChange {
        let previous = self.placements.insert(
            token.id,
            Placement { token, owner, location: location.clone() },
        );

        let vacated = match previous {
            Some(prev) => {
                if prev.owner != owner && self.owner_tokens.get(&prev.owner) == Some(&token.id) {
                    self.owner_tokens.remove(&prev.owner);
                }
                (prev.location != location).then_some(prev.location)
            }
            None => None,
        };
        self.owner_tokens.insert(owner, token.id);

        OccupancyChange { token: token.id, vacated, entered: location }
    }

    pub fn current_location(&self, token: TokenId) -> Option<&BoardLocation> {
        self.placements.get(&token).map(|p| &p.location)
    }

    pub fn owner_of(&self, token: TokenId) -> Option<Uuid> {
        self.placements.get(&token).map(|p| p.owner)
    }

    /// Most recently placed token of `owner`.
    pub fn token_for_owner(&self, owner: Uuid) -> Option<TokenId> {
        self.owner_tokens.get(&owner).copied()
    }

    /// Tokens currently at `location`, in no particular order.
    pub fn occupants(&self, location: &BoardLocation) -> Vec<Occupant> {
        self.placements
            .values()
            .filter(|p| &p.location == location)
            .map(|p| Occupant { token: p.token, owner: p.owner })
            .collect()
    }

    pub fn tokens(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.placements.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Forget everything (new game session).
    pub fn clear(&mut self) {
        self.placements.clear();
        self.owner_tokens.clear();
    }
}
