use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle of a movable piece. The host maps it to its own scene node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TokenId(pub u32);

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "token#{}", self.0)
    }
}

/// A piece on the board and its spacing footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    /// Radius used for spacing on shared tiles. `None` keeps the grid's base
    /// spacing.
    #[serde(default)]
    pub footprint_radius: Option<f32>,
}

impl Token {
    pub fn new(id: u32) -> Self {
        Self { id: TokenId(id), footprint_radius: None }
    }

    pub fn with_footprint(mut self, radius: f32) -> Self {
        self.footprint_radius = Some(radius);
        self
    }

    pub fn diameter(&self) -> f32 {
        self.footprint_radius.map(|r| r.max(0.0) * 2.0).unwrap_or(0.0)
    }
}

/// A token together with the player controlling it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub token: Token,
    pub owner: Uuid,
}
