use thiserror::Error;
use uuid::Uuid;

use crate::geometry::Edge;

/// Why a set of seat requests could not be laid out along an edge.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrangeError {
    #[error("Not enough room on the {edge} edge: need {required}, have {available}")]
    Infeasible { edge: Edge, required: f32, available: f32 },

    #[error("The {edge} edge has no usable length")]
    DegenerateAxis { edge: Edge },

    #[error("Seat {index} is {extent} long but the edge only offers {available}")]
    SeatTooLong { index: usize, extent: f32, available: f32 },

    #[error("Seat request {index} has a non-finite center or extent")]
    NonFinite { index: usize },
}

impl ArrangeError {
    /// True for the "space genuinely insufficient" class, false for caller
    /// mistakes such as NaN input.
    pub fn is_infeasible(&self) -> bool {
        !matches!(self, ArrangeError::NonFinite { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeatClaimError {
    #[error("Touch is {distance:.1} from the nearest edge (join margin {margin:.1})")]
    TooFarFromEdge { distance: f32, margin: f32 },

    #[error("Not enough space on the {edge} edge")]
    NoRoom {
        edge: Edge,
        #[source]
        source: ArrangeError,
    },

    #[error("Player {0} has no seat")]
    UnknownPlayer(Uuid),
}

/// Errors surfaced by the JSON entry points.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error(transparent)]
    Arrange(#[from] ArrangeError),
}

pub type Result<T> = std::result::Result<T, ApiError>;
