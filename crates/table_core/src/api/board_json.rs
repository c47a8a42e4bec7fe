use serde::{Deserialize, Serialize};

use crate::board::{compute_grid_offsets, grid_spacing, Occupant, TokenId};
use crate::config::GridConfig;
use crate::error::Result;
use crate::geometry::Point;

use super::{check_schema, default_schema_version, SCHEMA_VERSION};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridOffsetsRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub occupants: Vec<Occupant>,
    #[serde(default)]
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenOffset {
    pub token: TokenId,
    pub offset: Point,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridOffsetsResponse {
    pub schema_version: u8,
    pub spacing: f32,
    /// Offsets in layout order (owner, then token id).
    pub offsets: Vec<TokenOffset>,
}

pub fn grid_offsets_json(request_json: &str) -> Result<String> {
    let request: GridOffsetsRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let offsets = compute_grid_offsets(&request.occupants, &request.grid)
        .into_iter()
        .map(|(token, offset)| TokenOffset { token, offset })
        .collect();
    let response = GridOffsetsResponse {
        schema_version: SCHEMA_VERSION,
        spacing: grid_spacing(&request.occupants, &request.grid),
        offsets,
    };
    Ok(serde_json::to_string(&response)?)
}
