//! Grid layout of tokens sharing one board location.

use crate::config::GridConfig;
use crate::geometry::Point;

use super::token::{Occupant, TokenId};

/// Offsets of every occupant relative to the location's reference point.
///
/// Occupants are ordered by owner, then token id, so the same set always
/// produces the same picture. The grid is `ceil(sqrt(n))` columns wide and
/// filled row-major; offsets are re-centred on their mean so a partially
/// filled last row does not drag the group off the reference point.
pub fn compute_grid_offsets(occupants: &[Occupant], config: &GridConfig) -> Vec<(TokenId, Point)> {
    match occupants {
        [] => return Vec::new(),
        [only] => return vec![(only.token.id, Point::ZERO)],
        _ => {}
    }

    let mut ordered: Vec<&Occupant> = occupants.iter().collect();
    ordered.sort_by(|a, b| a.owner.cmp(&b.owner).then(a.token.id.cmp(&b.token.id)));

    let spacing = grid_spacing(occupants, config);
    let count = ordered.len();
    let columns = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);
    let total_width = (columns - 1) as f32 * spacing;
    let total_height = (rows - 1) as f32 * spacing;

    let mut offsets: Vec<(TokenId, Point)> = ordered
        .iter()
        .enumerate()
        .map(|(i, occupant)| {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            let offset = Point::new(col * spacing - total_width / 2.0, row * spacing - total_height / 2.0);
            (occupant.token.id, offset)
        })
        .collect();

    let sum = offsets.iter().fold(Point::ZERO, |acc, (_, p)| acc + *p);
    let centroid = sum / count as f32;
    for (_, offset) in &mut offsets {
        *offset = *offset - centroid;
    }

    log::debug!(
        "[board] reflow {} tokens on a {}x{} grid, spacing {}",
        count,
        columns,
        rows,
        spacing
    );
    offsets
}

/// `max(base_spacing, largest footprint diameter + margin)`.
pub fn grid_spacing(occupants: &[Occupant], config: &GridConfig) -> f32 {
    let widest = occupants.iter().map(|o| o.token.diameter()).fold(0.0f32, f32::max);
    if widest > 0.0 {
        config.base_spacing.max(widest + config.margin)
    } else {
        config.base_spacing
    }
}
