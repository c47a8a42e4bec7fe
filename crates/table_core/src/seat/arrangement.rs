//! Order-preserving seat arrangement along one edge.
//!
//! Requests are clamped into their own feasible center range, sorted, then
//! relaxed with two forward/backward rounds. A rigid shift fixes any leftover
//! overshoot at either end, and the separation invariant is verified before
//! the centers are handed back in request order.

use serde::{Deserialize, Serialize};

use crate::error::ArrangeError;
use crate::geometry::{Edge, Rect};

use super::edge_resolver::clamp_soft;

/// Float slack for the room and separation checks.
pub const ARRANGE_TOLERANCE: f32 = 0.001;

/// Seats shorter than this are treated as this long.
pub const MIN_SEAT_EXTENT: f32 = 1.0;

/// Fixed number of forward+backward relaxation rounds.
const RELAXATION_ROUNDS: usize = 2;

/// One seat asking for a spot along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatRequest {
    pub desired_center: f32,
    pub extent: f32,
}

impl SeatRequest {
    pub fn new(desired_center: f32, extent: f32) -> Self {
        Self { desired_center, extent }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    original_index: usize,
    center: f32,
    half: f32,
    min_center: f32,
    max_center: f32,
}

/// Resolve `requests` into non-overlapping centers along `edge`, returned in
/// the same order as `requests`.
pub fn arrange(
    edge: Edge,
    bounds: &Rect,
    requests: &[SeatRequest],
) -> Result<Vec<f32>, ArrangeError> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(index) = requests
        .iter()
        .position(|r| !r.desired_center.is_finite() || !r.extent.is_finite())
    {
        return Err(ArrangeError::NonFinite { index });
    }

    let (axis_start, axis_end) = edge.axis_range(bounds);
    let available = axis_end - axis_start;
    if available <= 0.0 {
        return Err(ArrangeError::DegenerateAxis { edge });
    }

    let required: f32 = requests.iter().map(|r| r.extent.max(MIN_SEAT_EXTENT)).sum();
    if required > available + ARRANGE_TOLERANCE {
        log::debug!("[seat] {} edge infeasible: need {} of {}", edge, required, available);
        return Err(ArrangeError::Infeasible { edge, required, available });
    }

    let mut candidates = Vec::with_capacity(requests.len());
    for (index, request) in requests.iter().enumerate() {
        let extent = request.extent.max(MIN_SEAT_EXTENT);
        let half = extent / 2.0;
        let min_center = axis_start + half;
        let max_center = axis_end - half;
        if min_center > max_center {
            return Err(ArrangeError::SeatTooLong { index, extent, available });
        }

        candidates.push(Candidate {
            original_index: index,
            center: clamp_soft(request.desired_center, min_center, max_center),
            half,
            min_center,
            max_center,
        });
    }

    // Visual order: clamped desired center, then claim order.
    candidates.sort_by(|a, b| {
        a.center.total_cmp(&b.center).then(a.original_index.cmp(&b.original_index))
    });

    for _ in 0..RELAXATION_ROUNDS {
        push_forward(&mut candidates);
        pull_backward(&mut candidates);
    }

    shift_into_range(&mut candidates);

    for pair in candidates.windows(2) {
        let required_gap = pair[0].half + pair[1].half;
        if pair[1].center < pair[0].center + required_gap - ARRANGE_TOLERANCE {
            log::debug!("[seat] {} edge still overlapping after relaxation", edge);
            return Err(ArrangeError::Infeasible { edge, required, available });
        }
    }

    let mut centers = vec![0.0; candidates.len()];
    for candidate in &candidates {
        centers[candidate.original_index] = candidate.center;
    }
    Ok(centers)
}

/// Left to right: push each seat clear of its left neighbour.
fn push_forward(seats: &mut [Candidate]) {
    let first = &mut seats[0];
    first.center = clamp_soft(first.center, first.min_center, first.max_center);

    for i in 1..seats.len() {
        let min_position = seats[i - 1].center + seats[i - 1].half + seats[i].half;
        let seat = &mut seats[i];
        if seat.center < min_position {
            seat.center = min_position;
        }
        seat.center = clamp_soft(seat.center, seat.min_center, seat.max_center);
    }
}

/// Right to left: pull each seat clear of its right neighbour.
fn pull_backward(seats: &mut [Candidate]) {
    let last_index = seats.len() - 1;
    let last = &mut seats[last_index];
    last.center = clamp_soft(last.center, last.min_center, last.max_center);

    for i in (0..last_index).rev() {
        let max_position = seats[i + 1].center - (seats[i + 1].half + seats[i].half);
        let seat = &mut seats[i];
        if seat.center > max_position {
            seat.center = max_position;
        }
        seat.center = clamp_soft(seat.center, seat.min_center, seat.max_center);
    }
}

/// Rigidly move the whole row back inside when an end still overshoots.
fn shift_into_range(seats: &mut [Candidate]) {
    let last = seats[seats.len() - 1];
    if last.center > last.max_center {
        let shift = last.center - last.max_center;
        seats.iter_mut().for_each(|s| s.center -= shift);
    }

    let first = seats[0];
    if first.center < first.min_center {
        let shift = first.min_center - first.center;
        seats.iter_mut().for_each(|s| s.center += shift);
    }
}
