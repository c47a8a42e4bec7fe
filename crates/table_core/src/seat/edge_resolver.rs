//! Touch point → edge → seat zone.
//!
//! Pure functions over the bounding rectangle handed in by the caller; no
//! state is cached between calls.

use crate::geometry::{approx_eq, Edge, Point, Rect};

use super::zone::SeatZone;

/// Clamp that never panics on an inverted range; `hi` wins.
#[inline]
pub(crate) fn clamp_soft(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Signed distance from `point` to each edge of `bounds`, in priority order.
pub fn edge_distances(point: Point, bounds: &Rect) -> [(Edge, f32); 4] {
    [
        (Edge::Bottom, bounds.max_y() - point.y),
        (Edge::Right, bounds.max_x() - point.x),
        (Edge::Top, point.y - bounds.min_y()),
        (Edge::Left, point.x - bounds.min_x()),
    ]
}

/// Edge of `bounds` closest to `point`. Near-equal distances go to the
/// higher-priority edge.
pub fn nearest_edge(point: Point, bounds: &Rect) -> Edge {
    let distances = edge_distances(point, bounds);
    let mut best = distances[0];

    for &candidate in &distances[1..] {
        if candidate.1 < best.1 && !approx_eq(candidate.1, best.1) {
            best = candidate;
            continue;
        }

        if approx_eq(candidate.1, best.1) && candidate.0 < best.0 {
            best = candidate;
        }
    }

    best.0
}

/// Distance from `point` to whichever edge is closest.
pub fn distance_to_nearest_edge(point: Point, bounds: &Rect) -> f32 {
    edge_distances(point, bounds).iter().map(|(_, d)| *d).fold(f32::INFINITY, f32::min)
}

/// Project `point` onto the line of `edge`, clamped into `bounds`.
pub fn project_to_edge(point: Point, edge: Edge, bounds: &Rect) -> Point {
    let x = clamp_soft(point.x, bounds.min_x(), bounds.max_x());
    let y = clamp_soft(point.y, bounds.min_y(), bounds.max_y());

    match edge {
        Edge::Bottom => Point::new(x, bounds.max_y()),
        Edge::Top => Point::new(x, bounds.min_y()),
        Edge::Left => Point::new(bounds.min_x(), y),
        Edge::Right => Point::new(bounds.max_x(), y),
    }
}

/// Build the seat strip hugging `edge`, centered on `anchor` along the edge
/// and kept fully inside `bounds`.
pub fn build_seat_zone(
    edge: Edge,
    bounds: &Rect,
    thickness: f32,
    length: f32,
    anchor: Point,
) -> SeatZone {
    let thickness = clamp_soft(thickness, 1.0, edge.depth(bounds));
    let (axis_start, axis_end) = edge.axis_range(bounds);
    let length = clamp_soft(length, 1.0, axis_end - axis_start);
    let anchor = project_to_edge(anchor, edge, bounds);

    let region = match edge {
        Edge::Bottom => {
            let x = strip_start(axis_start, axis_end, length, anchor.x);
            Rect::new(x, bounds.max_y() - thickness, length, thickness)
        }
        Edge::Top => {
            let x = strip_start(axis_start, axis_end, length, anchor.x);
            Rect::new(x, bounds.min_y(), length, thickness)
        }
        Edge::Left => {
            let y = strip_start(axis_start, axis_end, length, anchor.y);
            Rect::new(bounds.min_x(), y, thickness, length)
        }
        Edge::Right => {
            let y = strip_start(axis_start, axis_end, length, anchor.y);
            Rect::new(bounds.max_x() - thickness, y, thickness, length)
        }
    };

    SeatZone { edge, region, rotation_degrees: edge.rotation_degrees(), anchor }
}

/// Rebuild a seat zone whose center along the edge is `axis_center`, e.g.
/// from a center produced by [`super::arrange`].
pub fn seat_zone_from_axis_center(
    edge: Edge,
    bounds: &Rect,
    thickness: f32,
    length: f32,
    axis_center: f32,
) -> SeatZone {
    let (axis_start, axis_end) = edge.axis_range(bounds);
    let half = clamp_soft(length, 1.0, axis_end - axis_start) / 2.0;
    let center = clamp_soft(axis_center, axis_start + half, axis_end - half);

    let anchor = match edge {
        Edge::Bottom => Point::new(center, bounds.max_y()),
        Edge::Top => Point::new(center, bounds.min_y()),
        Edge::Left => Point::new(bounds.min_x(), center),
        Edge::Right => Point::new(bounds.max_x(), center),
    };

    build_seat_zone(edge, bounds, thickness, length, anchor)
}

fn strip_start(axis_start: f32, axis_end: f32, length: f32, anchor: f32) -> f32 {
    clamp_soft(anchor - length / 2.0, axis_start, axis_end - length)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    #[test]
    fn test_nearest_edge_each_side() {
        assert_eq!(nearest_edge(Point::new(1000.0, 1075.0), &VIEWPORT), Edge::Bottom);
        assert_eq!(nearest_edge(Point::new(1905.0, 400.0), &VIEWPORT), Edge::Right);
        assert_eq!(nearest_edge(Point::new(960.0, 10.0), &VIEWPORT), Edge::Top);
        assert_eq!(nearest_edge(Point::new(5.0, 540.0), &VIEWPORT), Edge::Left);
    }

    #[test]
    fn test_nearest_edge_tie_prefers_bottom() {
        // 20 from Bottom and 20 from Right.
        assert_eq!(nearest_edge(Point::new(1900.0, 1060.0), &VIEWPORT), Edge::Bottom);
        // 20 from Top and 20 from Left: Top outranks Left.
        assert_eq!(nearest_edge(Point::new(20.0, 20.0), &VIEWPORT), Edge::Top);
        // Dead center of a square: all four tie.
        let square = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(nearest_edge(Point::new(50.0, 50.0), &square), Edge::Bottom);
    }

    #[test]
    fn test_distance_to_nearest_edge() {
        assert_eq!(distance_to_nearest_edge(Point::new(100.0, 200.0), &VIEWPORT), 100.0);
        assert_eq!(distance_to_nearest_edge(Point::new(960.0, 1070.0), &VIEWPORT), 10.0);
    }

    #[test]
    fn test_bottom_zone_region() {
        let zone = build_seat_zone(Edge::Bottom, &VIEWPORT, 300.0, 600.0, Point::new(100.0, 900.0));
        assert_eq!(zone.edge, Edge::Bottom);
        assert_eq!(zone.rotation_degrees, 0.0);
        assert!((zone.region.min_y() - (1080.0 - 300.0)).abs() < 0.001);
        assert_eq!(zone.region.size.height, 300.0);
        assert_eq!(zone.region.size.width, 600.0);
        // Anchor at x=100 would push the strip off-screen; it is clamped to the left.
        assert_eq!(zone.region.min_x(), 0.0);
    }

    #[test]
    fn test_thickness_clamped_to_viewport() {
        let zone = build_seat_zone(Edge::Top, &VIEWPORT, 2000.0, 400.0, Point::new(50.0, 40.0));
        assert_eq!(zone.region.size.height, 1080.0);
    }

    #[test]
    fn test_length_clamped_to_viewport() {
        let zone = build_seat_zone(Edge::Bottom, &VIEWPORT, 200.0, 5000.0, Point::new(960.0, 900.0));
        assert_eq!(zone.region.size.width, 1920.0);
        assert_eq!(zone.region.min_x(), 0.0);
    }

    #[test]
    fn test_anchor_projected_onto_edge() {
        let anchor = Point::new(800.0, 1060.0);
        let zone = build_seat_zone(Edge::Bottom, &VIEWPORT, 250.0, 400.0, anchor);
        assert_eq!(zone.anchor, Point::new(800.0, 1080.0));
    }

    #[test]
    fn test_right_strip_centered_on_anchor() {
        let anchor = Point::new(1500.0, 400.0);
        let zone = build_seat_zone(Edge::Right, &VIEWPORT, 200.0, 500.0, anchor);
        assert_eq!(zone.region.min_x(), 1720.0);
        assert!((zone.region.min_y() + 250.0 - anchor.y).abs() < 0.001);
        assert_eq!(zone.region.size.height, 500.0);
        assert_eq!(zone.anchor.x, 1920.0);
        assert_eq!(zone.rotation_degrees, 270.0);
    }

    #[test]
    fn test_degenerate_bounds_do_not_panic() {
        let flat = Rect::new(10.0, 10.0, 0.0, 0.0);
        let zone = build_seat_zone(Edge::Left, &flat, 300.0, 500.0, Point::new(99.0, 99.0));
        assert_eq!(zone.region.size.width, 0.0);
        assert_eq!(zone.region.size.height, 0.0);
        assert_eq!(zone.region.position, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_zone_from_axis_center() {
        let zone = seat_zone_from_axis_center(Edge::Bottom, &VIEWPORT, 320.0, 520.0, 1480.0);
        assert!((zone.axis_center() - 1480.0).abs() < 0.001);
        assert_eq!(zone.anchor, Point::new(1480.0, 1080.0));

        // Centers too close to the corner are pulled back inside.
        let zone = seat_zone_from_axis_center(Edge::Left, &VIEWPORT, 320.0, 400.0, 0.0);
        assert_eq!(zone.region.min_y(), 0.0);
        assert_eq!(zone.axis_center(), 200.0);
    }
}
