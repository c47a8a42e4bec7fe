use serde::{Deserialize, Serialize};

use crate::geometry::{Edge, Point, Rect};

/// The rectangular screen region assigned to one seated player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatZone {
    pub edge: Edge,
    pub region: Rect,
    /// 0, 90, 180 or 270, keyed by `edge`.
    pub rotation_degrees: f32,
    /// Touch anchor projected onto the edge line.
    pub anchor: Point,
}

impl SeatZone {
    /// Center of the region along the edge's axis.
    pub fn axis_center(&self) -> f32 {
        let center = self.region.center();
        if self.edge.is_horizontal() {
            center.x
        } else {
            center.y
        }
    }

    /// Length of the region along the edge's axis.
    pub fn length(&self) -> f32 {
        if self.edge.is_horizontal() {
            self.region.size.width
        } else {
            self.region.size.height
        }
    }

    /// Depth of the region, perpendicular to the edge.
    pub fn thickness(&self) -> f32 {
        if self.edge.is_horizontal() {
            self.region.size.height
        } else {
            self.region.size.width
        }
    }

    /// Thin strip inside the zone hugging its edge, used for the seat
    /// indicator.
    pub fn indicator_rect(&self, thickness: f32, min_thickness: f32) -> Rect {
        let max_thickness = self.thickness().max(1.0);
        let thickness = thickness.max(1.0).min(max_thickness).max(min_thickness);
        let r = &self.region;

        match self.edge {
            Edge::Bottom => Rect::new(r.min_x(), r.max_y() - thickness, r.size.width, thickness),
            Edge::Top => Rect::new(r.min_x(), r.min_y(), r.size.width, thickness),
            Edge::Left => Rect::new(r.min_x(), r.min_y(), thickness, r.size.height),
            Edge::Right => Rect::new(r.max_x() - thickness, r.min_y(), thickness, r.size.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(edge: Edge, region: Rect) -> SeatZone {
        SeatZone { edge, region, rotation_degrees: edge.rotation_degrees(), anchor: Point::ZERO }
    }

    #[test]
    fn test_axis_center_follows_edge_axis() {
        let bottom = zone(Edge::Bottom, Rect::new(100.0, 760.0, 520.0, 320.0));
        assert_eq!(bottom.axis_center(), 360.0);

        let left = zone(Edge::Left, Rect::new(0.0, 200.0, 320.0, 400.0));
        assert_eq!(left.axis_center(), 400.0);
    }

    #[test]
    fn test_indicator_hugs_edge() {
        let right = zone(Edge::Right, Rect::new(1600.0, 100.0, 320.0, 520.0));
        let rect = right.indicator_rect(12.0, 28.0);
        assert_eq!(rect, Rect::new(1892.0, 100.0, 28.0, 520.0));

        let bottom = zone(Edge::Bottom, Rect::new(0.0, 760.0, 520.0, 320.0));
        let rect = bottom.indicator_rect(40.0, 28.0);
        assert_eq!(rect, Rect::new(0.0, 1040.0, 520.0, 40.0));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = zone(Edge::Right, Rect::new(10.0, 20.0, 300.0, 120.0));
        let mut copy = original;
        copy.region = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert_ne!(original.region, copy.region);
        assert_eq!(original.edge, copy.edge);
    }
}
