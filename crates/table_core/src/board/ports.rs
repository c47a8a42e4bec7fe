//! Capabilities the board needs from its host, plus in-memory defaults.
//!
//! The host owns the scene: it knows where markers are, how a world point
//! maps into a token's parent frame, and how to animate a token. The board
//! only talks to it through these traits.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::geometry::Point;

use super::token::TokenId;

/// Marker id → world point lookup.
pub trait MarkerTable {
    /// World point of `marker_id`, `None` if the board has no such marker.
    fn resolve(&self, marker_id: &str) -> Option<Point>;

    /// Anchor used for locations without a marker and as fallback for
    /// unknown markers.
    fn root(&self) -> Point {
        Point::ZERO
    }
}

/// Converts a world point into the local frame a token is rendered in.
pub trait SpaceProjector {
    fn to_local(&self, token: TokenId, world: Point) -> Point;
}

/// Motion controller driving the rendered tokens.
///
/// Futures returned here resolve when the motion has finished. They are
/// polled on the host's UI thread, so they need not be `Send`.
pub trait MotionSink {
    /// Current rendered (local) position of `token`.
    fn position(&self, token: TokenId) -> Point;

    /// Snap `token` to `local` without animating.
    fn set_position(&self, token: TokenId, local: Point);

    fn animate_to(
        &self,
        token: TokenId,
        from: Point,
        to: Point,
        duration_ms: f64,
    ) -> LocalBoxFuture<'_, ()>;

    /// "Acknowledged, nothing to move" feedback.
    fn bounce(&self, token: TokenId, height: f32, duration_ms: f64) -> LocalBoxFuture<'_, ()>;
}

/// Tokens are rendered directly in world space.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjector;

impl SpaceProjector for IdentityProjector {
    fn to_local(&self, _token: TokenId, world: Point) -> Point {
        world
    }
}

/// Every token shares one parent frame whose origin sits at `origin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetProjector {
    pub origin: Point,
}

impl OffsetProjector {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }
}

impl SpaceProjector for OffsetProjector {
    fn to_local(&self, _token: TokenId, world: Point) -> Point {
        world - self.origin
    }
}

/// In-memory marker table. Ids are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct MarkerMap {
    markers: HashMap<String, Point>,
    root: Option<Point>,
}

impl MarkerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: Point) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_marker(mut self, marker_id: &str, world: Point) -> Self {
        self.insert(marker_id, world);
        self
    }

    pub fn insert(&mut self, marker_id: &str, world: Point) -> Option<Point> {
        self.markers.insert(marker_id.to_lowercase(), world)
    }

    pub fn remove(&mut self, marker_id: &str) -> Option<Point> {
        self.markers.remove(&marker_id.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MarkerTable for MarkerMap {
    fn resolve(&self, marker_id: &str) -> Option<Point> {
        self.markers.get(&marker_id.to_lowercase()).copied()
    }

    fn root(&self) -> Point {
        self.root.unwrap_or(Point::ZERO)
    }
}

/// Motion sink without animation: every motion lands immediately.
///
/// Useful headless and in tests; it records where tokens ended up and how
/// often they bounced.
#[derive(Debug, Default)]
pub struct InstantMotion {
    positions: RefCell<HashMap<TokenId, Point>>,
    animations: Cell<usize>,
    bounces: Cell<usize>,
}

impl InstantMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last position set for `token`, if any.
    pub fn position_of(&self, token: TokenId) -> Option<Point> {
        self.positions.borrow().get(&token).copied()
    }

    pub fn positions(&self) -> HashMap<TokenId, Point> {
        self.positions.borrow().clone()
    }

    pub fn animation_count(&self) -> usize {
        self.animations.get()
    }

    pub fn bounce_count(&self) -> usize {
        self.bounces.get()
    }
}

impl MotionSink for InstantMotion {
    fn position(&self, token: TokenId) -> Point {
        self.position_of(token).unwrap_or(Point::ZERO)
    }

    fn set_position(&self, token: TokenId, local: Point) {
        self.positions.borrow_mut().insert(token, local);
    }

    fn animate_to(
        &self,
        token: TokenId,
        _from: Point,
        to: Point,
        _duration_ms: f64,
    ) -> LocalBoxFuture<'_, ()> {
        self.set_position(token, to);
        self.animations.set(self.animations.get() + 1);
        future::ready(()).boxed_local()
    }

    fn bounce(&self, _token: TokenId, _height: f32, _duration_ms: f64) -> LocalBoxFuture<'_, ()> {
        self.bounces.set(self.bounces.get() + 1);
        future::ready(()).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_marker_map_ignores_case() {
        let markers = MarkerMap::new().with_marker("Markers/Start", Point::new(10.0, 20.0));
        assert_eq!(markers.resolve("markers/START"), Some(Point::new(10.0, 20.0)));
        assert_eq!(markers.resolve("Markers/End"), None);
    }

    #[test]
    fn test_marker_map_root_defaults_to_origin() {
        assert_eq!(MarkerMap::new().root(), Point::ZERO);
        assert_eq!(MarkerMap::new().with_root(Point::new(5.0, 6.0)).root(), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_offset_projector_subtracts_origin() {
        let projector = OffsetProjector::new(Point::new(100.0, 50.0));
        assert_eq!(projector.to_local(TokenId(1), Point::new(150.0, 70.0)), Point::new(50.0, 20.0));
        assert_eq!(IdentityProjector.to_local(TokenId(1), Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_instant_motion_lands_immediately() {
        let motion = InstantMotion::new();
        assert_eq!(motion.position(TokenId(2)), Point::ZERO);

        block_on(motion.animate_to(TokenId(2), Point::ZERO, Point::new(8.0, 9.0), 250.0));
        assert_eq!(motion.position_of(TokenId(2)), Some(Point::new(8.0, 9.0)));
        assert_eq!(motion.animation_count(), 1);

        block_on(motion.bounce(TokenId(2), 18.0, 180.0));
        assert_eq!(motion.bounce_count(), 1);
        assert_eq!(motion.position(TokenId(2)), Point::new(8.0, 9.0));
    }
}
