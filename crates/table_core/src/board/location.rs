use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::geometry::Point;

/// A logical spot on the board: a marker name plus an offset from it.
///
/// Marker ids compare case-insensitively; offsets compare exactly and are
/// expected to be finite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardLocation {
    #[serde(default)]
    pub marker_id: String,
    #[serde(default)]
    pub offset: Point,
}

impl BoardLocation {
    pub fn new(marker_id: impl Into<String>, offset: Point) -> Self {
        Self { marker_id: marker_id.into(), offset }
    }

    /// Location at the marker itself.
    pub fn marker(marker_id: impl Into<String>) -> Self {
        Self::new(marker_id, Point::ZERO)
    }

    /// Location relative to the board root.
    pub fn at(offset: Point) -> Self {
        Self::new(String::new(), offset)
    }

    pub fn has_marker(&self) -> bool {
        !self.marker_id.trim().is_empty()
    }

    fn folded_marker(&self) -> impl Iterator<Item = char> + '_ {
        self.marker_id.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for BoardLocation {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.folded_marker().eq(other.folded_marker())
    }
}

impl Eq for BoardLocation {}

/// -0.0 and 0.0 compare equal, so they must hash equal too.
fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for BoardLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded_marker() {
            c.hash(state);
        }
        canonical_bits(self.offset.x).hash(state);
        canonical_bits(self.offset.y).hash(state);
    }
}

impl std::fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@({}, {})", self.marker_id, self.offset.x, self.offset.y)
    }
}

/// Ordered, immutable sequence of locations a token walks through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPath {
    steps: Vec<BoardLocation>,
}

impl BoardPath {
    pub fn new(steps: impl IntoIterator<Item = BoardLocation>) -> Self {
        Self { steps: steps.into_iter().collect() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BoardLocation> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&BoardLocation> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoardLocation> {
        self.steps.iter()
    }
}

impl Index<usize> for BoardPath {
    type Output = BoardLocation;

    fn index(&self, index: usize) -> &BoardLocation {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a BoardPath {
    type Item = &'a BoardLocation;
    type IntoIter = std::slice::Iter<'a, BoardLocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl FromIterator<BoardLocation> for BoardPath {
    fn from_iter<I: IntoIterator<Item = BoardLocation>>(iter: I) -> Self {
        Self::new(iter)
    }
}
