//! Core domain types for the snake grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A grid point. `x` grows rightwards, `y` grows downwards.
///
/// Signed so a head stepping off the left or top edge is still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one step along `heading`.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of travel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Heading {
    /// `(dx, dy)` for one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// The opposite heading.
    pub fn reverse(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Compares tags, never raw deltas.
    #[instrument]
    pub fn is_reverse_of(self, other: Heading) -> bool {
        self.reverse() == other
    }
}

/// What a cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnakeCell {
    /// Nothing here.
    Empty,
    /// A body segment behind the head.
    Body,
    /// The snake's head.
    Head,
    /// Food waiting to be eaten.
    Food,
}

/// Why a round crashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum CrashKind {
    /// The head left the grid.
    #[display("hit the wall")]
    Wall,
    /// The head ran into the body.
    #[display("ran into itself")]
    SelfCollision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_reverse_pairs() {
        for heading in Heading::iter() {
            assert!(heading.is_reverse_of(heading.reverse()));
            assert!(!heading.is_reverse_of(heading));
            let (dx, dy) = heading.delta();
            assert_eq!(heading.reverse().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn test_parse_heading() {
        assert_eq!("up".parse::<Heading>(), Ok(Heading::Up));
        assert_eq!("LEFT".parse::<Heading>(), Ok(Heading::Left));
        assert!("north".parse::<Heading>().is_err());
    }

    #[test]
    fn test_step() {
        assert_eq!(Point::new(0, 0).step(Heading::Up), Point::new(0, -1));
        assert_eq!(Point::new(2, 3).step(Heading::Right), Point::new(3, 3));
    }
}
