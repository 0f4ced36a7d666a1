//! Snake grid state: the occupied-cell sequence and the food.

use super::{Point, SnakeCell, SnakeError};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Square N×N grid holding one snake and at most one food.
///
/// The snake is an ordered sequence of points with the head first. It never
/// shrinks, and the head is always its first element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    snake: VecDeque<Point>,
    food: Option<Point>,
}

impl Grid {
    /// Smallest grid that leaves room for food beside a one-cell snake.
    pub const MIN_SIZE: usize = 2;

    /// Creates a grid with a one-cell snake in the centre and no food.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SnakeError> {
        if size < Self::MIN_SIZE || i32::try_from(size).is_err() {
            return Err(SnakeError::GridTooSmall(size));
        }
        let centre = (size / 2) as i32;
        Ok(Self {
            size,
            snake: VecDeque::from([Point::new(centre, centre)]),
            food: None,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the point lies on the grid.
    pub fn contains(&self, point: Point) -> bool {
        let size = self.size as i32;
        (0..size).contains(&point.x) && (0..size).contains(&point.y)
    }

    /// The head position.
    pub fn head(&self) -> Point {
        // The sequence is created non-empty and only grows.
        self.snake[0]
    }

    /// The tail position (the head for a one-cell snake).
    pub fn tail(&self) -> Point {
        self.snake[self.snake.len() - 1]
    }

    /// The occupied-cell sequence, head first.
    pub fn snake(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.snake.iter().copied()
    }

    /// Snake length.
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Returns true if the snake has no segments.
    ///
    /// A grid built by [`Grid::new`] starts with a one-cell snake that never
    /// shrinks.
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Current food position.
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    /// Returns true if any snake segment, head included, covers the point.
    pub fn is_occupied(&self, point: Point) -> bool {
        self.snake.contains(&point)
    }

    /// What the cell at `point` shows.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` off the grid.
    pub fn cell_at(&self, point: Point) -> Result<SnakeCell, SnakeError> {
        if !self.contains(point) {
            return Err(SnakeError::OutOfBounds(point));
        }
        Ok(if point == self.head() {
            SnakeCell::Head
        } else if self.is_occupied(point) {
            SnakeCell::Body
        } else if self.food == Some(point) {
            SnakeCell::Food
        } else {
            SnakeCell::Empty
        })
    }

    /// Unoccupied points, row by row.
    pub fn free_cells(&self) -> Vec<Point> {
        let size = self.size as i32;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|p| !self.is_occupied(*p))
            .collect()
    }

    /// Cells grouped by row.
    pub fn rows(&self) -> Vec<Vec<SnakeCell>> {
        let size = self.size as i32;
        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| self.cell_at(Point::new(x, y)).unwrap_or(SnakeCell::Empty))
                    .collect()
            })
            .collect()
    }

    /// Formats the grid as text: `@` head, `o` body, `*` food, `.` empty.
    pub fn display(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        SnakeCell::Head => '@',
                        SnakeCell::Body => 'o',
                        SnakeCell::Food => '*',
                        SnakeCell::Empty => '.',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pushes a new head and drops the tail unless the snake grows.
    #[instrument(skip(self))]
    pub(crate) fn shift(&mut self, new_head: Point, grow: bool) {
        self.snake.push_front(new_head);
        if !grow {
            self.snake.pop_back();
        }
    }

    /// Places food on a uniformly random free cell, or clears it when none is free.
    #[instrument(skip(self, rng))]
    pub(crate) fn respawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.food = self.free_cells().choose(rng).copied();
        debug!(food = ?self.food, "Food placed");
    }

    #[cfg(test)]
    pub(crate) fn from_parts(size: usize, snake: Vec<Point>, food: Option<Point>) -> Self {
        Self {
            size,
            snake: snake.into(),
            food,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_grid_centres_head() {
        let grid = Grid::new(12).unwrap();
        assert_eq!(grid.head(), Point::new(6, 6));
        assert_eq!(grid.len(), 1);
        assert_eq!(Grid::new(1), Err(SnakeError::GridTooSmall(1)));
    }

    #[test]
    fn test_is_occupied_checks_whole_body() {
        let grid = Grid::from_parts(
            5,
            vec![Point::new(2, 2), Point::new(1, 2), Point::new(0, 2)],
            None,
        );
        assert!(grid.is_occupied(Point::new(0, 2)));
        assert_eq!(grid.cell_at(Point::new(2, 2)), Ok(SnakeCell::Head));
        assert_eq!(grid.cell_at(Point::new(1, 2)), Ok(SnakeCell::Body));
        assert_eq!(
            grid.cell_at(Point::new(5, 0)),
            Err(SnakeError::OutOfBounds(Point::new(5, 0)))
        );
    }

    #[test]
    fn test_food_never_lands_on_snake() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::from_parts(
            2,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)],
            None,
        );
        grid.respawn_food(&mut rng);
        assert_eq!(grid.food(), Some(Point::new(0, 1)));

        grid.shift(Point::new(0, 1), true);
        grid.respawn_food(&mut rng);
        assert_eq!(grid.food(), None);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_parts(
            3,
            vec![Point::new(1, 1), Point::new(0, 1)],
            Some(Point::new(2, 0)),
        );
        assert_eq!(grid.display(), "..*\no@.\n...");
    }
}
