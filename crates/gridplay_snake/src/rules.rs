//! Crash detection for the snake grid.

use super::{CrashKind, Grid, Point};
use tracing::instrument;

/// Checks whether moving the head to `next_head` crashes.
///
/// Leaving the grid is a wall crash. Landing on the body is a self
/// collision, except on the tail when it is about to be vacated, which is
/// the case whenever the snake does not grow on this step.
#[instrument(skip(grid), fields(head = %grid.head(), len = grid.len()))]
pub fn detect_crash(grid: &Grid, next_head: Point, grows: bool) -> Option<CrashKind> {
    if !grid.contains(next_head) {
        return Some(CrashKind::Wall);
    }

    let vacated = (!grows).then(|| grid.tail());
    let hits_body = grid
        .snake()
        .any(|segment| segment == next_head && Some(segment) != vacated);

    hits_body.then_some(CrashKind::SelfCollision)
}
