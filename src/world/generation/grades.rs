//! Grade field assignment
//!
//! Seeds every passable room with a baseline difficulty grade derived
//! from its Manhattan distance to the entrance plus the exit. The field
//! only guides the budgeted path search; path cells are re-graded by the
//! rebalancer afterwards.

use crate::world::{Grid, RoomType};

/// Assign baseline grades to every non-obstacle room.
///
/// `grade = (dE + dX) / (2·(size−1)) × max_grade`, clamped to
/// `1..=max_grade`. The entrance is forced to 1 and the exit to the
/// maximum grade found anywhere on the field, so the exit is always the
/// single hardest room by this metric.
pub fn assign_grades(
    grid: &mut Grid,
    entrance: (i32, i32),
    exit: (i32, i32),
    max_grade: u32,
) {
    let size = grid.size();
    let max_distance = (2 * (size - 1)).max(1);

    for y in 0..size {
        for x in 0..size {
            if grid.room(x, y).map(|r| r.kind) == Some(RoomType::Obstacle) {
                continue;
            }
            let to_entrance = (x - entrance.0).abs() + (y - entrance.1).abs();
            let to_exit = (x - exit.0).abs() + (y - exit.1).abs();
            let normalized = (to_entrance + to_exit) as f32 / max_distance as f32;
            let grade = ((normalized * max_grade as f32) as u32).clamp(1, max_grade);
            grid.set_grade(x, y, grade);
        }
    }

    let hardest = grid
        .rooms()
        .filter(|r| r.kind != RoomType::Obstacle)
        .map(|r| r.grade)
        .max()
        .unwrap_or(1);
    grid.set_grade(entrance.0, entrance.1, 1);
    grid.set_grade(exit.0, exit.1, hardest);
}
