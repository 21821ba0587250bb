//! Procedural dungeon generation
//!
//! The pipeline: place entrance/exit and obstacles, assign the grade
//! field, search for an exact-budget path. A failed search discards the
//! grid and restarts with fresh randomness, up to the configured attempt
//! cap; a successful one flows into the single finishing pass that
//! carves the path, rebalances its grades, and grows decoy rooms.

pub mod decoys;
pub mod grades;
pub mod placement;
pub mod rebalance;
pub mod search;

use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::GenConfig;
use crate::world::room::Direction;
use crate::world::{Grid, RoomType};

/// Errors from a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No sampled layout admitted an exact-budget path within the
    /// attempt cap. Either the budget is unreachable for this grid size
    /// and grade range, or the cap is too tight.
    #[error("no layout satisfied target grade after {attempts} attempts")]
    Unsatisfiable { attempts: u32 },
}

/// Generate a complete dungeon grid.
///
/// Retries the placement→grades→search stages until a path whose grade
/// sum equals `config.target_grade` exists, then rebalances the path
/// grades and grows fake rooms. Deterministic for a given config and
/// RNG state.
pub fn generate(config: &GenConfig, rng: &mut StdRng) -> Result<Grid, GenerateError> {
    let max_attempts = config.max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let mut grid = Grid::new(config.size);
        let (entrance, exit) = placement::place_entrance_and_exit(&mut grid, rng);
        placement::place_obstacles(&mut grid, config, rng);
        grades::assign_grades(&mut grid, entrance, exit, config.max_grade);

        let Some(path) = search::find_budget_path(&grid, entrance, exit, config.target_grade)
        else {
            continue;
        };

        log::info!(
            "found a {}-room path for target {} on attempt {}",
            path.len(),
            config.target_grade,
            attempt
        );

        carve_path(&mut grid, &path);
        rebalance::rebalance_path(&mut grid, &path, config.target_grade);
        decoys::grow_fake_rooms(&mut grid, &path, config.fake_room_probability, rng);
        return Ok(grid);
    }

    Err(GenerateError::Unsatisfiable {
        attempts: max_attempts,
    })
}

/// Convert Normal path cells to Monster rooms and open the passages
/// between consecutive path cells, both sides at once.
fn carve_path(grid: &mut Grid, path: &[(i32, i32)]) {
    for &(x, y) in path {
        if grid.room(x, y).map(|r| r.kind) == Some(RoomType::Normal) {
            grid.set_kind(x, y, RoomType::Monster);
        }
    }
    for pair in path.windows(2) {
        let (x, y) = pair[0];
        let (nx, ny) = pair[1];
        let dir = match (nx - x, ny - y) {
            (0, -1) => Direction::Up,
            (0, 1) => Direction::Down,
            (-1, 0) => Direction::Left,
            _ => Direction::Right,
        };
        grid.open_passage(x, y, dir);
    }
}
