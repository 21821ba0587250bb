//! Entrance, exit, and obstacle placement
//!
//! First stage of a generation attempt: pick two distinct random rooms
//! for the entrance and exit, then scatter impassable obstacles.

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GenConfig;
use crate::world::{Grid, RoomType};

/// Place the entrance and exit at distinct random positions.
///
/// Returns `(entrance, exit)` coordinates.
pub fn place_entrance_and_exit(grid: &mut Grid, rng: &mut StdRng) -> ((i32, i32), (i32, i32)) {
    let size = grid.size();
    let entrance = (rng.gen_range(0..size), rng.gen_range(0..size));
    let mut exit = entrance;
    while exit == entrance {
        exit = (rng.gen_range(0..size), rng.gen_range(0..size));
    }
    grid.set_kind(entrance.0, entrance.1, RoomType::Entrance);
    grid.set_kind(exit.0, exit.1, RoomType::Exit);
    (entrance, exit)
}

/// Scatter obstacles over still-Normal rooms.
///
/// The count is drawn from `[size, max)` where `max` derives from the
/// configured obstacle probability. Degenerate ranges are clamped, and
/// the count is capped at two below the grid area, so the rejection
/// sampling always has a free Normal cell left to convert.
pub fn place_obstacles(grid: &mut Grid, config: &GenConfig, rng: &mut StdRng) {
    let size = grid.size();
    let probability = config.obstacle_probability as f32 / 100.0;
    let min_obstacles = size;
    let mut max_obstacles = ((size * size) as f32 * probability) as i32;
    if max_obstacles <= min_obstacles {
        max_obstacles = min_obstacles + 1;
    }
    let cap = grid.area() as i32 - 2;
    let target = rng.gen_range(min_obstacles..max_obstacles).min(cap);

    log::debug!("placing {} obstacles on a {}x{} grid", target, size, size);

    let mut placed = 0;
    while placed < target {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        if grid.room(x, y).map(|r| r.kind) == Some(RoomType::Normal) {
            grid.set_kind(x, y, RoomType::Obstacle);
            placed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_config(size: i32, obstacle_probability: u32) -> GenConfig {
        GenConfig {
            size,
            obstacle_probability,
            ..GenConfig::default()
        }
    }

    #[test]
    fn test_entrance_and_exit_are_distinct() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(4);
            let (entrance, exit) = place_entrance_and_exit(&mut grid, &mut rng);
            assert_ne!(entrance, exit);
            assert_eq!(grid.rooms_of_kind(RoomType::Entrance).len(), 1);
            assert_eq!(grid.rooms_of_kind(RoomType::Exit).len(), 1);
        }
    }

    #[test]
    fn test_obstacle_count_within_bounds() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(10);
            place_entrance_and_exit(&mut grid, &mut rng);
            place_obstacles(&mut grid, &test_config(10, 20), &mut rng);
            let obstacles = grid.rooms_of_kind(RoomType::Obstacle).len();
            assert!(obstacles >= 10, "too few obstacles: {}", obstacles);
            assert!(obstacles < 20, "too many obstacles: {}", obstacles);
        }
    }

    #[test]
    fn test_zero_probability_still_places_minimum() {
        // A degenerate computed maximum is clamped to size + 1, so the
        // sample range stays valid and exactly `size` obstacles land.
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(5);
        place_entrance_and_exit(&mut grid, &mut rng);
        place_obstacles(&mut grid, &test_config(5, 0), &mut rng);
        assert_eq!(grid.rooms_of_kind(RoomType::Obstacle).len(), 5);
    }

    #[test]
    fn test_obstacles_never_overwrite_entrance_or_exit() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(5);
            place_entrance_and_exit(&mut grid, &mut rng);
            place_obstacles(&mut grid, &test_config(5, 50), &mut rng);
            assert_eq!(grid.rooms_of_kind(RoomType::Entrance).len(), 1);
            assert_eq!(grid.rooms_of_kind(RoomType::Exit).len(), 1);
        }
    }
}
