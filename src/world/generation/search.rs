//! Budgeted path search
//!
//! Depth-first backtracking over the 4-neighborhood, looking for an
//! entrance→exit path whose accumulated grade equals the target budget
//! exactly. Runs on an explicit frame stack with an index-addressed
//! visited bitset, so grid size never threatens the call stack.
//!
//! The running sum seeds from 0: the entrance's own grade is not
//! counted, only the grades of the rooms stepped into.

use crate::world::room::Direction;
use crate::world::{Grid, RoomType};

/// One cell on the candidate path plus its neighbor cursor
struct Frame {
    x: i32,
    y: i32,
    /// Index into [`Direction::ALL`] of the next neighbor to try
    next_dir: usize,
    /// Grade this cell contributed to the running sum when pushed
    added: u32,
}

/// Search for a simple 4-connected path from `start` to `end` whose
/// grade sum equals `target` exactly.
///
/// Branches whose prospective sum would exceed `target` are pruned.
/// Reaching the exit with the wrong sum is a dead end like any other:
/// the cell is popped and the search continues with siblings. Returns
/// the path (entrance first, exit last) or `None` when no exact-sum
/// path exists for this layout.
pub fn find_budget_path(
    grid: &Grid,
    start: (i32, i32),
    end: (i32, i32),
    target: u32,
) -> Option<Vec<(i32, i32)>> {
    let mut visited = vec![false; grid.area()];
    let mut stack: Vec<Frame> = Vec::new();
    let mut sum: u32 = 0;

    visited[grid.xy_to_idx(start.0, start.1)] = true;
    stack.push(Frame {
        x: start.0,
        y: start.1,
        next_dir: 0,
        added: 0,
    });

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let (x, y) = (stack[top].x, stack[top].y);

        if (x, y) == end {
            if sum == target {
                return Some(stack.iter().map(|f| (f.x, f.y)).collect());
            }
            // Wrong sum at the exit: backtrack immediately
            pop_frame(grid, &mut stack, &mut visited, &mut sum);
            continue;
        }

        // Advance the top frame's neighbor cursor to the next branch
        // worth pursuing, if any.
        let mut next: Option<(i32, i32, u32)> = None;
        while stack[top].next_dir < Direction::ALL.len() {
            let dir = Direction::ALL[stack[top].next_dir];
            stack[top].next_dir += 1;

            let Some((nx, ny)) = grid.neighbor(x, y, dir) else {
                continue;
            };
            if visited[grid.xy_to_idx(nx, ny)] {
                continue;
            }
            let Some(room) = grid.room(nx, ny) else {
                continue;
            };
            if room.kind == RoomType::Obstacle {
                continue;
            }
            if sum + room.grade > target {
                continue;
            }
            next = Some((nx, ny, room.grade));
            break;
        }

        match next {
            Some((nx, ny, grade)) => {
                visited[grid.xy_to_idx(nx, ny)] = true;
                sum += grade;
                stack.push(Frame {
                    x: nx,
                    y: ny,
                    next_dir: 0,
                    added: grade,
                });
            }
            None => pop_frame(grid, &mut stack, &mut visited, &mut sum),
        }
    }

    None
}

fn pop_frame(grid: &Grid, stack: &mut Vec<Frame>, visited: &mut [bool], sum: &mut u32) {
    if let Some(frame) = stack.pop() {
        visited[grid.xy_to_idx(frame.x, frame.y)] = false;
        *sum -= frame.added;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::grades::assign_grades;

    /// 3x3 grid, entrance (0,0), exit (2,2), no obstacles. Every room
    /// except the entrance grades to 5.
    fn corner_grid() -> Grid {
        let mut grid = Grid::new(3);
        grid.set_kind(0, 0, RoomType::Entrance);
        grid.set_kind(2, 2, RoomType::Exit);
        assign_grades(&mut grid, (0, 0), (2, 2), 5);
        grid
    }

    fn assert_simple_path(grid: &Grid, path: &[(i32, i32)]) {
        for pair in path.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            assert_eq!((ax - bx).abs() + (ay - by).abs(), 1, "non-adjacent step");
        }
        let mut seen = std::collections::HashSet::new();
        for &pos in path {
            assert!(seen.insert(pos), "repeated cell {:?}", pos);
            assert_ne!(
                grid.room(pos.0, pos.1).unwrap().kind,
                RoomType::Obstacle,
                "path crosses an obstacle"
            );
        }
    }

    #[test]
    fn test_exact_sum_forces_shortest_path() {
        // Four steps at grade 5 each: only a Manhattan-length-4 path can
        // hit 20 exactly.
        let grid = corner_grid();
        let path = find_budget_path(&grid, (0, 0), (2, 2), 20).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], (0, 0));
        assert_eq!(path[4], (2, 2));
        assert_simple_path(&grid, &path);
        let sum: u32 = path[1..]
            .iter()
            .map(|&(x, y)| grid.room(x, y).unwrap().grade)
            .sum();
        assert_eq!(sum, 20);
    }

    #[test]
    fn test_unreachable_target_fails() {
        let grid = corner_grid();
        // Below any reachable sum
        assert!(find_budget_path(&grid, (0, 0), (2, 2), 2).is_none());
        // Between the 4-step sum (20) and the 6-step sum (30)
        assert!(find_budget_path(&grid, (0, 0), (2, 2), 23).is_none());
    }

    #[test]
    fn test_longer_path_taken_when_budget_demands_it() {
        // A 6-step detour costs 30; the search must pass over the cheaper
        // direct routes to find it.
        let grid = corner_grid();
        let path = find_budget_path(&grid, (0, 0), (2, 2), 30).unwrap();
        assert_eq!(path.len(), 7);
        assert_simple_path(&grid, &path);
    }

    #[test]
    fn test_obstacles_are_routed_around() {
        let mut grid = Grid::new(3);
        grid.set_kind(0, 0, RoomType::Entrance);
        grid.set_kind(2, 2, RoomType::Exit);
        // Wall off the upper route
        grid.set_kind(1, 0, RoomType::Obstacle);
        grid.set_kind(2, 0, RoomType::Obstacle);
        grid.set_kind(2, 1, RoomType::Obstacle);
        assign_grades(&mut grid, (0, 0), (2, 2), 5);
        let path = find_budget_path(&grid, (0, 0), (2, 2), 20).unwrap();
        assert_simple_path(&grid, &path);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn test_fully_walled_exit_fails() {
        let mut grid = Grid::new(3);
        grid.set_kind(0, 0, RoomType::Entrance);
        grid.set_kind(2, 2, RoomType::Exit);
        grid.set_kind(1, 2, RoomType::Obstacle);
        grid.set_kind(2, 1, RoomType::Obstacle);
        assign_grades(&mut grid, (0, 0), (2, 2), 5);
        assert!(find_budget_path(&grid, (0, 0), (2, 2), 20).is_none());
    }

    #[test]
    fn test_adjacent_entrance_and_exit() {
        let mut grid = Grid::new(3);
        grid.set_kind(0, 0, RoomType::Entrance);
        grid.set_kind(1, 0, RoomType::Exit);
        assign_grades(&mut grid, (0, 0), (1, 0), 5);
        let exit_grade = grid.room(1, 0).unwrap().grade;
        let path = find_budget_path(&grid, (0, 0), (1, 0), exit_grade).unwrap();
        assert_eq!(path, vec![(0, 0), (1, 0)]);
    }
}
