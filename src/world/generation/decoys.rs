//! Decoy room generation
//!
//! Probabilistic breadth-first flood fill that grows dead-end branch
//! rooms outward from the critical path. Only critical-path rooms and
//! already-grown decoys may sprout further decoys, and only untouched
//! Normal rooms may become one, so the fill is a tree and terminates on
//! its own.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

use crate::world::room::Direction;
use crate::world::{Grid, RoomType};

/// Grow fake rooms off the critical path.
///
/// Every path cell is enqueued as a seed; dequeued cells that are
/// neither Monster nor Fake rooms are skipped, which keeps the entrance
/// and exit from sprouting branches. Each closed-passage Normal
/// neighbor converts with probability `fake_room_probability` percent,
/// opening the connecting passage symmetrically.
pub fn grow_fake_rooms(
    grid: &mut Grid,
    path: &[(i32, i32)],
    fake_room_probability: u32,
    rng: &mut StdRng,
) {
    let mut visited = vec![false; grid.area()];
    let mut queue: VecDeque<(i32, i32)> = path.iter().copied().collect();

    while let Some((x, y)) = queue.pop_front() {
        let idx = grid.xy_to_idx(x, y);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        let kind = match grid.room(x, y) {
            Some(room) => room.kind,
            None => continue,
        };
        if kind != RoomType::Monster && kind != RoomType::Fake {
            continue;
        }

        for dir in Direction::ALL {
            let Some((nx, ny)) = grid.neighbor(x, y, dir) else {
                continue;
            };
            let neighbor_is_normal =
                grid.room(nx, ny).map(|r| r.kind) == Some(RoomType::Normal);
            let passage_open = grid
                .room(x, y)
                .map(|r| r.passages.get(dir))
                .unwrap_or(false);
            if !neighbor_is_normal || passage_open {
                continue;
            }
            if rng.gen_range(0..100) < fake_room_probability {
                grid.open_passage(x, y, dir);
                grid.set_kind(nx, ny, RoomType::Fake);
                queue.push_back((nx, ny));
            }
        }
    }

    let grown = grid.rooms_of_kind(RoomType::Fake).len();
    log::debug!("grew {} fake rooms off a {}-room path", grown, path.len());
}
