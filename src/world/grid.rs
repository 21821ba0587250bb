//! Grid data structure
//!
//! The square room grid a dungeon is generated into. Stored as a flat
//! vector indexed `y * size + x`; all mutation goes through grid-level
//! operations so the passage-symmetry invariant has a single owner.

use serde::{Deserialize, Serialize};

use super::room::{Direction, Room, RoomType};

/// An `N×N` grid of rooms
///
/// Deep copies come from `Clone`: every room is plain owned data, so a
/// clone is a fully independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    rooms: Vec<Room>,
}

impl Grid {
    /// Create a grid of blank rooms
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "grid size must be positive");
        let mut rooms = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                rooms.push(Room::new(x, y));
            }
        }
        Self { size, rooms }
    }

    /// Grid dimension (the grid is always square)
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of rooms
    #[inline]
    pub fn area(&self) -> usize {
        self.rooms.len()
    }

    /// Convert 2D coordinates to the flat index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.size + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    /// Get the room at a position
    pub fn room(&self, x: i32, y: i32) -> Option<&Room> {
        if self.in_bounds(x, y) {
            Some(&self.rooms[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Get the room at a position, mutably
    pub fn room_mut(&mut self, x: i32, y: i32) -> Option<&mut Room> {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            Some(&mut self.rooms[idx])
        } else {
            None
        }
    }

    /// Set the room type at a position
    pub fn set_kind(&mut self, x: i32, y: i32, kind: RoomType) {
        if let Some(room) = self.room_mut(x, y) {
            room.kind = kind;
        }
    }

    /// Set the grade at a position
    pub fn set_grade(&mut self, x: i32, y: i32, grade: u32) {
        if let Some(room) = self.room_mut(x, y) {
            room.grade = grade;
        }
    }

    /// Coordinates one step in `dir`, if still on the grid
    pub fn neighbor(&self, x: i32, y: i32, dir: Direction) -> Option<(i32, i32)> {
        let (dx, dy) = dir.delta();
        let (nx, ny) = (x + dx, y + dy);
        if self.in_bounds(nx, ny) {
            Some((nx, ny))
        } else {
            None
        }
    }

    /// Open the passage from `(x, y)` toward `dir`, and the matching
    /// passage back from the neighbor. Does nothing at the grid edge or
    /// when either side is an obstacle.
    pub fn open_passage(&mut self, x: i32, y: i32, dir: Direction) {
        let Some((nx, ny)) = self.neighbor(x, y, dir) else {
            return;
        };
        let here_passable = self.rooms[self.xy_to_idx(x, y)].kind.is_passable();
        let there_passable = self.rooms[self.xy_to_idx(nx, ny)].kind.is_passable();
        if !here_passable || !there_passable {
            return;
        }
        let idx = self.xy_to_idx(x, y);
        self.rooms[idx].passages.set(dir, true);
        let nidx = self.xy_to_idx(nx, ny);
        self.rooms[nidx].passages.set(dir.opposite(), true);
    }

    /// Iterate over all rooms in row-major order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// All rooms of a given type
    pub fn rooms_of_kind(&self, kind: RoomType) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.kind == kind).collect()
    }

    /// Position of the unique entrance, if placed
    pub fn entrance(&self) -> Option<(i32, i32)> {
        self.rooms
            .iter()
            .find(|r| r.kind == RoomType::Entrance)
            .map(|r| (r.x, r.y))
    }

    /// Position of the unique exit, if placed
    pub fn exit(&self) -> Option<(i32, i32)> {
        self.rooms
            .iter()
            .find(|r| r.kind == RoomType::Exit)
            .map(|r| (r.x, r.y))
    }
}
