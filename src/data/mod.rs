//! External spawn-table data
//!
//! CSV-driven level-design and spawn-group tables, and the weighted
//! monster spawner that joins them.

pub mod spawner;
pub mod tables;

pub use spawner::{MonsterSpawner, Spawn, SpawnResult};
pub use tables::{LevelDesignRow, SpawnGroupRow, TableError};
