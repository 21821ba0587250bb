//! Grid save/load
//!
//! JSON persistence of a finished grid behind a version field, so stale
//! files fail loudly instead of deserializing into nonsense.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::Grid;

/// Save file version for compatibility checking
const SAVE_VERSION: u32 = 1;

/// Errors from saving or loading a grid
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("bad save data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// On-disk wrapper around the grid
#[derive(Debug, Serialize, Deserialize)]
struct SaveData {
    version: u32,
    grid: Grid,
}

/// Write the grid as pretty-printed JSON.
pub fn save_grid(grid: &Grid, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let data = SaveData {
        version: SAVE_VERSION,
        grid: grid.clone(),
    };
    let json = serde_json::to_string_pretty(&data)?;
    fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("grid saved to {}", path.display());
    Ok(())
}

/// Read a grid back, rejecting saves from other versions.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, SaveError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let data: SaveData = serde_json::from_str(&json)?;
    if data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: data.version,
        });
    }
    log::info!("grid loaded from {}", path.display());
    Ok(data.grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::room::Direction;
    use crate::world::RoomType;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("gloomwarren-{}-{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn test_save_and_load_preserve_grid() {
        let mut grid = Grid::new(3);
        grid.set_kind(0, 0, RoomType::Entrance);
        grid.set_kind(2, 2, RoomType::Exit);
        grid.set_grade(1, 1, 3);
        grid.open_passage(0, 0, Direction::Down);

        let path = temp_path("roundtrip");
        save_grid(&grid, &path).unwrap();
        let loaded = load_grid(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(grid, loaded);
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let path = temp_path("version");
        let json = r#"{"version": 99, "grid": {"size": 1, "rooms": [{"x":0,"y":0,"kind":"Normal","passages":{"up":false,"down":false,"left":false,"right":false},"grade":0}]}}"#;
        fs::write(&path, json).unwrap();
        let result = load_grid(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(SaveError::VersionMismatch { found: 99, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_grid("no/such/save.json"),
            Err(SaveError::Io { .. })
        ));
    }
}
