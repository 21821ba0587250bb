//! Spawn-table CSV parsing
//!
//! The level-design and spawn-group tables ship as CSV exported from a
//! spreadsheet, so fields may be quoted and contain commas. Malformed
//! rows are logged and skipped; a missing table file is fatal.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors from loading a spawn table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("spawn table not found at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// One row of the level-design table
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDesignRow {
    pub number: u32,
    pub floor: u32,
    pub grade: u32,
    pub concept: String,
    /// `x.y.z:FULLKEY` spawn coordinate spec
    pub monster_spawn: String,
    pub box_spawn: String,
}

/// One row of the spawn-group table
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnGroupRow {
    pub group1: String,
    pub group2: String,
    pub group3: String,
    pub group4: String,
    pub full_key: String,
    /// `name@dx.dy.dz/name@dx.dy.dz/...` offsets for the group members
    pub drop_offset: String,
}

/// Split one CSV line, honoring double quotes and doubled-quote escapes.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    let _ = chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Load the level-design table, skipping the header row.
pub fn load_level_design(path: impl AsRef<Path>) -> Result<Vec<LevelDesignRow>, TableError> {
    let content = read_table(path.as_ref())?;
    let rows = content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_level_design_line)
        .collect();
    Ok(rows)
}

/// Load the spawn-group table, skipping the header row.
pub fn load_spawn_groups(path: impl AsRef<Path>) -> Result<Vec<SpawnGroupRow>, TableError> {
    let content = read_table(path.as_ref())?;
    let rows = content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_spawn_group_line)
        .collect();
    Ok(rows)
}

fn read_table(path: &Path) -> Result<String, TableError> {
    fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_level_design_line(line: &str) -> Option<LevelDesignRow> {
    let fields = split_csv_line(line);
    if fields.len() < 6 {
        log::warn!("level-design row has {} fields, skipping: {:?}", fields.len(), line);
        return None;
    }
    let parsed = (
        fields[0].parse::<u32>(),
        fields[1].parse::<u32>(),
        fields[2].parse::<u32>(),
    );
    match parsed {
        (Ok(number), Ok(floor), Ok(grade)) => Some(LevelDesignRow {
            number,
            floor,
            grade,
            concept: fields[3].clone(),
            monster_spawn: fields[4].clone(),
            box_spawn: fields[5].clone(),
        }),
        _ => {
            log::warn!("level-design row has non-numeric id fields, skipping: {:?}", line);
            None
        }
    }
}

fn parse_spawn_group_line(line: &str) -> Option<SpawnGroupRow> {
    let fields = split_csv_line(line);
    if fields.len() < 6 {
        log::warn!("spawn-group row has {} fields, skipping: {:?}", fields.len(), line);
        return None;
    }
    Some(SpawnGroupRow {
        group1: fields[0].clone(),
        group2: fields[1].clone(),
        group3: fields[2].clone(),
        group4: fields[3].clone(),
        full_key: fields[4].clone(),
        drop_offset: fields[5].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_fields() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_csv_line("a,,c"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_quoted_fields() {
        assert_eq!(
            split_csv_line(r#"goblin,"a, quoted, field",3"#),
            vec!["goblin", "a, quoted, field", "3"]
        );
        assert_eq!(
            split_csv_line(r#""say ""hi""",x"#),
            vec![r#"say "hi""#, "x"]
        );
    }

    #[test]
    fn test_level_design_row_parses() {
        let row = parse_level_design_line("1,2,3,ambush,0.0.0:GOBLIN_PACK,none").unwrap();
        assert_eq!(row.number, 1);
        assert_eq!(row.floor, 2);
        assert_eq!(row.grade, 3);
        assert_eq!(row.concept, "ambush");
        assert_eq!(row.monster_spawn, "0.0.0:GOBLIN_PACK");
    }

    #[test]
    fn test_short_or_bad_rows_are_skipped() {
        assert!(parse_level_design_line("1,2,3").is_none());
        assert!(parse_level_design_line("one,2,3,a,b,c").is_none());
        assert!(parse_spawn_group_line("a,b,c").is_none());
    }

    #[test]
    fn test_missing_table_is_fatal() {
        assert!(load_level_design("no/such/table.csv").is_err());
    }
}
