//! Monster spawn resolution
//!
//! Joins the level-design table to the spawn-group table: a level row
//! names a base coordinate and a set of candidate monster groups, one
//! group is picked by weight, and its drop offsets expand into absolute
//! spawn positions.

use std::path::Path;

use rand::rngs::StdRng;
use rand::Rng;

use super::tables::{self, LevelDesignRow, SpawnGroupRow, TableError};

/// One monster to place in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Spawn {
    pub monster_name: String,
    pub position: (f32, f32, f32),
}

/// The resolved spawns for one level-design row
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnResult {
    pub base: (f32, f32, f32),
    pub full_key: String,
    pub spawns: Vec<Spawn>,
}

/// A weighted monster-group candidate parsed from a coordinate spec
#[derive(Debug, Clone, PartialEq)]
struct GroupCandidate {
    full_key: String,
    weight: u32,
}

/// Spawn tables joined and ready to query
#[derive(Debug, Clone)]
pub struct MonsterSpawner {
    levels: Vec<LevelDesignRow>,
    groups: Vec<SpawnGroupRow>,
}

impl MonsterSpawner {
    /// Load both tables from disk.
    pub fn from_files(
        level_design: impl AsRef<Path>,
        spawn_groups: impl AsRef<Path>,
    ) -> Result<Self, TableError> {
        Ok(Self {
            levels: tables::load_level_design(level_design)?,
            groups: tables::load_spawn_groups(spawn_groups)?,
        })
    }

    /// Build from already-parsed rows.
    pub fn new(levels: Vec<LevelDesignRow>, groups: Vec<SpawnGroupRow>) -> Self {
        Self { levels, groups }
    }

    /// Resolve every level-design row matching `floor` and `grade` into
    /// concrete spawns. Rows with unparseable specs or unknown group
    /// keys are logged and skipped.
    pub fn spawns_for(&self, floor: u32, grade: u32, rng: &mut StdRng) -> Vec<SpawnResult> {
        let mut results = Vec::new();
        for level in self
            .levels
            .iter()
            .filter(|l| l.floor == floor && l.grade == grade)
        {
            let Some((base, candidates)) = parse_spawn_spec(&level.monster_spawn) else {
                log::warn!("unusable spawn spec on row {}: {:?}", level.number, level.monster_spawn);
                continue;
            };
            let Some(full_key) = pick_weighted(&candidates, rng) else {
                continue;
            };
            let Some(group) = self.groups.iter().find(|g| g.full_key == full_key) else {
                log::warn!("no spawn group with key {:?}", full_key);
                continue;
            };
            let spawns = parse_drop_offsets(&group.drop_offset)
                .into_iter()
                .map(|(name, (dx, dy, dz))| Spawn {
                    monster_name: name,
                    position: (base.0 + dx, base.1 + dy, base.2 + dz),
                })
                .collect();
            results.push(SpawnResult {
                base,
                full_key,
                spawns,
            });
        }
        results
    }
}

/// Parse a `x.y.z:KEY*weight/KEY*weight` spawn spec. A candidate with
/// no `*weight` suffix gets weight 1.
fn parse_spawn_spec(spec: &str) -> Option<((f32, f32, f32), Vec<GroupCandidate>)> {
    let (coord, groups) = spec.split_once(':')?;
    let base = parse_triple(coord)?;
    let candidates: Vec<GroupCandidate> = groups
        .split('/')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.split_once('*') {
            Some((key, weight)) => weight.trim().parse().ok().map(|weight| GroupCandidate {
                full_key: key.trim().to_string(),
                weight,
            }),
            None => Some(GroupCandidate {
                full_key: entry.to_string(),
                weight: 1,
            }),
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some((base, candidates))
}

/// Parse `name@dx.dy.dz/name@dx.dy.dz/...`; bad entries are dropped.
fn parse_drop_offsets(spec: &str) -> Vec<(String, (f32, f32, f32))> {
    spec.split('/')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let (name, offset) = entry.split_once('@')?;
            let triple = parse_triple(offset)?;
            Some((name.trim().to_string(), triple))
        })
        .collect()
}

/// Parse a dot-separated coordinate triple. Each component between
/// dots is one number, so fractional coordinates are not expressible
/// in this format.
fn parse_triple(text: &str) -> Option<(f32, f32, f32)> {
    let parts: Vec<f32> = text
        .trim()
        .split('.')
        .map(|part| part.parse().ok())
        .collect::<Option<_>>()?;
    if parts.len() < 3 {
        return None;
    }
    Some((parts[0], parts[1], parts[2]))
}

/// Single-pass cumulative-weight pick.
fn pick_weighted(candidates: &[GroupCandidate], rng: &mut StdRng) -> Option<String> {
    let total: u32 = candidates.iter().map(|c| c.weight).sum();
    if total == 0 {
        return None;
    }
    let roll = rng.gen_range(0..total);
    let mut cumulative = 0;
    for candidate in candidates {
        cumulative += candidate.weight;
        if roll < cumulative {
            return Some(candidate.full_key.clone());
        }
    }
    None
}
