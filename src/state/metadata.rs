use std::fmt;

use serde::Serialize;

use crate::codec::SpecialSeeds;

/// World seed as stored: a number in early files, the typed text later on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Seed {
    Number(i32),
    Text(String),
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Number(n) => write!(f, "{n}"),
            Seed::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Classic,
    Expert,
    Master,
    /// Only stored by versions with a 32-bit game mode
    Journey,
}

impl Difficulty {
    pub fn from_game_mode(mode: i32) -> Option<Self> {
        match mode {
            0 => Some(Difficulty::Classic),
            1 => Some(Difficulty::Expert),
            2 => Some(Difficulty::Master),
            3 => Some(Difficulty::Journey),
            _ => None,
        }
    }

    pub fn game_mode(self) -> i32 {
        match self {
            Difficulty::Classic => 0,
            Difficulty::Expert => 1,
            Difficulty::Master => 2,
            Difficulty::Journey => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorldEvil {
    Corruption,
    Crimson,
}

/// A tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Properties-section fields the inspector reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldMetadata {
    pub name: String,
    pub seed: Option<Seed>,
    pub generator_version: Option<u64>,
    #[serde(skip)]
    pub guid: Option<[u8; 16]>,
    pub world_id: i32,
    pub width: u32,
    pub height: u32,
    pub difficulty: Difficulty,
    pub special_seeds: SpecialSeeds,
    pub creation_time: Option<i64>,
    pub spawn: Point,
    pub surface_level: f64,
    pub rock_level: f64,
    pub dungeon: Point,
    pub world_evil: WorldEvil,
    pub is_hardmode: bool,
}

impl WorldMetadata {
    pub fn tile_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
