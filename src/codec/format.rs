//! Version-specific layout rules for world files.
//!
//! Each entry in [`RULE_SETS`] is active from its `min_version` up to the
//! next entry. A file is decoded with the entry that has the highest
//! threshold not above its version.

use bitflags::bitflags;
use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};

/// Newest version whose layout has been checked against real files.
pub const NEWEST_KNOWN_VERSION: i32 = 279;

bitflags! {
    /// First header byte of every tile record
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Header1: u8 {
        const HAS_HEADER2 = 0x01;
        const ACTIVE = 0x02;
        const HAS_WALL = 0x04;
        /// Two-bit liquid kind: 1 water, 2 lava, 3 honey
        const LIQUID = 0x18;
        const BLOCK_U16 = 0x20;
        const RLE_U8 = 0x40;
        const RLE_U16 = 0x80;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Header2: u8 {
        const HAS_HEADER3 = 0x01;
        const WIRE_RED = 0x02;
        const WIRE_BLUE = 0x04;
        const WIRE_GREEN = 0x08;
        /// Block shape: 1 half block, 2..=5 slopes
        const SHAPE = 0x70;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Header3: u8 {
        const HAS_HEADER4 = 0x01;
        const ACTUATOR = 0x02;
        const INACTIVE = 0x04;
        const BLOCK_PAINT = 0x08;
        const WALL_PAINT = 0x10;
        const WIRE_YELLOW = 0x20;
        const WALL_HIGH_BYTE = 0x40;
        const SHIMMER = 0x80;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Header4: u8 {
        const BLOCK_INVISIBLE = 0x02;
        const WALL_INVISIBLE = 0x04;
        const BLOCK_FULLBRIGHT = 0x08;
        const WALL_FULLBRIGHT = 0x10;
    }
}

bitflags! {
    /// Special world seeds, stored as consecutive booleans after the game mode
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct SpecialSeeds: u8 {
        const DRUNK = 0x01;
        const FOR_THE_WORTHY = 0x02;
        const ANNIVERSARY = 0x04;
        const DONT_STARVE = 0x08;
        const NOT_THE_BEES = 0x10;
        const REMIX = 0x20;
        const NO_TRAPS = 0x40;
        const ZENITH = 0x80;
    }
}

/// Version each special-seed boolean first appears in, in file order.
const SPECIAL_SEED_VERSIONS: [(i32, SpecialSeeds); 8] = [
    (222, SpecialSeeds::DRUNK),
    (227, SpecialSeeds::FOR_THE_WORTHY),
    (238, SpecialSeeds::ANNIVERSARY),
    (239, SpecialSeeds::DONT_STARVE),
    (241, SpecialSeeds::NOT_THE_BEES),
    (249, SpecialSeeds::REMIX),
    (266, SpecialSeeds::NO_TRAPS),
    (267, SpecialSeeds::ZENITH),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeedEncoding {
    /// No seed stored
    Absent,
    /// i32 seed followed by the generator version
    Number,
    /// String seed followed by the generator version
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameModeEncoding {
    /// One boolean: expert or classic
    ExpertFlag,
    /// i32 game mode (classic, expert, master, journey) plus special seeds
    Int32,
}

/// How a type id is stored in a tile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IdWidth {
    U8,
    /// u8, or u16 when the record's header says so
    FlaggedU16,
    /// u8 low byte, plus a trailing high byte when the record's header says so
    HighByteExtension,
}

impl IdWidth {
    pub fn max_id(self) -> u16 {
        match self {
            IdWidth::U8 => u8::MAX as u16,
            IdWidth::FlaggedU16 | IdWidth::HighByteExtension => u16::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatRules {
    /// Version of the file being decoded
    pub version: i32,
    /// Threshold of the rule set in use
    pub min_version: i32,
    pub label: &'static str,
    pub seed: SeedEncoding,
    pub has_world_guid: bool,
    pub game_mode: GameModeEncoding,
    /// Number of special-seed booleans after the game mode
    pub special_seed_count: usize,
    pub has_creation_time: bool,
    /// Header carries a bit map of block ids whose tiles store a sprite frame
    pub has_frame_important_map: bool,
    pub block_id: IdWidth,
    pub wall_id: IdWidth,
    pub has_header4: bool,
    pub has_shimmer: bool,
}

const BASELINE: FormatRules = FormatRules {
    version: 0,
    min_version: 146,
    label: "1.3.0",
    seed: SeedEncoding::Absent,
    has_world_guid: false,
    game_mode: GameModeEncoding::ExpertFlag,
    special_seed_count: 0,
    has_creation_time: true,
    has_frame_important_map: true,
    block_id: IdWidth::FlaggedU16,
    wall_id: IdWidth::U8,
    has_header4: false,
    has_shimmer: false,
};

const NUMERIC_SEED: FormatRules = FormatRules {
    min_version: 179,
    label: "1.3.3",
    seed: SeedEncoding::Number,
    ..BASELINE
};

const TEXT_SEED: FormatRules = FormatRules {
    min_version: 181,
    label: "1.3.4",
    seed: SeedEncoding::Text,
    has_world_guid: true,
    ..NUMERIC_SEED
};

const GAME_MODE: FormatRules = FormatRules {
    min_version: 209,
    label: "1.4.0",
    game_mode: GameModeEncoding::Int32,
    ..TEXT_SEED
};

const WIDE_WALLS: FormatRules = FormatRules {
    min_version: 222,
    label: "1.4.0.4",
    wall_id: IdWidth::HighByteExtension,
    ..GAME_MODE
};

const SHIMMER: FormatRules = FormatRules {
    min_version: 269,
    label: "1.4.4",
    has_header4: true,
    has_shimmer: true,
    ..WIDE_WALLS
};

/// Known rule sets, ascending by threshold.
pub static RULE_SETS: [FormatRules; 6] = [BASELINE, NUMERIC_SEED, TEXT_SEED, GAME_MODE, WIDE_WALLS, SHIMMER];

/// Oldest version any rule set covers.
pub fn oldest_supported_version() -> i32 {
    RULE_SETS[0].min_version
}

/// Look up the layout rules for a file version.
pub fn rules_for(version: i32) -> Result<FormatRules> {
    let set = RULE_SETS
        .iter()
        .rev()
        .find(|r| r.min_version <= version)
        .ok_or(Error::UnsupportedVersion { version, minimum: oldest_supported_version() })?;

    if version > NEWEST_KNOWN_VERSION {
        warn!(version, newest = NEWEST_KNOWN_VERSION, rules = set.label, "world is newer than any known layout; decoding with newest rules");
    }

    let special_seed_count = match set.game_mode {
        GameModeEncoding::ExpertFlag => 0,
        GameModeEncoding::Int32 => SPECIAL_SEED_VERSIONS.iter().filter(|(v, _)| version >= *v).count(),
    };

    Ok(FormatRules { version, special_seed_count, ..*set })
}

impl FormatRules {
    /// Special-seed flags in file order, limited to the ones this version stores.
    pub fn special_seeds(&self) -> impl Iterator<Item = SpecialSeeds> + '_ {
        SPECIAL_SEED_VERSIONS.iter().take(self.special_seed_count).map(|(_, flag)| *flag)
    }
}
