//! Builders for in-memory world files used by the unit tests.

use crate::codec::{encode_tiles, rules_for, BinaryWriter, FormatRules, FrameImportant, GameModeEncoding, SeedEncoding, SpecialSeeds};
use crate::options::LoadOptions;
use crate::state::{Difficulty, Point, Seed, TileGrid, World, WorldEvil, WorldMetadata};

pub const FIXTURE_VERSION: i32 = 279;

pub fn sample_metadata(width: u32, height: u32) -> WorldMetadata {
    WorldMetadata {
        name: "Fixture World".into(),
        seed: Some(Seed::Text("1234567".into())),
        generator_version: Some(1_198_295_875_585),
        guid: Some([0x5A; 16]),
        world_id: 4711,
        width,
        height,
        difficulty: Difficulty::Classic,
        special_seeds: SpecialSeeds::empty(),
        creation_time: Some(638_400_000_000_000_000),
        spawn: Point { x: (width / 2) as i32, y: (height / 2) as i32 },
        surface_level: f64::from(height) * 0.3,
        rock_level: f64::from(height) * 0.4,
        dungeon: Point { x: 0, y: 0 },
        world_evil: WorldEvil::Corruption,
        is_hardmode: false,
    }
}

/// Write a properties section that reads back as `meta` under `rules`.
pub fn write_metadata(w: &mut BinaryWriter, meta: &WorldMetadata, rules: &FormatRules) {
    w.write_string(&meta.name);
    match rules.seed {
        SeedEncoding::Absent => {}
        SeedEncoding::Number => {
            let seed = match &meta.seed {
                Some(Seed::Number(n)) => *n,
                _ => 0,
            };
            w.write_i32(seed);
            w.write_u64(meta.generator_version.unwrap_or_default());
        }
        SeedEncoding::Text => {
            w.write_string(&meta.seed.as_ref().map(|s| s.to_string()).unwrap_or_default());
            w.write_u64(meta.generator_version.unwrap_or_default());
        }
    }
    if rules.has_world_guid {
        w.write_bytes(&meta.guid.unwrap_or_default());
    }
    w.write_i32(meta.world_id);
    for bound in [0, meta.width as i32 * 16, 0, meta.height as i32 * 16] {
        w.write_i32(bound);
    }
    w.write_i32(meta.height as i32);
    w.write_i32(meta.width as i32);

    match rules.game_mode {
        GameModeEncoding::ExpertFlag => w.write_bool(meta.difficulty == Difficulty::Expert),
        GameModeEncoding::Int32 => {
            w.write_i32(meta.difficulty.game_mode());
            for flag in rules.special_seeds() {
                w.write_bool(meta.special_seeds.contains(flag));
            }
        }
    }
    if rules.has_creation_time {
        w.write_i64(meta.creation_time.unwrap_or_default());
    }
    w.write_u8(0); // moon type
    for _ in 0..17 {
        w.write_i32(0); // background styles
    }
    w.write_i32(meta.spawn.x);
    w.write_i32(meta.spawn.y);
    w.write_f64(meta.surface_level);
    w.write_f64(meta.rock_level);
    w.write_f64(13_500.0);
    w.write_bool(true);
    w.write_i32(0);
    w.write_bool(false);
    w.write_bool(false);
    w.write_i32(meta.dungeon.x);
    w.write_i32(meta.dungeon.y);
    w.write_bool(meta.world_evil == WorldEvil::Crimson);
    for _ in 0..18 {
        w.write_bool(false); // bosses, NPCs, invasions
    }
    w.write_bool(false);
    w.write_bool(false);
    w.write_u8(0);
    w.write_i32(0);
    w.write_bool(meta.is_hardmode);
}

/// A world file assembled section by section.
pub struct WorldFile {
    version: i32,
    metadata: WorldMetadata,
    frame_important: FrameImportant,
    tiles: Vec<u8>,
    chests: i16,
    signs: i16,
    trailing_sections: bool,
    properties_len_delta: isize,
}

impl WorldFile {
    pub fn new(version: i32, metadata: WorldMetadata) -> Self {
        Self {
            version,
            metadata,
            frame_important: FrameImportant::default(),
            tiles: Vec::new(),
            chests: 0,
            signs: 0,
            trailing_sections: true,
            properties_len_delta: 0,
        }
    }

    pub fn frame_important(mut self, frames: FrameImportant) -> Self {
        self.frame_important = frames;
        self
    }

    pub fn tiles(mut self, tiles: Vec<u8>) -> Self {
        self.tiles = tiles;
        self
    }

    pub fn chests(mut self, count: i16) -> Self {
        self.chests = count;
        self
    }

    pub fn signs(mut self, count: i16) -> Self {
        self.signs = count;
        self
    }

    /// Only the properties and tile sections
    pub fn without_trailing_sections(mut self) -> Self {
        self.trailing_sections = false;
        self
    }

    /// Move the tile section's table offset relative to the real end of properties
    pub fn properties_len_delta(mut self, delta: isize) -> Self {
        self.properties_len_delta = delta;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let rules = rules_for(self.version).unwrap();
        let section_count = if self.trailing_sections { 5 } else { 2 };

        let mut w = BinaryWriter::new();
        w.write_i32(self.version);
        w.write_bytes(b"relogic");
        w.write_u8(2);
        w.write_u32(1);
        w.write_u64(0);
        w.write_i16(section_count as i16);
        let table = w.len();
        for _ in 0..section_count {
            w.write_i32(0);
        }
        if rules.has_frame_important_map {
            w.write_i16(self.frame_important.bits().len() as i16);
            w.write_bits(self.frame_important.bits());
        }

        let mut offsets = vec![w.len()];
        write_metadata(&mut w, &self.metadata, &rules);
        offsets.push(w.len().checked_add_signed(self.properties_len_delta).unwrap());
        w.write_bytes(&self.tiles);

        if self.trailing_sections {
            offsets.push(w.len());
            w.write_i16(self.chests);
            w.write_i16(40);
            offsets.push(w.len());
            w.write_i16(self.signs);
            // empty NPC section at the very end of the file
            offsets.push(w.len());
        }

        for (i, offset) in offsets.into_iter().enumerate() {
            w.patch_i32(table + i * 4, offset as i32);
        }
        w.into_vec()
    }
}

/// A complete current-version file holding `grid`.
pub fn encode_world(grid: &TileGrid, frame_important: &FrameImportant) -> Vec<u8> {
    let rules = rules_for(FIXTURE_VERSION).unwrap();
    let tiles = encode_tiles(grid, &rules, frame_important).unwrap();
    WorldFile::new(FIXTURE_VERSION, sample_metadata(grid.width(), grid.height()))
        .frame_important(frame_important.clone())
        .tiles(tiles)
        .build()
}

pub fn world_from_grid(grid: &TileGrid) -> World {
    World::from_bytes(&encode_world(grid, &FrameImportant::default()), &LoadOptions::default()).unwrap()
}
