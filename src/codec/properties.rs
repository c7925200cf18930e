//! World properties section.
//!
//! Only the fields up to the hardmode flag are decoded; the rest of the
//! section (boss kills, invasions, background styles, ...) is left unread.

use tracing::debug;

use crate::error::{Error, Result};
use crate::state::{Difficulty, Point, Seed, WorldEvil, WorldMetadata};
use super::format::{FormatRules, GameModeEncoding, SeedEncoding, SpecialSeeds};
use super::BinaryReader;

/// tree x (3), tree styles (4), cave back x (3), cave back styles (4),
/// ice, jungle and underworld back styles
const BACKGROUND_FIELDS: usize = 3 + 4 + 3 + 4 + 3;
/// eye, eater/brain, skeletron, queen bee, three mechs, any mech,
/// plantera, golem, king slime
const BOSS_FLAGS: usize = 11;
/// goblin, wizard, mechanic saved; goblin army, clown, frost legion, pirates
const NPC_AND_INVASION_FLAGS: usize = 7;

pub fn read_metadata(reader: &mut BinaryReader<'_>, rules: &FormatRules) -> Result<WorldMetadata> {
    let name = reader.read_string()?;

    let (seed, generator_version) = match rules.seed {
        SeedEncoding::Absent => (None, None),
        SeedEncoding::Number => (Some(Seed::Number(reader.read_i32()?)), Some(reader.read_u64()?)),
        SeedEncoding::Text => (Some(Seed::Text(reader.read_string()?)), Some(reader.read_u64()?)),
    };
    let guid = if rules.has_world_guid { Some(reader.read_array::<16>()?) } else { None };
    let world_id = reader.read_i32()?;
    reader.skip(4 * 4)?; // left, right, top, bottom in pixels

    let size_offset = reader.position();
    let height = reader.read_i32()?;
    let width = reader.read_i32()?;
    let (width, height) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(Error::MalformedField {
                offset: size_offset,
                field: "world size",
                reason: format!("{width}x{height}"),
            })
        }
    };

    let mode_offset = reader.position();
    let (difficulty, special_seeds) = match rules.game_mode {
        GameModeEncoding::ExpertFlag => {
            let expert = reader.read_bool()?;
            (if expert { Difficulty::Expert } else { Difficulty::Classic }, SpecialSeeds::empty())
        }
        GameModeEncoding::Int32 => {
            let mode = reader.read_i32()?;
            let difficulty = Difficulty::from_game_mode(mode).ok_or_else(|| Error::MalformedField {
                offset: mode_offset,
                field: "game mode",
                reason: format!("unknown mode {mode}"),
            })?;
            let mut seeds = SpecialSeeds::empty();
            for flag in rules.special_seeds() {
                if reader.read_bool()? {
                    seeds |= flag;
                }
            }
            (difficulty, seeds)
        }
    };

    let creation_time = if rules.has_creation_time { Some(reader.read_i64()?) } else { None };
    reader.skip(1)?; // moon type
    reader.skip(4 * BACKGROUND_FIELDS)?;

    let spawn_offset = reader.position();
    let spawn = Point { x: reader.read_i32()?, y: reader.read_i32()? };
    if spawn.x < 0 || spawn.y < 0 || spawn.x as u32 >= width || spawn.y as u32 >= height {
        return Err(Error::MalformedField {
            offset: spawn_offset,
            field: "spawn point",
            reason: format!("{spawn} outside {width}x{height}"),
        });
    }

    let surface_level = reader.read_f64()?;
    let rock_level = reader.read_f64()?;
    reader.skip(8 + 1 + 4 + 1 + 1)?; // time, day, moon phase, blood moon, eclipse
    let dungeon = Point { x: reader.read_i32()?, y: reader.read_i32()? };
    let world_evil = if reader.read_bool()? { WorldEvil::Crimson } else { WorldEvil::Corruption };

    reader.skip(BOSS_FLAGS + NPC_AND_INVASION_FLAGS)?;
    reader.skip(1 + 1)?; // shadow orb smashed, spawn meteor
    reader.skip(1 + 4)?; // shadow orb count, altar count
    let is_hardmode = reader.read_bool()?;

    debug!(name = %name, width, height, ?difficulty, "decoded world properties");

    Ok(WorldMetadata {
        name,
        seed,
        generator_version,
        guid,
        world_id,
        width,
        height,
        difficulty,
        special_seeds,
        creation_time,
        spawn,
        surface_level,
        rock_level,
        dungeon,
        world_evil,
        is_hardmode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::format::rules_for;
    use crate::codec::{BinaryWriter, SectionKind};
    use crate::fixtures::{sample_metadata, write_metadata};

    fn roundtrip(version: i32, meta: &WorldMetadata) -> WorldMetadata {
        let rules = rules_for(version).unwrap();
        let mut w = BinaryWriter::new();
        write_metadata(&mut w, meta, &rules);
        let data = w.into_vec();
        let mut reader = BinaryReader::new(&data);
        read_metadata(&mut reader, &rules).unwrap()
    }

    #[test]
    fn test_current_version_fields() {
        let mut meta = sample_metadata(4200, 1200);
        meta.difficulty = Difficulty::Journey;
        meta.special_seeds = SpecialSeeds::DRUNK | SpecialSeeds::ZENITH;
        meta.world_evil = WorldEvil::Crimson;
        meta.is_hardmode = true;

        let decoded = roundtrip(279, &meta);
        assert_eq!(decoded, meta);
        assert_eq!(decoded.seed, Some(Seed::Text("1234567".into())));
    }

    #[test]
    fn test_expert_flag_version() {
        let mut meta = sample_metadata(100, 50);
        meta.seed = None;
        meta.generator_version = None;
        meta.guid = None;
        meta.difficulty = Difficulty::Expert;

        let decoded = roundtrip(170, &meta);
        assert_eq!(decoded.difficulty, Difficulty::Expert);
        assert_eq!(decoded.seed, None);
        assert_eq!(decoded.special_seeds, SpecialSeeds::empty());
        assert_eq!((decoded.width, decoded.height), (100, 50));
    }

    #[test]
    fn test_numeric_seed_version() {
        let mut meta = sample_metadata(100, 50);
        meta.seed = Some(Seed::Number(-42));
        meta.guid = None;
        let decoded = roundtrip(179, &meta);
        assert_eq!(decoded.seed, Some(Seed::Number(-42)));
        assert_eq!(decoded.seed.unwrap().to_string(), "-42");
    }

    #[test]
    fn test_spawn_outside_world() {
        let mut meta = sample_metadata(10, 10);
        meta.spawn = Point { x: 10, y: 3 };
        let rules = rules_for(279).unwrap();
        let mut w = BinaryWriter::new();
        write_metadata(&mut w, &meta, &rules);
        let data = w.into_vec();
        let mut reader = BinaryReader::new(&data);
        match read_metadata(&mut reader, &rules) {
            Err(Error::MalformedField { field, .. }) => assert_eq!(field, "spawn point"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_read_past_section_end() {
        let meta = sample_metadata(10, 10);
        let rules = rules_for(279).unwrap();
        let mut w = BinaryWriter::new();
        write_metadata(&mut w, &meta, &rules);
        w.write_u8(0xEE);
        let data = w.into_vec();

        // section cut just before the hardmode flag
        let bound = data.len() - 2;
        let file = BinaryReader::new(&data);
        let mut reader = file.bounded(0, bound, SectionKind::Properties).unwrap();
        match read_metadata(&mut reader, &rules) {
            Err(Error::CorruptSection { section, offset, bound: b }) => {
                assert_eq!(section, SectionKind::Properties);
                assert_eq!((offset, b), (bound, bound));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_game_mode() {
        let mut meta = sample_metadata(10, 10);
        meta.difficulty = Difficulty::Classic;
        let rules = rules_for(279).unwrap();
        let mut w = BinaryWriter::new();
        write_metadata(&mut w, &meta, &rules);
        let mut data = w.into_vec();

        // name, seed, generator version, guid, world id, bounds, height, width
        let mode_at = 1 + meta.name.len() + 1 + 7 + 8 + 16 + 4 + 16 + 8;
        data[mode_at] = 9;
        let mut reader = BinaryReader::new(&data);
        assert!(matches!(
            read_metadata(&mut reader, &rules),
            Err(Error::MalformedField { field: "game mode", .. })
        ));
    }
}
