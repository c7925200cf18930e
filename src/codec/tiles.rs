//! Tile section records.
//!
//! Tiles are stored column-major (every y of x = 0, then x = 1, ...). Each
//! record is one to four header bytes followed by the fields those headers
//! announce, and an optional run length: the number of following cells that
//! repeat this tile. Runs continue across column boundaries.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::error::{Error, Result};
use crate::state::{Block, ExtraBits, Frame, Liquid, LiquidKind, Tile, TileExtras, TileGrid, Wall};
use super::format::{FormatRules, Header1, Header2, Header3, Header4, IdWidth};
use super::header::FrameImportant;
use super::{BinaryReader, BinaryWriter};

/// Longest run a single record carries: the tile plus a u16 repeat count.
pub const MAX_RUN: u32 = u16::MAX as u32 + 1;

/// One decoded record: `count` consecutive cells holding `tile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRun {
    pub tile: Tile,
    pub count: u32,
    /// Absolute file offset of the record's first header byte
    pub offset: usize,
}

/// Iterator over the records of a tile section.
///
/// Checks every record against the grid capacity, so a fully consumed
/// iterator has produced exactly `width * height` cells.
pub struct TileRecords<'a, 'r> {
    reader: BinaryReader<'a>,
    rules: FormatRules,
    frame_important: &'r FrameImportant,
    cancel: Option<&'r AtomicBool>,
    position: u64,
    capacity: u64,
    records: u64,
    done: bool,
}

impl<'a, 'r> TileRecords<'a, 'r> {
    pub fn new(
        reader: BinaryReader<'a>,
        rules: FormatRules,
        frame_important: &'r FrameImportant,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            reader,
            rules,
            frame_important,
            cancel: None,
            position: 0,
            capacity: u64::from(width) * u64::from(height),
            records: 0,
            done: false,
        }
    }

    /// Stop with [`Error::Cancelled`] at the next record once `flag` is set.
    pub fn with_cancel(mut self, flag: Option<&'r AtomicBool>) -> Self {
        self.cancel = flag;
        self
    }

    /// Cells produced so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn records(&self) -> u64 {
        self.records
    }

    fn fail(&mut self, err: Error) -> Option<Result<TileRun>> {
        self.done = true;
        Some(Err(err))
    }

    fn read_record(&mut self) -> Result<(Tile, u32)> {
        let r = &mut self.reader;
        let h1 = Header1::from_bits_retain(r.read_u8()?);
        let h2 = if h1.contains(Header1::HAS_HEADER2) {
            Header2::from_bits_retain(r.read_u8()?)
        } else {
            Header2::empty()
        };
        let h3 = if h2.contains(Header2::HAS_HEADER3) {
            Header3::from_bits_retain(r.read_u8()?)
        } else {
            Header3::empty()
        };
        let h4 = if self.rules.has_header4 && h3.contains(Header3::HAS_HEADER4) {
            Header4::from_bits_retain(r.read_u8()?)
        } else {
            Header4::empty()
        };

        let block = if h1.contains(Header1::ACTIVE) {
            let type_id = match self.rules.block_id {
                IdWidth::FlaggedU16 if h1.contains(Header1::BLOCK_U16) => r.read_u16()?,
                _ => u16::from(r.read_u8()?),
            };
            let frame = if self.frame_important.contains(type_id) {
                Some(Frame { u: r.read_i16()?, v: r.read_i16()? })
            } else {
                None
            };
            let paint = if h3.contains(Header3::BLOCK_PAINT) { Some(r.read_u8()?) } else { None };
            Some(Block { type_id, frame, paint })
        } else {
            None
        };

        let mut wall = if h1.contains(Header1::HAS_WALL) {
            let type_id = u16::from(r.read_u8()?);
            let paint = if h3.contains(Header3::WALL_PAINT) { Some(r.read_u8()?) } else { None };
            Some(Wall { type_id, paint })
        } else {
            None
        };

        let liquid_bits = (h1 & Header1::LIQUID).bits() >> 3;
        let shimmer = self.rules.has_shimmer && h3.contains(Header3::SHIMMER);
        let liquid = match LiquidKind::from_bits(liquid_bits) {
            Some(_) if shimmer => Some(Liquid { kind: LiquidKind::Shimmer, amount: r.read_u8()? }),
            Some(kind) => Some(Liquid { kind, amount: r.read_u8()? }),
            None => None,
        };

        if self.rules.wall_id == IdWidth::HighByteExtension && h3.contains(Header3::WALL_HIGH_BYTE) {
            let at = r.position();
            let high = r.read_u8()?;
            match wall.as_mut() {
                Some(w) => w.type_id |= u16::from(high) << 8,
                None => {
                    return Err(Error::MalformedField {
                        offset: at,
                        field: "wall high byte",
                        reason: "tile has no wall".into(),
                    })
                }
            }
        }
        if wall.is_some_and(|w| w.type_id == 0) {
            wall = None;
        }

        let mut flags = TileExtras::empty();
        flags.set(TileExtras::WIRE_RED, h2.contains(Header2::WIRE_RED));
        flags.set(TileExtras::WIRE_BLUE, h2.contains(Header2::WIRE_BLUE));
        flags.set(TileExtras::WIRE_GREEN, h2.contains(Header2::WIRE_GREEN));
        flags.set(TileExtras::WIRE_YELLOW, h3.contains(Header3::WIRE_YELLOW));
        flags.set(TileExtras::ACTUATOR, h3.contains(Header3::ACTUATOR));
        flags.set(TileExtras::INACTIVE, h3.contains(Header3::INACTIVE));
        flags.set(TileExtras::BLOCK_INVISIBLE, h4.contains(Header4::BLOCK_INVISIBLE));
        flags.set(TileExtras::WALL_INVISIBLE, h4.contains(Header4::WALL_INVISIBLE));
        flags.set(TileExtras::BLOCK_FULLBRIGHT, h4.contains(Header4::BLOCK_FULLBRIGHT));
        flags.set(TileExtras::WALL_FULLBRIGHT, h4.contains(Header4::WALL_FULLBRIGHT));
        let shape = (h2 & Header2::SHAPE).bits() >> 4;

        let repeats = match h1.bits() >> 6 {
            0 => 0,
            1 => u32::from(r.read_u8()?),
            _ => u32::from(r.read_u16()?),
        };

        let tile = Tile { block, wall, liquid, extra: ExtraBits { flags, shape } };
        Ok((tile, 1 + repeats))
    }
}

impl Iterator for TileRecords<'_, '_> {
    type Item = Result<TileRun>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.position == self.capacity {
            self.done = true;
            if self.reader.is_empty() {
                debug!(records = self.records, tiles = self.position, "tile section fully decoded");
                return None;
            }
            let offset = self.reader.position();
            let run = self.read_record().map(|(_, count)| u64::from(count)).unwrap_or(1);
            return self.fail(Error::GridOverrun { offset, position: self.position, run, capacity: self.capacity });
        }

        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return self.fail(Error::Cancelled);
        }

        let offset = self.reader.position();
        if self.reader.is_empty() {
            return self.fail(Error::GridUnderrun { offset, filled: self.position, expected: self.capacity });
        }

        let (tile, count) = match self.read_record() {
            Ok(record) => record,
            Err(e) => return self.fail(e),
        };
        let run = u64::from(count);
        if self.position + run > self.capacity {
            return self.fail(Error::GridOverrun { offset, position: self.position, run, capacity: self.capacity });
        }

        self.position += run;
        self.records += 1;
        Some(Ok(TileRun { tile, count, offset }))
    }
}

/// Decode a whole tile section into a dense grid.
pub fn decode_grid(
    reader: BinaryReader<'_>,
    width: u32,
    height: u32,
    rules: &FormatRules,
    frame_important: &FrameImportant,
) -> Result<TileGrid> {
    TileGrid::from_runs(width, height, TileRecords::new(reader, *rules, frame_important, width, height))
}

/// Encode a grid as tile section records, merging equal neighbours into runs.
///
/// Fails when a tile uses something `rules` cannot store, such as a wall id
/// above 255 before walls were widened.
pub fn encode_tiles(grid: &TileGrid, rules: &FormatRules, frame_important: &FrameImportant) -> Result<Vec<u8>> {
    let mut writer = BinaryWriter::with_capacity(grid.palette().len() * 8);
    let cells = grid.cells();
    let palette = grid.palette();

    let mut i = 0;
    while i < cells.len() {
        let idx = cells[i];
        let mut count = 1u32;
        while count < MAX_RUN && i + (count as usize) < cells.len() && cells[i + count as usize] == idx {
            count += 1;
        }
        write_record(&mut writer, &palette[idx as usize], count - 1, rules, frame_important)?;
        i += count as usize;
    }
    Ok(writer.into_vec())
}

fn unencodable(field: &'static str, reason: String) -> Error {
    Error::MalformedField { offset: 0, field, reason }
}

fn write_record(
    w: &mut BinaryWriter,
    tile: &Tile,
    repeats: u32,
    rules: &FormatRules,
    frame_important: &FrameImportant,
) -> Result<()> {
    let mut h1 = Header1::empty();
    let mut h2 = Header2::empty();
    let mut h3 = Header3::empty();
    let mut h4 = Header4::empty();
    let flags = tile.extra.flags;

    if let Some(block) = &tile.block {
        if block.type_id > rules.block_id.max_id() {
            return Err(unencodable("block id", format!("{} not storable in version {}", block.type_id, rules.version)));
        }
        match (frame_important.contains(block.type_id), block.frame.is_some()) {
            (true, false) => {
                return Err(unencodable("block frame", format!("block {} needs a frame", block.type_id)));
            }
            (false, true) => {
                return Err(unencodable("block frame", format!("block {} has no frame slot", block.type_id)));
            }
            _ => {}
        }
        h1 |= Header1::ACTIVE;
        h1.set(Header1::BLOCK_U16, rules.block_id == IdWidth::FlaggedU16 && block.type_id > u8::MAX as u16);
        h3.set(Header3::BLOCK_PAINT, block.paint.is_some());
    }
    if let Some(wall) = &tile.wall {
        if wall.type_id == 0 || wall.type_id > rules.wall_id.max_id() {
            return Err(unencodable("wall id", format!("{} not storable in version {}", wall.type_id, rules.version)));
        }
        h1 |= Header1::HAS_WALL;
        h3.set(Header3::WALL_PAINT, wall.paint.is_some());
        h3.set(Header3::WALL_HIGH_BYTE, wall.type_id > u8::MAX as u16);
    }
    if let Some(liquid) = &tile.liquid {
        if liquid.kind == LiquidKind::Shimmer {
            if !rules.has_shimmer {
                return Err(unencodable("liquid", format!("shimmer not storable in version {}", rules.version)));
            }
            h3 |= Header3::SHIMMER;
        }
        h1 |= Header1::from_bits_retain(liquid.kind.bits() << 3);
    }

    h2.set(Header2::WIRE_RED, flags.contains(TileExtras::WIRE_RED));
    h2.set(Header2::WIRE_BLUE, flags.contains(TileExtras::WIRE_BLUE));
    h2.set(Header2::WIRE_GREEN, flags.contains(TileExtras::WIRE_GREEN));
    h2 |= Header2::from_bits_retain((tile.extra.shape & 0x07) << 4);
    h3.set(Header3::WIRE_YELLOW, flags.contains(TileExtras::WIRE_YELLOW));
    h3.set(Header3::ACTUATOR, flags.contains(TileExtras::ACTUATOR));
    h3.set(Header3::INACTIVE, flags.contains(TileExtras::INACTIVE));
    h4.set(Header4::BLOCK_INVISIBLE, flags.contains(TileExtras::BLOCK_INVISIBLE));
    h4.set(Header4::WALL_INVISIBLE, flags.contains(TileExtras::WALL_INVISIBLE));
    h4.set(Header4::BLOCK_FULLBRIGHT, flags.contains(TileExtras::BLOCK_FULLBRIGHT));
    h4.set(Header4::WALL_FULLBRIGHT, flags.contains(TileExtras::WALL_FULLBRIGHT));

    if !h4.is_empty() {
        if !rules.has_header4 {
            return Err(unencodable("tile flags", format!("invisible/full-bright not storable in version {}", rules.version)));
        }
        h3 |= Header3::HAS_HEADER4;
    }
    if !h3.is_empty() {
        h2 |= Header2::HAS_HEADER3;
    }
    if !h2.is_empty() {
        h1 |= Header1::HAS_HEADER2;
    }
    if repeats > u32::from(u8::MAX) {
        h1 |= Header1::RLE_U16;
    } else if repeats > 0 {
        h1 |= Header1::RLE_U8;
    }

    w.write_u8(h1.bits());
    if h1.contains(Header1::HAS_HEADER2) {
        w.write_u8(h2.bits());
    }
    if h2.contains(Header2::HAS_HEADER3) {
        w.write_u8(h3.bits());
    }
    if h3.contains(Header3::HAS_HEADER4) {
        w.write_u8(h4.bits());
    }

    if let Some(block) = &tile.block {
        if h1.contains(Header1::BLOCK_U16) {
            w.write_u16(block.type_id);
        } else {
            w.write_u8(block.type_id as u8);
        }
        if let Some(frame) = block.frame {
            w.write_i16(frame.u);
            w.write_i16(frame.v);
        }
        if let Some(paint) = block.paint {
            w.write_u8(paint);
        }
    }
    if let Some(wall) = &tile.wall {
        w.write_u8(wall.type_id as u8);
        if let Some(paint) = wall.paint {
            w.write_u8(paint);
        }
    }
    if let Some(liquid) = &tile.liquid {
        w.write_u8(liquid.amount);
    }
    if let Some(wall) = tile.wall.filter(|w| w.type_id > u8::MAX as u16) {
        w.write_u8((wall.type_id >> 8) as u8);
    }

    if h1.contains(Header1::RLE_U16) {
        w.write_u16(repeats as u16);
    } else if h1.contains(Header1::RLE_U8) {
        w.write_u8(repeats as u8);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::format::rules_for;
    use proptest::prelude::*;
    use wld_ids::{tile, wall};

    fn decode(data: &[u8], width: u32, height: u32, version: i32, frames: &FrameImportant) -> Result<TileGrid> {
        let rules = rules_for(version).unwrap();
        decode_grid(BinaryReader::new(data), width, height, &rules, frames)
    }

    /// (block=Dirt), (block=Dirt, wall=Stone), (empty), (block=Dirt, wall=Stone)
    fn two_by_two() -> TileGrid {
        let dirt = Tile::EMPTY.with_block(tile::DIRT);
        let dirt_on_stone = dirt.with_wall(wall::STONE);
        let tiles = [dirt, dirt_on_stone, Tile::EMPTY, dirt_on_stone];
        TileGrid::from_fn(2, 2, |x, y| tiles[(x * 2 + y) as usize])
    }

    #[test]
    fn test_decode_plain_records() {
        // dirt; dirt + stone wall; empty; dirt + stone wall
        let data = [0x02, 0x00, 0x06, 0x00, 0x01, 0x00, 0x06, 0x00, 0x01];
        let grid = decode(&data, 2, 2, 279, &FrameImportant::default()).unwrap();
        assert_eq!(grid, two_by_two());
        assert!(grid.get(1, 0).unwrap().is_empty());
        assert_eq!(grid.get(1, 1).unwrap().wall.unwrap().type_id, wall::STONE);
    }

    #[test]
    fn test_run_exactly_fills_grid() {
        // stone repeated 5 more times fills a 2x3 grid
        let data = [0x42, 0x01, 0x05];
        let grid = decode(&data, 2, 3, 279, &FrameImportant::default()).unwrap();
        assert!(grid.iter().all(|t| t.block.unwrap().type_id == tile::STONE));
        assert_eq!(grid.palette().len(), 1);
    }

    #[test]
    fn test_one_tile_short_is_underrun() {
        let data = [0x42, 0x01, 0x04];
        match decode(&data, 2, 3, 279, &FrameImportant::default()) {
            Err(Error::GridUnderrun { offset, filled, expected }) => {
                assert_eq!((offset, filled, expected), (3, 5, 6));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_one_tile_over_is_overrun() {
        let data = [0x42, 0x01, 0x06];
        assert!(matches!(
            decode(&data, 2, 3, 279, &FrameImportant::default()),
            Err(Error::GridOverrun { offset: 0, position: 0, run: 7, capacity: 6 })
        ));

        // grid already full, one more record follows
        let data = [0x42, 0x01, 0x05, 0x02, 0x00];
        assert!(matches!(
            decode(&data, 2, 3, 279, &FrameImportant::default()),
            Err(Error::GridOverrun { offset: 3, position: 6, run: 1, capacity: 6 })
        ));
    }

    #[test]
    fn test_overrun_reported_at_record_offset() {
        // 1x5 column: two single dirt tiles, then a record claiming 5 repeats
        // with only 3 cells left.
        let data = [0x02, 0x00, 0x02, 0x00, 0x42, 0x01, 0x05];
        match decode(&data, 1, 5, 279, &FrameImportant::default()) {
            Err(Error::GridOverrun { offset, position, run, capacity }) => {
                assert_eq!(offset, 4);
                assert_eq!(position, 2);
                assert_eq!(run, 6);
                assert_eq!(capacity, 5);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_record_cut_mid_field() {
        // 16-bit block id announced, one byte present
        let data = [0x22, 0x01];
        assert!(matches!(
            decode(&data, 1, 1, 279, &FrameImportant::default()),
            Err(Error::TruncatedInput { offset: 1, need: 2, have: 1 })
        ));
    }

    #[test]
    fn test_frame_important_blocks_carry_frames() {
        let frames = FrameImportant::from_ids(&[tile::TORCHES]);
        // torch with frame (22, 0), then a plain stone tile
        let data = [0x02, 0x04, 0x16, 0x00, 0x00, 0x00, 0x02, 0x01];
        let grid = decode(&data, 1, 2, 279, &frames).unwrap();
        let torch = grid.get(0, 0).unwrap().block.unwrap();
        assert_eq!(torch.type_id, tile::TORCHES);
        assert_eq!(torch.frame, Some(Frame { u: 22, v: 0 }));
        assert_eq!(grid.get(0, 1).unwrap().block.unwrap().frame, None);

        // Without the frame map the same bytes misalign and run out.
        assert!(decode(&data, 1, 2, 279, &FrameImportant::default()).is_err());
    }

    #[test]
    fn test_frame_must_match_frame_map() {
        let frames = FrameImportant::from_ids(&[tile::TORCHES]);
        let rules = rules_for(279).unwrap();

        let bare_torch = TileGrid::from_fn(1, 1, |_, _| Tile::EMPTY.with_block(tile::TORCHES));
        assert!(matches!(
            encode_tiles(&bare_torch, &rules, &frames),
            Err(Error::MalformedField { field: "block frame", .. })
        ));

        let framed_stone = TileGrid::from_fn(1, 1, |_, _| Tile {
            block: Some(Block { type_id: tile::STONE, frame: Some(Frame { u: 18, v: 0 }), paint: None }),
            ..Tile::EMPTY
        });
        assert!(matches!(
            encode_tiles(&framed_stone, &rules, &frames),
            Err(Error::MalformedField { field: "block frame", .. })
        ));
    }

    #[test]
    fn test_block_id_width_follows_rules() {
        let grid = TileGrid::from_fn(1, 1, |_, _| Tile::EMPTY.with_block(tile::ASH_GRASS));
        let frames = FrameImportant::default();

        let rules = rules_for(279).unwrap();
        let data = encode_tiles(&grid, &rules, &frames).unwrap();
        // ACTIVE | BLOCK_U16, then the id as u16
        assert_eq!(data, [0x22, 0x79, 0x02]);

        let narrow = FormatRules { block_id: IdWidth::U8, ..rules };
        assert!(matches!(
            encode_tiles(&grid, &narrow, &frames),
            Err(Error::MalformedField { field: "block id", .. })
        ));
        // With narrow ids the u16 flag is ignored and only the low byte is read.
        let mut records = TileRecords::new(BinaryReader::new(&data), narrow, &frames, 1, 1);
        let run = records.next().unwrap().unwrap();
        assert_eq!(run.tile.block.unwrap().type_id, 0x79);
    }

    #[test]
    fn test_wall_high_byte_only_from_222() {
        // header2 -> header3 with WALL_HIGH_BYTE; wall low byte 0x2C, high byte 0x01
        let data = [0x05, 0x01, 0x40, 0x2C, 0x01];
        let grid = decode(&data, 1, 1, 222, &FrameImportant::default()).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().wall.unwrap().type_id, 0x012C);

        // Before 222 the flag means nothing and the high byte is an extra record.
        assert!(matches!(
            decode(&data, 1, 1, 221, &FrameImportant::default()),
            Err(Error::GridOverrun { offset: 4, .. })
        ));
    }

    #[test]
    fn test_liquid_and_extras() {
        let mut mud = Tile::EMPTY.with_block(tile::MUD).with_liquid(LiquidKind::Honey, 255);
        mud.extra.flags = TileExtras::WIRE_RED | TileExtras::ACTUATOR;
        mud.extra.shape = 2;
        let grid = TileGrid::from_fn(1, 1, |_, _| mud);

        let rules = rules_for(279).unwrap();
        let data = encode_tiles(&grid, &rules, &FrameImportant::default()).unwrap();
        let decoded = decode(&data, 1, 1, 279, &FrameImportant::default()).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_shimmer_needs_1_4_4() {
        let grid = TileGrid::from_fn(1, 1, |_, _| Tile::EMPTY.with_liquid(LiquidKind::Shimmer, 40));
        let old = rules_for(250).unwrap();
        assert!(encode_tiles(&grid, &old, &FrameImportant::default()).is_err());

        let new = rules_for(279).unwrap();
        let data = encode_tiles(&grid, &new, &FrameImportant::default()).unwrap();
        let decoded = decode(&data, 1, 1, 279, &FrameImportant::default()).unwrap();
        assert_eq!(decoded.get(0, 0).unwrap().liquid, Some(Liquid { kind: LiquidKind::Shimmer, amount: 40 }));
    }

    #[test]
    fn test_long_runs_split() {
        let grid = TileGrid::from_fn(3, 40_000, |_, _| Tile::EMPTY.with_block(tile::STONE));
        let rules = rules_for(279).unwrap();
        let data = encode_tiles(&grid, &rules, &FrameImportant::default()).unwrap();
        // 120000 cells / 65536 per record -> 2 records of 4 bytes
        assert_eq!(data.len(), 8);
        assert_eq!(decode(&data, 3, 40_000, 279, &FrameImportant::default()).unwrap(), grid);
    }

    #[test]
    fn test_cancellation_at_record_boundary() {
        let data = [0x02, 0x00, 0x02, 0x00];
        let rules = rules_for(279).unwrap();
        let frames = FrameImportant::default();
        let flag = AtomicBool::new(false);
        let mut records = TileRecords::new(BinaryReader::new(&data), rules, &frames, 1, 2).with_cancel(Some(&flag));

        assert!(records.next().unwrap().is_ok());
        flag.store(true, Ordering::Relaxed);
        assert!(matches!(records.next(), Some(Err(Error::Cancelled))));
        assert!(records.next().is_none());
        assert_eq!(records.position(), 1);
    }

    fn arb_tile() -> impl Strategy<Value = Tile> {
        (
            prop::option::of((0u16..700, prop::option::of(any::<u8>()))),
            prop::option::of((1u16..400, prop::option::of(any::<u8>()))),
            prop::option::of((0u8..4, any::<u8>())),
            any::<u16>(),
            0u8..6,
        )
            .prop_map(|(block, wall, liquid, flags, shape)| Tile {
                block: block.map(|(type_id, paint)| Block {
                    type_id,
                    frame: (type_id % 7 == 0).then_some(Frame { u: type_id as i16, v: 18 }),
                    paint,
                }),
                wall: wall.map(|(type_id, paint)| Wall { type_id, paint }),
                liquid: liquid.map(|(kind, amount)| Liquid {
                    kind: [LiquidKind::Water, LiquidKind::Lava, LiquidKind::Honey, LiquidKind::Shimmer][kind as usize],
                    amount,
                }),
                extra: ExtraBits { flags: TileExtras::from_bits_truncate(flags), shape },
            })
    }

    proptest! {
        #[test]
        fn prop_decode_encode_decode_is_identity(
            tiles in prop::collection::vec(arb_tile(), 1..6),
            picks in prop::collection::vec(0usize..6, 48),
        ) {
            let frames = FrameImportant::from_ids(&(0..700).filter(|id| id % 7 == 0).collect::<Vec<u16>>());
            let rules = rules_for(279).unwrap();
            let grid = TileGrid::from_fn(6, 8, |x, y| tiles[picks[(x * 8 + y) as usize] % tiles.len()]);

            let first = encode_tiles(&grid, &rules, &frames).unwrap();
            let decoded = decode(&first, 6, 8, 279, &frames).unwrap();
            prop_assert_eq!(&decoded, &grid);

            let second = encode_tiles(&decoded, &rules, &frames).unwrap();
            prop_assert_eq!(&second, &first);
            prop_assert_eq!(decode(&second, 6, 8, 279, &frames).unwrap(), decoded);
        }
    }
}
