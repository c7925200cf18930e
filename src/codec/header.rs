use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::error::{Error, Result};
use super::format::{rules_for, FormatRules};
use super::BinaryReader;

const MAGIC: &[u8; 7] = b"relogic";
const WORLD_FILE_TYPE: u8 = 2;

/// The offset-delimited regions of a world file, by table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    /// Everything before the first table offset
    Header,
    Properties,
    Tiles,
    Chests,
    Signs,
    Npcs,
    TileEntities,
    PressurePlates,
    TownManager,
    Bestiary,
    CreativePowers,
    Other(usize),
}

impl SectionKind {
    pub const PROPERTIES: usize = 0;
    pub const TILES: usize = 1;
    pub const CHESTS: usize = 2;
    pub const SIGNS: usize = 3;

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => SectionKind::Properties,
            1 => SectionKind::Tiles,
            2 => SectionKind::Chests,
            3 => SectionKind::Signs,
            4 => SectionKind::Npcs,
            5 => SectionKind::TileEntities,
            6 => SectionKind::PressurePlates,
            7 => SectionKind::TownManager,
            8 => SectionKind::Bestiary,
            9 => SectionKind::CreativePowers,
            n => SectionKind::Other(n),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Header => f.write_str("header"),
            SectionKind::Properties => f.write_str("properties"),
            SectionKind::Tiles => f.write_str("tiles"),
            SectionKind::Chests => f.write_str("chests"),
            SectionKind::Signs => f.write_str("signs"),
            SectionKind::Npcs => f.write_str("npcs"),
            SectionKind::TileEntities => f.write_str("tile entities"),
            SectionKind::PressurePlates => f.write_str("pressure plates"),
            SectionKind::TownManager => f.write_str("town manager"),
            SectionKind::Bestiary => f.write_str("bestiary"),
            SectionKind::CreativePowers => f.write_str("creative powers"),
            SectionKind::Other(n) => write!(f, "#{n}"),
        }
    }
}

/// Block ids whose tiles store a (u, v) sprite frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameImportant(Vec<bool>);

impl FrameImportant {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    pub fn from_ids(ids: &[u16]) -> Self {
        let len = ids.iter().map(|&id| id as usize + 1).max().unwrap_or(0);
        let mut bits = vec![false; len];
        for &id in ids {
            bits[id as usize] = true;
        }
        Self(bits)
    }

    pub fn contains(&self, id: u16) -> bool {
        self.0.get(id as usize).copied().unwrap_or(false)
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }
}

/// Fixed part of a world file: version, section table, frame bit map.
#[derive(Debug, Clone, Serialize)]
pub struct WorldHeader {
    pub version: i32,
    pub revision: u32,
    pub favorite: bool,
    section_offsets: Vec<usize>,
    file_len: usize,
    #[serde(skip)]
    frame_important: FrameImportant,
}

impl WorldHeader {
    pub fn section_count(&self) -> usize {
        self.section_offsets.len()
    }

    pub fn section_offsets(&self) -> &[usize] {
        &self.section_offsets
    }

    pub fn file_len(&self) -> usize {
        self.file_len
    }

    pub fn frame_important(&self) -> &FrameImportant {
        &self.frame_important
    }

    /// Byte range of section `index`; the last section runs to the end of file.
    pub fn section_range(&self, index: usize) -> Option<Range<usize>> {
        let start = *self.section_offsets.get(index)?;
        let end = self.section_offsets.get(index + 1).copied().unwrap_or(self.file_len);
        Some(start..end)
    }

    /// Read the header and look up the rules for its version.
    ///
    /// `reader` must be positioned at the start of the file.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<(Self, FormatRules)> {
        let file_len = reader.end();
        let version = reader.read_i32()?;
        let rules = rules_for(version)?;

        let magic_offset = reader.position();
        let magic = reader.read_array::<7>()?;
        if &magic != MAGIC {
            return Err(Error::CorruptHeader {
                offset: magic_offset,
                reason: format!("bad magic {magic:02x?}"),
            });
        }
        let file_type = reader.read_u8()?;
        if file_type != WORLD_FILE_TYPE {
            return Err(Error::CorruptHeader {
                offset: magic_offset + MAGIC.len(),
                reason: format!("file type {file_type} is not a world"),
            });
        }
        let revision = reader.read_u32()?;
        let favorite = reader.read_u64()? & 1 != 0;

        let count_offset = reader.position();
        let count = reader.read_i16()?;
        if count < 2 {
            return Err(Error::CorruptHeader {
                offset: count_offset,
                reason: format!("{count} sections, need at least properties and tiles"),
            });
        }
        let table_offset = reader.position();
        let mut raw_offsets = Vec::with_capacity(count as usize);
        for _ in 0..count {
            raw_offsets.push(reader.read_i32()?);
        }

        let frame_important = if rules.has_frame_important_map {
            let n = reader.read_i16()?;
            FrameImportant::from_bits(reader.read_bits(n.max(0) as usize)?)
        } else {
            FrameImportant::default()
        };

        let section_offsets = validate_offsets(&raw_offsets, table_offset, reader.position(), file_len)?;

        Ok((
            Self { version, revision, favorite, section_offsets, file_len, frame_important },
            rules,
        ))
    }
}

/// Offsets must start after the header, strictly increase, and stay within the file.
fn validate_offsets(raw: &[i32], table_offset: usize, header_end: usize, file_len: usize) -> Result<Vec<usize>> {
    let mut offsets = Vec::with_capacity(raw.len());
    let mut floor = header_end;
    for (i, &value) in raw.iter().enumerate() {
        let entry_offset = table_offset + i * 4;
        let offset = usize::try_from(value).map_err(|_| Error::CorruptHeader {
            offset: entry_offset,
            reason: format!("section {i} offset {value} is negative"),
        })?;
        if offset < floor || (i > 0 && offset == floor) {
            return Err(Error::CorruptHeader {
                offset: entry_offset,
                reason: format!("section {i} offset {offset} does not follow {floor}"),
            });
        }
        if offset > file_len {
            return Err(Error::CorruptHeader {
                offset: entry_offset,
                reason: format!("section {i} offset {offset} past end of file ({file_len} bytes)"),
            });
        }
        offsets.push(offset);
        floor = offset;
    }
    Ok(offsets)
}
