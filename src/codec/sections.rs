//! Whole-file layout: header, properties and the hand-off to the tile section.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::state::WorldMetadata;
use super::format::FormatRules;
use super::header::{SectionKind, WorldHeader};
use super::properties::read_metadata;
use super::BinaryReader;

/// Counts read from the sections after the tiles, plus every section's size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub chests: Option<u16>,
    pub signs: Option<u16>,
    /// Byte size of each section, by table index
    pub sizes: Vec<usize>,
}

/// Everything needed before tile decoding starts.
pub struct DecodedSections<'a> {
    pub header: WorldHeader,
    pub rules: FormatRules,
    pub metadata: WorldMetadata,
    pub summary: SectionSummary,
    /// Reader bounded to the tile section, positioned at its first record
    pub tiles: BinaryReader<'a>,
}

fn section_reader<'a>(file: &BinaryReader<'a>, header: &WorldHeader, index: usize) -> Result<Option<BinaryReader<'a>>> {
    match header.section_range(index) {
        Some(range) => Ok(Some(file.bounded(range.start, range.end, SectionKind::from_index(index))?)),
        None => Ok(None),
    }
}

/// Leading i16 item count of a chest or sign section.
fn read_count(reader: Option<BinaryReader<'_>>, field: &'static str) -> Result<Option<u16>> {
    let Some(mut reader) = reader else {
        return Ok(None);
    };
    let offset = reader.position();
    let count = reader.read_i16()?;
    u16::try_from(count).map(Some).map_err(|_| Error::MalformedField {
        offset,
        field,
        reason: format!("negative count {count}"),
    })
}

/// Decode the header, properties and section counts of a world file.
pub fn decode(data: &[u8]) -> Result<DecodedSections<'_>> {
    let file = BinaryReader::new(data);
    let mut reader = file.clone();
    let (header, rules) = WorldHeader::read(&mut reader)?;
    debug!(
        version = header.version,
        rules = rules.label,
        sections = header.section_count(),
        "read world header"
    );

    let Some(mut properties) = section_reader(&file, &header, SectionKind::PROPERTIES)? else {
        return Err(Error::CorruptHeader { offset: 0, reason: "no properties section".into() });
    };
    let metadata = read_metadata(&mut properties, &rules)?;

    let Some(tiles) = section_reader(&file, &header, SectionKind::TILES)? else {
        return Err(Error::CorruptHeader { offset: 0, reason: "no tile section".into() });
    };

    let summary = SectionSummary {
        chests: read_count(section_reader(&file, &header, SectionKind::CHESTS)?, "chest count")?,
        signs: read_count(section_reader(&file, &header, SectionKind::SIGNS)?, "sign count")?,
        sizes: (0..header.section_count())
            .filter_map(|i| header.section_range(i))
            .map(|r| r.len())
            .collect(),
    };
    debug!(chests = ?summary.chests, signs = ?summary.signs, tile_bytes = tiles.remaining(), "read section table");

    Ok(DecodedSections { header, rules, metadata, summary, tiles })
}
