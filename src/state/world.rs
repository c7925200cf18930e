use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::codec::{self, DecodedSections, SectionKind, SectionSummary, TileRecords, WorldHeader};
use crate::error::{Error, Result};
use crate::options::LoadOptions;
use crate::stats::{Aggregator, Statistics, TypeCatalog};
use super::grid::TileGrid;
use super::metadata::WorldMetadata;
use super::tile::Tile;

/// A decoded world: metadata plus the full tile grid. Read-only.
#[derive(Debug, Clone)]
pub struct World {
    header: WorldHeader,
    metadata: WorldMetadata,
    sections: SectionSummary,
    tiles: TileGrid,
}

/// Everything about a world except its tiles.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub header: WorldHeader,
    pub metadata: WorldMetadata,
    pub sections: SectionSummary,
}

impl World {
    /// Decode a whole world file held in memory.
    pub fn from_bytes(data: &[u8], options: &LoadOptions) -> Result<Self> {
        let DecodedSections { header, rules, metadata, summary, tiles } = decode_checked(data, options)?;
        let records = TileRecords::new(tiles, rules, header.frame_important(), metadata.width, metadata.height)
            .with_cancel(options.cancel.as_deref());
        let grid = TileGrid::from_runs(metadata.width, metadata.height, records)?;

        Ok(Self { header, metadata, sections: summary, tiles: grid })
    }

    pub fn header(&self) -> &WorldHeader {
        &self.header
    }

    pub fn metadata(&self) -> &WorldMetadata {
        &self.metadata
    }

    pub fn sections(&self) -> &SectionSummary {
        &self.sections
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn width(&self) -> u32 {
        self.metadata.width
    }

    pub fn height(&self) -> u32 {
        self.metadata.height
    }

    /// Tile at column `x`, row `y` (0 is the top of the world)
    pub fn tile(&self, x: u32, y: u32) -> Option<&Tile> {
        self.tiles.get(x, y)
    }

    pub fn into_summary(self) -> WorldSummary {
        WorldSummary { header: self.header, metadata: self.metadata, sections: self.sections }
    }
}

/// Header and properties, with the load limits applied before any tile work.
fn decode_checked<'a>(data: &'a [u8], options: &LoadOptions) -> Result<DecodedSections<'a>> {
    if options.is_cancelled() {
        return Err(Error::Cancelled);
    }
    let decoded = codec::decode(data)?;
    let tile_count = decoded.metadata.tile_count();
    if tile_count > options.max_tiles {
        return Err(Error::MalformedField {
            offset: decoded.header.section_offsets()[SectionKind::PROPERTIES],
            field: "world size",
            reason: format!(
                "{}x{} is {tile_count} tiles, limit is {}",
                decoded.metadata.width, decoded.metadata.height, options.max_tiles
            ),
        });
    }
    Ok(decoded)
}

/// Load a world file with default options.
pub fn load_world(path: impl AsRef<Path>) -> Result<World> {
    load_world_with(path, &LoadOptions::default())
}

pub fn load_world_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<World> {
    let path = path.as_ref();
    let started = Instant::now();
    let data = fs::read(path).map_err(|e| Error::from(e).in_file(path))?;
    let world = World::from_bytes(&data, options).map_err(|e| e.in_file(path))?;
    info!(
        path = %path.display(),
        name = %world.metadata.name,
        width = world.width(),
        height = world.height(),
        palette = world.tiles.palette().len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded world"
    );
    Ok(world)
}

/// Aggregate a world file without building its tile grid.
///
/// Memory use is the file itself plus the tallies, independent of world size.
pub fn summarize(path: impl AsRef<Path>, options: &LoadOptions, catalog: &TypeCatalog) -> Result<(WorldSummary, Statistics)> {
    let path = path.as_ref();
    let started = Instant::now();
    let data = fs::read(path).map_err(|e| Error::from(e).in_file(path))?;

    let (summary, stats) = summarize_bytes(&data, options, catalog).map_err(|e| e.in_file(path))?;

    info!(
        path = %path.display(),
        name = %summary.metadata.name,
        tiles = stats.total_tiles,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "summarized world"
    );
    Ok((summary, stats))
}

/// Streaming aggregation over a world file held in memory.
pub fn summarize_bytes(data: &[u8], options: &LoadOptions, catalog: &TypeCatalog) -> Result<(WorldSummary, Statistics)> {
    let DecodedSections { header, rules, metadata, summary, tiles } = decode_checked(data, options)?;
    let records = TileRecords::new(tiles, rules, header.frame_important(), metadata.width, metadata.height)
        .with_cancel(options.cancel.as_deref());
    let stats = Aggregator::new(catalog).run_stream(records)?;
    Ok((WorldSummary { header, metadata, sections: summary }, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    use crate::codec::FrameImportant;
    use crate::state::{Block, Frame};
    use crate::fixtures::{encode_world, sample_metadata, WorldFile};
    use crate::stats::aggregate;
    use wld_ids::{tile, wall};

    fn sample_grid() -> TileGrid {
        TileGrid::from_fn(8, 6, |x, y| {
            if y < 2 {
                Tile::EMPTY
            } else if x == 3 && y == 2 {
                let frame = Some(Frame { u: 66, v: 0 });
                Tile { block: Some(Block { type_id: tile::TORCHES, frame, paint: None }), ..Tile::EMPTY }
            } else {
                Tile::EMPTY.with_block(tile::DIRT).with_wall(wall::DIRT)
            }
        })
    }

    fn sample_file() -> Vec<u8> {
        encode_world(&sample_grid(), &FrameImportant::from_ids(&[tile::TORCHES]))
    }

    fn write_temp(data: &[u8]) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), data).unwrap();
        file
    }

    #[test]
    fn test_from_bytes() {
        let world = World::from_bytes(&sample_file(), &LoadOptions::default()).unwrap();
        assert_eq!((world.width(), world.height()), (8, 6));
        assert_eq!(world.tiles(), &sample_grid());
        assert!(world.tile(0, 0).unwrap().is_empty());
        assert!(world.tile(8, 0).is_none());

        let torch = world.tile(3, 2).unwrap().block.unwrap();
        assert_eq!(torch.type_id, tile::TORCHES);
        assert_eq!(torch.frame, Some(Frame { u: 66, v: 0 }));
        assert_eq!(world.sections().chests, Some(0));
    }

    #[test]
    fn test_load_world_from_disk() {
        let file = write_temp(&sample_file());
        let world = load_world(file.path()).unwrap();
        let (blocks, walls) = aggregate(&world);
        assert_eq!(blocks.get("Dirt"), Some(31));
        assert_eq!(blocks.get("Torches"), Some(1));
        assert_eq!(walls.get("Dirt"), Some(31));
    }

    #[test]
    fn test_errors_name_the_file() {
        let mut data = sample_file();
        data.truncate(data.len() - 3);
        let file = write_temp(&data);
        let err = load_world(file.path()).unwrap_err();
        assert!(matches!(&err, Error::File { path, .. } if path == file.path()));
        assert!(err.offset().is_some());
        assert!(err.to_string().starts_with(&file.path().display().to_string()));

        let missing = load_world("/nonexistent/world.wld").unwrap_err();
        assert!(matches!(missing, Error::File { .. }));
    }

    #[test]
    fn test_unsupported_version_builds_nothing() {
        let mut data = sample_file();
        data[..4].copy_from_slice(&140i32.to_le_bytes());
        assert!(matches!(
            World::from_bytes(&data, &LoadOptions::default()),
            Err(Error::UnsupportedVersion { version: 140, minimum: 146 })
        ));
    }

    #[test]
    fn test_max_tiles_checked_before_decoding() {
        // The tile section is garbage; the size limit must trip first.
        let data = WorldFile::new(279, sample_metadata(100, 100)).tiles(vec![0xFF]).build();
        let options = LoadOptions::default().with_max_tiles(9_999);
        match World::from_bytes(&data, &options) {
            Err(Error::MalformedField { field, .. }) => assert_eq!(field, "world size"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cancelled_load() {
        let flag = Arc::new(AtomicBool::new(true));
        let options = LoadOptions::default().with_cancel_flag(flag);
        assert!(matches!(World::from_bytes(&sample_file(), &options), Err(Error::Cancelled)));
    }

    #[test]
    fn test_summarize_matches_full_load() {
        let file = write_temp(&sample_file());
        let catalog = TypeCatalog::builtin();
        let (summary, stats) = summarize(file.path(), &LoadOptions::default(), &catalog).unwrap();
        let world = load_world(file.path()).unwrap();

        assert_eq!(summary.metadata, *world.metadata());
        assert_eq!(stats, Aggregator::new(&catalog).run(&world));
        assert_eq!(world.into_summary().sections, summary.sections);
    }
}
