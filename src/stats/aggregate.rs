use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::TileRun;
use crate::error::Result;
use crate::state::{Tile, World};
use super::{FrequencyTable, TypeCatalog, TypeKind};

/// Type id no catalog entry exists for, with the number of tiles skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownType {
    pub kind: TypeKind,
    pub id: u16,
    pub tiles: u64,
}

/// Result of one aggregation pass.
///
/// `blocks.total() + unknown block tiles + tiles_without_block == total_tiles`,
/// and the same for walls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub blocks: FrequencyTable,
    pub walls: FrequencyTable,
    pub unknown: Vec<UnknownType>,
    pub tiles_without_block: u64,
    pub tiles_without_wall: u64,
    pub total_tiles: u64,
}

impl Statistics {
    pub fn unknown_tiles(&self, kind: TypeKind) -> u64 {
        self.unknown.iter().filter(|u| u.kind == kind).map(|u| u.tiles).sum()
    }
}

/// Counts by raw id, before names are looked up.
#[derive(Default)]
struct Tally {
    blocks: BTreeMap<u16, u64>,
    walls: BTreeMap<u16, u64>,
    without_block: u64,
    without_wall: u64,
    total: u64,
}

impl Tally {
    fn add(&mut self, tile: &Tile, count: u64) {
        self.total += count;
        match &tile.block {
            Some(block) => *self.blocks.entry(block.type_id).or_default() += count,
            None => self.without_block += count,
        }
        match &tile.wall {
            Some(wall) => *self.walls.entry(wall.type_id).or_default() += count,
            None => self.without_wall += count,
        }
    }
}

/// Turns tiles into frequency tables using a [`TypeCatalog`].
pub struct Aggregator<'c> {
    catalog: &'c TypeCatalog,
}

impl<'c> Aggregator<'c> {
    pub fn new(catalog: &'c TypeCatalog) -> Self {
        Self { catalog }
    }

    /// One pass over the grid's cells, column-major.
    pub fn run(&self, world: &World) -> Statistics {
        let grid = world.tiles();
        let mut per_entry = vec![0u64; grid.palette().len()];
        for &idx in grid.cells() {
            per_entry[idx as usize] += 1;
        }

        let mut tally = Tally::default();
        for (tile, &count) in grid.palette().iter().zip(&per_entry) {
            tally.add(tile, count);
        }
        self.finish(tally)
    }

    /// Aggregate straight from decoded records without building a grid.
    pub fn run_stream<I>(&self, runs: I) -> Result<Statistics>
    where
        I: IntoIterator<Item = Result<TileRun>>,
    {
        let mut tally = Tally::default();
        for run in runs {
            let run = run?;
            tally.add(&run.tile, u64::from(run.count));
        }
        Ok(self.finish(tally))
    }

    fn finish(&self, tally: Tally) -> Statistics {
        let mut stats = Statistics {
            tiles_without_block: tally.without_block,
            tiles_without_wall: tally.without_wall,
            total_tiles: tally.total,
            ..Statistics::default()
        };
        self.resolve(TypeKind::Block, &tally.blocks, &mut stats.blocks, &mut stats.unknown);
        self.resolve(TypeKind::Wall, &tally.walls, &mut stats.walls, &mut stats.unknown);
        debug!(
            blocks = stats.blocks.len(),
            walls = stats.walls.len(),
            unknown = stats.unknown.len(),
            tiles = stats.total_tiles,
            "aggregated tiles"
        );
        stats
    }

    fn resolve(
        &self,
        kind: TypeKind,
        counts: &BTreeMap<u16, u64>,
        table: &mut FrequencyTable,
        unknown: &mut Vec<UnknownType>,
    ) {
        for (&id, &tiles) in counts {
            match self.catalog.resolve(kind, id) {
                Ok(name) => table.add(name, tiles),
                Err(err) => {
                    warn!(%err, tiles, "skipping tiles with unknown type");
                    unknown.push(UnknownType { kind, id, tiles });
                }
            }
        }
    }
}

/// Block and wall tables for `world` using the built-in names.
pub fn aggregate(world: &World) -> (FrequencyTable, FrequencyTable) {
    let catalog = TypeCatalog::builtin();
    let stats = Aggregator::new(&catalog).run(world);
    (stats.blocks, stats.walls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{rules_for, BinaryReader, FrameImportant, TileRecords};
    use crate::fixtures::world_from_grid;
    use crate::state::TileGrid;
    use wld_ids::{tile, wall};

    fn scenario_world() -> World {
        let dirt = Tile::EMPTY.with_block(tile::DIRT);
        let dirt_on_stone = dirt.with_wall(wall::STONE);
        let tiles = [dirt, dirt_on_stone, Tile::EMPTY, dirt_on_stone];
        world_from_grid(&TileGrid::from_fn(2, 2, |x, y| tiles[(x * 2 + y) as usize]))
    }

    #[test]
    fn test_two_by_two_scenario() {
        let (blocks, walls) = aggregate(&scenario_world());
        assert_eq!(blocks.iter().collect::<Vec<_>>(), vec![("Dirt", 3)]);
        assert_eq!(walls.iter().collect::<Vec<_>>(), vec![("Stone", 2)]);
    }

    #[test]
    fn test_every_tile_counted_once() {
        let grid = TileGrid::from_fn(37, 23, |x, y| match (x + y) % 5 {
            0 => Tile::EMPTY,
            1 => Tile::EMPTY.with_block(tile::STONE),
            2 => Tile::EMPTY.with_block(tile::MUD).with_wall(wall::DIRT),
            3 => Tile::EMPTY.with_wall(wall::STONE),
            _ => Tile::EMPTY.with_block(tile::CRIMSTONE).with_wall(wall::STONE),
        });
        let world = world_from_grid(&grid);
        let stats = Aggregator::new(&TypeCatalog::builtin()).run(&world);

        let size = u64::from(world.width()) * u64::from(world.height());
        assert_eq!(stats.total_tiles, size);
        assert_eq!(stats.blocks.total() + stats.tiles_without_block, size);
        assert_eq!(stats.walls.total() + stats.tiles_without_wall, size);
        assert!(stats.unknown.is_empty());
        assert!(stats.blocks.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let world = scenario_world();
        assert_eq!(aggregate(&world), aggregate(&world));
    }

    #[test]
    fn test_table_order_follows_type_id() {
        let grid = TileGrid::from_fn(1, 3, |_, y| Tile::EMPTY.with_block([tile::MUD, tile::STONE, tile::DIRT][y as usize]));
        let (blocks, _) = aggregate(&world_from_grid(&grid));
        assert_eq!(blocks.iter().map(|(n, _)| n).collect::<Vec<_>>(), vec!["Dirt", "Stone", "Mud"]);
    }

    #[test]
    fn test_unknown_ids_are_skipped_and_reported() {
        let grid = TileGrid::from_fn(4, 1, |x, _| match x {
            0 | 1 => Tile::EMPTY.with_block(9000),
            2 => Tile::EMPTY.with_block(tile::DIRT).with_wall(3000),
            _ => Tile::EMPTY,
        });
        let stats = Aggregator::new(&TypeCatalog::builtin()).run(&world_from_grid(&grid));

        assert_eq!(stats.blocks.get("Dirt"), Some(1));
        assert!(stats.walls.is_empty());
        assert_eq!(
            stats.unknown,
            vec![
                UnknownType { kind: TypeKind::Block, id: 9000, tiles: 2 },
                UnknownType { kind: TypeKind::Wall, id: 3000, tiles: 1 },
            ]
        );
        assert_eq!(stats.blocks.total() + stats.unknown_tiles(TypeKind::Block) + stats.tiles_without_block, 4);

        let catalog = TypeCatalog::from_json(r#"{"blocks": {"9000": "Modded Ore"}}"#).unwrap();
        let stats = Aggregator::new(&catalog).run(&world_from_grid(&grid));
        assert_eq!(stats.blocks.get("Modded Ore"), Some(2));
    }

    #[test]
    fn test_current_release_ids_resolve() {
        let grid = TileGrid::from_fn(3, 2, |x, _| match x {
            0 => Tile::EMPTY.with_block(tile::FALLEN_LOG),
            1 => Tile::EMPTY.with_block(tile::ASH_GRASS),
            _ => Tile::EMPTY.with_block(tile::DIRT).with_wall(316),
        });
        let world = world_from_grid(&grid);
        assert_eq!(world.header().version, 279);

        let stats = Aggregator::new(&TypeCatalog::builtin()).run(&world);
        assert!(stats.unknown.is_empty());
        assert_eq!(stats.blocks.get("FallenLog"), Some(2));
        assert_eq!(stats.blocks.get("AshGrass"), Some(2));
        assert_eq!(stats.blocks.get("Dirt"), Some(2));
        assert_eq!(stats.walls.total(), 2);
    }

    #[test]
    fn test_stream_matches_dense() {
        let grid = TileGrid::from_fn(9, 14, |x, y| {
            if y < 4 {
                Tile::EMPTY
            } else if y < 9 {
                Tile::EMPTY.with_block(tile::DIRT).with_wall(wall::DIRT)
            } else {
                Tile::EMPTY.with_block(tile::STONE).with_wall(if x % 2 == 0 { wall::STONE } else { wall::DIRT })
            }
        });
        let world = world_from_grid(&grid);
        let catalog = TypeCatalog::builtin();
        let dense = Aggregator::new(&catalog).run(&world);

        let rules = rules_for(world.header().version).unwrap();
        let frames = FrameImportant::default();
        let data = crate::codec::encode_tiles(&grid, &rules, &frames).unwrap();
        let records = TileRecords::new(BinaryReader::new(&data), rules, &frames, 9, 14);
        let streamed = Aggregator::new(&catalog).run_stream(records).unwrap();

        assert_eq!(streamed, dense);
    }
}
