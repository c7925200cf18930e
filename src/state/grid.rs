use ahash::AHashMap;

use crate::codec::TileRun;
use crate::error::{Error, Result};
use super::tile::Tile;

/// Dense column-major tile grid.
///
/// Each cell is a `u32` index into a palette of distinct tiles. Worlds are
/// dominated by long uniform runs, so the palette stays small while every
/// cell keeps O(1) random access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    palette: Vec<Tile>,
    cells: Vec<u32>,
}

/// Assigns palette indices to distinct tiles.
#[derive(Default)]
struct Interner {
    palette: Vec<Tile>,
    index: AHashMap<Tile, u32>,
}

impl Interner {
    fn intern(&mut self, tile: Tile) -> u32 {
        if let Some(&idx) = self.index.get(&tile) {
            return idx;
        }
        let idx = self.palette.len() as u32;
        self.palette.push(tile);
        self.index.insert(tile, idx);
        idx
    }
}

impl TileGrid {
    /// Build a grid by calling `f(x, y)` for every cell in column-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Tile) -> Self {
        let mut interner = Interner::default();
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                cells.push(interner.intern(f(x, y)));
            }
        }
        Self { width, height, palette: interner.palette, cells }
    }

    /// Replicate decoded runs into a dense grid.
    ///
    /// The runs must fill exactly `width * height` cells; the tile record
    /// decoder enforces this and reports overruns and underruns with offsets.
    pub fn from_runs(width: u32, height: u32, runs: impl IntoIterator<Item = Result<TileRun>>) -> Result<Self> {
        let capacity = width as usize * height as usize;
        let mut interner = Interner::default();
        let mut cells = Vec::with_capacity(capacity);
        let mut last_offset = 0;

        for run in runs {
            let run = run?;
            last_offset = run.offset;
            if cells.len() + run.count as usize > capacity {
                return Err(Error::GridOverrun {
                    offset: run.offset,
                    position: cells.len() as u64,
                    run: u64::from(run.count),
                    capacity: capacity as u64,
                });
            }
            let idx = interner.intern(run.tile);
            cells.resize(cells.len() + run.count as usize, idx);
        }

        if cells.len() < capacity {
            return Err(Error::GridUnderrun {
                offset: last_offset,
                filled: cells.len() as u64,
                expected: capacity as u64,
            });
        }

        Ok(Self { width, height, palette: interner.palette, cells })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.cells[x as usize * self.height as usize + y as usize];
        Some(&self.palette[idx as usize])
    }

    /// Distinct tiles in first-seen order
    pub fn palette(&self) -> &[Tile] {
        &self.palette
    }

    /// Palette index of every cell, column-major
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// All tiles, column-major
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().map(move |&idx| &self.palette[idx as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tile: Tile, count: u32, offset: usize) -> Result<TileRun> {
        Ok(TileRun { tile, count, offset })
    }

    #[test]
    fn test_from_fn_column_major() {
        let grid = TileGrid::from_fn(3, 2, |x, y| Tile::EMPTY.with_block((x * 10 + y) as u16));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(2, 1).unwrap().block.unwrap().type_id, 21);
        assert_eq!(grid.get(0, 1).unwrap().block.unwrap().type_id, 1);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 2).is_none());

        let ids: Vec<u16> = grid.iter().map(|t| t.block.unwrap().type_id).collect();
        assert_eq!(ids, vec![0, 1, 10, 11, 20, 21]);
    }

    #[test]
    fn test_palette_interning() {
        let dirt = Tile::EMPTY.with_block(0);
        let grid = TileGrid::from_fn(100, 100, |x, _| if x < 50 { dirt } else { Tile::EMPTY });
        assert_eq!(grid.palette().len(), 2);
        assert_eq!(grid.cells().len(), 10_000);
    }

    #[test]
    fn test_runs_wrap_columns() {
        let stone = Tile::EMPTY.with_block(1);
        let grid = TileGrid::from_runs(2, 3, vec![run(Tile::EMPTY, 2, 0), run(stone, 4, 1)]).unwrap();
        assert!(grid.get(0, 1).unwrap().is_empty());
        assert_eq!(grid.get(0, 2), Some(&stone));
        assert_eq!(grid.get(1, 0), Some(&stone));
        assert_eq!(grid.get(1, 2), Some(&stone));
    }

    #[test]
    fn test_runs_overrun_and_underrun() {
        let err = TileGrid::from_runs(2, 2, vec![run(Tile::EMPTY, 3, 0), run(Tile::EMPTY, 2, 5)]).unwrap_err();
        assert!(matches!(err, Error::GridOverrun { offset: 5, position: 3, run: 2, capacity: 4 }));

        let err = TileGrid::from_runs(2, 2, vec![run(Tile::EMPTY, 3, 0)]).unwrap_err();
        assert!(matches!(err, Error::GridUnderrun { filled: 3, expected: 4, .. }));
    }
}
