pub mod grid;
pub mod metadata;
pub mod tile;
pub mod world;

pub use grid::TileGrid;
pub use metadata::{Difficulty, Point, Seed, WorldEvil, WorldMetadata};
pub use tile::{Block, ExtraBits, Frame, Liquid, LiquidKind, Tile, TileExtras, Wall};
pub use world::{load_world, load_world_with, summarize, summarize_bytes, World, WorldSummary};
