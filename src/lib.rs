//! Terraria world inspector
//!
//! Decodes `.wld` world files into metadata plus a tile grid, and counts how
//! many tiles of each block and wall type a world contains.
//!
//! ```no_run
//! let world = wld_inspector::load_world("MyWorld.wld")?;
//! let (blocks, walls) = wld_inspector::aggregate(&world);
//! for (name, count) in blocks.sorted_by_count() {
//!     println!("{name}: {count}");
//! }
//! # Ok::<(), wld_inspector::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod options;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use wld_ids as ids;

pub use error::{Error, Result};
pub use options::LoadOptions;
pub use codec::{FormatRules, SectionKind, SectionSummary, WorldHeader};
pub use state::{
    load_world, load_world_with, summarize, summarize_bytes,
    Tile, TileGrid, World, WorldMetadata, WorldSummary,
};
pub use stats::{aggregate, Aggregator, FrequencyTable, Statistics, TypeCatalog, TypeKind, UnknownType};
