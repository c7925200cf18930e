pub mod reader;
pub mod writer;
pub mod format;
pub mod header;
pub mod properties;
pub mod sections;
pub mod tiles;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;
pub use format::{
    rules_for, oldest_supported_version, FormatRules, GameModeEncoding, IdWidth, SeedEncoding,
    SpecialSeeds, Header1, Header2, Header3, Header4, NEWEST_KNOWN_VERSION, RULE_SETS,
};
pub use header::{FrameImportant, SectionKind, WorldHeader};
pub use properties::read_metadata;
pub use sections::{decode, DecodedSections, SectionSummary};
pub use tiles::{decode_grid, encode_tiles, TileRecords, TileRun, MAX_RUN};
