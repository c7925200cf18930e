//! Block and wall frequency statistics.

pub mod aggregate;
pub mod catalog;
pub mod frequency;

use std::fmt;

use serde::Serialize;

pub use aggregate::{aggregate, Aggregator, Statistics, UnknownType};
pub use catalog::TypeCatalog;
pub use frequency::FrequencyTable;

/// Which id space a type id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Block,
    Wall,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Block => f.write_str("block"),
            TypeKind::Wall => f.write_str("wall"),
        }
    }
}
