use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use super::TypeKind;

/// Names for block and wall ids.
///
/// Built-in names come from the `wld-ids` tables. Overrides loaded from a
/// JSON file take precedence, which lets newer game releases be inspected
/// without a rebuild:
///
/// ```json
/// { "blocks": { "470": "Shimmer Block" }, "walls": { "231": "Echo Wall" } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    blocks: BTreeMap<u16, String>,
    walls: BTreeMap<u16, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    #[serde(default)]
    blocks: BTreeMap<u16, String>,
    #[serde(default)]
    walls: BTreeMap<u16, String>,
}

impl TypeCatalog {
    /// Catalog with only the built-in names
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: OverrideFile = serde_json::from_str(json).map_err(|e| Error::Catalog(e.to_string()))?;
        if file.walls.contains_key(&0) {
            return Err(Error::Catalog("wall id 0 means no wall and cannot be named".into()));
        }
        if let Some((id, _)) = file.blocks.iter().chain(file.walls.iter()).find(|(_, name)| name.trim().is_empty()) {
            return Err(Error::Catalog(format!("empty name for id {id}")));
        }
        Ok(Self { blocks: file.blocks, walls: file.walls })
    }

    pub fn load_overrides(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::from(e).in_file(path))?;
        let catalog = Self::from_json(&json).map_err(|e| e.in_file(path))?;
        info!(path = %path.display(), blocks = catalog.blocks.len(), walls = catalog.walls.len(), "loaded type name overrides");
        Ok(catalog)
    }

    /// Name of `id`, or `UnknownTypeId` when neither the overrides nor the
    /// built-in tables know it.
    pub fn resolve(&self, kind: TypeKind, id: u16) -> Result<&str> {
        let (overrides, builtin): (_, fn(u16) -> Option<&'static str>) = match kind {
            TypeKind::Block => (&self.blocks, wld_ids::tile::name),
            TypeKind::Wall => (&self.walls, wld_ids::wall::name),
        };
        overrides
            .get(&id)
            .map(String::as_str)
            .or_else(|| builtin(id))
            .ok_or(Error::UnknownTypeId { kind, id })
    }

    pub fn override_count(&self) -> usize {
        self.blocks.len() + self.walls.len()
    }
}
