//! The bundled, read-only plant catalog
//!
//! The catalog is a TOML data table compiled into the binary. It is parsed and
//! validated once at startup, then shared read-only (usually behind an `Arc`).

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::PlantRecord;

/// Embedded catalog source.
const CATALOG_TOML: &str = include_str!("../assets/catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    plants: Vec<PlantRecord>,
}

/// Immutable collection of plant records, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    plants: Vec<PlantRecord>,
}

impl Catalog {
    /// Load the catalog bundled with the application.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(CATALOG_TOML)
    }

    /// Parse and validate a catalog from TOML source.
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_records(file.plants)
    }

    /// Build a catalog from records, enforcing the catalog invariants.
    pub fn from_records(plants: Vec<PlantRecord>) -> Result<Self> {
        validate(&plants)?;
        tracing::debug!("Loaded plant catalog with {} records", plants.len());
        Ok(Self { plants })
    }

    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PlantRecord> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlantRecord> {
        self.plants.iter()
    }
}

fn validate(plants: &[PlantRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(plants.len());

    for plant in plants {
        if plant.id.trim().is_empty() {
            return Err(Error::catalog(format!(
                "plant '{}' has an empty id",
                plant.name
            )));
        }
        if plant.name.trim().is_empty() {
            return Err(Error::catalog(format!("plant '{}' has no name", plant.id)));
        }
        if !seen.insert(plant.id.as_str()) {
            return Err(Error::catalog(format!("duplicate plant id '{}'", plant.id)));
        }
        for part in &plant.highlighted_parts {
            if !part.position.is_in_bounds() {
                return Err(Error::catalog(format!(
                    "hotspot '{}' on '{}' is outside 0..=100 ({}, {})",
                    part.part, plant.name, part.position.x, part.position.y
                )));
            }
        }
    }

    Ok(())
}
