//! # garden-core - Core Domain Types
//!
//! Foundation crate for Herbal Garden. Provides the plant domain types, the
//! bundled catalog, the search engine, plant artwork, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`PlantRecord`] - One catalog entry
//! - [`HighlightedPart`] / [`Position`] - Hotspots on a plant picture
//! - [`SearchMode`] - Match by name or by treated condition
//! - [`TextSize`], [`Theme`] - Display preferences
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Immutable, validated plant table embedded in the binary
//!
//! ### Search (`search`)
//! - [`SearchQuery`] - Non-blank, trimmed query
//! - [`search()`] - Case-insensitive substring filter preserving catalog order
//!
//! ### Artwork (`art`)
//! - [`PlantArt`] - Character picture, with placeholder fallback
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use garden_core::prelude::*;
//! ```

pub mod art;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod search;
pub mod types;

/// Prelude for common imports used throughout all Herbal Garden crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use art::PlantArt;
pub use catalog::Catalog;
pub use error::{Error, Result, ResultExt};
pub use search::{search, SearchQuery};
pub use types::{
    HighlightedPart, ParsePreferenceError, PlantRecord, Position, SearchMode, TextSize, Theme,
};
