//! Custom widget components

mod header;
mod hotspot_panel;
mod landing;
pub mod modal_overlay;
mod plant_canvas;
mod plant_card;
mod plant_details;
mod plant_grid;
mod search_section;
pub mod settings_panel;

pub use header::MainHeader;
pub use hotspot_panel::HotspotPanel;
pub use landing::LandingPage;
pub use plant_canvas::PlantCanvas;
pub use plant_card::PlantCard;
pub use plant_details::PlantDetails;
pub use plant_grid::PlantGrid;
pub use search_section::{SearchSection, SEARCH_SECTION_HEIGHT};
pub use settings_panel::SettingsPanel;

/// Braille spinner frames, advanced once per tick
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
