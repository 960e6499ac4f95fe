//! Core domain types for Herbal Garden

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Plant records
// ─────────────────────────────────────────────────────────────────────────────

/// Percentage coordinate on a plant picture, both axes in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates lie inside the unit square (percent scale).
    pub fn is_in_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// Project the percentage onto a grid of `width` x `height` cells.
    ///
    /// The result is clamped so a marker at 100% still lands on the last cell.
    pub fn to_cell(&self, width: u16, height: u16) -> (u16, u16) {
        let project = |pct: f32, extent: u16| -> u16 {
            if extent == 0 {
                return 0;
            }
            let cell = ((pct.clamp(0.0, 100.0) / 100.0) * extent as f32) as u16;
            cell.min(extent - 1)
        };
        (project(self.x, width), project(self.y, height))
    }
}

/// A labeled point of interest on a plant picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightedPart {
    pub part: String,
    pub position: Position,
    pub description: String,
}

/// One entry of the plant catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    /// Opaque asset reference, resolved by [`crate::art::resolve`].
    pub image: String,
    pub description: String,
    pub medicinal_uses: Vec<String>,
    pub active_compounds: Vec<String>,
    pub diseases: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub highlighted_parts: Vec<HighlightedPart>,
}

impl PlantRecord {
    /// Hotspot by index, if present.
    pub fn highlighted_part(&self, index: usize) -> Option<&HighlightedPart> {
        self.highlighted_parts.get(index)
    }

    pub fn hotspot_count(&self) -> usize {
        self.highlighted_parts.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search mode
// ─────────────────────────────────────────────────────────────────────────────

/// What a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Match against `name` and `scientific_name`.
    #[default]
    ByName,
    /// Match against the `diseases` list.
    ByCondition,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::ByName => "by-name",
            SearchMode::ByCondition => "by-condition",
        }
    }

    /// Section heading shown above the matching input.
    pub fn heading(&self) -> &'static str {
        match self {
            SearchMode::ByName => "Search Plants",
            SearchMode::ByCondition => "Search by Condition",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Error returned when parsing a preference value from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePreferenceError {
    pub value: String,
}

impl fmt::Display for ParsePreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized preference value '{}'", self.value)
    }
}

impl std::error::Error for ParsePreferenceError {}

/// User-selected text scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl TextSize {
    pub const ALL: [TextSize; 4] = [
        TextSize::Small,
        TextSize::Medium,
        TextSize::Large,
        TextSize::ExtraLarge,
    ];

    /// Storage form, e.g. `"extra-large"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Small => "small",
            TextSize::Medium => "medium",
            TextSize::Large => "large",
            TextSize::ExtraLarge => "extra-large",
        }
    }

    /// Human-readable label, e.g. `"Extra Large"`.
    pub fn label(&self) -> &'static str {
        match self {
            TextSize::Small => "Small",
            TextSize::Medium => "Medium",
            TextSize::Large => "Large",
            TextSize::ExtraLarge => "Extra Large",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(1)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Number of cards per row in the results grid.
    ///
    /// Shared by the grid renderer and keyboard navigation so the row stride
    /// always matches what is drawn.
    pub fn grid_columns(&self) -> usize {
        match self {
            TextSize::Small => 4,
            TextSize::Medium => 3,
            TextSize::Large => 2,
            TextSize::ExtraLarge => 1,
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextSize {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ParsePreferenceError {
                value: s.to_string(),
            })
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParsePreferenceError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0.0, 100.0).is_in_bounds());
        assert!(Position::new(50.0, 50.0).is_in_bounds());
        assert!(!Position::new(-1.0, 50.0).is_in_bounds());
        assert!(!Position::new(50.0, 100.5).is_in_bounds());
    }

    #[test]
    fn test_position_to_cell() {
        assert_eq!(Position::new(50.0, 50.0).to_cell(20, 10), (10, 5));
        assert_eq!(Position::new(0.0, 0.0).to_cell(20, 10), (0, 0));
        // 100% clamps onto the last cell
        assert_eq!(Position::new(100.0, 100.0).to_cell(20, 10), (19, 9));
        assert_eq!(Position::new(50.0, 50.0).to_cell(0, 0), (0, 0));
    }

    #[test]
    fn test_text_size_parse() {
        assert_eq!("small".parse::<TextSize>(), Ok(TextSize::Small));
        assert_eq!("extra-large".parse::<TextSize>(), Ok(TextSize::ExtraLarge));
        assert!("huge".parse::<TextSize>().is_err());
        assert!("Large".parse::<TextSize>().is_err());
    }

    #[test]
    fn test_text_size_cycle() {
        assert_eq!(TextSize::Small.next(), TextSize::Medium);
        assert_eq!(TextSize::ExtraLarge.next(), TextSize::Small);
        assert_eq!(TextSize::Small.prev(), TextSize::ExtraLarge);
        assert_eq!(TextSize::default(), TextSize::Medium);
    }

    #[test]
    fn test_text_size_labels() {
        assert_eq!(TextSize::ExtraLarge.label(), "Extra Large");
        assert_eq!(TextSize::ExtraLarge.to_string(), "extra-large");
    }

    #[test]
    fn test_grid_columns_shrink_as_text_grows() {
        let cols: Vec<usize> = TextSize::ALL.iter().map(|s| s.grid_columns()).collect();
        assert_eq!(cols, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("system".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_search_mode_strings() {
        assert_eq!(SearchMode::ByName.to_string(), "by-name");
        assert_eq!(SearchMode::ByCondition.heading(), "Search by Condition");
    }
}
