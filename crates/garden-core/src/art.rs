//! Plant artwork resolution
//!
//! A [`PlantRecord::image`](crate::types::PlantRecord) is an opaque asset
//! reference. References that name bundled artwork resolve to that artwork;
//! anything else gets a generated placeholder leaf so a detail view never shows
//! a missing picture.

use std::f32::consts::PI;

use unicode_width::UnicodeWidthStr;

/// Bundled artwork, keyed by asset reference.
const BUNDLED: &[(&str, &str)] = &[
    ("aloe-vera-plant", include_str!("../assets/art/aloe-vera-plant.txt")),
    ("echinacea-plant", include_str!("../assets/art/echinacea-plant.txt")),
    ("lavender-plant", include_str!("../assets/art/lavender-plant.txt")),
    ("willow-plant", include_str!("../assets/art/willow-plant.txt")),
];

/// Default placeholder dimensions (cells).
pub const PLACEHOLDER_WIDTH: u16 = 24;
pub const PLACEHOLDER_HEIGHT: u16 = 12;

/// Character grid picture of a plant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantArt {
    pub lines: Vec<String>,
    /// True when the asset did not resolve and a placeholder was generated.
    pub is_placeholder: bool,
}

impl PlantArt {
    /// Width in cells of the widest line.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Resolve an asset reference, substituting a placeholder when it is unknown.
pub fn resolve(image: &str) -> PlantArt {
    match BUNDLED.iter().find(|(key, _)| *key == image) {
        Some((_, source)) => PlantArt {
            lines: source.lines().map(str::to_string).collect(),
            is_placeholder: false,
        },
        None => {
            tracing::trace!("No bundled artwork for '{}', using placeholder", image);
            placeholder(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
        }
    }
}

/// Generate a leaf silhouette on a `width` x `height` grid.
///
/// The leaf body occupies the upper part of the grid with a midrib down the
/// center, followed by a short stem and a ground line on the last row.
pub fn placeholder(width: u16, height: u16) -> PlantArt {
    let (w, h) = (width as usize, height as usize);
    let mut lines = Vec::with_capacity(h);

    const LEAF_TOP: f32 = 0.05;
    const LEAF_BOTTOM: f32 = 0.75;

    for row in 0..h {
        let v = (row as f32 + 0.5) / h.max(1) as f32;
        let is_ground = h > 1 && row == h - 1;
        let mut line = String::with_capacity(w);

        for col in 0..w {
            // Horizontal coordinate in -1..1, measured from the grid center.
            let u = ((col as f32 + 0.5) / w as f32) * 2.0 - 1.0;
            let midrib = u.abs() <= 1.0 / w as f32 + 1e-4;

            let ch = if is_ground {
                '~'
            } else if (LEAF_TOP..=LEAF_BOTTOM).contains(&v) {
                let t = (v - LEAF_TOP) / (LEAF_BOTTOM - LEAF_TOP);
                let half_width = (PI * t).sin() * 0.8;
                if midrib {
                    '|'
                } else if u.abs() <= half_width {
                    if u.abs() > half_width - 2.0 / w as f32 {
                        '.'
                    } else {
                        '%'
                    }
                } else {
                    ' '
                }
            } else if v > LEAF_BOTTOM && midrib {
                '|'
            } else {
                ' '
            };
            line.push(ch);
        }
        lines.push(line.trim_end().to_string());
    }

    PlantArt {
        lines,
        is_placeholder: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_resolve_bundled_art() {
        let art = resolve("lavender-plant");
        assert!(!art.is_placeholder);
        assert!(art.height() > 5);
    }

    #[test]
    fn test_resolve_unknown_uses_placeholder() {
        let art = resolve("does-not-exist.jpg");
        assert!(art.is_placeholder);
        assert_eq!(art.height(), PLACEHOLDER_HEIGHT as usize);
    }

    #[test]
    fn test_every_catalog_plant_has_a_picture() {
        let catalog = Catalog::embedded().unwrap();
        for plant in catalog.iter() {
            let art = resolve(&plant.image);
            assert!(art.height() > 0, "{} has no artwork", plant.name);
            assert!(art.width() > 0, "{} has empty artwork", plant.name);
        }
    }

    #[test]
    fn test_width_counts_terminal_cells() {
        let art = PlantArt {
            lines: vec!["\u{8349}\u{8349}".to_string(), "|".to_string()],
            is_placeholder: false,
        };
        // Two double-width glyphs occupy four cells
        assert_eq!(art.width(), 4);
    }

    #[test]
    fn test_placeholder_dimensions() {
        let art = placeholder(20, 10);
        assert_eq!(art.height(), 10);
        assert!(art.width() <= 20);
    }

    #[test]
    fn test_placeholder_has_leaf_stem_and_ground() {
        let art = placeholder(24, 12);
        assert!(art.lines.iter().any(|l| l.contains('%')));
        assert!(art.lines[10].contains('|'));
        assert!(art.lines[11].chars().all(|c| c == '~'));
    }

    #[test]
    fn test_placeholder_degenerate_sizes() {
        assert!(placeholder(0, 0).lines.is_empty());
        assert_eq!(placeholder(1, 1).height(), 1);
    }
}
