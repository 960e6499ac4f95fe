//! Color palettes for the light and dark garden themes.
//!
//! Both palettes share one shape so every widget can be drawn in either theme
//! by swapping the `&Palette` it is given.

use garden_core::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_dim: Color,
    /// Text drawn on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_bright: Color,

    // --- Badges ---
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub condition_fg: Color,

    // --- Hotspots ---
    pub hotspot: Color,
    pub hotspot_ring: Color,

    // --- Landing gradient ---
    pub title_warm: Color,
    pub title_hot: Color,

    // --- Artwork ---
    pub leaf: Color,
    pub stem: Color,
    pub ground: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(12, 20, 15),
    card_bg: Color::Rgb(20, 32, 24),
    popup_bg: Color::Rgb(28, 42, 32),

    border_dim: Color::Rgb(52, 74, 58),
    border_active: Color::Rgb(110, 200, 120),

    accent: Color::Rgb(110, 200, 120),
    accent_dim: Color::Rgb(62, 120, 72),
    contrast_fg: Color::Rgb(8, 16, 10),

    text_primary: Color::Rgb(214, 226, 214),
    text_secondary: Color::Rgb(150, 170, 152),
    text_muted: Color::Rgb(92, 110, 96),
    text_bright: Color::Rgb(240, 248, 240),

    badge_bg: Color::Rgb(38, 64, 44),
    badge_fg: Color::Rgb(170, 230, 176),
    condition_fg: Color::Rgb(232, 196, 120),

    hotspot: Color::Rgb(239, 68, 68),
    hotspot_ring: Color::Rgb(255, 255, 255),

    title_warm: Color::Rgb(250, 204, 21),
    title_hot: Color::Rgb(249, 115, 22),

    leaf: Color::Rgb(96, 180, 100),
    stem: Color::Rgb(140, 110, 70),
    ground: Color::Rgb(110, 90, 60),

    shadow: Color::Rgb(4, 8, 6),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(246, 250, 244),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(236, 244, 234),

    border_dim: Color::Rgb(190, 208, 192),
    border_active: Color::Rgb(34, 130, 60),

    accent: Color::Rgb(34, 130, 60),
    accent_dim: Color::Rgb(120, 170, 130),
    contrast_fg: Color::Rgb(255, 255, 255),

    text_primary: Color::Rgb(28, 40, 30),
    text_secondary: Color::Rgb(76, 96, 80),
    text_muted: Color::Rgb(130, 146, 132),
    text_bright: Color::Rgb(8, 20, 10),

    badge_bg: Color::Rgb(214, 236, 216),
    badge_fg: Color::Rgb(24, 100, 44),
    condition_fg: Color::Rgb(150, 90, 20),

    hotspot: Color::Rgb(220, 38, 38),
    hotspot_ring: Color::Rgb(255, 255, 255),

    title_warm: Color::Rgb(202, 138, 4),
    title_hot: Color::Rgb(220, 38, 38),

    leaf: Color::Rgb(40, 140, 60),
    stem: Color::Rgb(120, 90, 50),
    ground: Color::Rgb(150, 120, 80),

    shadow: Color::Rgb(200, 210, 200),
};

/// Palette for `theme`.
pub fn for_theme(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
