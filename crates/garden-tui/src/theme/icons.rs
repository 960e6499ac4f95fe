//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use garden_app::config::IconMode;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn leaf(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06c}", // nf-fa-leaf
            IconMode::Unicode => "\u{273f}",   // ✿
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{2315}",   // ⌕
        }
    }

    pub fn condition(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0fa}", // nf-fa-medkit
            IconMode::Unicode => "\u{271a}",   // ✚
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn heart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f004}", // nf-fa-heart
            IconMode::Unicode => "\u{2665}",   // ♥
        }
    }

    pub fn flask(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c3}", // nf-fa-flask
            IconMode::Unicode => "\u{2697}",   // ⚗
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn back(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f060}", // nf-fa-arrow_left
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }

    /// Hotspot marker on the plant picture
    pub fn marker(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f111}", // nf-fa-circle
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn bullet(&self) -> &'static str {
        "\u{2022}" // •
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{2600}",   // ☀
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263e}",   // ☾
        }
    }

    pub fn text_size(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f031}", // nf-fa-font
            IconMode::Unicode => "Aa",
        }
    }
}
