use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiOptions,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Redraw tick rate in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Presentation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiOptions {
    /// Draw slider bars with Unicode block glyphs (default: true).
    /// Set to false for terminals without block glyph support.
    #[serde(default = "default_unicode_bars")]
    pub unicode_bars: bool,

    /// Show the hex form next to saved mixes (default: true).
    #[serde(default = "default_show_hex")]
    pub show_hex: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_unicode_bars() -> bool {
    true
}

fn default_show_hex() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            unicode_bars: default_unicode_bars(),
            show_hex: default_show_hex(),
        }
    }
}
