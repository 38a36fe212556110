//! Shared state for the color mixer.

use crate::ui::mvi::UiState;

/// One RGB mix, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The one mix the save trigger refuses.
const BLOCKED_MIX: Rgb = Rgb::new(0, 255, 255);

/// The single shared application state.
///
/// Replaced wholesale on every intent application; components only ever
/// see it as read-only input. `Default` is the initial state: all
/// channels zero, no saves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MixerState {
    /// The live mix, bound to the three channel sliders.
    pub rgb: Rgb,
    /// Saved mixes, insertion-ordered. Entries are copies, never aliases
    /// of the live mix.
    pub saves: Vec<Rgb>,
}

impl UiState for MixerState {}

impl MixerState {
    /// Whether the save trigger may act. False exactly while the live
    /// mix is pure cyan.
    pub fn can_save(&self) -> bool {
        self.rgb != BLOCKED_MIX
    }
}
