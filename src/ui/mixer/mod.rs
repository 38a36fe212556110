//! The color mixer model: shared state, intents, and the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::MixerIntent;
pub use reducer::MixerReducer;
pub use state::{MixerState, Rgb};
