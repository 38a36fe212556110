//! Reducer for the mixer state.

use crate::ui::mvi::Reducer;

use super::intent::MixerIntent;
use super::state::{MixerState, Rgb};

/// Pure fold step for the mixer.
///
/// All side effects (emission gating, rendering, logging) live with the
/// callers around the dispatch call; replaying the same intent sequence
/// over the same initial state always reproduces the same final state.
pub struct MixerReducer;

impl Reducer for MixerReducer {
    type State = MixerState;
    type Intent = MixerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MixerIntent::SetRed(value) => MixerState {
                rgb: Rgb {
                    r: value,
                    ..state.rgb
                },
                ..state
            },

            MixerIntent::SetGreen(value) => MixerState {
                rgb: Rgb {
                    g: value,
                    ..state.rgb
                },
                ..state
            },

            MixerIntent::SetBlue(value) => MixerState {
                rgb: Rgb {
                    b: value,
                    ..state.rgb
                },
                ..state
            },

            MixerIntent::Save => {
                // Snapshot the live mix, then rebuild from the initial
                // state so only `saves` survives a save.
                let mut saves = state.saves;
                saves.push(state.rgb);
                MixerState {
                    saves,
                    ..MixerState::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_red_replaces_only_red() {
        let state = MixerState {
            rgb: Rgb::new(10, 20, 30),
            saves: vec![Rgb::new(1, 2, 3)],
        };
        let new = MixerReducer::reduce(state, MixerIntent::SetRed(200));
        assert_eq!(new.rgb, Rgb::new(200, 20, 30));
        assert_eq!(new.saves, vec![Rgb::new(1, 2, 3)]);
    }

    #[test]
    fn set_green_replaces_only_green() {
        let state = MixerState {
            rgb: Rgb::new(10, 20, 30),
            saves: Vec::new(),
        };
        let new = MixerReducer::reduce(state, MixerIntent::SetGreen(100));
        assert_eq!(new.rgb, Rgb::new(10, 100, 30));
    }

    #[test]
    fn set_blue_replaces_only_blue() {
        let state = MixerState {
            rgb: Rgb::new(10, 20, 30),
            saves: Vec::new(),
        };
        let new = MixerReducer::reduce(state, MixerIntent::SetBlue(255));
        assert_eq!(new.rgb, Rgb::new(10, 20, 255));
    }

    #[test]
    fn save_appends_live_mix_and_resets() {
        let state = MixerState {
            rgb: Rgb::new(200, 100, 0),
            saves: vec![Rgb::new(1, 2, 3)],
        };
        let new = MixerReducer::reduce(state, MixerIntent::Save);
        assert_eq!(new.saves, vec![Rgb::new(1, 2, 3), Rgb::new(200, 100, 0)]);
        assert_eq!(new.rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn save_on_initial_state_records_black() {
        let new = MixerReducer::reduce(MixerState::default(), MixerIntent::Save);
        assert_eq!(new.saves, vec![Rgb::new(0, 0, 0)]);
        assert_eq!(new.rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn set_is_idempotent() {
        let once = MixerReducer::reduce(MixerState::default(), MixerIntent::SetRed(128));
        let twice = MixerReducer::reduce(once.clone(), MixerIntent::SetRed(128));
        assert_eq!(once, twice);
    }
}
