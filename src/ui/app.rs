use crossterm::event::KeyEvent;

use crate::config::{ConfigStore, UiOptions};
use crate::ui::action_loop::ActionSender;
use crate::ui::mixer::{MixerIntent, MixerReducer, MixerState};
use crate::ui::mvi::Reducer;
use crate::ui::saves::SavedList;
use crate::ui::slider::{Slider, SliderConfig};
use crate::ui::theme::{CHANNEL_BLUE, CHANNEL_GREEN, CHANNEL_RED};
use crate::ui::trigger::{TriggerButton, TriggerConfig};

/// Scope key for a component instance.
///
/// Key events are only ever delivered to the component that holds focus,
/// so structurally identical instances can never observe each other's
/// bindings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComponentId {
    Red,
    Green,
    Blue,
    SaveButton,
    SavedList,
}

/// Focus cycle, in on-screen order. The saved list is display-only and
/// never takes focus.
const FOCUS_ORDER: [ComponentId; 4] = [
    ComponentId::Red,
    ComponentId::Green,
    ComponentId::Blue,
    ComponentId::SaveButton,
];

pub struct App {
    should_quit: bool,
    /// The single shared state; replaced on every dispatch.
    mixer: MixerState,
    focus: ComponentId,
    config: ConfigStore,
    red: Slider<MixerIntent>,
    green: Slider<MixerIntent>,
    blue: Slider<MixerIntent>,
    save: TriggerButton<MixerIntent>,
    saved: SavedList,
}

impl App {
    /// Instantiate every component against the action sink.
    ///
    /// The sink must already exist (phase one of the loop wiring); the
    /// runtime closes the loop by draining it back into [`App::dispatch`].
    pub fn new(config: ConfigStore, actions: ActionSender<MixerIntent>) -> Self {
        let red = Slider::new(
            SliderConfig {
                id: ComponentId::Red,
                label: "Red",
                min: 0,
                max: 255,
                tint: CHANNEL_RED,
                set: MixerIntent::SetRed,
            },
            actions.clone(),
        );
        let green = Slider::new(
            SliderConfig {
                id: ComponentId::Green,
                label: "Green",
                min: 0,
                max: 255,
                tint: CHANNEL_GREEN,
                set: MixerIntent::SetGreen,
            },
            actions.clone(),
        );
        let blue = Slider::new(
            SliderConfig {
                id: ComponentId::Blue,
                label: "Blue",
                min: 0,
                max: 255,
                tint: CHANNEL_BLUE,
                set: MixerIntent::SetBlue,
            },
            actions.clone(),
        );
        let save = TriggerButton::new(
            TriggerConfig {
                id: ComponentId::SaveButton,
                caption: "Save mix",
                set: || MixerIntent::Save,
            },
            actions,
        );
        let saved = SavedList::new(ComponentId::SavedList);

        Self {
            should_quit: false,
            mixer: MixerState::default(),
            focus: ComponentId::Red,
            config,
            red,
            green,
            blue,
            save,
            saved,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The latest folded state, read-only.
    pub fn state(&self) -> &MixerState {
        &self.mixer
    }

    pub fn focus(&self) -> ComponentId {
        self.focus
    }

    pub fn ui_options(&self) -> UiOptions {
        self.config.get().ui
    }

    pub fn focus_next(&mut self) {
        self.focus = FOCUS_ORDER[(self.focus_index() + 1) % FOCUS_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        self.focus =
            FOCUS_ORDER[(self.focus_index() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()];
    }

    fn focus_index(&self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|id| *id == self.focus)
            .unwrap_or(0)
    }

    /// Deliver a key to the focused component only.
    ///
    /// Component inputs (current value, eligibility) are read from the
    /// latest state at delivery time, never cached.
    pub fn route_key(&self, key: KeyEvent) {
        match self.focus {
            ComponentId::Red => self.red.handle_key(key, self.mixer.rgb.r),
            ComponentId::Green => self.green.handle_key(key, self.mixer.rgb.g),
            ComponentId::Blue => self.blue.handle_key(key, self.mixer.rgb.b),
            ComponentId::SaveButton => self.save.handle_key(key, self.mixer.can_save()),
            ComponentId::SavedList => {}
        }
    }

    /// Apply one intent through the reducer, replacing the owned state.
    pub fn dispatch(&mut self, intent: MixerIntent) {
        tracing::trace!(?intent, "dispatch");
        self.mixer = MixerReducer::reduce(std::mem::take(&mut self.mixer), intent);
    }

    pub fn red_slider(&self) -> &Slider<MixerIntent> {
        &self.red
    }

    pub fn green_slider(&self) -> &Slider<MixerIntent> {
        &self.green
    }

    pub fn blue_slider(&self) -> &Slider<MixerIntent> {
        &self.blue
    }

    pub fn save_button(&self) -> &TriggerButton<MixerIntent> {
        &self.save
    }

    pub fn saved_list(&self) -> &SavedList {
        &self.saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::action_loop::ActionLoop;
    use crate::ui::mixer::Rgb;
    use std::path::PathBuf;

    fn make_app(actions: &ActionLoop<MixerIntent>) -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config, actions.sender())
    }

    // -- focus cycle ------------------------------------------------------

    #[test]
    fn focus_starts_on_red() {
        let actions = ActionLoop::new();
        let app = make_app(&actions);
        assert_eq!(app.focus(), ComponentId::Red);
    }

    #[test]
    fn focus_next_walks_screen_order_and_wraps() {
        let actions = ActionLoop::new();
        let mut app = make_app(&actions);
        app.focus_next();
        assert_eq!(app.focus(), ComponentId::Green);
        app.focus_next();
        assert_eq!(app.focus(), ComponentId::Blue);
        app.focus_next();
        assert_eq!(app.focus(), ComponentId::SaveButton);
        app.focus_next();
        assert_eq!(app.focus(), ComponentId::Red);
    }

    #[test]
    fn focus_prev_wraps_backwards() {
        let actions = ActionLoop::new();
        let mut app = make_app(&actions);
        app.focus_prev();
        assert_eq!(app.focus(), ComponentId::SaveButton);
    }

    #[test]
    fn saved_list_never_takes_focus() {
        let actions = ActionLoop::new();
        let mut app = make_app(&actions);
        for _ in 0..8 {
            app.focus_next();
            assert_ne!(app.focus(), ComponentId::SavedList);
        }
    }

    // -- component scoping ------------------------------------------------

    #[test]
    fn components_carry_distinct_scope_keys() {
        let actions = ActionLoop::new();
        let app = make_app(&actions);
        let ids = [
            app.red_slider().id(),
            app.green_slider().id(),
            app.blue_slider().id(),
            app.save_button().id(),
            app.saved_list().id(),
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // -- dispatch ---------------------------------------------------------

    #[test]
    fn dispatch_folds_into_owned_state() {
        let actions = ActionLoop::new();
        let mut app = make_app(&actions);
        app.dispatch(MixerIntent::SetRed(200));
        app.dispatch(MixerIntent::SetGreen(100));
        assert_eq!(app.state().rgb, Rgb::new(200, 100, 0));
        app.dispatch(MixerIntent::Save);
        assert_eq!(app.state().rgb, Rgb::new(0, 0, 0));
        assert_eq!(app.state().saves, vec![Rgb::new(200, 100, 0)]);
    }
}
