use huemix::ui::action_loop::{fold, ActionLoop};
use huemix::ui::mixer::{MixerIntent, MixerReducer, MixerState, Rgb};

// -- two-phase wiring ---------------------------------------------------------

#[test]
fn sink_exists_before_any_producer() {
    // Phase 1: the loop. Phase 2: senders handed out. Phase 3: emission.
    // Phase 4: drain closes the loop.
    let actions: ActionLoop<MixerIntent> = ActionLoop::new();
    let sender = actions.sender();
    assert!(actions.drain().is_empty());
    sender.emit(MixerIntent::SetRed(1));
    assert_eq!(actions.drain(), vec![MixerIntent::SetRed(1)]);
}

#[test]
fn drain_preserves_emission_order() {
    let actions = ActionLoop::new();
    let sender = actions.sender();
    sender.emit(MixerIntent::SetRed(1));
    sender.emit(MixerIntent::SetGreen(2));
    sender.emit(MixerIntent::Save);
    assert_eq!(
        actions.drain(),
        vec![
            MixerIntent::SetRed(1),
            MixerIntent::SetGreen(2),
            MixerIntent::Save,
        ]
    );
}

#[test]
fn cloned_senders_merge_in_emission_order() {
    // One sender per component; the merge point sees a total order.
    let actions = ActionLoop::new();
    let red = actions.sender();
    let green = actions.sender();
    let blue = actions.sender();
    green.emit(MixerIntent::SetGreen(10));
    red.emit(MixerIntent::SetRed(20));
    blue.emit(MixerIntent::SetBlue(30));
    red.emit(MixerIntent::SetRed(40));
    assert_eq!(
        actions.drain(),
        vec![
            MixerIntent::SetGreen(10),
            MixerIntent::SetRed(20),
            MixerIntent::SetBlue(30),
            MixerIntent::SetRed(40),
        ]
    );
}

#[test]
fn drain_empties_the_queue() {
    let actions = ActionLoop::new();
    actions.sender().emit(MixerIntent::Save);
    assert_eq!(actions.drain().len(), 1);
    assert!(actions.drain().is_empty());
}

// -- fold ---------------------------------------------------------------------

#[test]
fn fold_applies_drained_intents_in_order() {
    let actions = ActionLoop::new();
    let sender = actions.sender();
    sender.emit(MixerIntent::SetRed(200));
    sender.emit(MixerIntent::SetGreen(100));
    sender.emit(MixerIntent::Save);

    let state = fold::<MixerReducer>(MixerState::default(), actions.drain());
    assert_eq!(state.rgb, Rgb::new(0, 0, 0));
    assert_eq!(state.saves, vec![Rgb::new(200, 100, 0)]);
}

#[test]
fn fold_of_empty_batch_is_identity() {
    let state = MixerState {
        rgb: Rgb::new(1, 2, 3),
        saves: vec![Rgb::new(4, 5, 6)],
    };
    let folded = fold::<MixerReducer>(state.clone(), Vec::new());
    assert_eq!(folded, state);
}

#[test]
fn last_write_wins_when_one_field_is_set_twice() {
    let state = fold::<MixerReducer>(
        MixerState::default(),
        vec![MixerIntent::SetRed(10), MixerIntent::SetRed(250)],
    );
    assert_eq!(state.rgb.r, 250);
}
