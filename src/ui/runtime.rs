use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::ConfigStore;
use crate::ui::action_loop::ActionLoop;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Drive the UI until quit.
///
/// Wiring order matters: the action loop exists first, components are
/// instantiated against its sender, and every cycle closes the loop by
/// draining emitted intents back into the state fold.
pub fn run(config: ConfigStore) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.get().defaults.tick_rate_ms);
    tracing::info!(
        config = %config.path().display(),
        tick_ms = tick_rate.as_millis() as u64,
        "starting"
    );

    let (mut terminal, guard) = setup_terminal()?;
    let actions = ActionLoop::new();
    let mut app = App::new(config, actions.sender());
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            // The next draw picks the new size up from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        for intent in actions.drain() {
            app.dispatch(intent);
        }
    }

    tracing::info!(saves = app.state().saves.len(), "exiting");
    drop(guard);
    Ok(())
}
