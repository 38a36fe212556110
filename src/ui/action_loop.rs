//! Action collection for the unidirectional data-flow loop.
//!
//! The state fold consumes intents that only exist once components are
//! instantiated, and components need the latest folded state — a
//! producer/consumer cycle. The wiring is two-phase: create the
//! [`ActionLoop`] first (the forward-referenced sink), hand cloned
//! [`ActionSender`]s to every component as it is built, then close the
//! loop each cycle by draining queued intents into the reducer.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::ui::mvi::{Intent, Reducer};

/// Emitting half of the action loop, cloned into every component.
pub struct ActionSender<I: Intent> {
    tx: Sender<I>,
}

impl<I: Intent> Clone for ActionSender<I> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<I: Intent> ActionSender<I> {
    /// Queue one intent. Delivery order across all senders is emission
    /// order. Send only fails once the loop is gone at shutdown.
    pub fn emit(&self, intent: I) {
        let _ = self.tx.send(intent);
    }
}

/// Collecting half of the loop, owned by the runtime.
pub struct ActionLoop<I: Intent> {
    tx: Sender<I>,
    rx: Receiver<I>,
}

impl<I: Intent> ActionLoop<I> {
    /// Phase one of the wiring: the sink exists before any producer does.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A sender for one component to emit through.
    pub fn sender(&self) -> ActionSender<I> {
        ActionSender {
            tx: self.tx.clone(),
        }
    }

    /// Take every intent queued so far, in emission order.
    pub fn drain(&self) -> Vec<I> {
        self.rx.try_iter().collect()
    }
}

impl<I: Intent> Default for ActionLoop<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Left-fold a batch of intents over a state.
pub fn fold<R: Reducer>(
    state: R::State,
    intents: impl IntoIterator<Item = R::Intent>,
) -> R::State {
    intents
        .into_iter()
        .fold(state, |state, intent| R::reduce(state, intent))
}
