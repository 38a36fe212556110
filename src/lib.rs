//! Terminal RGB color mixer demonstrating unidirectional data flow.
//!
//! Components emit intents, a pure reducer folds them into a single
//! immutable state value, and the latest state is fanned back out to
//! components as read-only input.

pub mod config;
pub mod logging;
pub mod ui;
