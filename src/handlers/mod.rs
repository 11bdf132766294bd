//! Event handlers and dispatching.
//!
//! This module contains the dispatcher that turns queued overlay events
//! into draw requests.

pub mod dispatcher;

pub use dispatcher::{Action, Dispatcher};
