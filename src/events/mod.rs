//! Event queue for the overlay.
//!
//! Window-system events and fade ticks are funnelled through one mpsc queue
//! and handled on the main thread, so drawing never happens from two places
//! at once.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐                 ┌─────────────┐
//! │ X11 events  │                 │ TickSchedule│
//! │ (translate) │                 │  (10 ms)    │
//! └──────┬──────┘                 └──────┬──────┘
//!        │ publish()                     │ publish(Tick)
//!        ▼                               ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │           (DrawContext requests, fade)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`CoverEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::CoverEvent;
