//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the page document and the UI layer. It owns every
//! piece of mutable view state and the rules for changing it.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Interaction → dispatch → Event → handle_event → State Mutation → Actions → Side Effects
//!                                       ↑                                        ↓
//!                                       └──── CopyCompleted / TimerElapsed ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Executes actions against the preference store, clipboard and timers
//! - [`dispatch`]: Interaction table from `(Target, Input)` to events
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Variant-section and lineage-swap state machine types
//! - [`script`]: Line-oriented interaction scripts for the CLI
//! - [`state`]: Central application state container and view model computation
//! - [`timers`]: Virtual-time cancellable timers

pub mod actions;
pub mod controller;
pub mod dispatch;
pub mod handler;
pub mod modes;
pub mod script;
pub mod state;
pub mod timers;

pub use actions::Action;
pub use controller::Controller;
pub use dispatch::{Input, Key, Target};
pub use handler::{handle_event, Event};
pub use modes::{ActiveVariant, LineageSwap, SectionSelection};
pub use state::{AppState, ViewSettings};
pub use timers::{TimerId, TimerKind, TimerQueue};
