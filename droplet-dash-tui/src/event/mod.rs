//! src/event/mod.rs
//! Event layer: input handling
//!
//! Turns terminal events into `AppMessage`s. Nothing here touches the Model;
//! the App is only read to decide which keymap applies.
//!
//!
//! Module layout:
//!     src/event/mod.rs
//!         mod handler;        // poll_event, handle_event
//!         mod keymap;         // key bindings and the help table
//!
//!
//!     poll_event(timeout)     blocks for at most `timeout`, called from app.rs
//!
//!     handle_event(event, app)
//!         Event::Key      → handle_key_event
//!         Event::Resize   → Noop, the next frame redraws anyway
//!         anything else   → Noop
//!
//!     handle_key_event only looks at KeyEventKind::Press. It routes:
//!         - to the modal keys while a modal is open
//!         - to the global keys (quit, help, refresh, back)
//!         - to the droplet list keys otherwise
//!
//!
//! Modal keys:
//!     Esc             → ModalMessage::Close
//!     Tab / ← / →     → ModalMessage::ToggleFocus
//!     Enter           → ModalMessage::Confirm
//!     Ctrl+C          → AppMessage::Quit
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::HELP_ENTRIES;
