//! src/message/mod.rs
//! Message layer: the bridge between Event and Update
//!
//! Every key press and every backend result becomes an `AppMessage`; Update is
//! the only consumer.
//!
//!
//! Module layout:
//!     src/message/mod.rs
//!         mod app;        // AppMessage, the top-level enum
//!         mod backend;    // results coming back from backend jobs
//!         mod content;    // droplet list commands
//!         mod modal;      // modal dialog commands
//!
//!
//!     AppMessage {
//!         Quit,
//!         Refresh,
//!         ShowHelp,
//!         GoBack,                        // Esc: close modal, else unselect
//!         Content(ContentMessage),
//!         Modal(ModalMessage),
//!         Backend(BackendMessage),
//!         Noop,
//!     }
//!

mod app;
mod backend;
mod content;
mod modal;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
