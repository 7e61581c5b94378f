//! UI-only state

mod modal;

pub use modal::{ConfirmFocus, Modal, ModalState};
