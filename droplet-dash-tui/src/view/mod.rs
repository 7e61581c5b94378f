//! src/view/mod.rs
//! View layer: rendering
//!
//! Pure functions of the Model. Nothing here mutates state; `render` is called
//! once per frame from app.rs.
//!
//!
//! Module layout:
//!     src/view/mod.rs
//!         mod components;     // status bar, modal dialogs
//!         mod layout;         // title bar / list / status bar split
//!         mod pages;          // the droplet list
//!         pub mod theme;      // colors, selected from config at startup
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
