//! src/util/mod.rs
//! Util layer: infrastructure
//!
//! Code with no knowledge of droplets: terminal setup and teardown, and the
//! log file.
//!
//!
//! Module layout:
//!     src/util/mod.rs
//!         mod logging;        // tracing subscriber writing to a file
//!         mod terminal;       // raw mode, alternate screen, panic hook
//!
//!
//!     init_terminal()
//!         1. raw mode: every key arrives immediately, nothing is echoed
//!         2. alternate screen: the shell contents come back on exit
//!
//!     restore_terminal()
//!         Must run however the main loop ended, otherwise the shell is left
//!         in raw mode. main.rs calls it right after app::run returns, and
//!         install_panic_hook does the same before a panic message prints.
//!
//!     init_logging()
//!         stdout belongs to the TUI, so logs go to
//!         <config dir>/droplet-dash/droplet-dash.log. The filter comes from
//!         DROPLET_DASH_LOG and defaults to "info". Records from the `log`
//!         facade used by the library crates are forwarded too.
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, install_panic_hook, restore_terminal};
