//! Panel state
//!
//! Pure, synchronous state: the fetched droplets, the highlighted row, and the
//! refresh cycle. Nothing in here touches the network.

mod collection;
mod droplets_state;
mod refresh;
mod selection;

pub use collection::DropletCollection;
pub use droplets_state::DropletsState;
pub use refresh::{RefreshPhase, RefreshTicket};
pub use selection::SelectionTracker;
