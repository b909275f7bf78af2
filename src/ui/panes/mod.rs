//! TUI pane rendering modules
//!
//! Each pane is a stateless render function that draws from borrowed app
//! state. Nothing here mutates the sequence or the sort run.
//!
//! # Pane Modules
//!
//! - [`controls`]: Header with the key bindings and the current selections
//! - [`bars`]: Bar chart of the sequence with swap highlighting
//! - [`status`]: Status bar with run state and comparison/swap counters

pub mod bars;
pub mod controls;
pub mod status;

pub use bars::{render_bars_pane, Highlight};
pub use controls::render_controls_pane;
pub use status::{render_status_bar, RunState, StatusRenderData};
