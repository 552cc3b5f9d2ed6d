//! ==============================================================================
//! lib.rs - tab switching core
//! ==============================================================================
//!
//! purpose:
//!     shows one tab panel at a time and marks the matching trigger button
//!     as active by toggling style classes. everything here works against
//!     an injected element lookup, so it runs the same on a live page and
//!     on the in-memory document used by the tests.
//!
//! relationships:
//!     - used by: dashboard (dom lookup, leptos rendering, js exports)
//!
//! naming contract:
//!     - panel   : id `<tab>-content`, marker class `tab-content`
//!     - trigger : id `tab-<tab>`,     marker class `tab-btn`
//!
//! ==============================================================================

pub mod config;
pub mod element;
pub mod error;
pub mod memory;
pub mod switcher;

pub use config::{panel_id, trigger_id, TabConfig, TabSpec, TabStyle};
pub use element::{ElementLookup, TabElement};
pub use error::TabError;
pub use memory::{MemoryDocument, MemoryElement};
pub use switcher::{discover_tabs, show_tab, TabSwitcher};
