//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod tabs;

pub use header::Header;
pub use tabs::{TabNav, TabPanels};
