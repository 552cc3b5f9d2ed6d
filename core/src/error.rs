//! Errors raised while configuring or switching tabs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabError {
    /// no element carries the panel id of this tab
    #[error("no panel element `{id}` for tab `{tab}`")]
    MissingPanel { tab: String, id: String },

    /// no element carries the trigger id of this tab
    #[error("no trigger element `{id}` for tab `{tab}`")]
    MissingTrigger { tab: String, id: String },

    #[error("unknown tab `{0}`")]
    UnknownTab(String),

    #[error("tab `{0}` is configured more than once")]
    DuplicateTab(String),

    #[error("no tabs configured")]
    NoTabs,

    #[error("invalid tab name `{0}`")]
    InvalidTabName(String),

    #[error("invalid style class `{0}`")]
    InvalidClass(String),

    #[error("marker class `{0}` is also toggled as a state class")]
    MarkerClassToggled(String),

    #[error("initial tab `{0}` is not one of the configured tabs")]
    UnknownInitialTab(String),

    #[error("malformed tab configuration: {0}")]
    Config(#[from] serde_json::Error),
}
