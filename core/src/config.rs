//! ==============================================================================
//! config.rs - tab set and style classes
//! ==============================================================================
//!
//! the tab page is described by an ordered list of tab names plus the class
//! tokens used as state flags. every field has a default matching the
//! library page markup, so an empty json object `{}` is a valid config.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::TabError;

/// id of the panel element for a tab
pub fn panel_id(tab: &str) -> String {
    format!("{}-content", tab)
}

/// id of the trigger element for a tab
pub fn trigger_id(tab: &str) -> String {
    format!("tab-{}", tab)
}

/// inverse of [`trigger_id`]
pub fn tab_from_trigger_id(id: &str) -> Option<&str> {
    id.strip_prefix("tab-").filter(|name| !name.is_empty())
}

// ==============================================================================
// style classes
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStyle {
    /// present on every panel except the visible one
    pub hidden_class: String,
    /// emphasis of the selected trigger
    pub active_classes: Vec<String>,
    /// emphasis of every other trigger
    pub inactive_classes: Vec<String>,
}

impl Default for TabStyle {
    fn default() -> Self {
        Self {
            hidden_class: "hidden".to_string(),
            active_classes: vec!["bg-blue-600".to_string(), "text-white".to_string()],
            inactive_classes: vec![
                "text-gray-600".to_string(),
                "hover:text-blue-600".to_string(),
            ],
        }
    }
}

// ==============================================================================
// tab set
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TabSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), label: None }
    }

    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { name: name.into(), label: Some(label.into()) }
    }

    /// text shown on the trigger, falls back to the tab name
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    pub tabs: Vec<TabSpec>,
    /// shown when the switcher binds; `None` keeps whatever the markup shows
    pub initial_tab: Option<String>,
    pub panel_class: String,
    pub trigger_class: String,
    pub style: TabStyle,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            tabs: vec![
                TabSpec::with_label("books", "Books"),
                TabSpec::with_label("users", "Users"),
                TabSpec::with_label("circulation", "Issue / Return"),
            ],
            initial_tab: None,
            panel_class: "tab-content".to_string(),
            trigger_class: "tab-btn".to_string(),
            style: TabStyle::default(),
        }
    }
}

impl TabConfig {
    /// parse and validate a json config
    pub fn from_json(json: &str) -> Result<Self, TabError> {
        let config: TabConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TabError> {
        if self.tabs.is_empty() {
            return Err(TabError::NoTabs);
        }

        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !is_token(&tab.name) {
                return Err(TabError::InvalidTabName(tab.name.clone()));
            }
            if !seen.insert(tab.name.as_str()) {
                return Err(TabError::DuplicateTab(tab.name.clone()));
            }
        }

        let style = &self.style;
        let classes = [&self.panel_class, &self.trigger_class, &style.hidden_class]
            .into_iter()
            .chain(style.active_classes.iter())
            .chain(style.inactive_classes.iter());
        for class in classes {
            if !is_token(class) {
                return Err(TabError::InvalidClass(class.clone()));
            }
        }

        // marker classes find panels/triggers again on every switch, so the
        // state toggles must never strip them
        if self.panel_class == style.hidden_class {
            return Err(TabError::MarkerClassToggled(self.panel_class.clone()));
        }
        if style.active_classes.contains(&self.trigger_class)
            || style.inactive_classes.contains(&self.trigger_class)
        {
            return Err(TabError::MarkerClassToggled(self.trigger_class.clone()));
        }

        if let Some(initial) = &self.initial_tab {
            if !seen.contains(initial.as_str()) {
                return Err(TabError::UnknownInitialTab(initial.clone()));
            }
        }

        Ok(())
    }

    /// tab shown first when the page is rendered from config
    pub fn default_tab(&self) -> Option<&str> {
        self.initial_tab
            .as_deref()
            .or_else(|| self.tabs.first().map(|tab| tab.name.as_str()))
    }

    /// class list of a freshly rendered panel
    pub fn panel_classes(&self, visible: bool) -> Vec<String> {
        let mut classes = vec![self.panel_class.clone()];
        if !visible {
            classes.push(self.style.hidden_class.clone());
        }
        classes
    }

    /// class list of a freshly rendered trigger
    pub fn trigger_classes(&self, active: bool) -> Vec<String> {
        let group = if active {
            &self.style.active_classes
        } else {
            &self.style.inactive_classes
        };
        std::iter::once(self.trigger_class.clone())
            .chain(group.iter().cloned())
            .collect()
    }
}

/// non-empty and free of whitespace, as a classList / id token must be
fn is_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

// ==============================================================================
// tests
// ==============================================================================
