//! ==============================================================================
//! switcher.rs - showing one tab at a time
//! ==============================================================================
//!
//! two entry points:
//!
//! ```text
//!     show_tab     - resolves elements by the naming contract on every call.
//!                    hides every panel first, so a bad tab name leaves all
//!                    panels hidden before the missing lookup is reported.
//!
//!     TabSwitcher  - resolves every configured panel/trigger once when
//!                    binding. a bad tab name is rejected before anything is
//!                    touched; a good one still resets every marked panel
//!                    and trigger in the document.
//! ```
//!
//! in both, the selected trigger ends up with the active classes and without
//! the inactive ones.
//!
//! ==============================================================================

use tracing::{debug, warn};

use crate::config::{panel_id, tab_from_trigger_id, trigger_id, TabConfig, TabSpec, TabStyle};
use crate::element::{ElementLookup, TabElement};
use crate::error::TabError;

fn activate<E: TabElement>(trigger: &E, style: &TabStyle) {
    trigger.remove_classes(&style.inactive_classes);
    trigger.add_classes(&style.active_classes);
}

fn deactivate<E: TabElement>(trigger: &E, style: &TabStyle) {
    trigger.remove_classes(&style.active_classes);
    trigger.add_classes(&style.inactive_classes);
}

/// show `tab_name` by looking its elements up through `lookup`
pub fn show_tab<L: ElementLookup>(
    lookup: &L,
    config: &TabConfig,
    tab_name: &str,
) -> Result<(), TabError> {
    let style = &config.style;

    for panel in lookup.elements_by_class(&config.panel_class) {
        panel.add_class(&style.hidden_class);
    }

    let id = panel_id(tab_name);
    let panel = lookup.element_by_id(&id).ok_or_else(|| TabError::MissingPanel {
        tab: tab_name.to_string(),
        id,
    })?;
    panel.remove_class(&style.hidden_class);

    for trigger in lookup.elements_by_class(&config.trigger_class) {
        deactivate(&trigger, style);
    }

    let id = trigger_id(tab_name);
    let trigger = lookup.element_by_id(&id).ok_or_else(|| TabError::MissingTrigger {
        tab: tab_name.to_string(),
        id,
    })?;
    activate(&trigger, style);

    debug!(tab = tab_name, "tab shown");
    Ok(())
}

/// tab list read off the trigger ids present in the markup
pub fn discover_tabs<L: ElementLookup>(lookup: &L, trigger_class: &str) -> Vec<TabSpec> {
    let mut tabs: Vec<TabSpec> = Vec::new();
    for trigger in lookup.elements_by_class(trigger_class) {
        let id = trigger.id();
        match tab_from_trigger_id(&id) {
            Some(name) if !tabs.iter().any(|tab| tab.name == name) => {
                tabs.push(TabSpec::new(name));
            }
            Some(_) => {}
            None => warn!(id = %id, "trigger id does not follow tab-<name>, skipped"),
        }
    }
    tabs
}

// ==============================================================================
// bound switcher
// ==============================================================================

#[derive(Debug, Clone)]
struct TabBinding<E> {
    name: String,
    panel: E,
    trigger: E,
}

#[derive(Debug)]
pub struct TabSwitcher<L: ElementLookup> {
    lookup: L,
    bindings: Vec<TabBinding<L::Element>>,
    panel_class: String,
    trigger_class: String,
    style: TabStyle,
    active: Option<usize>,
}

impl<L: ElementLookup> TabSwitcher<L> {
    /// resolve every configured tab through `lookup`
    ///
    /// fails if the config is invalid or any panel/trigger is missing. the
    /// active tab is read from the markup unless `initial_tab` is set, in
    /// which case that tab is shown.
    pub fn bind(lookup: L, config: &TabConfig) -> Result<Self, TabError> {
        config.validate()?;

        let mut bindings = Vec::with_capacity(config.tabs.len());
        for tab in &config.tabs {
            let id = panel_id(&tab.name);
            let panel = lookup.element_by_id(&id).ok_or_else(|| TabError::MissingPanel {
                tab: tab.name.clone(),
                id,
            })?;
            let id = trigger_id(&tab.name);
            let trigger = lookup.element_by_id(&id).ok_or_else(|| TabError::MissingTrigger {
                tab: tab.name.clone(),
                id,
            })?;
            bindings.push(TabBinding { name: tab.name.clone(), panel, trigger });
        }

        let style = config.style.clone();
        let active = bindings
            .iter()
            .position(|binding| !binding.panel.has_class(&style.hidden_class));

        let mut switcher = Self {
            lookup,
            bindings,
            panel_class: config.panel_class.clone(),
            trigger_class: config.trigger_class.clone(),
            style,
            active,
        };
        if let Some(initial) = &config.initial_tab {
            switcher.show(initial)?;
        }

        debug!(tabs = switcher.bindings.len(), active = ?switcher.active_tab(), "tab switcher bound");
        Ok(switcher)
    }

    /// show `tab_name` and hide every other panel in the document
    ///
    /// an unknown name is rejected before any element is touched.
    pub fn show(&mut self, tab_name: &str) -> Result<(), TabError> {
        let index = self
            .position(tab_name)
            .ok_or_else(|| TabError::UnknownTab(tab_name.to_string()))?;

        // marked elements outside the config get the same reset
        for panel in self.lookup.elements_by_class(&self.panel_class) {
            panel.add_class(&self.style.hidden_class);
        }
        for trigger in self.lookup.elements_by_class(&self.trigger_class) {
            deactivate(&trigger, &self.style);
        }

        for (i, binding) in self.bindings.iter().enumerate() {
            if i == index {
                binding.panel.remove_class(&self.style.hidden_class);
                activate(&binding.trigger, &self.style);
            } else {
                binding.panel.add_class(&self.style.hidden_class);
                deactivate(&binding.trigger, &self.style);
            }
        }

        self.active = Some(index);
        debug!(tab = tab_name, "tab shown");
        Ok(())
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.active.map(|i| self.bindings[i].name.as_str())
    }

    pub fn tab_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.name.as_str())
    }

    pub fn contains(&self, tab_name: &str) -> bool {
        self.position(tab_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn position(&self, tab_name: &str) -> Option<usize> {
        self.bindings.iter().position(|binding| binding.name == tab_name)
    }
}

// ==============================================================================
// tests
// ==============================================================================
