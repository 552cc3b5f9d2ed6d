//! ==============================================================================
//! page_config.rs - tab config embedded in the host page
//! ==============================================================================
//!
//! the page may carry
//!
//!     <script type="application/json" id="tab-switcher-config">{ ... }</script>
//!
//! without it, or when it is malformed or invalid, defaults apply and the
//! tab list is read off the trigger buttons already in the markup (if any).
//!
//! ==============================================================================

use tabs_core::{discover_tabs, ElementLookup, TabConfig};
use tracing::{debug, warn};

use crate::dom::DomDocument;

pub const CONFIG_ELEMENT_ID: &str = "tab-switcher-config";

/// parse embedded json; `None` when absent, blank, malformed or invalid
pub fn parse_config(raw: Option<&str>) -> Option<TabConfig> {
    let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;
    match TabConfig::from_json(raw) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(error = %e, "ignoring embedded tab config");
            None
        }
    }
}

/// embedded config if usable, otherwise defaults with the tab list taken
/// from the triggers in the markup
pub fn resolve_config<L: ElementLookup>(lookup: &L, raw: Option<&str>) -> TabConfig {
    if let Some(config) = parse_config(raw) {
        return config;
    }

    let mut config = TabConfig::default();
    let discovered = discover_tabs(lookup, &config.trigger_class);
    if !discovered.is_empty() {
        debug!(tabs = discovered.len(), "tabs discovered from markup");
        config.tabs = discovered;
    }
    config
}

pub fn load_config(doc: &DomDocument) -> TabConfig {
    let raw = doc
        .document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    resolve_config(doc, raw.as_deref())
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tabs_core::{MemoryDocument, TabSpec, TabSwitcher};

    fn home_about_page() -> MemoryDocument {
        MemoryDocument::tab_page(&TabConfig {
            tabs: vec![TabSpec::new("home"), TabSpec::new("about")],
            ..TabConfig::default()
        })
    }

    fn names(config: &TabConfig) -> Vec<&str> {
        config.tabs.iter().map(|tab| tab.name.as_str()).collect()
    }

    #[test]
    fn test_parse_config() {
        assert!(parse_config(None).is_none());
        assert!(parse_config(Some("  \n ")).is_none());
        assert!(parse_config(Some("{not json")).is_none());
        assert!(parse_config(Some(r#"{"tabs": []}"#)).is_none());

        let config = parse_config(Some(r#"{"tabs": [{"name": "home"}, {"name": "about"}]}"#)).unwrap();
        assert_eq!(names(&config), vec!["home", "about"]);
    }

    #[test]
    fn test_embedded_config_wins_over_markup() {
        let doc = home_about_page();
        let config = resolve_config(&doc, Some(r#"{"tabs": [{"name": "about"}]}"#));
        assert_eq!(names(&config), vec!["about"]);
    }

    #[test]
    fn test_missing_config_discovers_markup_tabs() {
        let doc = home_about_page();
        let config = resolve_config(&doc, None);
        assert_eq!(names(&config), vec!["home", "about"]);
    }

    #[test]
    fn test_broken_config_discovers_markup_tabs() {
        let doc = home_about_page();
        for raw in ["{not json", r#"{"tabs": []}"#] {
            let config = resolve_config(&doc, Some(raw));
            assert_eq!(names(&config), vec!["home", "about"]);
            assert!(TabSwitcher::bind(&doc, &config).is_ok());
        }
    }

    #[test]
    fn test_empty_page_uses_defaults() {
        let config = resolve_config(&MemoryDocument::new(), Some("{not json"));
        assert_eq!(config, TabConfig::default());
    }
}
