//! ==============================================================================
//! memory.rs - in-memory document
//! ==============================================================================
//!
//! a flat list of elements with ids and ordered class lists. handles are
//! shared (`Rc<RefCell<_>>`) the same way dom element handles alias the
//! same node, so a mutation through one handle is seen by every other.
//!
//! test support: the unit tests of this crate and of the dashboard run the
//! switcher against it in place of a browser document. nothing in the
//! product path constructs one.
//!
//! ==============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{panel_id, trigger_id, TabConfig};
use crate::element::{ElementLookup, TabElement};

#[derive(Debug)]
struct Node {
    id: String,
    classes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    pub fn new(id: impl Into<String>, classes: &[&str]) -> Self {
        let mut node = Node { id: id.into(), classes: Vec::new() };
        for class in classes {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
        Self(Rc::new(RefCell::new(node)))
    }

    /// snapshot of the class list in insertion order
    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }
}

impl TabElement for MemoryElement {
    fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// test fixture: document laid out the way the dashboard renders a config:
    /// triggers first, then panels, with the default tab shown
    pub fn tab_page(config: &TabConfig) -> Self {
        let mut doc = Self::new();
        let shown = config.default_tab();

        for tab in &config.tabs {
            let active = shown == Some(tab.name.as_str());
            let classes = config.trigger_classes(active);
            let classes: Vec<&str> = classes.iter().map(String::as_str).collect();
            doc.insert(MemoryElement::new(trigger_id(&tab.name), &classes));
        }
        for tab in &config.tabs {
            let visible = shown == Some(tab.name.as_str());
            let classes = config.panel_classes(visible);
            let classes: Vec<&str> = classes.iter().map(String::as_str).collect();
            doc.insert(MemoryElement::new(panel_id(&tab.name), &classes));
        }
        doc
    }

    pub fn insert(&mut self, element: MemoryElement) -> MemoryElement {
        self.elements.push(element.clone());
        element
    }

    /// test fixture: detach an element, returning it if it was present
    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        let index = self.elements.iter().position(|el| el.id() == id)?;
        Some(self.elements.remove(index))
    }

    /// test fixture: shorthand for [`ElementLookup::element_by_id`]
    pub fn get(&self, id: &str) -> Option<MemoryElement> {
        self.element_by_id(id)
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.iter().find(|el| el.id() == id).cloned()
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        self.elements
            .iter()
            .filter(|el| el.has_class(class))
            .cloned()
            .collect()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_has_no_duplicates() {
        let el = MemoryElement::new("x", &["a", "a", "b"]);
        el.add_class("b");
        assert_eq!(el.classes(), vec!["a", "b"]);
        el.remove_class("a");
        assert_eq!(el.classes(), vec!["b"]);
    }

    #[test]
    fn test_handles_alias_the_same_node() {
        let mut doc = MemoryDocument::new();
        let el = doc.insert(MemoryElement::new("books-content", &["tab-content"]));
        doc.get("books-content").unwrap().add_class("hidden");
        assert!(el.has_class("hidden"));
    }

    #[test]
    fn test_tab_page_layout() {
        let doc = MemoryDocument::tab_page(&TabConfig::default());
        assert_eq!(doc.elements_by_class("tab-content").len(), 3);
        assert_eq!(doc.elements_by_class("tab-btn").len(), 3);
        assert!(!doc.get("books-content").unwrap().has_class("hidden"));
        assert!(doc.get("users-content").unwrap().has_class("hidden"));
        assert!(doc.get("tab-books").unwrap().has_class("bg-blue-600"));
        assert!(doc.get("tab-users").unwrap().has_class("text-gray-600"));
    }

    #[test]
    fn test_remove() {
        let mut doc = MemoryDocument::tab_page(&TabConfig::default());
        assert!(doc.remove("users-content").is_some());
        assert!(doc.remove("users-content").is_none());
        assert!(doc.get("users-content").is_none());
    }
}
