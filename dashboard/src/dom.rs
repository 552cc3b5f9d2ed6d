//! ==============================================================================
//! dom.rs - element lookup over the live document
//! ==============================================================================

use tabs_core::{ElementLookup, TabElement};
use tracing::warn;
use web_sys::{Document, Element};

#[derive(Debug, Clone)]
pub struct DomElement(Element);

impl TabElement for DomElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            warn!(id = %self.0.id(), class, error = ?e, "classList.add failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            warn!(id = %self.0.id(), class, error = ?e, "classList.remove failed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

#[derive(Debug, Clone)]
pub struct DomDocument(Document);

impl DomDocument {
    /// document of the current window, if there is one
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }

    pub fn document(&self) -> &Document {
        &self.0
    }
}

impl ElementLookup for DomDocument {
    type Element = DomElement;

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.0.get_element_by_id(id).map(DomElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<DomElement> {
        // the collection is live, copy it out before anything is toggled
        let collection = self.0.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(DomElement)
            .collect()
    }
}
