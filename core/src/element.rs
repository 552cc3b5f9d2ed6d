//! Element abstraction the switcher mutates
//!
//! A live page implements these over `web_sys::Element`; tests use
//! [`crate::memory::MemoryDocument`].

/// an element whose class list can be read and toggled
pub trait TabElement {
    fn id(&self) -> String;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn add_classes(&self, classes: &[String]) {
        for class in classes {
            self.add_class(class);
        }
    }

    fn remove_classes(&self, classes: &[String]) {
        for class in classes {
            self.remove_class(class);
        }
    }

    fn has_classes(&self, classes: &[String]) -> bool {
        classes.iter().all(|class| self.has_class(class))
    }
}

/// resolves elements by id or by marker class
pub trait ElementLookup {
    type Element: TabElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// every element carrying `class`, in document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
}

impl<L: ElementLookup + ?Sized> ElementLookup for &L {
    type Element = L::Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Self::Element> {
        (**self).elements_by_class(class)
    }
}
