//! ==============================================================================
//! lib.rs - Tab Switcher Dashboard
//! ==============================================================================
//!
//! purpose:
//!     wasm front end for the tab switcher. binds to the tab markup of the
//!     host page and exposes `showTab` to javascript, so existing
//!     `onclick="showTab('books')"` handlers keep working.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - static markup present: bind to it as is
//!     - no markup: render header, tab nav and panels from config, then bind
//!
//! ==============================================================================

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use tabs_core::{ElementLookup, TabConfig, TabSwitcher};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

mod components;
mod dom;
mod page_config;

use components::{Header, TabNav, TabPanels};
use dom::DomDocument;

thread_local! {
    static SWITCHER: RefCell<Option<TabSwitcher<DomDocument>>> = const { RefCell::new(None) };
}

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Some(doc) = DomDocument::current() else {
        warn!("no document available, tab switcher not started");
        return;
    };

    let config = page_config::load_config(&doc);
    if doc.elements_by_class(&config.panel_class).is_empty() {
        let rendered = config.clone();
        mount_to_body(move || view! { <App config=rendered /> });
    }

    match TabSwitcher::bind(doc.clone(), &config) {
        Ok(switcher) => {
            info!(tabs = switcher.len(), active = ?switcher.active_tab(), "tab switcher ready");
            SWITCHER.with(|cell| *cell.borrow_mut() = Some(switcher));
        }
        Err(e) => warn!(error = %e, "tab switcher not bound"),
    }
}

// ==============================================================================
// javascript surface
// ==============================================================================

/// show a tab; unknown names are logged and ignored
#[wasm_bindgen(js_name = showTab)]
pub fn show_tab(tab_name: &str) {
    SWITCHER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(switcher) => {
            if let Err(e) = switcher.show(tab_name) {
                warn!(error = %e, "tab switch ignored");
            }
        }
        None => warn!(tab = tab_name, "tab switcher not bound, ignoring showTab"),
    });
}

#[wasm_bindgen(js_name = activeTab)]
pub fn active_tab() -> Option<String> {
    SWITCHER.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|switcher| switcher.active_tab().map(str::to_string))
    })
}

#[wasm_bindgen(js_name = tabNames)]
pub fn tab_names() -> js_sys::Array {
    SWITCHER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|switcher| switcher.tab_names().map(JsValue::from_str).collect())
            .unwrap_or_else(js_sys::Array::new)
    })
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(config: TabConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Library Management" />
        <Header />
        <div class="container">
            <TabNav config=config.clone() />
            <TabPanels config=config />
        </div>
    }
}
