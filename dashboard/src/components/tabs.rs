//! Tab navigation and panels, rendered with the tab naming contract

use leptos::prelude::*;
use tabs_core::{panel_id, trigger_id, TabConfig};

#[component]
pub fn TabNav(config: TabConfig) -> impl IntoView {
    let shown = config.default_tab().map(str::to_string);

    let buttons = config
        .tabs
        .iter()
        .map(|tab| {
            let active = shown.as_deref() == Some(tab.name.as_str());
            let name = tab.name.clone();
            view! {
                <button
                    id={trigger_id(&tab.name)}
                    class={config.trigger_classes(active).join(" ")}
                    on:click=move |_| crate::show_tab(&name)
                >
                    {tab.label().to_string()}
                </button>
            }
        })
        .collect_view();

    view! { <nav class="tabs">{buttons}</nav> }
}

#[component]
pub fn TabPanels(config: TabConfig) -> impl IntoView {
    let shown = config.default_tab().map(str::to_string);

    config
        .tabs
        .iter()
        .map(|tab| {
            let visible = shown.as_deref() == Some(tab.name.as_str());
            view! {
                <section id={panel_id(&tab.name)} class={config.panel_classes(visible).join(" ")}>
                    <h2>{tab.label().to_string()}</h2>
                </section>
            }
        })
        .collect_view()
}
