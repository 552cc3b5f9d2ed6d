//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Library Management"</h1>
                <p class="subtitle">"Books, users and circulation"</p>
            </div>
        </header>
    }
}
