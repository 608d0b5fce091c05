//! Metadata panel showing the loaded plate's structure as pretty JSON.

use leptos::prelude::*;

use crate::state::plate::PlateState;

/// Collapsible JSON dump of the loaded plate.
#[component]
pub fn MetaPanel() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();

    let pretty = move || {
        plates.with(|state| {
            state
                .loaded_plate()
                .and_then(|plate| serde_json::to_string_pretty(plate).ok())
                .unwrap_or_default()
        })
    };

    view! {
        <details class="meta-panel">
            <summary class="meta-panel__title">"Plate meta"</summary>
            <pre class="meta-panel__json">{pretty}</pre>
        </details>
    }
}
