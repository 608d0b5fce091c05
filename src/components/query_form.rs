//! Query form with busy spinner.

use leptos::prelude::*;

use crate::state::query::QueryState;

/// Search form feeding the sidebar tree.
///
/// Submission posts the form's fields to `/api/query`; the spinner is
/// shown for the whole request and hidden on both the success and the
/// failure path. Failures are logged to the console and leave the current
/// result list untouched.
#[component]
pub fn QueryForm() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(form) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
            else {
                return;
            };
            let Ok(form_data) = web_sys::FormData::new_with_form(&form) else {
                return;
            };

            query.update(|q| q.busy = true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::query_plates(form_data).await;
                query.update(|q| {
                    q.busy = false;
                    match result {
                        Ok(hits) => q.results = hits,
                        Err(e) => leptos::logging::warn!("plate query failed: {e}"),
                    }
                });
            });
        }
    };

    view! {
        <form class="query-form" on:submit=on_submit>
            <input
                class="query-form__input"
                type="text"
                name="project"
                placeholder="Project"
            />
            <input
                class="query-form__input"
                type="text"
                name="plate"
                placeholder="Plate"
            />
            <button class="btn btn--primary" type="submit">
                "Search"
            </button>
            <Show when=move || query.get().busy>
                <span class="query-form__spinner">"Searching..."</span>
            </Show>
        </form>
    }
}
