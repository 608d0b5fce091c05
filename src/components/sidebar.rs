//! Sidebar tree of projects and plates built from query results.

use leptos::prelude::*;

use crate::state::animation::AnimationState;
use crate::state::plate::{PlateCollection, PlateState};
use crate::state::query::{ProjectGroup, QueryState, group_by_project};
use crate::state::selection::SelectionState;

/// Collapsible project/plate tree.
///
/// Groups are stream-adjacent per `group_by_project`; each project label
/// toggles its group (collapsed by default), and each plate leaf loads
/// that plate into the browser.
#[component]
pub fn PlateTree() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    view! {
        <ul class="plate-tree">
            {move || {
                query
                    .with(|q| group_by_project(&q.results))
                    .into_iter()
                    .map(|group| view! { <ProjectItem group=group/> })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

/// One project group with its plate leaves.
#[component]
fn ProjectItem(group: ProjectGroup) -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let animation = expect_context::<RwSignal<AnimationState>>();

    let expanded = RwSignal::new(false);

    view! {
        <li class="plate-tree__project">
            <span
                class="plate-tree__label"
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                {group.project.clone()}
            </span>
            <Show when=move || expanded.get()>
                <ul class="plate-tree__plates">
                    {group
                        .plates
                        .iter()
                        .map(|plate| {
                            let name = plate.clone();
                            view! {
                                <li
                                    class="plate-tree__plate"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        load_plate(plates, selection, animation, name.clone());
                                    }
                                >
                                    <a class="text-info" href="">{plate.clone()}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </li>
    }
}

/// Load a plate by name and reset the browser to it.
///
/// Stops any running animation first, then replaces the loaded-plate state
/// wholesale and snaps the selection to the new plate's first well.
/// Overlapping loads are not guarded; the last response to arrive wins.
/// Failures are logged and the previous plate stays on screen.
pub fn load_plate(
    plates: RwSignal<PlateState>,
    selection: RwSignal<SelectionState>,
    animation: RwSignal<AnimationState>,
    name: String,
) {
    animation.update(|a| a.running = false);

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_plate(&name).await {
            Ok(collection) => {
                apply_loaded_plate(plates, selection, collection);
            }
            Err(e) => leptos::logging::warn!("loading plate {name} failed: {e}"),
        }
    });
}

/// Install a fetched plate and derive a fresh selection from it. The
/// selection is written first so the grid re-creation observes a
/// consistent pair.
pub fn apply_loaded_plate(
    plates: RwSignal<PlateState>,
    selection: RwSignal<SelectionState>,
    collection: PlateCollection,
) {
    if let Some(plate) = collection.plate() {
        selection.set(SelectionState::reset_for(plate));
    }
    plates.set(PlateState { plates: Some(collection) });
}
