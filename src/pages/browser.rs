//! Plate browser page: query sidebar, split pane, and the well grid.

use leptos::prelude::*;

use crate::components::meta_panel::MetaPanel;
use crate::components::plate_grid::PlateGrid;
use crate::components::query_form::QueryForm;
use crate::components::sidebar::PlateTree;
use crate::components::split_pane::SplitPane;
use crate::components::toolbar::Toolbar;
use crate::state::plate::PlateState;

/// Browser page: query form and result tree on the left, toolbar, grid,
/// and metadata panel on the right, separated by the draggable splitter.
///
/// The grid subtree is rebuilt whenever the loaded plate's name changes,
/// which is the force-recreate path of a fresh plate load; selector
/// options rebuild reactively from the same state.
#[component]
pub fn BrowserPage() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();

    view! {
        <div class="browser-page">
            <SplitPane
                left=move || {
                    view! {
                        <div class="browser-page__sidebar">
                            <QueryForm/>
                            <PlateTree/>
                        </div>
                    }
                }
                right=move || {
                    view! {
                        <div class="browser-page__main">
                            <Toolbar/>
                            {move || {
                                plates
                                    .with(|p| p.loaded_plate_name().map(str::to_owned))
                                    .map(|_| view! { <PlateGrid/> })
                            }}
                            <MetaPanel/>
                        </div>
                    }
                }
            />
        </div>
    }
}
