//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{browser::BrowserPage, viewer::ViewerPage};
use crate::state::animation::AnimationState;
use crate::state::plate::PlateState;
use crate::state::query::QueryState;
use crate::state::selection::SelectionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, runs the timepoint-animation driver,
/// and sets up client-side routing: the plate browser at `/` and the
/// full-resolution viewer reached through a deep link that carries the whole
/// selection plus the merge-image URL as a trailing wildcard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let plates = RwSignal::new(PlateState::default());
    let selection = RwSignal::new(SelectionState::default());
    let animation = RwSignal::new(AnimationState::default());
    let query = RwSignal::new(QueryState::default());

    provide_context(plates);
    provide_context(selection);
    provide_context(animation);
    provide_context(query);

    drive_animation(plates, selection, animation);

    view! {
        <Stylesheet id="leptos" href="/pkg/plateview.css"/>
        <Title text="Plate Viewer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BrowserPage/>
                <Route
                    path=(
                        StaticSegment("image-viewer"),
                        ParamSegment("plate"),
                        ParamSegment("timepoint"),
                        ParamSegment("well"),
                        ParamSegment("wellsample"),
                        ParamSegment("channel"),
                        WildcardSegment("image"),
                    )
                    view=ViewerPage
                />
            </Routes>
        </Router>
    }
}

/// Run the timepoint-animation interval.
///
/// A single handle exists at any time: the effect drops the previous
/// interval before evaluating the new state, so toggling the checkbox or
/// changing the speed selector restarts the timer cleanly. Each tick
/// advances the timepoint through the same `SelectionState` write path as
/// manual selection, which keeps the slider, the grid, and any open viewer
/// consistent.
#[cfg(feature = "hydrate")]
fn drive_animation(
    plates: RwSignal<PlateState>,
    selection: RwSignal<SelectionState>,
    animation: RwSignal<AnimationState>,
) {
    use gloo_timers::callback::Interval;

    use crate::state::animation::{next_timepoint, period_ms};
    use crate::state::plate::PlateObject;

    let handle = StoredValue::new_local(None::<Interval>);

    Effect::new(move || {
        let state = animation.get();

        // Cancel any running interval; `Interval` stops on drop.
        handle.update_value(|h| {
            h.take();
        });

        if !state.running {
            return;
        }

        let interval = Interval::new(period_ms(state.speed), move || {
            let count = plates
                .with_untracked(|p| p.loaded_plate().map_or(0, PlateObject::count_timepoints));
            if count == 0 {
                return;
            }
            selection.update(|s| s.timepoint = next_timepoint(s.timepoint, count));
        });
        handle.set_value(Some(interval));
    });
}

#[cfg(not(feature = "hydrate"))]
fn drive_animation(
    _plates: RwSignal<PlateState>,
    _selection: RwSignal<SelectionState>,
    _animation: RwSignal<AnimationState>,
) {
}
