//! Full-resolution viewer page, reached through a deep link that carries
//! the whole selection plus the merge-image URL.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::toolbar::{AnimateControls, ChannelSelect, TimepointControls};
use crate::state::animation::AnimationState;
use crate::state::plate::PlateState;
use crate::state::selection::{ChannelSelection, RestorePolicy, SelectionState};

/// Viewer page with a pan/zoom surface for one field of view.
///
/// On arrival the named plate is fetched and the deep-linked selection is
/// restored through the configured `RestorePolicy`; the surface shows the
/// deep-linked image immediately and then tracks every selection change by
/// swapping image layers in place.
#[component]
pub fn ViewerPage() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let animation = expect_context::<RwSignal<AnimationState>>();
    let params = use_params_map();

    // Load the plate and restore the deep-linked selection whenever the
    // route params change.
    Effect::new(move || {
        let requested = params.with(|p| {
            Some(DeepLink {
                plate: p.get("plate")?,
                timepoint: p.get("timepoint")?.parse().ok()?,
                well: p.get("well")?,
                wellsample: p.get("wellsample")?.parse().ok()?,
                channel: p.get("channel")?.parse().ok()?,
            })
        });
        let Some(requested) = requested else {
            return;
        };
        load_plate_from_viewer(plates, selection, animation, requested);
    });

    let scalebar = RwSignal::new(false);

    init_viewer_surface(plates, selection, scalebar, params);

    view! {
        <div class="viewer-page">
            <div class="viewer-page__toolbar">
                <TimepointControls/>
                <ChannelSelect/>
                <AnimateControls/>
                <label class="toolbar__field">
                    "Scalebar"
                    <input
                        type="checkbox"
                        prop:checked=move || scalebar.get()
                        on:change=move |ev| scalebar.set(event_target_checked(&ev))
                    />
                </label>
            </div>
            <div id="viewer-div" class="viewer-page__surface"></div>
        </div>
    }
}

/// Selection carried by the viewer deep link.
struct DeepLink {
    plate: String,
    timepoint: u32,
    well: String,
    wellsample: u32,
    channel: ChannelSelection,
}

/// Same load path as the sidebar, but restoring an explicit selection
/// instead of resetting to the plate's first well.
fn load_plate_from_viewer(
    plates: RwSignal<PlateState>,
    selection: RwSignal<SelectionState>,
    animation: RwSignal<AnimationState>,
    link: DeepLink,
) {
    animation.update(|a| a.running = false);

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_plate(&link.plate).await {
            Ok(collection) => {
                if let Some(plate) = collection.plate() {
                    let requested = SelectionState {
                        timepoint: link.timepoint,
                        well: link.well,
                        wellsample: link.wellsample,
                        channel: link.channel,
                    };
                    let restored = selection.get_untracked().restored(
                        plate,
                        &requested,
                        RestorePolicy::default(),
                    );
                    selection.set(restored);
                }
                plates.set(PlateState { plates: Some(collection) });
            }
            Err(e) => {
                leptos::logging::warn!("loading plate {} failed: {e}", link.plate);
            }
        }
    });
}

/// Mount the OpenSeadragon surface and keep it in sync with the selection
/// and the scalebar toggle.
#[cfg(feature = "hydrate")]
fn init_viewer_surface(
    plates: RwSignal<PlateState>,
    selection: RwSignal<SelectionState>,
    scalebar: RwSignal<bool>,
    params: Memo<leptos_router::params::ParamsMap>,
) {
    use crate::net::urls::merge_image_url;
    use crate::util::openseadragon;

    let viewer = StoredValue::new_local(None::<openseadragon::Viewer>);

    // Create the viewer once, seeded with the deep-linked image so
    // something shows before the plate fetch resolves. The wildcard
    // segment loses its leading slash in the params map.
    Effect::new(move || {
        if viewer.with_value(Option::is_some) {
            return;
        }
        let Some(image) = params.with(|p| p.get("image")) else {
            return;
        };
        let url = format!("/{image}");
        viewer.set_value(Some(openseadragon::create("viewer-div", &url)));
    });

    // Swap the image layer on every selection change once plate data is
    // available.
    Effect::new(move || {
        let sel = selection.get();
        let url = plates.with(|state| {
            let plate = state.loaded_plate()?;
            let channels = plate.channels(sel.timepoint, &sel.well, sel.wellsample)?;
            Some(merge_image_url(channels, &sel.channel))
        });
        let Some(url) = url else {
            return;
        };
        viewer.with_value(|v| {
            if let Some(v) = v {
                openseadragon::replace_image(v, &url);
            }
        });
    });

    // Scalebar visibility; zero pixels per meter hides the bar.
    // TODO use the actual pixel size of the current image once the API
    // exposes it; 1e6 px/m is a placeholder calibration.
    Effect::new(move || {
        let pixels_per_meter = if scalebar.get() { 1_000_000.0 } else { 0.0 };
        viewer.with_value(|v| {
            if let Some(v) = v {
                openseadragon::set_scalebar(v, pixels_per_meter);
            }
        });
    });
}

#[cfg(not(feature = "hydrate"))]
fn init_viewer_surface(
    _plates: RwSignal<PlateState>,
    _selection: RwSignal<SelectionState>,
    _scalebar: RwSignal<bool>,
    _params: Memo<leptos_router::params::ParamsMap>,
) {
}
