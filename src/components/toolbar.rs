//! Toolbar: plate-name label and the selector row.
//!
//! Every selector is a view over `SelectionState`; options are rebuilt
//! from the loaded plate's cardinalities whenever a plate loads. The
//! option lists re-render on selection changes too, so the `selected`
//! flags always reflect the canonical state.

use leptos::prelude::*;

use crate::state::animation::{AnimationState, SPEED_MAX, SPEED_MIN};
use crate::state::plate::{PlateObject, PlateState};
use crate::state::selection::{ChannelSelection, SelectionState, channel_options};

/// Full toolbar for the browser page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();

    let plate_label = move || {
        plates.with(|p| {
            p.loaded_plate_name()
                .map_or_else(String::new, |name| format!("Plate: {name}"))
        })
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__plate-name">{plate_label}</span>
            <TimepointControls/>
            <WellSelect/>
            <WellsampleSelect/>
            <ChannelSelect/>
            <AnimateControls/>
        </div>
    }
}

fn timepoint_count(plates: RwSignal<PlateState>) -> u32 {
    plates.with(|p| p.loaded_plate().map_or(0, PlateObject::count_timepoints))
}

/// Timepoint selector plus its mirroring range slider. Both write through
/// the selection, so grid, slider, and any open viewer stay consistent.
#[component]
pub fn TimepointControls() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();

    let count = move || timepoint_count(plates);
    let set_timepoint = move |ev: &leptos::ev::Event| {
        if let Ok(value) = event_target_value(ev).parse::<u32>() {
            selection.update(|s| s.timepoint = value);
        }
    };

    view! {
        <label class="toolbar__field">
            "Timepoint"
            <select
                class="toolbar__select"
                on:change=move |ev| set_timepoint(&ev)
            >
                {move || {
                    let current = selection.get().timepoint;
                    (1..=count())
                        .map(|n| {
                            view! {
                                <option value=n.to_string() selected=n == current>
                                    {n}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
        <input
            class="toolbar__slider"
            type="range"
            min="1"
            prop:max=move || count().max(1).to_string()
            prop:value=move || selection.get().timepoint.to_string()
            prop:disabled=move || count() <= 1
            on:input=move |ev| set_timepoint(&ev)
        />
    }
}

/// Well selector, populated from the first timepoint's wells.
#[component]
pub fn WellSelect() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();

    view! {
        <label class="toolbar__field">
            "Well"
            <select
                class="toolbar__select"
                on:change=move |ev| {
                    selection.update(|s| s.well = event_target_value(&ev));
                }
            >
                {move || {
                    let current = selection.get().well;
                    plates
                        .with(PlateState::loaded_plate_wells)
                        .into_iter()
                        .map(|well| {
                            let selected = well == current;
                            view! {
                                <option value=well.clone() selected=selected>
                                    {well.clone()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}

/// Wellsample selector, one option per field of view.
#[component]
pub fn WellsampleSelect() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();

    let count =
        move || plates.with(|p| p.loaded_plate().map_or(0, PlateObject::count_wellsamples));

    view! {
        <label class="toolbar__field">
            "Site"
            <select
                class="toolbar__select"
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                        selection.update(|s| s.wellsample = value);
                    }
                }
            >
                {move || {
                    let current = selection.get().wellsample;
                    (1..=count())
                        .map(|n| {
                            view! {
                                <option value=n.to_string() selected=n == current>
                                    {n}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}

/// Channel selector: merge shortcut first, then individual channels.
#[component]
pub fn ChannelSelect() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();

    view! {
        <label class="toolbar__field">
            "Channel"
            <select
                class="toolbar__select"
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<ChannelSelection>() {
                        selection.update(|s| s.channel = value);
                    }
                }
            >
                {move || {
                    let current = selection.get().channel;
                    let n = plates
                        .with(|p| p.loaded_plate().map_or(0, PlateObject::count_channels));
                    channel_options(n)
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.to_string()
                                    selected=option == current
                                >
                                    {option.to_string()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}

/// Animation checkbox and speed selector.
///
/// Checking while idle starts the interval (re-entry guarded on the
/// running flag); unchecking stops it. A speed change while running
/// restarts the interval through the driver effect.
#[component]
pub fn AnimateControls() -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let animation = expect_context::<RwSignal<AnimationState>>();

    let count = move || timepoint_count(plates);

    view! {
        <label class="toolbar__field toolbar__field--animate">
            "Animate"
            <input
                type="checkbox"
                prop:checked=move || animation.get().running
                prop:disabled=move || count() <= 1
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    animation.update(|a| {
                        if checked {
                            if !a.running {
                                a.running = true;
                            }
                        } else {
                            a.running = false;
                        }
                    });
                }
            />
        </label>
        <label class="toolbar__field">
            "Speed"
            <select
                class="toolbar__select"
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                        animation.update(|a| a.speed = value);
                    }
                }
            >
                {move || {
                    let current = animation.get().speed;
                    (SPEED_MIN..=SPEED_MAX)
                        .map(|n| {
                            view! {
                                <option value=n.to_string() selected=n == current>
                                    {n}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
