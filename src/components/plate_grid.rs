//! Well-grid renderer: an 8x12 table of canvas thumbnails.

use leptos::prelude::*;

use crate::net::urls::{merge_image_url, merge_thumb_url, viewer_url};
use crate::state::plate::{GRID_COLS, GRID_ROWS, PlateState, well_name};
use crate::state::selection::SelectionState;

/// Fixed 8x12 plate grid (rows A-H, columns 1-12) with row and column
/// header cells. Other plate formats are unsupported.
///
/// The grid is created from scratch whenever a new plate loads (the parent
/// keys it on the plate name); within one plate each well keeps a single
/// canvas that is repainted in place, which is what makes timepoint
/// animation render as smooth frame updates instead of a rebuild.
#[component]
pub fn PlateGrid() -> impl IntoView {
    view! {
        <table class="plate-grid">
            <tr>
                <td class="plate-grid__header"></td>
                {(1..=GRID_COLS)
                    .map(|col| {
                        view! {
                            <td class="plate-grid__header">{format!("{col:02}")}</td>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tr>
            {(0..GRID_ROWS)
                .map(|row| {
                    view! {
                        <tr>
                            <td class="plate-grid__header">
                                {well_name(row, 1)[..1].to_owned()}
                            </td>
                            {(1..=GRID_COLS)
                                .map(|col| {
                                    view! {
                                        <td class="plate-grid__cell">
                                            <WellCell well=well_name(row, col)/>
                                        </td>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tr>
                    }
                })
                .collect::<Vec<_>>()}
        </table>
    }
}

/// One well's canvas thumbnail.
///
/// An effect repaints the canvas whenever the selection or the loaded
/// plate changes and the well has an image at the current
/// timepoint/wellsample; wells absent from the current timepoint keep
/// their last frame. Image loads complete asynchronously, so paint order
/// across wells is unspecified. Clicking opens the full-resolution viewer
/// in a new browsing context.
#[component]
fn WellCell(well: String) -> impl IntoView {
    let plates = expect_context::<RwSignal<PlateState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let paint_well = well.clone();
    Effect::new(move || {
        let sel = selection.get();
        let url = plates.with(|state| {
            let plate = state.loaded_plate()?;
            let channels = plate.channels(sel.timepoint, &paint_well, sel.wellsample)?;
            Some(merge_thumb_url(channels, &sel.channel))
        });
        let Some(url) = url else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            if let Some(canvas) = canvas_ref.get() {
                paint_thumbnail(&canvas, &url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    });

    let on_click = move |_| {
        let sel = selection.get_untracked();
        let target = plates.with_untracked(|state| {
            let plate = state.loaded_plate()?;
            let name = state.loaded_plate_name()?;
            let channels = plate.channels(sel.timepoint, &well, sel.wellsample)?;
            let image = merge_image_url(channels, &sel.channel);
            Some(viewer_url(name, &sel, &well, &image))
        });
        let Some(target) = target else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url(&target);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    };

    view! {
        <canvas
            class="well-canvas"
            width="100"
            height="100"
            node_ref=canvas_ref
            on:click=on_click
        ></canvas>
    }
}

/// Draw the image behind `url` onto the canvas once it has decoded.
#[cfg(feature = "hydrate")]
fn paint_thumbnail(canvas: &web_sys::HtmlCanvasElement, url: &str) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let Ok(image) = web_sys::HtmlImageElement::new() else {
        return;
    };

    let draw_target = image.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        let _ = context.draw_image_with_html_image_element(&draw_target, 0.0, 0.0);
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    // The closure must outlive the image decode; leaked like any
    // long-lived JS event handler.
    onload.forget();

    image.set_src(url);
}
