//! Draggable two-pane split layout.

#[cfg(test)]
#[path = "split_pane_test.rs"]
mod split_pane_test;

use leptos::prelude::*;

/// Width for the left pane that keeps the handle centered under the
/// pointer.
pub fn left_pane_width(pointer_x: f64, left_edge: f64, handle_width: f64) -> f64 {
    pointer_x - left_edge - handle_width / 2.0
}

/// Two panes separated by a draggable handle.
///
/// Mouse-down on the handle starts the drag; mouse-up anywhere in the
/// container ends it, so fast drags that leave the handle's hit area still
/// release cleanly. While dragging, the left pane's width follows the
/// pointer.
#[component]
pub fn SplitPane(
    #[prop(into)] left: ViewFn,
    #[prop(into)] right: ViewFn,
) -> impl IntoView {
    let dragging = RwSignal::new(false);
    let left_ref = NodeRef::<leptos::html::Div>::new();
    let handle_ref = NodeRef::<leptos::html::Div>::new();

    let on_mousemove = move |ev: leptos::ev::MouseEvent| {
        if !dragging.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let (Some(left_pane), Some(handle)) =
                (left_ref.get_untracked(), handle_ref.get_untracked())
            {
                let width = left_pane_width(
                    f64::from(ev.page_x()),
                    left_pane.get_bounding_client_rect().left(),
                    handle.get_bounding_client_rect().width(),
                );
                let _ = left_pane
                    .style()
                    .set_property("width", &format!("{width}px"));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            class="split-pane"
            on:mousemove=on_mousemove
            on:mouseup=move |_| dragging.set(false)
        >
            <div class="split-pane__left" node_ref=left_ref>{left.run()}</div>
            <div
                class="split-pane__handle"
                node_ref=handle_ref
                on:mousedown=move |ev| {
                    ev.prevent_default();
                    dragging.set(true);
                }
            ></div>
            <div class="split-pane__right">{right.run()}</div>
        </div>
    }
}
