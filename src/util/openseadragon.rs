//! Extern bindings for the OpenSeadragon pan/zoom widget.
//!
//! The widget is an external collaborator loaded as a page script; only
//! the surface this crate drives is bound: viewer construction,
//! `addSimpleImage`, the world item list, and the scalebar plugin.
//! Requires a browser environment.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    pub type Viewer;
    pub type World;
    pub type TiledImage;

    #[wasm_bindgen(js_name = OpenSeadragon)]
    fn open_seadragon(options: &JsValue) -> Viewer;

    #[wasm_bindgen(method, js_name = addSimpleImage)]
    fn add_simple_image(this: &Viewer, options: &JsValue);

    #[wasm_bindgen(method, getter)]
    fn world(this: &Viewer) -> World;

    #[wasm_bindgen(method)]
    fn scalebar(this: &Viewer, options: &JsValue);

    #[wasm_bindgen(method, js_name = getItemCount)]
    fn get_item_count(this: &World) -> u32;

    #[wasm_bindgen(method, js_name = getItemAt)]
    fn get_item_at(this: &World, index: u32) -> TiledImage;

    #[wasm_bindgen(method, js_name = removeItem)]
    fn remove_item(this: &World, item: &TiledImage);
}

/// Create a viewer inside the element with `element_id`, showing
/// `image_url` as a single non-pyramidal image.
pub fn create(element_id: &str, image_url: &str) -> Viewer {
    let tile_source = js_sys::Object::new();
    set(&tile_source, "type", &JsValue::from_str("image"));
    set(&tile_source, "url", &JsValue::from_str(image_url));
    set(&tile_source, "buildPyramid", &JsValue::FALSE);

    let options = js_sys::Object::new();
    set(&options, "id", &JsValue::from_str(element_id));
    set(&options, "prefixUrl", &JsValue::from_str("/static/openseadragon/images/"));
    set(&options, "animationTime", &JsValue::from_f64(0.5));
    set(&options, "zoomPerSecond", &JsValue::from_f64(1.0));
    set(&options, "zoomPerScroll", &JsValue::from_f64(1.4));
    set(&options, "minZoomImageRatio", &JsValue::from_f64(0.9));
    set(&options, "maxZoomPixelRatio", &JsValue::from_f64(10.0));
    set(&options, "tileSources", &tile_source);

    open_seadragon(&options)
}

/// Show `image_url` in place of whatever the viewer currently displays.
///
/// The new image is added first; once it has loaded, every older layer is
/// removed, leaving only the newest. Replacing in this order avoids a
/// blank frame between images.
pub fn replace_image(viewer: &Viewer, image_url: &str) {
    let options = js_sys::Object::new();
    set(&options, "opacity", &JsValue::from_f64(1.0));
    set(&options, "preload", &JsValue::FALSE);
    set(&options, "type", &JsValue::from_str("image"));
    set(&options, "url", &JsValue::from_str(image_url));
    set(&options, "buildPyramid", &JsValue::FALSE);

    let world = viewer.world();
    let success = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
        while world.get_item_count() > 1 {
            world.remove_item(&world.get_item_at(0));
        }
    });
    set(&options, "success", success.as_ref());
    success.forget();

    viewer.add_simple_image(&options);
}

/// Configure the scalebar plugin. Zero pixels per meter hides the bar.
pub fn set_scalebar(viewer: &Viewer, pixels_per_meter: f64) {
    let options = js_sys::Object::new();
    set(&options, "pixelsPerMeter", &JsValue::from_f64(pixels_per_meter));
    viewer.scalebar(&options);
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}
