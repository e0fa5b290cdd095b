use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `f` for every element matching `selector`. Nodes that are not
/// elements are skipped.
pub fn for_each_element(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(web::Element),
) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    f(el);
                }
            }
        }
    }
}

/// Keep the canvas backing store in sync with its CSS size, capping the
/// device pixel ratio at 2 to bound fill cost on high-density displays.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Append a `<style>` element with the given CSS to the document head.
pub fn inject_style(document: &web::Document, css: &str) {
    if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }
}

/// Set the inline style text of an element.
#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    let _ = el.set_attribute("style", css);
}

/// Current vertical scroll offset in CSS pixels.
#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
