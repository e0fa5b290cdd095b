//! Window-level event wiring. Listeners only write small, independently
//! owned state (pointer cells, key tracker); the frame loops read it.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::effects::KonamiTracker;
use folio_core::normalized_pointer;

use crate::dom;

/// Track the pointer in normalized device coordinates ([-1, 1], y up) for
/// the background scene.
pub fn wire_pointer_tracking(pointer_raw: Rc<RefCell<Vec2>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(w) = web::window() {
            let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            if let Some(p) = normalized_pointer(ev.client_x() as f64, ev.client_y() as f64, vw, vh)
            {
                *pointer_raw.borrow_mut() = p;
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Track the cursor in client pixels for the cursor trail.
pub fn wire_cursor_tracking(cursor: Rc<RefCell<Vec2>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        *cursor.borrow_mut() = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas backing store sized to the viewport across resizes. The
/// surface itself follows on the next frame via `resize_if_needed`.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

const RAINBOW_KEYFRAMES: &str = "@keyframes rainbow { \
    0% { filter: hue-rotate(0deg); } \
    100% { filter: hue-rotate(360deg); } }";

/// Watch for the Konami sequence and celebrate when it lands.
pub fn wire_konami(document: &web::Document) {
    dom::inject_style(document, RAINBOW_KEYFRAMES);
    let doc = document.clone();
    let mut tracker = KonamiTracker::new();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if tracker.push(&ev.key()) {
            show_easter_egg(&doc);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

const EASTER_EGG_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); \
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
    color: white; padding: 3rem; border-radius: 2rem; font-size: 2rem; \
    font-weight: bold; z-index: 10001; text-align: center; \
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);";

fn show_easter_egg(document: &web::Document) {
    let body = match document.body() {
        Some(b) => b,
        None => return,
    };
    let egg = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    dom::set_style(&egg, EASTER_EGG_STYLE);
    egg.set_inner_html(
        "\u{1F389} You found the secret! \u{1F389}<br>\
         <small style=\"font-size: 1rem;\">Thanks for exploring!</small>",
    );
    let _ = body.append_child(&egg);
    let _ = body.style().set_property("animation", "rainbow 2s ease infinite");

    // Tear the celebration down after three seconds.
    let body_done = body.clone();
    let egg_done = egg.clone();
    let cleanup = Closure::wrap(Box::new(move || {
        egg_done.remove();
        let _ = body_done.style().remove_property("animation");
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cleanup.as_ref().unchecked_ref(),
            3_000,
        );
    }
    cleanup.forget();
}
