//! Pointer-follow card tilt and the scroll parallax on the hero visuals.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const TILT_DIVISOR: f64 = 10.0;
const PARALLAX_FACTOR: f64 = 0.5;

/// Tilt `.card-3d` elements toward the pointer while it hovers them.
pub fn wire_card_tilt(document: &web::Document) {
    dom::for_each_element(document, ".card-3d", |el| {
        let card: web::HtmlElement = match el.dyn_into() {
            Ok(c) => c,
            Err(_) => return,
        };

        let card_move = card.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = card_move.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            let center_x = rect.width() / 2.0;
            let center_y = rect.height() / 2.0;
            let rotate_x = (y - center_y) / TILT_DIVISOR;
            let rotate_y = (center_x - x) / TILT_DIVISOR;
            let _ = card_move.style().set_property(
                "transform",
                &format!(
                    "perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) \
                     scale3d(1.05, 1.05, 1.05)"
                ),
            );
        }) as Box<dyn FnMut(_)>);
        let _ = card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();

        let card_leave = card.clone();
        let on_leave = Closure::wrap(Box::new(move || {
            let _ = card_leave.style().set_property(
                "transform",
                "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
            );
        }) as Box<dyn FnMut()>);
        let _ =
            card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    });
}

/// Hero visuals drift at half scroll speed.
pub fn wire_parallax(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let offset = dom::scroll_y() * PARALLAX_FACTOR;
        dom::for_each_element(&doc, ".hero-visual, .floating-card", |el| {
            if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            }
        });
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
