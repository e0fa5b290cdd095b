//! IntersectionObserver wiring: scroll-reveal classes and stat counter
//! activation. Observers fire off the main scroll path, so neither effect
//! costs anything per scroll event.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use folio_core::effects::StatCounter;

use crate::dom;
use crate::page::ActiveCounter;

pub fn wire(document: &web::Document, counters: Rc<RefCell<Vec<ActiveCounter>>>) {
    wire_scroll_reveal(document);
    wire_counters(document, counters);
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Elements tagged `data-aos` get the `aos-animate` class the first time
/// they scroll into view; the CSS transition does the rest.
fn wire_scroll_reveal(document: &web::Document) {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("aos-animate");
                }
            }
        },
    ));

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -100px 0px");
    if let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        dom::for_each_element(document, "[data-aos]", |el| observer.observe(&el));
    }
    callback.forget();
}

/// When a `.stat-number` element becomes half visible, queue a counter for
/// the page frame loop. The `counted` class guards against re-triggering.
fn wire_counters(document: &web::Document, counters: Rc<RefCell<Vec<ActiveCounter>>>) {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                let classes = el.class_list();
                if classes.contains("counted") {
                    continue;
                }
                let _ = classes.add_1("counted");
                let target = el
                    .get_attribute("data-target")
                    .and_then(|t| t.parse::<f64>().ok())
                    .unwrap_or(0.0);
                counters.borrow_mut().push(ActiveCounter {
                    counter: StatCounter::new(target),
                    element: el,
                });
            }
        },
    ));

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.5));
    if let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        dom::for_each_element(document, ".stat-number", |el| observer.observe(&el));
    }
    callback.forget();
}
