//! Navigation behavior: the scrolled navbar state, scroll-spy over page
//! sections, smooth-scrolling nav links, and the mobile hamburger menu.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const NAVBAR_SCROLLED_AT: f64 = 100.0;
const SCROLL_SPY_OFFSET: f64 = 100.0;
const NAV_LINK_OFFSET: f64 = 80.0;

pub fn wire(document: &web::Document) {
    wire_navbar_scroll(document);
    wire_scroll_spy(document);
    wire_nav_links(document);
    wire_mobile_menu(document);
}

fn on_window_scroll(handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_navbar_scroll(document: &web::Document) {
    let navbar = match document.get_element_by_id("navbar") {
        Some(el) => el,
        None => return,
    };
    on_window_scroll(move || {
        let classes = navbar.class_list();
        if dom::scroll_y() > NAVBAR_SCROLLED_AT {
            let _ = classes.add_1("scrolled");
        } else {
            let _ = classes.remove_1("scrolled");
        }
    });
}

/// Highlight the nav link whose section currently contains the scroll
/// position. When no section matches (above the first, between gaps), the
/// previous highlight is kept.
fn wire_scroll_spy(document: &web::Document) {
    let doc = document.clone();
    on_window_scroll(move || {
        let y = dom::scroll_y();
        let mut current: Option<String> = None;
        dom::for_each_element(&doc, "section[id]", |el| {
            if let (Some(id), Ok(section)) =
                (el.get_attribute("id"), el.dyn_into::<web::HtmlElement>())
            {
                let top = section.offset_top() as f64 - SCROLL_SPY_OFFSET;
                let height = section.offset_height() as f64;
                if y > top && y <= top + height {
                    current = Some(id);
                }
            }
        });
        if let Some(id) = current {
            set_active_link(&doc, &format!("#{id}"));
        }
    });
}

fn set_active_link(document: &web::Document, href: &str) {
    dom::for_each_element(document, ".nav-link", |el| {
        let classes = el.class_list();
        if el.get_attribute("href").as_deref() == Some(href) {
            let _ = classes.add_1("active");
        } else {
            let _ = classes.remove_1("active");
        }
    });
}

/// Nav links scroll smoothly to their section, stopping short of the fixed
/// navbar, and close the mobile menu if it is open.
fn wire_nav_links(document: &web::Document) {
    let doc = document.clone();
    dom::for_each_element(document, ".nav-link", move |link| {
        let doc = doc.clone();
        let link_captured = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let href = match link_captured.get_attribute("href") {
                Some(h) => h,
                None => return,
            };
            let section = match doc.query_selector(&href) {
                Ok(Some(el)) => el,
                _ => return,
            };
            if let Ok(section) = section.dyn_into::<web::HtmlElement>() {
                if let Some(w) = web::window() {
                    let opts = web::ScrollToOptions::new();
                    opts.set_top(section.offset_top() as f64 - NAV_LINK_OFFSET);
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    w.scroll_to_with_scroll_to_options(&opts);
                }
                set_active_link(&doc, &href);
                close_mobile_menu(&doc);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    });
}

fn close_mobile_menu(document: &web::Document) {
    for id in ["nav-menu", "hamburger"] {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().remove_1("active");
        }
    }
}

/// The hamburger toggles the mobile menu; a click anywhere outside both
/// closes it.
fn wire_mobile_menu(document: &web::Document) {
    let hamburger = match document.get_element_by_id("hamburger") {
        Some(el) => el,
        None => return,
    };
    let menu = match document.get_element_by_id("nav-menu") {
        Some(el) => el,
        None => return,
    };

    let hamburger_toggle = hamburger.clone();
    let menu_toggle = menu.clone();
    let toggle = Closure::wrap(Box::new(move || {
        let _ = hamburger_toggle.class_list().toggle("active");
        let _ = menu_toggle.class_list().toggle("active");
    }) as Box<dyn FnMut()>);
    let _ = hamburger.add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref());
    toggle.forget();

    let doc = document.clone();
    let outside = Closure::wrap(Box::new(move |ev: web::Event| {
        let node: web::Node = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(n) => n,
            None => return,
        };
        if !hamburger.contains(Some(&node)) && !menu.contains(Some(&node)) {
            close_mobile_menu(&doc);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("click", outside.as_ref().unchecked_ref());
    outside.forget();
}
