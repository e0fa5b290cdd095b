//! Frame-driven page effects: the hero typing effect, animated stat
//! counters, and the cursor trail. One loop drives all three; observers and
//! listeners only queue work for it.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::constants::{TRAIL_LEN, TRAIL_MIN_VIEWPORT_WIDTH};
use folio_core::effects::{CursorTrail, StatCounter, TypingEffect};

use crate::dom;
use crate::events;
use crate::raf;
use crate::reveal;

const TYPED_PHRASES: [&str; 4] = [
    "AI/ML Developer",
    "Full-Stack Engineer",
    "Deep Learning Enthusiast",
    "Problem Solver",
];

const TRAIL_COLORS: [&str; 4] = ["#667eea", "#764ba2", "#f093fb", "#8b5cf6"];

const TRAIL_DOT_STYLE: &str = "position: fixed; width: 8px; height: 8px; \
    border-radius: 50%; pointer-events: none; z-index: 9999; \
    transition: all 0.3s ease; opacity: 0;";

/// A counter whose element has entered the viewport and is animating.
pub struct ActiveCounter {
    pub counter: StatCounter,
    pub element: web::Element,
}

struct TrailDots {
    trail: CursorTrail,
    dots: Vec<web::HtmlElement>,
}

pub struct PageContext {
    typing: TypingEffect,
    typed_el: Option<web::Element>,
    counters: Rc<RefCell<Vec<ActiveCounter>>>,
    trail: Option<TrailDots>,
    cursor: Rc<RefCell<Vec2>>,
    last_instant: Instant,
}

impl PageContext {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(el) = &self.typed_el {
            if self.typing.tick(dt) {
                el.set_text_content(Some(self.typing.text()));
            }
        }

        {
            let mut counters = self.counters.borrow_mut();
            for active in counters.iter_mut() {
                active.counter.tick();
                active.element.set_text_content(Some(&active.counter.display()));
            }
            // Finished counters have written their final value; drop them so
            // the frame loop only touches counters still animating.
            counters.retain(|active| !active.counter.done());
        }

        if let Some(t) = &mut self.trail {
            t.trail.update(*self.cursor.borrow());
            for (i, dot) in t.dots.iter().enumerate() {
                let p = t.trail.points()[i];
                let style = dot.style();
                let _ = style.set_property("left", &format!("{}px", p.x - 4.0));
                let _ = style.set_property("top", &format!("{}px", p.y - 4.0));
                let _ = style.set_property("opacity", &CursorTrail::opacity(i).to_string());
                let _ = style.set_property("background", TRAIL_COLORS[i % TRAIL_COLORS.len()]);
            }
        }
    }
}

pub fn start(document: &web::Document) -> raf::RafHandle {
    let typed_el = document.get_element_by_id("typed-text");
    let typing = TypingEffect::new(TYPED_PHRASES.iter().map(|s| s.to_string()).collect());

    let counters: Rc<RefCell<Vec<ActiveCounter>>> = Rc::new(RefCell::new(Vec::new()));
    reveal::wire(document, counters.clone());

    let cursor = Rc::new(RefCell::new(Vec2::ZERO));
    let trail = build_trail(document);
    if trail.is_some() {
        events::wire_cursor_tracking(cursor.clone());
    }

    let ctx = Rc::new(RefCell::new(PageContext {
        typing,
        typed_el,
        counters,
        trail,
        cursor,
        last_instant: Instant::now(),
    }));
    raf::start_loop(move || ctx.borrow_mut().frame())
}

/// Create the trail dots; desktop-width viewports only.
fn build_trail(document: &web::Document) -> Option<TrailDots> {
    let window = web::window()?;
    let viewport_w = window.inner_width().ok()?.as_f64()?;
    if viewport_w <= TRAIL_MIN_VIEWPORT_WIDTH {
        return None;
    }
    let body = document.body()?;
    let mut dots = Vec::with_capacity(TRAIL_LEN);
    for _ in 0..TRAIL_LEN {
        let el = document.create_element("div").ok()?;
        el.set_class_name("cursor-dot");
        dom::set_style(&el, TRAIL_DOT_STYLE);
        body.append_child(&el).ok()?;
        dots.push(el.dyn_into::<web::HtmlElement>().ok()?);
    }
    Some(TrailDots {
        trail: CursorTrail::new(),
        dots,
    })
}
