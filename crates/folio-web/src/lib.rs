#![cfg(target_arch = "wasm32")]

//! Browser entry point. Wires the static page behavior (theme, navigation,
//! reveal observers, card tilt, konami) and starts two animation loops: the
//! page effects loop and, when a canvas and WebGPU are available, the 3D
//! background loop.

use std::cell::RefCell;

use anyhow::{anyhow, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod dom;
mod events;
mod nav;
mod page;
mod raf;
mod render;
mod reveal;
mod shaders;
mod theme;
mod tilt;

thread_local! {
    static LOOPS: RefCell<Vec<raf::RafHandle>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init failed: {e:?}");
        }
    });
}

/// Cancel every running animation loop. Lets the host page tear the module
/// down without leaking scheduled frames.
#[wasm_bindgen]
pub fn shutdown() {
    LOOPS.with(|loops| {
        for handle in loops.borrow_mut().drain(..) {
            handle.cancel();
        }
    });
    log::info!("animation loops stopped");
}

async fn init() -> Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    theme::init(&document);
    nav::wire(&document);
    tilt::wire_card_tilt(&document);
    tilt::wire_parallax(&document);
    events::wire_konami(&document);

    let page_loop = page::start(&document);
    LOOPS.with(|loops| loops.borrow_mut().push(page_loop));

    match background::start(&document).await {
        Some(handle) => LOOPS.with(|loops| loops.borrow_mut().push(handle)),
        None => log::warn!("3D background unavailable, page effects continue without it"),
    }

    log::info!("page initialized");
    Ok(())
}
