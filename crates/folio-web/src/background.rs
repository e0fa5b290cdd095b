//! The decorative 3D background: one context object owning the scene, the
//! pointer cell shared with the event layer, and the GPU state, advanced by
//! a dedicated requestAnimationFrame loop.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::Scene;

use crate::events;
use crate::raf;
use crate::render;

pub struct BackgroundContext {
    scene: Scene,
    pointer_raw: Rc<RefCell<Vec2>>,
    canvas: web::HtmlCanvasElement,
    gpu: Option<render::GpuState>,
}

impl BackgroundContext {
    fn frame(&mut self) {
        self.scene.pointer.raw = *self.pointer_raw.borrow();

        let width = self.canvas.width();
        let height = self.canvas.height();
        if height > 0 {
            self.scene.camera.aspect = width as f32 / height as f32;
        }

        self.scene.step();

        let mut lost_surface = false;
        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(width, height);
            match gpu.render(&self.scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    gpu.reconfigure();
                }
                Err(e) => {
                    log::warn!("background surface unavailable, rendering stopped: {:?}", e);
                    lost_surface = true;
                }
            }
        }
        if lost_surface {
            self.gpu = None;
        }
    }
}

/// Start the background loop. Returns `None` without scheduling any frame
/// when the canvas is absent or WebGPU is unavailable; the rest of the page
/// is unaffected either way.
pub async fn start(document: &web::Document) -> Option<raf::RafHandle> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("background-canvas")?
        .dyn_into()
        .ok()?;

    events::wire_canvas_resize(&canvas);

    let pointer_raw = Rc::new(RefCell::new(Vec2::ZERO));
    events::wire_pointer_tracking(pointer_raw.clone());

    let mut rng = StdRng::from_entropy();
    let scene = Scene::new(&mut rng);

    let gpu = match render::GpuState::new(&canvas, &scene).await {
        Ok(g) => g,
        Err(e) => {
            log::warn!("WebGPU init failed, background disabled: {:?}", e);
            return None;
        }
    };
    log::info!(
        "background started: {} particles, {} shapes",
        scene.cloud.len(),
        scene.shapes.len()
    );

    let ctx = Rc::new(RefCell::new(BackgroundContext {
        scene,
        pointer_raw,
        canvas,
        gpu: Some(gpu),
    }));
    Some(raf::start_loop(move || ctx.borrow_mut().frame()))
}
