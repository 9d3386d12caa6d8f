use crate::constants::{DESK_CENTER, DESK_COLOR, DESK_HALF_EXTENTS, HOVER_BRIGHTEN};
use crate::render::{self, BoxInstance, FrameView};
use crate::{dom, sections};
use desk_core::{FocusEvent, Scene, SceneEvent};
use glam::{Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (width, height) = (self.canvas.width(), self.canvas.height());
        let events = {
            let mut scene = self.scene.borrow_mut();
            scene.set_viewport(width, height);
            scene.tick(dt_sec);
            scene.drain_events()
        };
        self.present(events);

        let scene = self.scene.borrow();
        let boxes = build_boxes(&scene);
        let lights = scene.lights();
        let camera = scene.camera();
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            let view = FrameView {
                view_proj: camera.view_projection(),
                eye: camera.eye,
                boxes: &boxes,
                lights: &lights,
            };
            match g.render(&view) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[frame] surface lost; reconfigure on next resize");
                }
                Err(e) => log::error!("[frame] render error: {:?}", e),
            }
        }
    }

    /// Push the frame's scene events out to the page.
    fn present(&self, events: Vec<SceneEvent>) {
        for ev in events {
            match ev {
                SceneEvent::Cursor(c) => dom::set_body_cursor(&self.document, c.css()),
                SceneEvent::Focus(FocusEvent::Confirm) => {
                    if let Some(id) = self.scene.borrow().focus().active_id() {
                        sections::scroll_into_view_later(id);
                    }
                }
                SceneEvent::Focus(FocusEvent::Reset) => sections::scroll_to_top(),
                SceneEvent::Focus(FocusEvent::Select(id)) => log::debug!("[frame] framed {}", id),
            }
        }

        let mut scene = self.scene.borrow_mut();
        // Pointer parallax holds still while the visitor reads revealed content
        let revealed = scene.focus().content_revealed();
        scene.set_input_frozen(revealed);
        sections::apply_focus(&self.document, scene.registry(), scene.focus());
        sections::update_hint(&self.document, scene.registry(), scene.focus());
    }
}

fn build_boxes(scene: &Scene) -> Vec<BoxInstance> {
    let mut boxes = Vec::with_capacity(scene.objects().len() + 1);
    let desk = scene.group_matrix() * Mat4::from_translation(Vec3::from(DESK_CENTER));
    boxes.push(BoxInstance::new(
        desk,
        Vec3::from(DESK_HALF_EXTENTS),
        DESK_COLOR,
        0.0,
    ));
    for (i, obj) in scene.objects().iter().enumerate() {
        let Some(world) = scene.world_matrix(i) else {
            continue;
        };
        let s = obj.subject();
        let (color, emissive) = if obj.hovered() {
            (s.color.map(|c| (c * HOVER_BRIGHTEN).min(1.0)), 0.15)
        } else {
            (s.color, 0.0)
        };
        boxes.push(BoxInstance::new(world, s.half_extents, color, emissive));
    }
    boxes
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // the surface borrows the canvas for the page's lifetime
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
