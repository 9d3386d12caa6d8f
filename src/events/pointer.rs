use crate::constants::CLICK_SLOP_PX;
use crate::input;
use desk_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

/// Page content can sit above the canvas; only events aimed at the canvas
/// itself take part in hit-testing.
fn targets_canvas(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> bool {
    ev.target()
        .map(|t| JsValue::from(t) == *canvas.as_ref())
        .unwrap_or(false)
}

/// Nearest subject under the pointer, owned so the scene can be re-borrowed.
fn pick_owned(scene: &Rc<RefCell<Scene>>, ndc: glam::Vec2) -> Option<String> {
    scene.borrow().pick_ndc(ndc).map(str::to_owned)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        w.pointer.borrow_mut().px = px;
        let ndc = input::pointer_ndc(&ev, &w.canvas);

        let hit = if targets_canvas(&ev, &w.canvas) {
            pick_owned(&w.scene, ndc)
        } else {
            None
        };
        let mut scene = w.scene.borrow_mut();
        scene.set_pointer(ndc);
        if let Err(e) = scene.pointer_over(hit.as_deref()) {
            log::error!("[pointer] hover: {}", e);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let mut ps = w.pointer.borrow_mut();
        ps.down = true;
        ps.down_at = px;
        ps.px = px;
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let (was_down, down_at) = {
            let mut ps = w.pointer.borrow_mut();
            let state = (ps.down, ps.down_at);
            ps.down = false;
            ps.px = px;
            state
        };
        if !was_down || !targets_canvas(&ev, &w.canvas) {
            return;
        }
        if !input::is_click(down_at, px, CLICK_SLOP_PX) {
            return;
        }
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let hit = pick_owned(&w.scene, ndc);
        match &hit {
            Some(id) => log::info!("[click] {}", id),
            None => log::info!("[click] missed all subjects"),
        }
        if let Err(e) = w.scene.borrow_mut().click(hit.as_deref()) {
            log::error!("[click] {}", e);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
