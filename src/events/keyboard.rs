use crate::input::focus_index_for_digit;
use desk_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_in_form(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<Scene>>) {
    if typing_in_form(ev) {
        return;
    }
    let key = ev.key();
    if let Some(n) = focus_index_for_digit(&key) {
        let id = scene.borrow().registry().nth(n).map(|e| e.id.clone());
        if let Some(id) = id {
            if let Err(e) = scene.borrow_mut().select(&id) {
                log::error!("[keys] {}", e);
            }
        }
        return;
    }
    match key.as_str() {
        "Escape" => {
            scene.borrow_mut().reset();
        }
        "Enter" => {
            if scene.borrow_mut().confirm() {
                ev.prevent_default();
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
