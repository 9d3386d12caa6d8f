use crate::constants::{CONFIRM_ATTR, FOCUS_ATTR, RESET_ATTR};
use crate::dom;
use desk_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Navigation links and buttons declared in markup:
/// `data-focus="<id>"` frames a subject, `data-confirm` opens its content,
/// `data-reset` returns to the desk.
pub fn wire_nav_links(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let s = scene.clone();
    dom::add_click_listeners_by_attr(document, FOCUS_ATTR, move |id| {
        if let Err(e) = s.borrow_mut().select(&id) {
            log::warn!("[nav] {}", e);
        }
    });

    let s = scene.clone();
    dom::add_click_listeners_by_attr(document, CONFIRM_ATTR, move |_| {
        s.borrow_mut().confirm();
    });

    dom::add_click_listeners_by_attr(document, RESET_ATTR, move |_| {
        scene.borrow_mut().reset();
    });
}
