//! Content sections keyed by focus id: visibility follows the focus state,
//! revealed content is scrolled into view.

use crate::constants::{FOCUS_LOCK_CLASS, REVEALED_CLASS, REVEAL_SCROLL_DELAY_MS};
use desk_core::{FocusRegistry, FocusState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirror the focus state onto the page. Safe to call every frame; class
/// toggles are idempotent.
pub fn apply_focus(document: &web::Document, registry: &FocusRegistry, focus: &FocusState) {
    let revealed = focus.content_revealed();
    for entry in registry.entries() {
        if let Some(el) = document.get_element_by_id(&entry.id) {
            let show = revealed && focus.active_id() == Some(entry.id.as_str());
            _ = el.class_list().toggle_with_force(REVEALED_CLASS, show);
        }
    }
    if let Some(body) = document.body() {
        // Page scrolling stays locked while a subject is framed but not yet opened
        let locked = focus.is_focused() && !revealed;
        _ = body.class_list().toggle_with_force(FOCUS_LOCK_CLASS, locked);
    }
}

pub fn scroll_into_view_later(id: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let id = id.to_string();
    let cb = Closure::once_into_js(move || {
        if let Some(el) = crate::dom::window_document().and_then(|d| d.get_element_by_id(&id)) {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        REVEAL_SCROLL_DELAY_MS,
    );
}

/// Return to the landing view at the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Title of the framed section for the hint line, if any.
pub fn update_hint(document: &web::Document, registry: &FocusRegistry, focus: &FocusState) {
    if let Some(el) = document.get_element_by_id("focus-hint") {
        let text = focus
            .active_id()
            .and_then(|id| registry.entry(id).ok())
            .map(|e| {
                if focus.content_revealed() {
                    e.content.title.to_string()
                } else {
                    format!("{} · press Enter to open", e.content.title)
                }
            })
            .unwrap_or_default();
        el.set_text_content(Some(&text));
    }
}
