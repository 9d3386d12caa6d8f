use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to every element carrying `attr`; the handler gets
/// the attribute's value.
pub fn add_click_listeners_by_attr(
    document: &web::Document,
    attr: &str,
    handler: impl Fn(String) + Clone + 'static,
) {
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", attr)) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let value = el.get_attribute(attr).unwrap_or_default();
        let handler = handler.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            handler(value.clone());
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, 2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn set_body_cursor(document: &web::Document, cursor: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("cursor", cursor);
    }
}
