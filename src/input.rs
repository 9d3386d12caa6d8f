use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Last position in canvas backing-store pixels.
    pub px: Vec2,
    pub down: bool,
    /// Where the current press started; used to tell clicks from drags.
    pub down_at: Vec2,
}

/// Canvas pixels to normalized device coordinates (x right, y up, \[-1, 1\]).
#[inline]
pub fn px_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    let x = (2.0 * px.x / w) - 1.0;
    let y = 1.0 - (2.0 * px.y / h);
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Whether a press/release pair stayed close enough to count as a click.
#[inline]
pub fn is_click(down_at: Vec2, up_at: Vec2, slop_px: f32) -> bool {
    down_at.distance(up_at) <= slop_px
}

/// Registration index for digit keys "1".."9".
#[inline]
pub fn focus_index_for_digit(key: &str) -> Option<usize> {
    match key {
        "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            key.parse::<usize>().ok().map(|d| d - 1)
        }
        _ => None,
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let rw = (rect.width() as f32).max(1.0);
    let rh = (rect.height() as f32).max(1.0);
    let sx = (x_css / rw) * canvas.width() as f32;
    let sy = (y_css / rh) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let px = pointer_canvas_px(ev, canvas);
    px_to_ndc(px, canvas.width() as f32, canvas.height() as f32)
}
