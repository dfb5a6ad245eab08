use three_d::{Camera, Viewport};

use crate::config::MAX_PIXEL_RATIO;
use crate::log; // macro import


/// Caps the device pixel ratio to bound GPU cost on high-density displays
#[inline(always)]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64, max: f64) -> f64 {
    device_pixel_ratio.min(max)
}


/// The canvas the renderer draws into, in logical (CSS) pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawSurface {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
    max_pixel_ratio: f64,
}
impl DrawSurface {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self::with_max_pixel_ratio(width, height, device_pixel_ratio, MAX_PIXEL_RATIO)
    }

    pub fn with_max_pixel_ratio(width: u32, height: u32, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio: clamp_pixel_ratio(device_pixel_ratio, max_pixel_ratio),
            max_pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Backing-store size in device pixels
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width as f64 * self.pixel_ratio).round() as u32,
            (self.height as f64 * self.pixel_ratio).round() as u32,
        )
    }

    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.physical_size();
        Viewport::new_at_origo(w.max(1), h.max(1))
    }

    /// True if the host reports a size or pixel ratio different from ours
    pub fn needs_resize(&self, width: u32, height: u32, device_pixel_ratio: f64) -> bool {
        self.width != width
            || self.height != height
            || self.pixel_ratio != clamp_pixel_ratio(device_pixel_ratio, self.max_pixel_ratio)
    }
}


/// Reacts to a viewport size change: camera aspect and projection first,
/// then the draw surface size and its clamped pixel ratio.
pub fn handle_resize(
    camera: &mut Camera,
    surface: &mut DrawSurface,
    width: u32,
    height: u32,
    device_pixel_ratio: f64,
) {
    surface.width = width;
    surface.height = height;
    surface.pixel_ratio = clamp_pixel_ratio(device_pixel_ratio, surface.max_pixel_ratio);
    // set_viewport recomputes the projection from the new aspect ratio
    camera.set_viewport(surface.viewport());
    log!(
        "handle_resize(): surface={}x{}, pixel_ratio={}, aspect={:.3}",
        surface.width,
        surface.height,
        surface.pixel_ratio,
        surface.aspect()
    );
}


/// Per-frame sizing: tracks the host framebuffer and returns the viewport
/// the scene is drawn at. It is `surface.viewport()`, never larger than the
/// framebuffer, and the camera always uses it.
pub fn fit_frame(
    camera: &mut Camera,
    surface: &mut DrawSurface,
    framebuffer: Viewport,
    device_pixel_ratio: f64,
) -> Viewport {
    let dpr = if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
    let width = (framebuffer.width as f64 / dpr).round() as u32;
    let height = (framebuffer.height as f64 / dpr).round() as u32;
    if surface.needs_resize(width, height, dpr) {
        handle_resize(camera, surface, width, height, dpr);
    }

    let viewport = if surface.pixel_ratio >= dpr {
        // unclamped: draw straight into the framebuffer
        Viewport::new_at_origo(framebuffer.width.max(1), framebuffer.height.max(1))
    } else {
        let clamped = surface.viewport();
        Viewport::new_at_origo(
            clamped.width.min(framebuffer.width.max(1)),
            clamped.height.min(framebuffer.height.max(1)),
        )
    };
    if camera.viewport() != viewport {
        camera.set_viewport(viewport);
    }
    viewport
}
