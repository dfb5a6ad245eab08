use std::collections::VecDeque;
use wasm_bindgen::prelude::*;
use three_d::Srgba;


#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into());
    }
}

// native builds (tests) have no browser console
#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        eprintln!( $( $t )* );
    }
}


#[wasm_bindgen(module = "/helper.js")]
extern "C" {
    pub fn get_canvas_width() -> u32;
    pub fn get_canvas_height() -> u32;
    pub fn get_device_pixel_ratio() -> f64;
}


/// Enable better error messages if our code ever panics
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}


/// Sets error flag and message for an egui window
#[inline(always)]
pub fn set_error_for_egui(flag: &mut bool, msg: &mut String, s: String) {
    log!("{}", s);
    *flag = true;
    if !msg.is_empty() {
        msg.push('\n');
    }
    *msg += s.as_str();
}


/// Converts a 0xRRGGBB integer to an opaque color
#[inline(always)]
pub const fn srgba_from_hex(hex: u32) -> Srgba {
    Srgba {
        r: ((hex >> 16) & 0xFF) as u8,
        g: ((hex >> 8) & 0xFF) as u8,
        b: (hex & 0xFF) as u8,
        a: 255,
    }
}


/// Parses a CSS-style "#RRGGBB" (or "RRGGBB") string
pub fn parse_hex_color(s: &str) -> Result<Srgba, String> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Err(format!("parse_hex_color(): ERROR: expected 6 hex digits, got {:?}", s));
    }
    u32::from_str_radix(digits, 16)
        .map(srgba_from_hex)
        .map_err(|e| format!("parse_hex_color(): ERROR: {:?} is not a hex color ({})", s, e))
}


/// Formats a color as "#RRGGBB"
pub fn to_hex_string(color: Srgba) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}


/// Moving average over the last `window` samples
pub struct IncrementalMA {
    window: usize,
    samples: VecDeque<f64>,
    sum: f64,
}
impl IncrementalMA {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            samples: VecDeque::with_capacity(window.max(1)),
            sum: 0.0,
        }
    }

    /// Adds a sample and returns the current average
    pub fn add(&mut self, x: f64) -> f64 {
        if !x.is_finite() {
            return self.average();
        }
        if self.samples.len() == self.window {
            if let Some(old) = self.samples.pop_front() {
                self.sum -= old;
            }
        }
        self.samples.push_back(x);
        self.sum += x;
        self.average()
    }

    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum / self.samples.len() as f64
        }
    }
}
