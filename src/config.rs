/// Upper bound for the device pixel ratio used by the draw surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Number of sprinkles generated by every "add sprinkles" action
pub const SPRINKLE_COUNT: usize = 100;

/// Initial scoop color, as shown in the color picker
pub const DEFAULT_CREAM_COLOR: &str = "#FFFACD";

/// Damping factor of the orbit control (fraction of velocity lost per frame)
pub const DEFAULT_DAMPING_FACTOR: f32 = 0.05;


/// Start-up settings of the viewer
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub title: String,
    /// vertical field of view in degrees
    pub fovy: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub camera_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub max_pixel_ratio: f64,
    pub sprinkle_count: usize,
    pub cream_color: String,
    /// fixed seed for sprinkle placement; random when `None`
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Sundae: an ice cream cone in WASM + WebGL".to_string(),
            fovy: 75.0,
            z_near: 0.1,
            z_far: 100.0,
            camera_distance: 5.0,
            min_distance: 1.0,
            max_distance: 50.0,
            enable_damping: true,
            damping_factor: DEFAULT_DAMPING_FACTOR,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            sprinkle_count: SPRINKLE_COUNT,
            cream_color: DEFAULT_CREAM_COLOR.to_string(),
            seed: None,
        }
    }
}
