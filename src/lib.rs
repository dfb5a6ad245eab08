use wasm_bindgen::prelude::*;

pub mod utils;
pub mod config;
pub mod scene;
pub mod shapes;
pub mod toppings;
pub mod controls;
pub mod panel;
pub mod resize;
pub mod renderer;


#[wasm_bindgen(start)]
pub fn start() {
    utils::set_panic_hook();
}


#[wasm_bindgen]
pub async fn run() {
    if let Err(e) = renderer::main(config::Config::default()) {
        log!("run(): {}", e);
    }
}
