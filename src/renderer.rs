use std::collections::HashMap;
use rand::{SeedableRng, rngs::SmallRng};
use three_d::*;

use crate::log; // macro import
use crate::config::Config;
use crate::controls::DampedOrbitControl;
use crate::panel::{self, ControlPanel, Options, PanelStats};
use crate::resize::{DrawSurface, fit_frame};
use crate::scene::{ObjectId, ObjectKind, Scene};
use crate::shapes::IceCream;
use crate::toppings::ToppingManager;
use crate::utils::*;


/// GPU-side mirror of a [Scene]: one mesh per object, keyed by handle
pub struct GpuScene {
    objects: HashMap<ObjectId, Gm<Mesh, ColorMaterial>>,
}
impl GpuScene {
    pub fn new() -> Self {
        Self { objects: HashMap::new() }
    }

    /// Uploads new objects, drops removed ones and refreshes colors
    pub fn sync(&mut self, context: &Context, scene: &Scene) {
        let before = self.objects.len();
        self.objects.retain(|id, _| scene.contains(*id));
        let dropped = before - self.objects.len();

        let mut created = 0;
        for (id, object) in scene.iter() {
            let gm = self.objects.entry(id).or_insert_with(|| {
                created += 1;
                let mut mesh = Mesh::new(context, &object.shape.to_cpu_mesh());
                mesh.set_transformation(object.transformation());
                Gm::new(mesh, ColorMaterial { color: object.color, ..Default::default() })
            });
            gm.material.color = object.color;
        }

        if created > 0 || dropped > 0 {
            log!("GpuScene::sync(): created={}, dropped={}, total={}", created, dropped, self.objects.len());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gm<Mesh, ColorMaterial>> {
        self.objects.values()
    }
}


/// Color and depth textures the scene is drawn into when the pixel ratio is
/// clamped below the device ratio; scaled onto the screen afterwards
struct Offscreen {
    color: Texture2D,
    depth: DepthTexture2D,
}
impl Offscreen {
    fn new(context: &Context, viewport: Viewport) -> Self {
        log!("Offscreen::new(): {}x{}", viewport.width, viewport.height);
        Self {
            color: Texture2D::new_empty::<[u8; 4]>(
                context,
                viewport.width,
                viewport.height,
                Interpolation::Linear,
                Interpolation::Linear,
                None,
                Wrapping::ClampToEdge,
                Wrapping::ClampToEdge,
            ),
            depth: DepthTexture2D::new::<f32>(
                context,
                viewport.width,
                viewport.height,
                Wrapping::ClampToEdge,
                Wrapping::ClampToEdge,
            ),
        }
    }

    fn fits(&self, viewport: Viewport) -> bool {
        self.color.width() == viewport.width && self.color.height() == viewport.height
    }
}


// js_sys::Math::random is only callable on wasm32
#[cfg(target_arch = "wasm32")]
fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn random_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}


fn make_rng(seed: Option<u64>) -> SmallRng {
    let seed = seed.unwrap_or_else(random_seed);
    log!("make_rng(): seed={}", seed);
    SmallRng::seed_from_u64(seed)
}


pub fn main(config: Config) -> Result<(), String> {
    let mut error_flag = false;
    let mut error_msg = String::new();

    let canvas_w = get_canvas_width();
    let canvas_h = get_canvas_height();
    log!("main(): canvas size: {}x{}", canvas_w, canvas_h);

    let window = Window::new(WindowSettings {
        title: config.title.clone(),
        max_size: Some((canvas_w, canvas_h)),
        ..Default::default()
    })
    .map_err(|e| format!("main(): ERROR: could not create a window: {:?}", e))?;

    let context = window.gl();
    log!("main(): OpenGL version: {:?}", context.version());

    let mut surface = DrawSurface::with_max_pixel_ratio(
        canvas_w,
        canvas_h,
        get_device_pixel_ratio(),
        config.max_pixel_ratio,
    );
    let mut camera = Camera::new_perspective(
        window.viewport(),
        vec3(0.0, 0.0, config.camera_distance),
        vec3(0.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        degrees(config.fovy),
        config.z_near,
        config.z_far,
    );
    let mut orbit_control = DampedOrbitControl::new(
        *camera.target(),
        config.min_distance,
        config.max_distance,
        config.enable_damping.then_some(config.damping_factor),
    );

    let options = match parse_hex_color(&config.cream_color) {
        Ok(color) => Options { cream_color: color },
        Err(e) => {
            set_error_for_egui(&mut error_flag, &mut error_msg, e);
            Options::default()
        }
    };
    let mut panel = ControlPanel::new(options);

    let IceCream { mut scene, scoop, .. } = IceCream::new(panel.options.cream_color);
    let mut toppings = ToppingManager::with_sprinkle_count(make_rng(config.seed), config.sprinkle_count);
    let mut gpu_scene = GpuScene::new();

    let mut gui = three_d::GUI::new(&context);
    let mut pointer_over_gui = false;
    let mut fps_ma = IncrementalMA::new(100);
    let mut offscreen: Option<Offscreen> = None;

    window.render_loop(move |mut frame_input| {
        // elapsed_time is the time since the previous frame in ms
        let fps = fps_ma.add(1000.0 / frame_input.elapsed_time);

        let scene_viewport = fit_frame(
            &mut camera,
            &mut surface,
            frame_input.viewport,
            frame_input.device_pixel_ratio as f64,
        );

        let stats = PanelStats {
            fps,
            objects: scene.len(),
            sprinkles: scene.count(ObjectKind::Sprinkle),
            pixel_ratio: surface.pixel_ratio,
        };
        let mut actions = Vec::new();
        gui.update(
            &mut frame_input.events,
            frame_input.accumulated_time,
            frame_input.viewport,
            frame_input.device_pixel_ratio,
            |gui_context| {
                pointer_over_gui = gui_context.is_using_pointer();
                if error_flag {
                    panel::show_error(gui_context, &error_msg);
                }
                actions = panel.show(gui_context, &stats);
            },
        );
        for action in actions {
            panel::apply(action, &mut scene, &mut toppings, scoop);
        }

        if !pointer_over_gui {
            orbit_control.handle_events(&mut camera, &mut frame_input.events);
        }
        orbit_control.update(&mut camera);

        gpu_scene.sync(&context, &scene);

        let clear_state = ClearState::color_and_depth(0.0, 0.0, 0.0, 1.0, 1.0);
        let screen = frame_input.screen();
        if scene_viewport == frame_input.viewport {
            offscreen = None;
            screen.clear(clear_state);
            screen.render(&camera, gpu_scene.iter(), &[]);
        } else {
            // three-d sizes the canvas at the device ratio: draw at the clamped
            // size, then stretch the result over the whole framebuffer
            if !offscreen.as_ref().map_or(false, |o| o.fits(scene_viewport)) {
                offscreen = Some(Offscreen::new(&context, scene_viewport));
            }
            if let Some(target) = offscreen.as_mut() {
                RenderTarget::new(target.color.as_color_target(None), target.depth.as_depth_target())
                    .clear(clear_state)
                    .render(&camera, gpu_scene.iter(), &[]);

                let mut screen_camera = camera.clone();
                screen_camera.set_viewport(frame_input.viewport);
                screen.clear(clear_state);
                screen.apply_screen_effect(
                    &CopyEffect::default(),
                    &screen_camera,
                    &[],
                    Some(ColorTexture::Single(&target.color)),
                    None,
                );
            }
        }
        screen.write(|| gui.render());

        FrameOutput::default()
    });

    Ok(())
}
