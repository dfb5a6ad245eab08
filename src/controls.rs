use three_d::*;


/// Pending motion below this is dropped
pub const REST_EPSILON: f32 = 1.0e-4;


/// Inertia integrator: input accumulates, each frame releases a fraction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damping {
    pending: Vec2,
    factor: f32,
}
impl Damping {
    pub fn new(factor: f32) -> Self {
        Self {
            pending: Vec2::zero(),
            factor: factor.clamp(0.0, 1.0),
        }
    }

    pub fn push(&mut self, delta: Vec2) {
        self.pending += delta;
    }

    /// Motion to apply this frame; the remainder decays geometrically
    pub fn step(&mut self) -> Vec2 {
        let out = self.pending * self.factor;
        self.pending -= out;
        if self.pending.magnitude() < REST_EPSILON {
            self.pending = Vec2::zero();
        }
        out
    }

    pub fn is_at_rest(&self) -> bool {
        self.pending == Vec2::zero()
    }
}


/// Orbit control with inertia, modeled after three_d::OrbitControl.
///
/// Left drag orbits around the target, scroll zooms, right drag pans the
/// target. With damping on, orbit and zoom input keep easing out over the
/// following frames, so [DampedOrbitControl::update] must run every frame.
pub struct DampedOrbitControl {
    target: Vec3,
    min_distance: f32,
    max_distance: f32,
    rotate: Option<Damping>,
    zoom: Option<Damping>,
}
impl DampedOrbitControl {
    /// `damping_factor` of `None` applies input immediately
    pub fn new(target: Vec3, min_distance: f32, max_distance: f32, damping_factor: Option<f32>) -> Self {
        Self {
            target,
            min_distance,
            max_distance,
            rotate: damping_factor.map(Damping::new),
            zoom: damping_factor.map(Damping::new),
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    fn speed(&self, camera: &Camera) -> f32 {
        0.01 * self.target.distance(*camera.position()) + 0.001
    }

    /// Orbits by a drag of `(dx, dy)` pixels
    pub fn orbit(&mut self, camera: &mut Camera, dx: f32, dy: f32) {
        let speed = self.speed(camera);
        let delta = vec2(dx, dy) * speed;
        match self.rotate.as_mut() {
            Some(d) => d.push(delta),
            None => camera.rotate_around_with_fixed_up(&self.target, delta.x, delta.y),
        }
    }

    /// Zooms by a scroll of `amount` pixels
    pub fn zoom(&mut self, camera: &mut Camera, amount: f32) {
        let speed = 0.1 * self.speed(camera);
        let delta = amount * speed;
        match self.zoom.as_mut() {
            Some(d) => d.push(vec2(delta, 0.0)),
            None => camera.zoom_towards(&self.target, delta, self.min_distance, self.max_distance),
        }
    }

    /// Moves camera and target together by a drag of `(dx, dy)` pixels
    pub fn pan(&mut self, camera: &mut Camera, dx: f32, dy: f32) {
        let speed = self.speed(camera) * 0.1;
        let right = camera.right_direction();
        let up = right.cross(camera.view_direction());
        let change = -right * dx * speed + up * dy * speed;
        camera.translate(&change);
        self.target += change;
    }

    /// Feeds the frame's input events; returns true if any was consumed
    pub fn handle_events(&mut self, camera: &mut Camera, events: &mut [Event]) -> bool {
        let mut change = false;
        for event in events.iter_mut() {
            match event {
                Event::MouseMotion { delta, button, handled, .. } => {
                    if *handled {
                        continue;
                    }
                    match button {
                        Some(MouseButton::Left) => {
                            self.orbit(camera, delta.0, delta.1);
                            *handled = true;
                            change = true;
                        }
                        Some(MouseButton::Right) => {
                            self.pan(camera, delta.0, delta.1);
                            *handled = true;
                            change = true;
                        }
                        _ => {}
                    }
                }
                Event::MouseWheel { delta, handled, .. } => {
                    if !*handled {
                        self.zoom(camera, delta.1);
                        *handled = true;
                        change = true;
                    }
                }
                _ => {}
            }
        }
        change
    }

    /// Advances the damping integration by one frame
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let mut change = false;
        if let Some(d) = self.rotate.as_mut() {
            if !d.is_at_rest() {
                let step = d.step();
                camera.rotate_around_with_fixed_up(&self.target, step.x, step.y);
                change = true;
            }
        }
        if let Some(d) = self.zoom.as_mut() {
            if !d.is_at_rest() {
                let step = d.step();
                camera.zoom_towards(&self.target, step.x, self.min_distance, self.max_distance);
                change = true;
            }
        }
        change
    }
}
