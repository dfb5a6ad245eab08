use std::f32::consts::{PI, TAU};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use three_d::prelude::*;
use three_d::Srgba;

use crate::log; // macro import
use crate::config::SPRINKLE_COUNT;
use crate::scene::{ObjectId, Scene, SceneObject};
use crate::shapes;
use crate::utils::srgba_from_hex;


pub const SPRINKLE_PALETTE: [Srgba; 5] = [
    srgba_from_hex(0xFF6347), // tomato
    srgba_from_hex(0xFFD700), // gold
    srgba_from_hex(0x00FA9A), // spring green
    srgba_from_hex(0x8A2BE2), // blue violet
    srgba_from_hex(0xFF69B4), // hot pink
];
pub const SPRINKLE_MIN_RADIUS: f32 = 0.7;
pub const SPRINKLE_MAX_RADIUS: f32 = 1.0;
pub const SPRINKLE_MIN_HEIGHT: f32 = 1.7;
pub const SPRINKLE_MAX_HEIGHT: f32 = 2.0;


/// Picks a sprinkle color uniformly from [SPRINKLE_PALETTE]
pub fn random_sprinkle_color<R: Rng>(rng: &mut R) -> Srgba {
    SPRINKLE_PALETTE[rng.gen_range(0..SPRINKLE_PALETTE.len())]
}


/// A sprinkle scattered in a ring band around the vertical axis
pub fn random_sprinkle<R: Rng>(rng: &mut R) -> SceneObject {
    let color = random_sprinkle_color(rng);
    let angle = rng.gen_range(0.0..TAU);
    let radius = rng.gen_range(SPRINKLE_MIN_RADIUS..=SPRINKLE_MAX_RADIUS);
    let height = rng.gen_range(SPRINKLE_MIN_HEIGHT..=SPRINKLE_MAX_HEIGHT);
    let tilt = rng.gen_range(0.0..PI);

    shapes::sprinkle(color)
        .with_position(vec3(radius*angle.cos(), height, radius*angle.sin()))
        .with_rotation(vec3(0.0, 0.0, tilt))
}


/// Owns the decorative objects (cherry, sprinkles) placed on the scoop.
///
/// The manager only remembers handles; the objects themselves live in the
/// [Scene]. [ToppingManager::remove_toppings] takes the objects out of the
/// scene but keeps the handles, so the next add still replaces them.
/// Removing a stale handle is a no-op on the scene.
pub struct ToppingManager {
    cherry: Option<ObjectId>,
    sprinkles: Option<Vec<ObjectId>>,
    sprinkle_count: usize,
    rng: SmallRng,
}
impl ToppingManager {
    pub fn new(rng: SmallRng) -> Self {
        Self::with_sprinkle_count(rng, SPRINKLE_COUNT)
    }

    pub fn with_sprinkle_count(rng: SmallRng, sprinkle_count: usize) -> Self {
        Self {
            cherry: None,
            sprinkles: None,
            sprinkle_count,
            rng,
        }
    }

    /// Deterministic manager, used when a seed is configured
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Handle of the last cherry added (possibly already removed)
    pub fn cherry(&self) -> Option<ObjectId> {
        self.cherry
    }

    /// Handles of the last sprinkle batch (possibly already removed)
    pub fn sprinkles(&self) -> Option<&[ObjectId]> {
        self.sprinkles.as_deref()
    }

    /// Replaces the cherry with a new one
    pub fn add_cherry(&mut self, scene: &mut Scene) -> ObjectId {
        if let Some(id) = self.cherry.take() {
            scene.remove(id);
        }
        let id = scene.add(shapes::cherry());
        self.cherry = Some(id);
        log!("ToppingManager::add_cherry(): cherry={:?}", id);
        id
    }

    /// Replaces the whole sprinkle batch with a freshly randomized one
    pub fn add_sprinkles(&mut self, scene: &mut Scene) -> &[ObjectId] {
        if let Some(old) = self.sprinkles.take() {
            old.into_iter().for_each(|id| { scene.remove(id); });
        }

        let rng = &mut self.rng;
        let batch: Vec<ObjectId> = (0..self.sprinkle_count)
            .map(|_| scene.add(random_sprinkle(rng)))
            .collect();
        log!("ToppingManager::add_sprinkles(): sprinkles={}", batch.len());

        self.sprinkles.insert(batch).as_slice()
    }

    /// Takes every topping out of the scene, leaving the static model
    pub fn remove_toppings(&mut self, scene: &mut Scene) {
        if let Some(id) = self.cherry {
            scene.remove(id);
        }
        if let Some(sprinkles) = self.sprinkles.as_ref() {
            sprinkles.iter().for_each(|id| { scene.remove(*id); });
        }
        log!("ToppingManager::remove_toppings(): scene.len()={}", scene.len());
    }
}
