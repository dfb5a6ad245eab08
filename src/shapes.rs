//! Geometry of the ice cream model.
//!
//! three-d's unit primitives are aligned with the x axis and start at the
//! origin, while the model is built from y-aligned shapes centered on the
//! origin. [Shape::local_transformation] maps one onto the other.

use std::f32::consts::{FRAC_PI_2, PI};
use three_d::prelude::*;
use three_d::{CpuMesh, Srgba};

use crate::scene::{ObjectId, ObjectKind, Scene, SceneObject};
use crate::utils::srgba_from_hex;


pub const CONE_COLOR: Srgba = srgba_from_hex(0x8B4513);
pub const CHERRY_COLOR: Srgba = srgba_from_hex(0xFF0000);
pub const SCOOP_HEIGHT: f32 = 1.1;
pub const CHERRY_POSITION: [f32; 3] = [0.0, 1.9, 0.0];


/// A y-aligned primitive centered on the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Cone { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32, segments: u32 },
    Cylinder { radius: f32, height: f32, segments: u32 },
}
impl Shape {
    /// Maps the matching three-d unit mesh onto this shape
    pub fn local_transformation(&self) -> Mat4 {
        match *self {
            Shape::Sphere { radius, .. } => Mat4::from_scale(radius),
            Shape::Cone { radius, height, .. } | Shape::Cylinder { radius, height, .. } => {
                Mat4::from_translation(vec3(0.0, -0.5*height, 0.0))
                    * Mat4::from_angle_z(Rad(FRAC_PI_2))
                    * Mat4::from_nonuniform_scale(height, radius, radius)
            }
        }
    }

    /// Tessellates the unit primitive (transformation applied separately)
    pub fn to_cpu_mesh(&self) -> CpuMesh {
        match *self {
            Shape::Cone { segments, .. } => CpuMesh::cone(segments),
            Shape::Sphere { segments, .. } => CpuMesh::sphere(segments),
            Shape::Cylinder { segments, .. } => CpuMesh::cylinder(segments),
        }
    }
}


/// The waffle cone, tip pointing down
pub fn cone() -> SceneObject {
    SceneObject::new(
        ObjectKind::Cone,
        Shape::Cone { radius: 0.5, height: 2.0, segments: 32 },
        CONE_COLOR,
    )
    .with_rotation(vec3(PI, 0.0, 0.0))
}


/// The ice cream scoop sitting on the cone
pub fn scoop(color: Srgba) -> SceneObject {
    SceneObject::new(
        ObjectKind::Scoop,
        Shape::Sphere { radius: 0.6, segments: 32 },
        color,
    )
    .with_position(vec3(0.0, SCOOP_HEIGHT, 0.0))
}


pub fn cherry() -> SceneObject {
    SceneObject::new(
        ObjectKind::Cherry,
        Shape::Sphere { radius: 0.2, segments: 32 },
        CHERRY_COLOR,
    )
    .with_position(CHERRY_POSITION.into())
}


/// A sprinkle at the origin; placement is up to the caller
pub fn sprinkle(color: Srgba) -> SceneObject {
    SceneObject::new(
        ObjectKind::Sprinkle,
        Shape::Cylinder { radius: 0.05, height: 0.2, segments: 8 },
        color,
    )
}


/// The static model: a scene holding only the cone and the scoop
pub struct IceCream {
    pub scene: Scene,
    pub cone: ObjectId,
    pub scoop: ObjectId,
}
impl IceCream {
    pub fn new(cream_color: Srgba) -> Self {
        let mut scene = Scene::new();
        let cone = scene.add(cone());
        let scoop = scene.add(scoop(cream_color));
        Self { scene, cone, scoop }
    }
}
