use std::collections::BTreeMap;
use three_d::prelude::*;
use three_d::Srgba;

use crate::shapes::Shape;


/// Handle of an object in a [Scene]; never reused within a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);


/// What an object represents in the ice cream model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind { Cone, Scoop, Cherry, Sprinkle }


/// A renderable object: geometry, placement and flat color
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Vec3, // Euler angles (XYZ order) in radians
    pub color: Srgba,
}
impl SceneObject {
    pub fn new(kind: ObjectKind, shape: Shape, color: Srgba) -> Self {
        Self {
            kind,
            shape,
            position: Vec3::zero(),
            rotation: Vec3::zero(),
            color,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Model matrix: translation * rotation(XYZ) * shape-local placement
    pub fn transformation(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_angle_x(Rad(self.rotation.x))
            * Mat4::from_angle_y(Rad(self.rotation.y))
            * Mat4::from_angle_z(Rad(self.rotation.z))
            * self.shape.local_transformation()
    }
}


/// The set of objects currently eligible to be drawn each frame
#[derive(Default)]
pub struct Scene {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: u64,
}
impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and returns its fresh handle
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    /// Removes an object; removing an absent handle does nothing
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.remove(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects of the given kind
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.objects.values().filter(|o| o.kind == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, o)| (*id, o))
    }
}
