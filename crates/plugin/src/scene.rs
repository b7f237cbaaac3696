//! The slice of the host scene the plugin reads and writes.

use dcclink_core::{TransformPayload, Vec3};

use crate::manifest::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub location: Vec3,
    /// Euler angles in radians.
    pub rotation_euler: Vec3,
    pub scale: Vec3,
}

impl SceneObject {
    /// Object at the origin with no rotation and unit scale.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: [0.0; 3],
            rotation_euler: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    /// The body the submit operator sends.
    pub fn transform_payload(&self) -> TransformPayload {
        TransformPayload::full(self.location, self.rotation_euler, self.scale)
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    active: Option<usize>,
    /// Where the submit operator posts; the plugin's scene property.
    pub server_endpoint: String,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            active: None,
            server_endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Make the named object active. Returns `false` (and leaves the selection
    /// alone) when no object has that name.
    pub fn set_active(&mut self, name: &str) -> bool {
        match self.objects.iter().position(|o| o.name == name) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active.and_then(|index| self.objects.get(index))
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }
}
