use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

use crate::host::{ObjectId, Scene};

#[derive(Clone, Debug)]
struct SceneObject {
    name: String,
    position: Vec3,
}

/// Minimal in-memory scene: named objects with a world position.
///
/// Names need not be unique. A lookup returns the most recently spawned live
/// object with that name.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    objects: FnvHashMap<ObjectId, SceneObject>,
    names: FnvHashMap<String, SmallVec<[ObjectId; 1]>>,
    next_id: u32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, name: impl Into<String>, position: Vec3) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let name = name.into();
        self.names.entry(name.clone()).or_default().push(id);
        self.objects.insert(id, SceneObject { name, position });
        id
    }

    /// Returns false if the object does not exist.
    pub fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool {
        match self.objects.get_mut(&id) {
            Some(obj) => {
                obj.position = position;
                true
            }
            None => false,
        }
    }

    pub fn despawn(&mut self, id: ObjectId) -> bool {
        match self.objects.remove(&id) {
            Some(obj) => {
                if let Some(ids) = self.names.get_mut(&obj.name) {
                    ids.retain(|other| *other != id);
                    if ids.is_empty() {
                        self.names.remove(&obj.name);
                    }
                }
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Scene for SceneGraph {
    fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).and_then(|ids| ids.last().copied())
    }

    fn position(&self, id: ObjectId) -> Option<Vec3> {
        self.objects.get(&id).map(|o| o.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_lookup_and_despawn() {
        let mut scene = SceneGraph::new();
        let a = scene.spawn("musica", Vec3::new(1.0, 2.0, 3.0));
        let b = scene.spawn("player", Vec3::ZERO);
        assert_ne!(a, b);
        assert_eq!(scene.find_by_name("musica"), Some(a));
        assert_eq!(scene.position(a), Some(Vec3::new(1.0, 2.0, 3.0)));

        assert!(scene.set_position(a, Vec3::X));
        assert_eq!(scene.position(a), Some(Vec3::X));

        assert!(scene.despawn(a));
        assert_eq!(scene.find_by_name("musica"), None);
        assert_eq!(scene.position(a), None);
        assert!(!scene.set_position(a, Vec3::Y));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn respawned_name_points_at_newest_object() {
        let mut scene = SceneGraph::new();
        let old = scene.spawn("musica", Vec3::ZERO);
        let new = scene.spawn("musica", Vec3::X);
        assert_eq!(scene.find_by_name("musica"), Some(new));
        // Removing the shadowed object keeps the newer name binding.
        assert!(scene.despawn(old));
        assert_eq!(scene.find_by_name("musica"), Some(new));
    }

    #[test]
    fn despawning_newest_falls_back_to_older_namesake() {
        let mut scene = SceneGraph::new();
        let old = scene.spawn("musica", Vec3::ZERO);
        let new = scene.spawn("musica", Vec3::X);
        assert!(scene.despawn(new));
        assert_eq!(scene.position(old), Some(Vec3::ZERO));
        assert_eq!(scene.find_by_name("musica"), Some(old));
        assert!(scene.despawn(old));
        assert_eq!(scene.find_by_name("musica"), None);
    }
}
