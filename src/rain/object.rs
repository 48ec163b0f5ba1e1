use std::fmt;

use bevy::prelude::*;

/// Identifier of one falling object. Never reused by the allocator that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn allocate(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

/// One member of the active collection.
///
/// Speed and rotation rate are fixed when the object is spawned; only
/// `position` and `rotation` change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingObject {
    pub id: ObjectId,
    pub position: Vec3,
    /// Accumulated XYZ Euler angles in radians, never wrapped
    pub rotation: Vec3,
    pub vertical_speed: f32,
    pub rotation_rate: Vec3,
}

impl FallingObject {
    pub fn new(id: ObjectId, position: Vec3, vertical_speed: f32, rotation_rate: Vec3) -> Self {
        Self {
            id,
            position,
            rotation: Vec3::ZERO,
            vertical_speed,
            rotation_rate,
        }
    }

    /// Transform node for this instance
    pub fn transform(&self, scale: f32) -> Transform {
        Transform {
            translation: self.position,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            scale: Vec3::splat(scale),
        }
    }
}
