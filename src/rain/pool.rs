//! # Object Pool
//!
//! Owns the active collection of falling objects and keeps its size constant:
//! every removal is paired with exactly one spawn inside the same call.
//!
//! ## Frame flow
//!
//! 1. `advance_all` runs the kinematic update for every object
//! 2. Objects that exit are queued instead of removed mid-iteration
//! 3. After the pass each queued id goes through `remove`, which respawns
//!
//! Replacements therefore appear in the same frame their predecessor left,
//! and take their first step on the following frame.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::kinematics::{advance, Advance};
use super::object::{FallingObject, IdAllocator, ObjectId};
use crate::core::config::RainConfig;

/// Result of one remove-and-replace step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Respawn {
    /// `None` when the id was not in the collection
    pub removed: Option<ObjectId>,
    pub spawned: ObjectId,
}

pub struct ObjectPool {
    objects: Vec<FallingObject>,
    ids: IdAllocator,
    config: RainConfig,
    rng: StdRng,
    initialized: bool,
}

impl ObjectPool {
    /// Create an empty pool. Seeds from `config.seed` when set.
    pub fn new(config: RainConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: RainConfig, rng: StdRng) -> Self {
        Self {
            objects: Vec::with_capacity(config.population_size),
            ids: IdAllocator::default(),
            config,
            rng,
            initialized: false,
        }
    }

    /// Fill the collection with `count` fresh objects.
    ///
    /// Only the first call has an effect.
    pub fn initialize(&mut self, count: usize) {
        if self.initialized {
            warn!("Object pool already initialized with {} objects, ignoring", self.objects.len());
            return;
        }
        self.initialized = true;

        self.objects.reserve(count);
        for _ in 0..count {
            self.spawn_one();
        }
        info!("Object pool initialized with {} objects", count);
    }

    /// Generate one object with randomized position, speed and spin and append it
    pub fn spawn_one(&mut self) -> ObjectId {
        let bounds = self.config.spawn_bounds;
        let position = Vec3::new(
            bounds.horizontal.sample(&mut self.rng),
            bounds.vertical.sample(&mut self.rng),
            bounds.horizontal.sample(&mut self.rng),
        );
        let vertical_speed = self.config.speed_range.sample(&mut self.rng);
        debug_assert!(vertical_speed > 0.0 && self.config.speed_range.contains(vertical_speed));
        let rotation_rate = Vec3::new(
            self.config.rotation_range.sample(&mut self.rng),
            self.config.rotation_range.sample(&mut self.rng),
            self.config.rotation_range.sample(&mut self.rng),
        );

        let id = self.ids.allocate();
        self.objects
            .push(FallingObject::new(id, position, vertical_speed, rotation_rate));
        id
    }

    /// Remove `id` if present, then spawn a replacement unconditionally
    pub fn remove(&mut self, id: ObjectId) -> Respawn {
        let removed = self
            .objects
            .iter()
            .position(|object| object.id == id)
            .map(|index| self.objects.remove(index).id);

        if removed.is_none() {
            debug!("Remove of unknown object {}", id);
        }

        let spawned = self.spawn_one();
        Respawn { removed, spawned }
    }

    /// Advance every object by `delta` seconds and replace the ones that exited
    pub fn advance_all(&mut self, delta: f32) -> Vec<Respawn> {
        let exit_threshold = self.config.exit_threshold;
        let exited: Vec<ObjectId> = self
            .objects
            .iter_mut()
            .filter_map(|object| match advance(object, delta, exit_threshold) {
                Advance::Exited => Some(object.id),
                Advance::Falling => None,
            })
            .collect();

        exited.into_iter().map(|id| self.remove(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FallingObject> {
        self.objects.iter()
    }

    pub fn get(&self, id: ObjectId) -> Option<&FallingObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Total ids issued, including objects that have since been replaced
    pub fn spawned_total(&self) -> u64 {
        self.ids.issued()
    }
}
