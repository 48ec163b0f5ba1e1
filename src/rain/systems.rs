use bevy::prelude::*;
use hashbrown::{HashMap, HashSet};

use super::object::ObjectId;
use super::pool::{ObjectPool, Respawn};
use crate::core::config::RainConfig;

/// The active collection, owned by the ECS world
#[derive(Resource)]
pub struct RainPool(pub ObjectPool);

/// Transform node spawned for each active object
#[derive(Component, Debug, Clone, Copy)]
pub struct RainDrop {
    pub id: ObjectId,
}

/// Maps each active object to the entity that renders it
#[derive(Resource, Default)]
pub struct SceneNodes {
    pub entities: HashMap<ObjectId, Entity>,
}

/// Sent once per object that fell out of view and was replaced
#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectRespawned {
    pub removed: Option<ObjectId>,
    pub spawned: ObjectId,
}

impl From<Respawn> for ObjectRespawned {
    fn from(respawn: Respawn) -> Self {
        Self {
            removed: respawn.removed,
            spawned: respawn.spawned,
        }
    }
}

/// Build the pool from the current config and populate it
pub fn populate_rain(mut commands: Commands, mut config: ResMut<RainConfig>) {
    if let Err(e) = config.validate() {
        warn!("Rain config rejected, using defaults: {}", e);
        *config = RainConfig::default();
    }

    let mut pool = ObjectPool::new(config.clone());
    pool.initialize(config.population_size);
    if pool.is_empty() {
        warn!("Rain population size is zero, nothing will fall");
    }
    commands.insert_resource(RainPool(pool));
}

/// Advance every falling object by the frame delta and replace those that exited
pub fn advance_rain(
    time: Res<Time>,
    mut pool: ResMut<RainPool>,
    mut respawned: EventWriter<ObjectRespawned>,
) {
    let respawns = pool.0.advance_all(time.delta_secs());
    respawned.send_batch(respawns.into_iter().map(ObjectRespawned::from));
}

pub fn log_respawns(mut respawned: EventReader<ObjectRespawned>, pool: Res<RainPool>) {
    for event in respawned.read() {
        match event.removed {
            Some(removed) => debug!(
                "Object {} left the view, replaced by {} ({} spawned so far)",
                removed,
                event.spawned,
                pool.0.spawned_total()
            ),
            None => debug!("Spawned {} without a removal", event.spawned),
        }
    }
}

/// Keep one entity per active object and copy its transform every frame
pub fn sync_scene_nodes(
    mut commands: Commands,
    pool: Res<RainPool>,
    mut nodes: ResMut<SceneNodes>,
    mut drops: Query<(&RainDrop, &mut Transform)>,
) {
    let pool = &pool.0;
    let scale = pool.config().model_scale;
    let live: HashSet<ObjectId> = pool.iter().map(|object| object.id).collect();

    // Despawn nodes whose object is gone
    nodes.entities.retain(|id, entity| {
        if live.contains(id) {
            true
        } else {
            commands.entity(*entity).despawn_recursive();
            false
        }
    });

    for object in pool.iter() {
        if let Some(&entity) = nodes.entities.get(&object.id) {
            if let Ok((drop, mut transform)) = drops.get_mut(entity) {
                debug_assert_eq!(drop.id, object.id);
                *transform = object.transform(scale);
            }
            continue;
        }

        let entity = commands
            .spawn((
                RainDrop { id: object.id },
                object.transform(scale),
                Visibility::default(),
                Name::new(format!("Burger {}", object.id)),
            ))
            .id();
        nodes.entities.insert(object.id, entity);
    }
}
