//! Falling-object rain: the object pool, its per-frame motion, and the Bevy glue

pub mod kinematics;
pub mod object;
pub mod pool;
pub mod systems;

pub use object::*;
pub use systems::*;

use bevy::prelude::*;

use crate::core::config::RainConfig;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RainSet {
    /// Kinematics plus remove/respawn
    Advance,
    /// Push pool state onto scene nodes
    Sync,
}

pub struct RainPlugin;

impl Plugin for RainPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<RainConfig>() {
            app.insert_resource(RainConfig::load_or_default());
        }

        app.init_resource::<SceneNodes>()
            .add_event::<ObjectRespawned>()
            .configure_sets(Update, (RainSet::Advance, RainSet::Sync).chain())
            .add_systems(Startup, populate_rain)
            .add_systems(
                Update,
                (
                    advance_rain.in_set(RainSet::Advance),
                    log_respawns.after(RainSet::Advance),
                    sync_scene_nodes.in_set(RainSet::Sync),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn headless_app(config: RainConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)))
            .insert_resource(config)
            .add_plugins(RainPlugin);
        app
    }

    fn test_config() -> RainConfig {
        RainConfig {
            population_size: 30,
            exit_threshold: 15.0,
            seed: Some(42),
            ..default()
        }
    }

    fn drop_count(app: &mut App) -> usize {
        let mut query = app.world_mut().query::<&RainDrop>();
        query.iter(app.world()).count()
    }

    #[test]
    fn test_startup_spawns_one_node_per_object() {
        let mut app = headless_app(test_config());
        app.update();

        assert_eq!(app.world().resource::<RainPool>().0.len(), 30);
        assert_eq!(app.world().resource::<SceneNodes>().entities.len(), 30);
        assert_eq!(drop_count(&mut app), 30);
    }

    #[test]
    fn test_population_holds_while_objects_respawn() {
        let mut app = headless_app(test_config());

        for _ in 0..400 {
            app.update();
            assert_eq!(app.world().resource::<RainPool>().0.len(), 30);
        }

        let pool = &app.world().resource::<RainPool>().0;
        assert!(pool.spawned_total() > 30, "nothing ever exited");
        assert_eq!(app.world().resource::<SceneNodes>().entities.len(), 30);
        assert_eq!(drop_count(&mut app), 30);
    }

    #[test]
    fn test_nodes_mirror_pool_state() {
        let mut app = headless_app(test_config());
        for _ in 0..20 {
            app.update();
        }

        let scale = app.world().resource::<RainConfig>().model_scale;
        let mut query = app.world_mut().query::<(&RainDrop, &Transform)>();
        let world = app.world();
        let pool = &world.resource::<RainPool>().0;
        for (drop, transform) in query.iter(world) {
            let object = pool.get(drop.id).expect("node for inactive object");
            assert_eq!(*transform, object.transform(scale));
        }
    }

    #[test]
    fn test_rejected_config_falls_back_to_defaults() {
        let mut config = test_config();
        config.spawn_bounds.horizontal = crate::core::config::SpawnRange::new(-3.0e38, 3.0e38);
        let mut app = headless_app(config);
        app.update();

        assert_eq!(*app.world().resource::<RainConfig>(), RainConfig::default());
        assert_eq!(app.world().resource::<RainPool>().0.len(), RainConfig::default().population_size);
    }

    #[test]
    fn test_paused_time_freezes_rain() {
        let mut app = headless_app(test_config());
        app.update();
        app.update();

        let before: Vec<_> = app.world().resource::<RainPool>().0.iter().cloned().collect();
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        for _ in 0..10 {
            app.update();
        }
        let after: Vec<_> = app.world().resource::<RainPool>().0.iter().cloned().collect();

        assert_eq!(before, after);
    }
}
