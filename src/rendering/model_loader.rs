//! # Model Loader Module
//!
//! Loads the glTF burger model and dresses every rain node with it.
//!
//! - **Startup**: queue the scene on the asset server and build a fallback mesh
//! - **Runtime**: watch the load state until it settles on ready or failed
//! - **Attach**: give each new rain node a visual once the outcome is known
//!
//! The model data is shared by every instance. Each node only owns its
//! transform, so a hundred burgers cost one copy of the geometry.
//!
//! A model that fails to load is reported once and replaced by a primitive
//! bun; the frame loop keeps running either way.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::constants::models::*;
use crate::rain::{RainDrop, RainSet};

/// Plugin that owns model assets and attaches them to rain nodes.
pub struct ModelLoaderPlugin;

impl Plugin for ModelLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelAssets>()
            .add_systems(Startup, load_models)
            .add_systems(
                Update,
                (
                    track_model_load_state,
                    attach_rain_visuals
                        .after(track_model_load_state)
                        .after(RainSet::Sync),
                ),
            );
    }
}

/// Where the model is in its load lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelLoadStatus {
    #[default]
    Loading,
    Ready,
    /// Holds the loader's error message
    Failed(String),
}

/// Resource containing handles to the loaded model and its fallback.
#[derive(Resource, Default)]
pub struct ModelAssets {
    pub burger: Handle<Scene>,
    pub fallback_mesh: Handle<Mesh>,
    pub fallback_material: Handle<StandardMaterial>,
    pub status: ModelLoadStatus,
}

/// Marks a rain node that already has its visual attached
#[derive(Component)]
pub struct RainVisual;

/// Startup system that queues the model and builds the fallback primitive.
///
/// Loading is asynchronous; `track_model_load_state` reports the outcome.
pub fn load_models(
    mut model_assets: ResMut<ModelAssets>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    model_assets.burger = asset_server.load(BURGER_SCENE_PATH);
    info!("Loading burger model from {}", BURGER_SCENE_PATH);

    model_assets.fallback_mesh = meshes.add(Cylinder::new(FALLBACK_RADIUS, FALLBACK_HEIGHT));
    model_assets.fallback_material = materials.add(StandardMaterial {
        base_color: FALLBACK_COLOR,
        perceptual_roughness: 0.8,
        ..default()
    });
}

/// Map an asset server load state onto our status. `None` means still pending.
pub fn resolve_status(state: Option<LoadState>) -> Option<ModelLoadStatus> {
    match state {
        Some(LoadState::Loaded) => Some(ModelLoadStatus::Ready),
        Some(LoadState::Failed(error)) => Some(ModelLoadStatus::Failed(error.to_string())),
        _ => None,
    }
}

/// Poll the asset server until the burger either loads or fails
pub fn track_model_load_state(mut model_assets: ResMut<ModelAssets>, asset_server: Res<AssetServer>) {
    if model_assets.status != ModelLoadStatus::Loading {
        return;
    }

    let Some(status) = resolve_status(asset_server.get_load_state(&model_assets.burger)) else {
        return;
    };

    match &status {
        ModelLoadStatus::Ready => info!("Burger model ready"),
        ModelLoadStatus::Failed(reason) => {
            warn!("Burger model failed to load, using fallback mesh: {}", reason)
        }
        ModelLoadStatus::Loading => {}
    }
    model_assets.status = status;
}

/// Give every rain node without a visual either the burger scene or the fallback bun
pub fn attach_rain_visuals(
    mut commands: Commands,
    model_assets: Res<ModelAssets>,
    new_drops: Query<Entity, (With<RainDrop>, Without<RainVisual>)>,
) {
    match model_assets.status {
        ModelLoadStatus::Loading => {}
        ModelLoadStatus::Ready => {
            for entity in new_drops.iter() {
                commands
                    .entity(entity)
                    .insert((SceneRoot(model_assets.burger.clone()), RainVisual));
            }
        }
        ModelLoadStatus::Failed(_) => {
            for entity in new_drops.iter() {
                commands.entity(entity).insert((
                    Mesh3d(model_assets.fallback_mesh.clone()),
                    MeshMaterial3d(model_assets.fallback_material.clone()),
                    RainVisual,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rain::ObjectId;
    use crate::rain::IdAllocator;
    use bevy::asset::io::AssetReaderError;
    use bevy::asset::AssetLoadError;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn app_with_status(status: ModelLoadStatus) -> (App, Vec<Entity>) {
        let mut app = App::new();
        app.insert_resource(ModelAssets {
            status,
            ..default()
        })
        .add_systems(Update, attach_rain_visuals);

        let mut ids = IdAllocator::default();
        let entities = (0..3)
            .map(|_| {
                let id: ObjectId = ids.allocate();
                app.world_mut()
                    .spawn((RainDrop { id }, Transform::default()))
                    .id()
            })
            .collect();
        (app, entities)
    }

    #[test]
    fn test_pending_model_attaches_nothing() {
        let (mut app, entities) = app_with_status(ModelLoadStatus::Loading);
        app.update();
        for entity in entities {
            assert!(app.world().get::<RainVisual>(entity).is_none());
        }
    }

    #[test]
    fn test_ready_model_attaches_scene() {
        let (mut app, entities) = app_with_status(ModelLoadStatus::Ready);
        app.update();
        for entity in entities {
            assert!(app.world().get::<SceneRoot>(entity).is_some());
            assert!(app.world().get::<Mesh3d>(entity).is_none());
        }
    }

    #[test]
    fn test_failed_model_uses_fallback() {
        let (mut app, entities) =
            app_with_status(ModelLoadStatus::Failed("missing file".into()));
        app.update();
        for entity in entities {
            assert!(app.world().get::<Mesh3d>(entity).is_some());
            assert!(app.world().get::<SceneRoot>(entity).is_none());
            assert!(app.world().get::<RainVisual>(entity).is_some());
        }
    }

    #[test]
    fn test_resolve_status() {
        assert_eq!(resolve_status(None), None);
        assert_eq!(resolve_status(Some(LoadState::Loading)), None);
        assert_eq!(resolve_status(Some(LoadState::NotLoaded)), None);
        assert_eq!(
            resolve_status(Some(LoadState::Loaded)),
            Some(ModelLoadStatus::Ready)
        );
    }

    #[test]
    fn test_resolve_status_failed_carries_reason() {
        let error = AssetLoadError::AssetReaderError(AssetReaderError::NotFound(PathBuf::from(
            "models/burger_low_poly/burger.gltf",
        )));

        match resolve_status(Some(LoadState::Failed(Arc::new(error)))) {
            Some(ModelLoadStatus::Failed(reason)) => assert!(reason.contains("burger.gltf")),
            other => panic!("Expected Failed status, got {:?}", other),
        }
    }
}
