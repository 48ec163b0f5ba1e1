use bevy::prelude::*;

use crate::core::constants::{camera, lighting};

/// Marker for the single scene camera
#[derive(Component)]
pub struct MainCamera;

/// Static scene: camera, ambient and point light, background colour
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(lighting::CLEAR_COLOR))
            .insert_resource(AmbientLight {
                color: lighting::AMBIENT_COLOR,
                brightness: lighting::AMBIENT_BRIGHTNESS,
            })
            .add_systems(Startup, setup_scene);
    }
}

pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera::FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(camera::POSITION).looking_at(camera::LOOK_AT, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        PointLight {
            intensity: lighting::POINT_LIGHT_INTENSITY,
            range: lighting::POINT_LIGHT_RANGE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(lighting::POINT_LIGHT_POSITION),
    ));

    info!("Scene setup complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_spawns_camera_and_light() {
        let mut app = App::new();
        app.add_systems(Startup, setup_scene);
        app.update();

        let world = app.world_mut();
        let cameras = world.query::<&MainCamera>().iter(world).count();
        let lights = world.query::<&PointLight>().iter(world).count();
        assert_eq!(cameras, 1);
        assert_eq!(lights, 1);

        let transform = world
            .query_filtered::<&Transform, With<MainCamera>>()
            .single(world);
        assert_eq!(transform.translation, camera::POSITION);
    }
}
