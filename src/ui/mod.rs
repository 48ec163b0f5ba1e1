// UI module: model credit and load status overlay

pub mod overlay;

pub use overlay::*;

use bevy::prelude::*;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_overlay)
            .add_systems(Update, update_load_status_text);
    }
}
