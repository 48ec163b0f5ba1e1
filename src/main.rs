use bevy::log::LogPlugin;
use bevy::prelude::*;

mod core;
mod rain;
mod rendering;
mod ui;

use crate::core::game::GamePlugin;
use crate::core::time_controls::TimeControlPlugin;
use rain::RainPlugin;
use rendering::ModelLoaderPlugin;
use ui::UIPlugin;

#[cfg(quiet_logs)]
const DEFAULT_LOG_FILTER: &str = "warn,wgpu=error,naga=warn";
#[cfg(not(quiet_logs))]
const DEFAULT_LOG_FILTER: &str = "info,burger_rain=debug,wgpu=error,naga=warn";

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: crate::core::constants::WINDOW_TITLE.into(),
                        resolution: (
                            crate::core::constants::WINDOW_WIDTH,
                            crate::core::constants::WINDOW_HEIGHT,
                        )
                            .into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(log_plugin()),
            GamePlugin,
            TimeControlPlugin,
            RainPlugin,
            ModelLoaderPlugin,
            UIPlugin,
        ))
        .run();
}

fn log_plugin() -> LogPlugin {
    LogPlugin {
        filter: DEFAULT_LOG_FILTER.to_string(),
        #[cfg(feature = "logging")]
        custom_layer: flame::flame_layer,
        ..default()
    }
}

#[cfg(feature = "logging")]
mod flame {
    use std::fs::File;
    use std::io::BufWriter;

    use bevy::log::BoxedLayer;
    use bevy::prelude::*;
    use tracing_flame::{FlameLayer, FlushGuard};
    use tracing_subscriber::Layer;

    const FLAME_OUTPUT: &str = "trace/rain.folded";

    /// Keeps the folded-stack file flushed until the app exits
    #[derive(Resource)]
    struct FlameGuard(#[allow(dead_code)] FlushGuard<BufWriter<File>>);

    /// Extra tracing layer writing folded stacks for flame graphs
    pub fn flame_layer(app: &mut App) -> Option<BoxedLayer> {
        if let Err(e) = std::fs::create_dir_all("trace") {
            eprintln!("Flame tracing disabled, can't create trace dir: {e}");
            return None;
        }

        match FlameLayer::with_file(FLAME_OUTPUT) {
            Ok((layer, guard)) => {
                app.insert_resource(FlameGuard(guard));
                Some(layer.boxed())
            }
            Err(e) => {
                eprintln!("Flame tracing disabled: {e}");
                None
            }
        }
    }
}
