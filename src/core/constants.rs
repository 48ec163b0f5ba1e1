// Scene configuration constants
// This module contains the magic numbers for the window, camera, lights and rain defaults

// === WINDOW AND DISPLAY ===
pub const WINDOW_TITLE: &str = "Burger Rain";
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

// === CAMERA ===
pub mod camera {
    use bevy::prelude::*;

    pub const POSITION: Vec3 = Vec3::new(0.0, 25.0, 40.0);
    pub const FOV_DEGREES: f32 = 60.0;
    // Midway down the fall column so both the spawn band and the exit line are framed
    pub const LOOK_AT: Vec3 = Vec3::new(0.0, 5.0, 0.0);
}

// === LIGHTING ===
pub mod lighting {
    use bevy::prelude::*;

    pub const AMBIENT_COLOR: Color = Color::WHITE;
    // Roughly a 0.5 intensity ambient term in Bevy's cd/m^2 units
    pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

    pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 30.0, 10.0);
    pub const POINT_LIGHT_INTENSITY: f32 = 4_000_000.0; // lumens
    pub const POINT_LIGHT_RANGE: f32 = 120.0;

    pub const CLEAR_COLOR: Color = Color::srgb(0.08, 0.08, 0.1);
}

// === RAIN DEFAULTS ===
pub mod rain {
    pub const POPULATION_SIZE: usize = 100;
    pub const MAX_POPULATION_SIZE: usize = 100_000;

    // x and z are drawn from a symmetric band around the origin
    pub const SPAWN_HORIZONTAL_MIN: f32 = -25.0;
    pub const SPAWN_HORIZONTAL_MAX: f32 = 25.0;
    // y starts above the top of the view
    pub const SPAWN_VERTICAL_MIN: f32 = 20.0;
    pub const SPAWN_VERTICAL_MAX: f32 = 30.0;

    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 5.0;

    // radians per second, per axis
    pub const ROTATION_RATE_MIN: f32 = 0.0;
    pub const ROTATION_RATE_MAX: f32 = 0.5;

    pub const EXIT_THRESHOLD: f32 = -25.0;
    pub const MODEL_SCALE: f32 = 1.0;

    pub const CONFIG_ENV_VAR: &str = "BURGER_RAIN_CONFIG";
    pub const DEFAULT_CONFIG_PATH: &str = "config/rain.ron";
}

// === MODELS ===
pub mod models {
    use bevy::prelude::*;

    pub const BURGER_SCENE_PATH: &str = "models/burger_low_poly/burger.gltf#Scene0";

    // Fallback bun shown when the glTF can't be loaded
    pub const FALLBACK_RADIUS: f32 = 1.0;
    pub const FALLBACK_HEIGHT: f32 = 0.8;
    pub const FALLBACK_COLOR: Color = Color::srgb(0.85, 0.55, 0.2);
}

// === UI CONSTANTS ===
pub mod ui {
    use bevy::prelude::*;

    pub const CREDIT_TEXT: &str = "3D Model";
    pub const CREDIT_URL: &str =
        "https://sketchfab.com/3d-models/burger-low-poly-bc88f1776b2c4893b487c78fa312b0fe";
    pub const CREDIT_MARGIN: f32 = 20.0;
    pub const CREDIT_PADDING: f32 = 10.0;
    pub const CREDIT_CORNER_RADIUS: f32 = 5.0;
    pub const CREDIT_TEXT_SIZE: f32 = 16.0;
    pub const CREDIT_URL_SIZE: f32 = 11.0;

    pub const STATUS_TEXT_SIZE: f32 = 14.0;

    pub const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);
    pub const TEXT_COLOR: Color = Color::WHITE;
    pub const WARNING_TEXT_COLOR: Color = Color::srgb(1.0, 0.75, 0.3);
}

// === HOTKEYS ===
pub mod hotkeys {
    use bevy::prelude::*;

    pub const SPEED_UP: KeyCode = KeyCode::Equal;
    pub const SPEED_UP_ALT: KeyCode = KeyCode::NumpadAdd;
    pub const SLOW_DOWN: KeyCode = KeyCode::Minus;
    pub const SLOW_DOWN_ALT: KeyCode = KeyCode::NumpadSubtract;
    pub const RESET_SPEED: KeyCode = KeyCode::Backspace;
    pub const TOGGLE_PAUSE: KeyCode = KeyCode::Space;
}
