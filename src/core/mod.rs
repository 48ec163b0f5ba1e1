/// Core modules: constants, configuration, static scene setup and time controls
pub mod config;
pub mod constants;
pub mod game;
pub mod time_controls;
