/// Rendering modules for model loading and per-instance visuals
pub mod model_loader;

pub use model_loader::*;
