pub mod config;
pub mod grid;
pub mod layout;
pub mod loader;

// Re-export commonly used items
pub use config::{MapConfig, MapConfigError};
pub use layout::{DrawQuad, QuadTexture, ScreenLayout};
