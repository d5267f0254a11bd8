pub mod constants;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use registry::{TilePropertiesError, TileRegistry};
pub use types::{GridPos, TileIndex, TileType};
