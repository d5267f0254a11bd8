/// Lives the player starts a session with
pub const DEFAULT_LIVES: u32 = 3;

/// Chance that an eligible walkable cell receives a coin
pub const COIN_CHANCE: f32 = 0.1;

/// Maximum number of coins placed in one session
pub const MAX_COINS: usize = 15;

/// Tileset index drawn under the player (cursor tile)
pub const HIGHLIGHT_TILE: usize = 6;

/// Empty border around the isometric diamond, in pixels
pub const SCREEN_MARGIN: f32 = 10.0;

// Player sprite sheet: one row of jump frames
pub const PLAYER_SHEET_FRAMES: usize = 15;
pub const PLAYER_FIRST_FRAME: usize = 6;
pub const PLAYER_LAST_FRAME: usize = 12;
pub const PLAYER_FRAME_SECONDS: f32 = 0.1;

/// Coin sprite size relative to one tile
pub const COIN_WIDTH_FACTOR: f32 = 0.4;
pub const COIN_HEIGHT_FACTOR: f32 = 0.9;

// Z-positions for draw order (tiles use the range below COIN_Z)
pub const TILE_Z_BASE: f32 = 0.0;
pub const COIN_Z: f32 = 1.0;
pub const PLAYER_Z: f32 = 2.0;
