use crate::tiles::GridPos;
use bevy::prelude::*;

/// Screen position (top-left of the tile bounding box, y down) of a diamond
/// isometric cell
///
/// One column right moves half a tile right and half a tile down, one row down
/// moves half a tile left and half a tile down.
pub fn screen_position(row: i32, col: i32, tile_width: f32, tile_height: f32, origin: Vec2) -> Vec2 {
    Vec2::new(
        origin.x + (col - row) as f32 * tile_width / 2.0,
        origin.y + (col + row) as f32 * tile_height / 2.0,
    )
}

/// Convenience wrapper over `screen_position` for a grid position
pub fn cell_to_screen(pos: GridPos, tile_size: Vec2, origin: Vec2) -> Vec2 {
    screen_position(pos.row, pos.col, tile_size.x, tile_size.y, origin)
}
