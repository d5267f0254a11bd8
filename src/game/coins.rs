use crate::tiles::{GridPos, TileRegistry, TileType};
use crate::world::MapConfig;

/// Collectible placed on a walkable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub pos: GridPos,
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: GridPos) -> Self {
        Self {
            pos,
            collected: false,
        }
    }
}

/// Scatter coins over the walkable cells of a map
///
/// Cells are visited in row-major order; every walkable cell except the start
/// cell takes one draw from `draw` (expected in [0, 1)) and gets a coin when the
/// draw is below `chance`. Placement stops once `max_coins` coins exist.
pub fn generate_coins(
    map: &MapConfig,
    registry: &TileRegistry,
    chance: f32,
    max_coins: usize,
    mut draw: impl FnMut() -> f32,
) -> Vec<Coin> {
    let mut coins = Vec::new();

    for (pos, tile) in map.cells() {
        if coins.len() >= max_coins {
            break;
        }
        if pos == map.start || registry.tile_type(tile) != TileType::Walkable {
            continue;
        }
        if draw() < chance {
            coins.push(Coin::new(pos));
        }
    }

    coins
}
