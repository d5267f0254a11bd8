use crate::tiles::GridPos;
use bevy::prelude::*;

/// Compass direction of a single player step on the grid
/// North is towards row 0, east is towards higher columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// (row, column) offset of one step
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Keyboard layout: the 3x3 block around S, minus S itself
    ///
    /// ```text
    /// Q W E
    /// A   D
    /// Z X C
    /// ```
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyQ => Some(Direction::NorthWest),
            KeyCode::KeyW => Some(Direction::North),
            KeyCode::KeyE => Some(Direction::NorthEast),
            KeyCode::KeyA => Some(Direction::West),
            KeyCode::KeyD => Some(Direction::East),
            KeyCode::KeyZ => Some(Direction::SouthWest),
            KeyCode::KeyX => Some(Direction::South),
            KeyCode::KeyC => Some(Direction::SouthEast),
            _ => None,
        }
    }

    /// Cell reached by stepping from `pos` in this direction
    pub fn step(self, pos: GridPos) -> GridPos {
        let (drow, dcol) = self.offset();
        pos.offset(drow, dcol)
    }
}

/// Marker component for the player sprite
#[derive(Component)]
pub struct Player;

/// Map tile sprite showing a grid cell
#[derive(Component, Debug, Clone, Copy)]
pub struct TileCell(pub GridPos);

/// Coin sprite, index into the session's coin list
#[derive(Component, Debug, Clone, Copy)]
pub struct CoinSprite(pub usize);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offsets_cover_all_neighbours() {
        let all = [
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
            Direction::West,
            Direction::East,
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
        ];
        let offsets: HashSet<_> = all.iter().map(|d| d.offset()).collect();

        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        for (drow, dcol) in offsets {
            assert!(drow.abs() <= 1 && dcol.abs() <= 1);
        }
    }

    #[test]
    fn test_keyboard_layout() {
        assert_eq!(Direction::from_key(KeyCode::KeyW), Some(Direction::North));
        assert_eq!(Direction::from_key(KeyCode::KeyZ), Some(Direction::SouthWest));
        assert_eq!(Direction::from_key(KeyCode::KeyC), Some(Direction::SouthEast));
        assert_eq!(Direction::from_key(KeyCode::KeyS), None);
        assert_eq!(Direction::from_key(KeyCode::Escape), None);
    }

    #[test]
    fn test_step() {
        let pos = GridPos::new(1, 1);
        assert_eq!(Direction::North.step(pos), GridPos::new(0, 1));
        assert_eq!(Direction::East.step(pos), GridPos::new(1, 2));
        assert_eq!(Direction::SouthWest.step(pos), GridPos::new(2, 0));
    }
}
