
/// Index into the tile catalog (0-based position in the tileset strip)
pub type TileIndex = usize;

/// Semantic classification of a tile variant, controls whether and how the
/// player may enter a cell showing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    Walkable,
    Deadly,
    Blocked,
    Coin,
    #[default]
    Unknown,
}

impl TileType {
    /// Map a tile properties section name (case-insensitive) to its type
    pub fn from_section(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "walkable" => Some(TileType::Walkable),
            "deadly" => Some(TileType::Deadly),
            "blocked" => Some(TileType::Blocked),
            "coin" => Some(TileType::Coin),
            _ => None,
        }
    }
}

/// Grid position in (row, column) coordinates
/// Rows grow "south" (down-left on screen), columns grow "east" (down-right on screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by a (row, column) offset
    pub const fn offset(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
