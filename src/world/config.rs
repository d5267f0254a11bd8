use crate::tiles::{GridPos, TileIndex};
use bevy::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sections every map config file must contain
pub const REQUIRED_SECTIONS: [&str; 9] = [
    "file",
    "nTiles",
    "width",
    "height",
    "rows",
    "columns",
    "matrix",
    "rowInicialPosition",
    "columnInicialPosition",
];

/// Error type for map config loading
#[derive(Debug, thiserror::Error)]
pub enum MapConfigError {
    #[error("could not open map config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: unknown section [{name}]")]
    UnknownSection { line: usize, name: String },
    #[error("line {line}: value outside of any section")]
    ValueOutsideSection { line: usize },
    #[error("line {line}: invalid value '{value}' in section [{section}]")]
    InvalidValue {
        line: usize,
        section: &'static str,
        value: String,
    },
    #[error("section [{0}] missing")]
    MissingSection(&'static str),
    #[error("[{section}] must be positive, got {value}")]
    NotPositive { section: &'static str, value: i64 },
    #[error("invalid rows/columns: {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },
    #[error("matrix size ({actual}) differs from rows*columns ({expected})")]
    MatrixSize { actual: usize, expected: usize },
    #[error("matrix entry {position} uses tile {tile}, tileset has {tile_count} tiles")]
    TileOutOfRange {
        position: usize,
        tile: i64,
        tile_count: usize,
    },
    #[error("initial position ({row}, {col}) outside the {rows}x{cols} matrix")]
    StartOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

/// Map description produced once at startup, read-only afterwards
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    /// Tileset image path, relative to the asset folder
    pub tileset_file: String,
    /// Number of tiles in the horizontal tileset strip
    pub tile_count: usize,
    pub tile_width: u32,
    pub tile_height: u32,
    pub rows: usize,
    pub cols: usize,
    /// Row-major tile index per cell (rows * cols entries)
    cells: Vec<TileIndex>,
    pub start: GridPos,
}

impl MapConfig {
    /// Load and validate a map config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse the sectioned map config format
    ///
    /// Sections may appear in any order. `[matrix]` may span several lines, all
    /// of its integers are concatenated row-major. For single-value sections the
    /// last line wins.
    pub fn parse(text: &str) -> Result<Self, MapConfigError> {
        let mut raw = RawMapConfig::default();
        let mut section: Option<Section> = None;

        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let next = Section::from_name(name).ok_or_else(|| MapConfigError::UnknownSection {
                    line: line_no,
                    name: name.to_string(),
                })?;
                raw.seen.insert(next.name());
                section = Some(next);
                continue;
            }

            let Some(current) = section else {
                return Err(MapConfigError::ValueOutsideSection { line: line_no });
            };
            raw.apply(current, line, line_no)?;
        }

        raw.finish()
    }

    /// Check if a position lies inside the grid
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    /// Tile index shown at a grid position, None outside the grid
    pub fn tile_at(&self, pos: GridPos) -> Option<TileIndex> {
        if !self.contains(pos) {
            return None;
        }
        self.cells
            .get(pos.row as usize * self.cols + pos.col as usize)
            .copied()
    }

    /// All cells in row-major order with their tile index
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, TileIndex)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (GridPos::new((i / cols) as i32, (i % cols) as i32), tile))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    File,
    TileCount,
    Width,
    Height,
    Rows,
    Columns,
    Matrix,
    StartRow,
    StartColumn,
}

impl Section {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "file" => Section::File,
            "nTiles" => Section::TileCount,
            "width" => Section::Width,
            "height" => Section::Height,
            "rows" => Section::Rows,
            "columns" => Section::Columns,
            "matrix" => Section::Matrix,
            "rowInicialPosition" => Section::StartRow,
            "columnInicialPosition" => Section::StartColumn,
            _ => return None,
        })
    }

    fn name(self) -> &'static str {
        match self {
            Section::File => "file",
            Section::TileCount => "nTiles",
            Section::Width => "width",
            Section::Height => "height",
            Section::Rows => "rows",
            Section::Columns => "columns",
            Section::Matrix => "matrix",
            Section::StartRow => "rowInicialPosition",
            Section::StartColumn => "columnInicialPosition",
        }
    }
}

/// Values collected while scanning, validated by `finish`
#[derive(Default)]
struct RawMapConfig {
    seen: HashSet<&'static str>,
    tileset_file: String,
    tile_count: i64,
    tile_width: i64,
    tile_height: i64,
    rows: i64,
    cols: i64,
    matrix: Vec<i64>,
    start_row: i64,
    start_col: i64,
}

impl RawMapConfig {
    fn apply(&mut self, section: Section, line: &str, line_no: usize) -> Result<(), MapConfigError> {
        let scalar = |line: &str| -> Result<i64, MapConfigError> {
            let token = line.split_whitespace().next().unwrap_or_default();
            token.parse().map_err(|_| MapConfigError::InvalidValue {
                line: line_no,
                section: section.name(),
                value: token.to_string(),
            })
        };

        match section {
            Section::File => self.tileset_file = line.to_string(),
            Section::TileCount => self.tile_count = scalar(line)?,
            Section::Width => self.tile_width = scalar(line)?,
            Section::Height => self.tile_height = scalar(line)?,
            Section::Rows => self.rows = scalar(line)?,
            Section::Columns => self.cols = scalar(line)?,
            Section::StartRow => self.start_row = scalar(line)?,
            Section::StartColumn => self.start_col = scalar(line)?,
            Section::Matrix => {
                for token in line.split_whitespace() {
                    let value = token.parse().map_err(|_| MapConfigError::InvalidValue {
                        line: line_no,
                        section: section.name(),
                        value: token.to_string(),
                    })?;
                    self.matrix.push(value);
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<MapConfig, MapConfigError> {
        if let Some(missing) = REQUIRED_SECTIONS.iter().find(|s| !self.seen.contains(*s)) {
            return Err(MapConfigError::MissingSection(*missing));
        }

        if self.rows <= 0 || self.cols <= 0 {
            return Err(MapConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let rows = self.rows as usize;
        let cols = self.cols as usize;

        let tile_count = positive("nTiles", self.tile_count)?;
        let tile_width = positive("width", self.tile_width)?;
        let tile_height = positive("height", self.tile_height)?;

        let expected = rows.saturating_mul(cols);
        if self.matrix.len() != expected {
            return Err(MapConfigError::MatrixSize {
                actual: self.matrix.len(),
                expected,
            });
        }

        let cells = self
            .matrix
            .iter()
            .enumerate()
            .map(|(position, &tile)| match usize::try_from(tile) {
                Ok(index) if index < tile_count => Ok(index),
                _ => Err(MapConfigError::TileOutOfRange {
                    position,
                    tile,
                    tile_count,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.start_row < 0
            || self.start_row >= self.rows
            || self.start_col < 0
            || self.start_col >= self.cols
        {
            return Err(MapConfigError::StartOutOfBounds {
                row: self.start_row,
                col: self.start_col,
                rows,
                cols,
            });
        }

        Ok(MapConfig {
            tileset_file: self.tileset_file,
            tile_count,
            tile_width: tile_width as u32,
            tile_height: tile_height as u32,
            rows,
            cols,
            cells,
            start: GridPos::new(self.start_row as i32, self.start_col as i32),
        })
    }
}

fn positive(section: &'static str, value: i64) -> Result<usize, MapConfigError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 && value <= u32::MAX as i64 => Ok(v),
        _ => Err(MapConfigError::NotPositive { section, value }),
    }
}
