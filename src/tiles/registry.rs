use super::types::{TileIndex, TileType};
use bevy::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for tile properties loading
/// Only an unreadable file is fatal, malformed entries are skipped
#[derive(Debug, thiserror::Error)]
pub enum TilePropertiesError {
    #[error("could not open tile properties file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Tile catalog: the semantic type of every tile variant in the tileset
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TileRegistry {
    types: Vec<TileType>,
    skipped: Vec<String>,
}

impl TileRegistry {
    /// Catalog of `tile_count` entries, all unclassified
    pub fn new(tile_count: usize) -> Self {
        Self {
            types: vec![TileType::Unknown; tile_count],
            skipped: Vec::new(),
        }
    }

    /// Load tile properties from disk for a catalog of `tile_count` entries
    pub fn load<P: AsRef<Path>>(path: P, tile_count: usize) -> Result<Self, TilePropertiesError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TilePropertiesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text, tile_count))
    }

    /// Parse the tile properties format
    ///
    /// ```text
    /// [walkable]
    /// 1 3
    /// [deadly]
    /// 4
    /// ```
    ///
    /// Later sections win when an id is listed more than once.
    pub fn parse(text: &str, tile_count: usize) -> Self {
        let mut registry = Self::new(tile_count);
        let mut section: Option<TileType> = None;

        for (line_no, raw) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                section = TileType::from_section(name);
                if section.is_none() {
                    registry
                        .skipped
                        .push(format!("line {}: ignoring unknown section [{}]", line_no, name));
                }
                continue;
            }

            let Some(tile_type) = section else {
                continue;
            };

            for token in line.split_whitespace() {
                match token.parse::<i64>() {
                    Ok(id) if usize::try_from(id).is_ok_and(|i| registry.set_tile_type(i, tile_type)) => {}
                    Ok(id) => registry.skipped.push(format!(
                        "line {}: tile id {} outside catalog of {} tiles, skipped",
                        line_no, id, tile_count
                    )),
                    Err(_) => registry
                        .skipped
                        .push(format!("line {}: '{}' is not a tile id, skipped", line_no, token)),
                }
            }
        }

        registry
    }

    /// Entries dropped while parsing, reported once logging is up
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Number of entries in the catalog
    pub fn tile_count(&self) -> usize {
        self.types.len()
    }

    /// Check if a tile index is part of the catalog
    pub fn is_valid_tile(&self, index: TileIndex) -> bool {
        index < self.types.len()
    }

    /// Type of a catalog entry, Unknown for indices outside the catalog
    pub fn tile_type(&self, index: TileIndex) -> TileType {
        self.types.get(index).copied().unwrap_or_default()
    }

    /// Classify an entry, returns false if the index is outside the catalog
    pub fn set_tile_type(&mut self, index: TileIndex, tile_type: TileType) -> bool {
        match self.types.get_mut(index) {
            Some(entry) => {
                *entry = tile_type;
                true
            }
            None => false,
        }
    }

    /// Count of entries per type, for startup diagnostics
    pub fn count_of(&self, tile_type: TileType) -> usize {
        self.types.iter().filter(|&&t| t == tile_type).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_blocked_entry_and_unlisted_unknown() {
        let registry = TileRegistry::parse("[blocked]\n2\n", 7);

        assert_eq!(registry.tile_type(2), TileType::Blocked);
        for index in [0, 1, 3, 4, 5, 6] {
            assert_eq!(registry.tile_type(index), TileType::Unknown);
        }
    }

    #[test]
    fn test_parse_all_sections() {
        let text = "\
# comment line
[walkable]
1 3

[Deadly]
4
[BLOCKED]
2 5
[coin]
6
";
        let registry = TileRegistry::parse(text, 7);

        assert_eq!(registry.tile_type(0), TileType::Unknown);
        assert_eq!(registry.tile_type(1), TileType::Walkable);
        assert_eq!(registry.tile_type(3), TileType::Walkable);
        assert_eq!(registry.tile_type(4), TileType::Deadly);
        assert_eq!(registry.tile_type(2), TileType::Blocked);
        assert_eq!(registry.tile_type(5), TileType::Blocked);
        assert_eq!(registry.tile_type(6), TileType::Coin);
        assert_eq!(registry.count_of(TileType::Walkable), 2);
    }

    #[test]
    fn test_invalid_ids_are_skipped() {
        let registry = TileRegistry::parse("[walkable]\n-1 1 7 x 99 2\n", 7);

        assert_eq!(registry.tile_count(), 7);
        assert_eq!(registry.tile_type(1), TileType::Walkable);
        assert_eq!(registry.tile_type(2), TileType::Walkable);
        assert_eq!(registry.count_of(TileType::Walkable), 2);
        assert_eq!(registry.skipped().len(), 4);
    }

    #[test]
    fn test_skipped_entries_are_recorded() {
        let registry = TileRegistry::parse("[walkable]\n1 99 x\n", 7);

        assert_eq!(registry.tile_type(1), TileType::Walkable);
        assert_eq!(registry.skipped().len(), 2);
        assert!(registry.skipped()[0].contains("99"));
        assert!(registry.skipped()[1].contains("'x'"));

        let registry = TileRegistry::parse("[lava]\n3\n", 7);
        assert_eq!(registry.skipped().len(), 1);
        assert!(registry.skipped()[0].contains("[lava]"));
        assert!(TileRegistry::parse("[walkable]\n1\n", 7).skipped().is_empty());
    }

    #[test]
    fn test_ids_outside_sections_are_ignored() {
        let registry = TileRegistry::parse("1 2\n[lava]\n3\n[deadly]\n4\n", 7);

        assert_eq!(registry.tile_type(1), TileType::Unknown);
        assert_eq!(registry.tile_type(3), TileType::Unknown);
        assert_eq!(registry.tile_type(4), TileType::Deadly);
    }

    #[test]
    fn test_later_section_wins() {
        let registry = TileRegistry::parse("[walkable]\n1\n[deadly]\n1\n", 3);
        assert_eq!(registry.tile_type(1), TileType::Deadly);
    }

    #[test]
    fn test_set_and_query_bounds() {
        let mut registry = TileRegistry::new(2);
        assert!(registry.set_tile_type(1, TileType::Walkable));
        assert!(!registry.set_tile_type(2, TileType::Walkable));
        assert!(registry.is_valid_tile(1));
        assert!(!registry.is_valid_tile(2));
        assert_eq!(registry.tile_type(5), TileType::Unknown);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = env::temp_dir().join("tilequest_missing_tile_props.txt");
        let _ = fs::remove_file(&path);

        assert!(matches!(
            TileRegistry::load(&path, 7),
            Err(TilePropertiesError::Io { .. })
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let path = env::temp_dir().join("tilequest_test_tile_props.txt");
        fs::write(&path, "[walkable]\n1\n[deadly]\n4\n[blocked]\n2\n").expect("Failed to write props");

        let registry = TileRegistry::load(&path, 7).expect("Failed to load props");
        assert_eq!(registry.tile_type(1), TileType::Walkable);
        assert_eq!(registry.tile_type(4), TileType::Deadly);
        assert_eq!(registry.tile_type(2), TileType::Blocked);

        let _ = fs::remove_file(path);
    }
}
