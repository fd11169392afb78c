// storage.rs - Named pattern snapshots in the app's key-value storage
//
// Keys are `pattern_<name>`; values are the grid's JSON encoding. On the web
// eframe backs `Storage` with localStorage, natively with its app data file.

use std::fmt;

use eframe::Storage;

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;

pub const KEY_PREFIX: &str = "pattern_";
pub const MAX_NAME_LEN: usize = 64;

/// A validated pattern name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternName(String);

impl PatternName {
    /// Trims surrounding whitespace, then accepts letters, digits, spaces,
    /// `-`, `_` and `.` up to `MAX_NAME_LEN` characters.
    pub fn parse(raw: &str) -> LifeResult<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(LifeError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(LifeError::NameTooLong { max: MAX_NAME_LEN });
        }
        if let Some(found) = name
            .chars()
            .find(|&c| !(c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.')))
        {
            return Err(LifeError::InvalidName {
                name: name.to_owned(),
                found,
            });
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn storage_key(&self) -> String {
        format!("{KEY_PREFIX}{}", self.0)
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes `grid` under `name`, replacing any pattern already saved there.
pub fn save_pattern(
    storage: &mut dyn Storage,
    name: &PatternName,
    grid: &Grid,
) -> LifeResult<()> {
    let key = name.storage_key();
    let encoded = serde_json::to_string(grid)?;
    if storage.get_string(&key).is_some() {
        log::info!("overwriting saved pattern \"{name}\"");
    }
    storage.set_string(&key, encoded);
    storage.flush();
    log::info!("saved pattern \"{name}\" ({} live cells)", grid.population());
    Ok(())
}

pub fn load_pattern(storage: &dyn Storage, name: &PatternName) -> LifeResult<Grid> {
    let Some(encoded) = storage.get_string(&name.storage_key()) else {
        return Err(LifeError::PatternNotFound {
            name: name.to_string(),
        });
    };
    let grid: Grid = serde_json::from_str(&encoded)?;
    log::info!("loaded pattern \"{name}\"");
    Ok(grid)
}

/// In-memory storage for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStorage {
    pub entries: std::collections::HashMap<String, String>,
    pub flushes: usize,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
