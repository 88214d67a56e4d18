//! Persistence for the last successful lookup
//!
//! Stores one JSON document in the platform data directory so the next run
//! with no arguments can repeat the previous lookup. The store is a plain
//! get/set abstraction injected into startup; corrupt or missing files read
//! as "nothing saved".

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::data::Coordinate;

/// File name for the saved lookup document
const STORE_FILE: &str = "last_location.json";

/// The persisted form of a lookup request
///
/// Serialized as `{"type":"city","value":"..."}` or
/// `{"type":"coordinates","value":{"lat":..,"lon":..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SavedLookup {
    /// A city-name lookup
    City(String),
    /// A coordinate lookup
    Coordinates {
        lat: f64,
        lon: f64,
    },
}

impl SavedLookup {
    /// Returns the saved coordinate, for coordinate lookups
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            SavedLookup::City(_) => None,
            SavedLookup::Coordinates { lat, lon } => Some(Coordinate {
                latitude: *lat,
                longitude: *lon,
            }),
        }
    }
}

/// Reads and writes the saved lookup document
#[derive(Debug, Clone)]
pub struct LocationStore {
    store_dir: PathBuf,
}

impl LocationStore {
    /// Creates a store in the platform data directory
    ///
    /// Returns `None` if the directory cannot be determined (e.g., no home
    /// directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "skycast")?;
        Some(Self {
            store_dir: project_dirs.data_dir().to_path_buf(),
        })
    }

    /// Creates a store in a custom directory (for testing)
    pub fn with_dir(store_dir: PathBuf) -> Self {
        Self { store_dir }
    }

    fn store_path(&self) -> PathBuf {
        self.store_dir.join(STORE_FILE)
    }

    /// Loads the saved lookup, if any
    ///
    /// A missing or unparseable file reads as `None`; the saved lookup is a
    /// convenience, never a hard requirement.
    pub fn load(&self) -> Option<SavedLookup> {
        let content = fs::read_to_string(self.store_path()).ok()?;
        match serde_json::from_str(&content) {
            Ok(saved) => Some(saved),
            Err(err) => {
                tracing::warn!("Ignoring corrupt saved location: {}", err);
                None
            }
        }
    }

    /// Saves the lookup, replacing any previous document
    pub fn save(&self, lookup: &SavedLookup) -> std::io::Result<()> {
        fs::create_dir_all(&self.store_dir)?;

        let json = serde_json::to_string_pretty(lookup)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.store_path(), json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (LocationStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = LocationStore::with_dir(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_load_returns_none_when_nothing_saved() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_city_lookup_roundtrip() {
        let (store, _temp_dir) = create_test_store();
        let saved = SavedLookup::City("Vancouver".to_string());

        store.save(&saved).expect("Save should succeed");

        assert_eq!(store.load(), Some(saved));
    }

    #[test]
    fn test_coordinate_lookup_roundtrip() {
        let (store, _temp_dir) = create_test_store();
        let saved = SavedLookup::Coordinates {
            lat: 49.2827,
            lon: -123.1207,
        };

        store.save(&saved).expect("Save should succeed");

        let loaded = store.load().expect("Should load saved lookup");
        let coordinate = loaded.coordinate().expect("Should carry a coordinate");
        assert!((coordinate.latitude - 49.2827).abs() < 1e-9);
        assert!((coordinate.longitude - (-123.1207)).abs() < 1e-9);
    }

    #[test]
    fn test_save_uses_discriminated_json_shape() {
        let (store, temp_dir) = create_test_store();

        store
            .save(&SavedLookup::City("Oslo".to_string()))
            .expect("Save should succeed");

        let content = fs::read_to_string(temp_dir.path().join(STORE_FILE))
            .expect("Store file should exist");
        assert!(content.contains("\"type\""));
        assert!(content.contains("\"city\""));
        assert!(content.contains("\"Oslo\""));
    }

    #[test]
    fn test_save_overwrites_previous_lookup() {
        let (store, _temp_dir) = create_test_store();

        store
            .save(&SavedLookup::City("Oslo".to_string()))
            .expect("First save should succeed");
        store
            .save(&SavedLookup::Coordinates { lat: 1.0, lon: 2.0 })
            .expect("Second save should succeed");

        assert_eq!(
            store.load(),
            Some(SavedLookup::Coordinates { lat: 1.0, lon: 2.0 })
        );
    }

    #[test]
    fn test_corrupt_file_reads_as_none() {
        let (store, temp_dir) = create_test_store();
        fs::write(temp_dir.path().join(STORE_FILE), "{ not json").expect("Write should succeed");

        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("nested").join("store");
        let store = LocationStore::with_dir(nested.clone());

        store
            .save(&SavedLookup::City("Lima".to_string()))
            .expect("Save should succeed");

        assert!(nested.join(STORE_FILE).exists());
    }

    #[test]
    fn test_city_lookup_has_no_coordinate() {
        assert!(SavedLookup::City("Quito".to_string()).coordinate().is_none());
    }
}
