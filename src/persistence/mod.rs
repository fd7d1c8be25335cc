use std::{
    collections::{
        BTreeMap,
        HashMap,
    },
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    models::{
        CardId,
        Status,
    },
    Result,
};

const APP_NAME: &str = "kioku";

/// Persisted statuses keyed by card id. Ordered so repeated writes of the
/// same statuses produce identical files.
pub type StatusMap = BTreeMap<CardId, Status>;

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    log::debug!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> Result<T> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    log::debug!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<()> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json_from::<T>(&get_data_file_path(filename)) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

/// Durable key-value store for card statuses.
pub trait StatusStorage: Send {
    /// Returns every stored status. Missing data is an empty map, not an error.
    fn read(&self) -> Result<StatusMap>;

    /// Replaces the stored map with `statuses`.
    fn write(&mut self, statuses: &StatusMap) -> Result<()>;
}

/// Decodes the raw `{"<id>": "<status key>"}` object. Entries whose id is not
/// a row number or whose status is not a known key are dropped.
pub fn decode_status_map(raw: HashMap<String, String>) -> StatusMap {
    let mut statuses = StatusMap::new();
    for (key, value) in raw {
        let Ok(id) = key.trim().parse::<u32>() else {
            log::warn!("Ignoring persisted status with invalid card id {:?}", key);
            continue;
        };
        match Status::from_key(&value) {
            Some(status) => {
                statuses.insert(CardId(id), status);
            }
            None => log::warn!("Ignoring unknown status {:?} for card {}", value, id),
        }
    }
    statuses
}

pub struct JsonFileStatusStorage {
    path: PathBuf,
}

impl JsonFileStatusStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage file inside the application data directory.
    pub fn in_app_data(filename: &str) -> Self {
        Self::new(get_data_file_path(filename))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusStorage for JsonFileStatusStorage {
    fn read(&self) -> Result<StatusMap> {
        let raw = load_json_from::<HashMap<String, String>>(&self.path)?;
        Ok(decode_status_map(raw))
    }

    fn write(&mut self, statuses: &StatusMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        save_json_to(statuses, &self.path)
    }
}

/// Volatile storage, used when no data directory is wanted and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStatusStorage {
    statuses: StatusMap,
}

impl MemoryStatusStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(statuses: StatusMap) -> Self {
        Self { statuses }
    }

    pub fn statuses(&self) -> &StatusMap {
        &self.statuses
    }
}

impl StatusStorage for MemoryStatusStorage {
    fn read(&self) -> Result<StatusMap> {
        Ok(self.statuses.clone())
    }

    fn write(&mut self, statuses: &StatusMap) -> Result<()> {
        self.statuses = statuses.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_data_storage_lives_in_data_dir() {
        let storage = JsonFileStatusStorage::in_app_data("flashcardStatuses.json");
        assert_eq!(storage.path(), get_data_file_path("flashcardStatuses.json").as_path());
        assert!(storage.path().starts_with(get_app_data_dir()));
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStatusStorage::new(dir.path().join("statuses.json"));
        assert!(storage.read().unwrap().is_empty());
    }

    #[test]
    fn test_file_storage_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("statuses.json");
        let mut storage = JsonFileStatusStorage::new(&path);

        let mut statuses = StatusMap::new();
        statuses.insert(CardId(2), Status::Memorized);
        statuses.insert(CardId(10), Status::LearnableProduction);
        storage.write(&statuses).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"2\": \"memorized\""));
        assert!(json.contains("\"10\": \"make\""));

        assert_eq!(storage.read().unwrap(), statuses);
    }

    #[test]
    fn test_repeated_writes_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statuses.json");
        let mut storage = JsonFileStatusStorage::new(&path);

        let statuses: StatusMap =
            (2..20).map(|id| (CardId(id), Status::ALL[id as usize % 4])).collect();
        storage.write(&statuses).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        storage.write(&statuses).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_entries_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statuses.json");
        fs::write(&path, r#"{"2": "memorized", "3": "mastered", "abc": "unknown"}"#).unwrap();

        let statuses = JsonFileStatusStorage::new(&path).read().unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses.get(&CardId(2)), Some(&Status::Memorized));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statuses.json");
        fs::write(&path, "not json").unwrap();

        assert!(JsonFileStatusStorage::new(&path).read().is_err());
    }

    #[test]
    fn test_memory_storage_overwrites_whole_map() {
        let mut first = StatusMap::new();
        first.insert(CardId(4), Status::Unknown);
        let mut storage = MemoryStatusStorage::with_statuses(first);

        let mut second = StatusMap::new();
        second.insert(CardId(5), Status::Memorized);
        storage.write(&second).unwrap();

        assert_eq!(storage.statuses(), &second);
        assert_eq!(storage.read().unwrap(), second);
    }
}
