//! Dataset persistence module
//!
//! The data file is the system of record. Every command reads it in full,
//! and every mutation writes it back in full. Stored as pretty-printed JSON.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DaybookError, Result};
use crate::models::Dataset;

/// Make sure the data file exists, seeding it with an empty dataset.
/// An existing file is never touched.
///
/// The seed is written to the temp file and hard-linked into place, so the
/// data file only ever appears with complete content.
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| unavailable(parent, e))?;
    }

    let tmp = temp_path(path);
    let seeded = fs::write(&tmp, to_json(&Dataset::default())?)
        .map_err(|e| unavailable(&tmp, e))
        .and_then(|()| match fs::hard_link(&tmp, path) {
            Ok(()) => {
                debug!(path = %path.display(), "seeded empty data file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(unavailable(path, e)),
        });
    discard_temp(&tmp);

    seeded
}

/// Load the full dataset from disk
pub fn load(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path).map_err(|e| unavailable(path, e))?;

    let dataset: Dataset =
        serde_json::from_str(&content).map_err(|e| DaybookError::DataCorruption {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    dataset
        .check_invariants()
        .map_err(|reason| DaybookError::DataCorruption {
            path: path.to_path_buf(),
            reason,
        })?;

    debug!(path = %path.display(), tasks = dataset.tasks.len(), "loaded dataset");
    Ok(dataset)
}

/// Overwrite the data file with `dataset`.
///
/// Writes to a sibling temp file first and renames it into place, so readers
/// only ever see the old or the new content.
pub fn save(dataset: &Dataset, path: &Path) -> Result<()> {
    let json = to_json(dataset)?;
    let tmp = temp_path(path);

    if tmp.exists() {
        warn!(path = %tmp.display(), "replacing leftover temp file");
    }

    fs::write(&tmp, json).map_err(|e| unavailable(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| unavailable(path, e))?;

    debug!(path = %path.display(), tasks = dataset.tasks.len(), "saved dataset");
    Ok(())
}

fn to_json(dataset: &Dataset) -> Result<String> {
    let mut json = serde_json::to_string_pretty(dataset)?;
    json.push('\n');
    Ok(json)
}

fn discard_temp(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        if e.kind() != ErrorKind::NotFound {
            warn!(path = %tmp.display(), error = %e, "could not remove temp file");
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn unavailable(path: &Path, source: std::io::Error) -> DaybookError {
    DaybookError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_directories_and_empty_dataset() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/tasks.json");

        init(&path).unwrap();

        assert!(path.exists());
        assert_eq!(load(&path).unwrap(), Dataset::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        let mut dataset = Dataset::default();
        dataset.add_task("keep me".to_string(), 10, Utc::now()).unwrap();
        save(&dataset, &path).unwrap();

        init(&path).unwrap();

        assert_eq!(load(&path).unwrap(), dataset);
    }

    #[test]
    fn test_failed_seed_leaves_no_data_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        // A directory squatting on the temp name makes the seed write fail
        fs::create_dir(temp_path(&path)).unwrap();

        let err = init(&path).unwrap_err();

        assert!(matches!(err, DaybookError::StorageUnavailable { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_init_cleans_up_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        init(&path).unwrap();

        assert!(!temp_path(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.is_empty());
        assert_eq!(load(&path).unwrap(), Dataset::default());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        let mut dataset = Dataset::default();
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        dataset.add_task("Write report".to_string(), 30, created).unwrap();
        dataset.add_task("Review PR".to_string(), 0, created).unwrap();
        dataset
            .complete(1, Utc.with_ymd_and_hms(2024, 1, 16, 8, 0, 0).unwrap())
            .unwrap();

        save(&dataset, &path).unwrap();
        assert_eq!(load(&path).unwrap(), dataset);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_roundtrip_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        save(&Dataset::default(), &path).unwrap();
        let loaded = load(&path).unwrap();
        assert!(loaded.tasks.is_empty());
        assert_eq!(loaded.next_id, 1);
    }

    #[test]
    fn test_load_accepts_compact_encoding() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(
            &path,
            r#"{"next_id":3,"tasks":[{"completed":null,"created":"2024-01-15T09:00:00+00:00","est_minutes":5,"text":"a","id":2}]}"#,
        )
        .unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.tasks[0].id, 2);
        assert_eq!(loaded.next_id, 3);
    }

    #[test]
    fn test_load_garbage_is_data_corruption() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, DaybookError::DataCorruption { .. }));
    }

    #[test]
    fn test_load_wrong_schema_is_data_corruption() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, r#"{"tasks": "oops", "next_id": 1}"#).unwrap();

        assert!(matches!(
            load(&path).unwrap_err(),
            DaybookError::DataCorruption { .. }
        ));
    }

    #[test]
    fn test_load_broken_invariant_is_data_corruption() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(
            &path,
            r#"{"tasks":[{"id":4,"text":"a","est_minutes":0,"created":"2024-01-15T09:00:00Z","completed":null}],"next_id":2}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("next_id 2"));
    }

    #[test]
    fn test_load_missing_file_is_storage_unavailable() {
        let temp = TempDir::new().unwrap();
        let err = load(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DaybookError::StorageUnavailable { .. }));
    }
}
