//! Generic JSON persistence helpers for ~/.surge/ save files.
//!
//! Every durable record (stats, progress map, achievement list, onboarding
//! flag) is one pretty-printed JSON file in this directory. Absent or
//! corrupt files fall back to defaults; loading never fails.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.surge/ directory path, creating it if needed.
pub fn save_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".surge");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.surge/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(save_dir()?.join(filename))
}

/// Load a JSON file from ~/.surge/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.surge/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Delete a save file if it exists. Used by the full-progress reset.
pub fn delete_save(filename: &str) -> io::Result<()> {
    let path = save_path(filename)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_dir_exists() {
        let dir = save_dir().expect("save_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".surge"));
    }

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".surge/test.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default("nonexistent_test_file_98765.json");
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_load_delete_roundtrip() {
        let data = vec!["alpha".to_string(), "beta".to_string()];
        save_json("persistence_roundtrip_test.json", &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default("persistence_roundtrip_test.json");
        assert_eq!(loaded, data);

        delete_save("persistence_roundtrip_test.json").expect("delete should succeed");
        let after: Vec<String> = load_json_or_default("persistence_roundtrip_test.json");
        assert!(after.is_empty());

        // Deleting again is fine
        delete_save("persistence_roundtrip_test.json").expect("second delete should succeed");
    }

    #[test]
    fn test_corrupt_file_returns_default() {
        let path = save_path("persistence_corrupt_test.json").unwrap();
        fs::write(&path, "{not valid json").unwrap();

        let loaded: Vec<String> = load_json_or_default("persistence_corrupt_test.json");
        assert!(loaded.is_empty());

        fs::remove_file(path).ok();
    }
}
