//! Asset download artifacts
//!
//! Writes one asset record to `<asset-name>.json`, pretty-printed, on
//! demand.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{AtelierError, Result};

/// Write an asset record to `<dir>/<name>.json`
///
/// The directory is created if needed. Returns the written path.
pub fn write_asset_json<T: Serialize>(dir: &Path, name: &str, data: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        AtelierError::Storage(format!("Failed to create directory {:?}: {}", dir, e))
    })?;

    let path = dir.join(format!("{}.json", name));
    let content = serde_json::to_string_pretty(data).map_err(|e| {
        AtelierError::Parse(format!("Failed to serialize asset '{}': {}", name, e))
    })?;

    fs::write(&path, content)
        .map_err(|e| AtelierError::Storage(format!("Failed to write {:?}: {}", path, e)))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::assets::Color;
    use crate::data::types::Asset;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_out_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("atelier_export_test_{}", id))
    }

    #[test]
    fn test_writes_named_pretty_json() {
        let dir = temp_out_dir();
        let asset = Asset::new("1", "Primary", Color::new("#3366FF"));

        let path = write_asset_json(&dir, &asset.name, &asset).unwrap();
        assert_eq!(path, dir.join("Primary.json"));

        let content = fs::read_to_string(&path).unwrap();
        // Pretty-printed: multi-line with indentation
        assert!(content.contains('\n'));
        let parsed: Asset<Color> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, asset);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = temp_out_dir().join("nested");
        let asset = Asset::new("1", "Primary", Color::new("#000"));

        let path = write_asset_json(&dir, &asset.name, &asset).unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(dir.parent().unwrap());
    }
}
