// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::power::PowerRecord;

/// Write the record list as pretty-printed JSON. Parent directories are created.
pub fn save_records(path: &Path, records: &[PowerRecord]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<PowerRecord>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("File '{}' could not be read: {e}", path.display()))?;
    let records = serde_json::from_str(&raw)
        .map_err(|e| format!("File '{}' is not a list of power records: {e}", path.display()))?;
    Ok(records)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Files in `dir` whose extension is exactly `ext`, sorted by file name.
pub fn list_files_with_ext(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Directory '{}' could not be read: {e}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Duplicate handling **only within this run**
pub fn resolve_card_path(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem>_N.ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem}_{}.{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_stems_are_numbered() {
        let mut seen = HashMap::new();
        let dir = Path::new("out");
        assert_eq!(resolve_card_path(dir, "Blink", &mut seen, "svg"), dir.join("Blink.svg"));
        assert_eq!(resolve_card_path(dir, "Blink", &mut seen, "svg"), dir.join("Blink_2.svg"));
        assert_eq!(resolve_card_path(dir, "Blink", &mut seen, "svg"), dir.join("Blink_3.svg"));
        assert_eq!(resolve_card_path(dir, "Warp", &mut seen, "svg"), dir.join("Warp.svg"));
    }

    #[test]
    fn listing_filters_and_sorts() {
        let dir = std::env::temp_dir().join(format!("powercards_list_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for name in ["b.png", "a.png", "c.svg", "d.PNG"] {
            fs::write(dir.join(name), b"x").unwrap();
        }
        let names: Vec<String> = list_files_with_ext(&dir, "png")
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn non_string_values_are_rejected() {
        let path = std::env::temp_dir().join(format!("powercards_bad_{}.json", std::process::id()));
        fs::write(&path, r#"[{"power": "X", "cost": 5}]"#).unwrap();
        assert!(load_records(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
