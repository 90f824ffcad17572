//! File system locations and helpers for cached snapshots and the counter database

use dirs;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};


/// Base directory: `~/.cache/prop-score` (or `./.cache/prop-score` without a home).
pub fn cache_base_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("prop-score")
}

/// Path: ~/.cache/prop-score/odds-snapshot.json
pub fn snapshot_cache_path() -> PathBuf {
    cache_base_dir().join("odds-snapshot.json")
}

/// Path: ~/.cache/prop-score/comparisons.db
pub fn default_database_path() -> PathBuf {
    cache_base_dir().join("comparisons.db")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
