use std::path::{Path, PathBuf};
use tracing::warn;

pub const CSV_EXTENSION: &str = "csv";

/// Pick a path in `dir` for `{base}.{extension}` that does not exist yet,
/// falling back to `{base}_1`, `{base}_2`, ... Creates `dir` if needed.
///
/// Not safe against another process writing to the same directory concurrently.
pub fn allocate_path(dir: &Path, base: &str, extension: &str) -> std::io::Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    let mut path = dir.join(format!("{base}.{extension}"));
    let mut counter = 1;
    while path.exists() {
        warn!(path = %path.display(), "File already exists, trying next suffix");
        path = dir.join(format!("{base}_{counter}.{extension}"));
        counter += 1;
    }
    Ok(path)
}

pub fn allocate_csv_path(dir: &Path, base: &str) -> std::io::Result<PathBuf> {
    allocate_path(dir, base, CSV_EXTENSION)
}
