use std::path::Path;

/// Prefers the path relative to the working directory when it is shorter
/// and does not climb past `../..`.
pub fn display_path(path: &Path) -> String {
    let full = path.to_string_lossy();
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(rel) = pathdiff::diff_paths(path, &cwd) {
            let rel = rel.to_string_lossy();
            if !rel.is_empty() && rel.len() < full.len() && !rel.starts_with("../..") {
                return rel.into_owned();
            }
        }
    }
    full.into_owned()
}

/// 1024-based human-readable byte count, one decimal above a kilobyte.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0usize;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let units = ['K', 'M', 'G', 'T', 'P', 'E'];
    format!("{:.1} {}B", bytes as f64 / div as f64, units[exp])
}
