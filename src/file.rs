// src/file.rs

use std::{
    fs,
    io,
    path::Path,
};

/// Create `dir` and any missing parents.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

/// Write the whole output in one go, creating parent directories first.
pub fn write_output(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_output_creates_parents() {
        let mut dir = std::env::temp_dir();
        dir.push("dh_scrape_file_test");
        let _ = fs::remove_dir_all(&dir);

        let path = dir.join("nested").join("robots.md");
        write_output(&path, b"## UR5\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "## UR5\n");

        let _ = fs::remove_dir_all(&dir);
    }
}
