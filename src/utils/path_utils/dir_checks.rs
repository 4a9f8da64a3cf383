use super::expansion::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Value parser for `--download-dir`: the directory downloads are written to.
///
/// A missing directory is created. The result must be a directory that accepts
/// a scratch file, so a download never fails halfway on permissions.
pub fn check_writable_dir(dir: &str) -> Result<PathBuf, String> {
    let target = expand_tilde(Path::new(dir))?;

    if !target.exists() {
        fs::create_dir_all(&target)
            .map_err(|e| format!("Cannot create download dir '{}': {e}", target.display()))?;
    }
    if !target.is_dir() {
        return Err(format!("Download dir '{}' is a file", target.display()));
    }

    match tempfile::tempfile_in(&target) {
        Ok(_) => Ok(target),
        Err(e) => Err(format!("Download dir '{}' is not writable: {e}", target.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_is_created() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("downloads/nested");
        let checked = check_writable_dir(target.to_str().unwrap()).unwrap();
        assert!(checked.is_dir());
    }

    #[test]
    fn test_file_is_not_a_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(check_writable_dir(file.path().to_str().unwrap()).is_err());
    }
}
