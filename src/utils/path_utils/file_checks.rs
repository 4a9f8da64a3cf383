use super::expansion::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Checks if a file is readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    let expanded_path = expand_tilde(&path)?;

    if expanded_path.is_file() && fs::File::open(&expanded_path).is_ok() {
        Ok(expanded_path)
    } else {
        Err(format!("The file '{file}' is not readable."))
    }
}

/// Checks that a file could be written at `file`: its parent directory must
/// exist and accept new files. The file itself is not created.
pub fn check_parent_dir_writable(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    let expanded_path = expand_tilde(&path)?;

    if expanded_path.is_dir() {
        return Err(format!("'{}' is a directory.", expanded_path.display()));
    }

    let parent = match expanded_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if !parent.is_dir() {
        return Err(format!(
            "The parent directory of '{}' does not exist.",
            expanded_path.display()
        ));
    }

    match tempfile::tempfile_in(&parent) {
        Ok(_) => Ok(expanded_path),
        Err(e) => Err(format!(
            "Directory '{}' is not writable: {}",
            parent.display(),
            e
        )),
    }
}
