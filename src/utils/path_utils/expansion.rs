use home::home_dir;
use std::path::{Path, PathBuf};

/// Resolve `~/...` in a `--download-dir` or key-file argument against `$HOME`.
pub(super) fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    home_dir()
        .map(|home| home.join(rest))
        .ok_or_else(|| format!("Cannot expand '{}': no home directory", path.display()))
}
