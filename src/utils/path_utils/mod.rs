mod dir_checks;
mod expansion;
mod file_checks;

pub use dir_checks::check_writable_dir;
pub use file_checks::{check_parent_dir_writable, check_readable_file};
