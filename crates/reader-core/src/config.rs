use std::path::PathBuf;

use directories::ProjectDirs;

pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "readify";
pub const APPLICATION: &str = "readify";

pub fn config_root() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).map(|p| p.config_dir().to_path_buf())
}
