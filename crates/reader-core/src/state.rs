use std::{fs, io::Write, path::Path, path::PathBuf};

use crate::{config, types::HistoryRecord};

pub fn config_dir() -> Option<PathBuf> {
    config::config_root()
}

fn history_path(dir: &Path) -> PathBuf {
    dir.join("history.json")
}

/// Past search terms, most recent first. Missing or unreadable state is an
/// empty history, never an error.
pub fn load_history() -> Vec<String> {
    match config_dir() {
        Some(dir) => load_history_from(&dir),
        None => Vec::new(),
    }
}

pub fn load_history_from(dir: &Path) -> Vec<String> {
    fs::read(history_path(dir))
        .ok()
        .and_then(|data| serde_json::from_slice::<HistoryRecord>(&data).ok())
        .map(|record| record.terms)
        .unwrap_or_default()
}

pub fn save_history(terms: &[String]) -> std::io::Result<()> {
    let dir = config_dir()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no config dir"))?;
    save_history_to(&dir, terms)
}

pub fn save_history_to(dir: &Path, terms: &[String]) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let record = HistoryRecord {
        terms: terms.to_vec(),
        saved_at: chrono::Utc::now().to_rfc3339(),
    };
    let mut f = fs::File::create(history_path(dir))?;
    let s = serde_json::to_string_pretty(&record).unwrap_or_else(|_| "{}".into());
    f.write_all(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let terms = vec!["latest".to_string(), "older".to_string()];
        save_history_to(dir.path(), &terms).unwrap();
        assert_eq!(load_history_from(dir.path()), terms);
    }

    #[test]
    fn missing_history_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_history_from(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_history_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("history.json"), b"not json").unwrap();
        assert!(load_history_from(dir.path()).is_empty());
    }

    #[test]
    fn save_overwrites_previous_terms() {
        let dir = tempfile::tempdir().unwrap();
        save_history_to(dir.path(), &["first".to_string()]).unwrap();
        save_history_to(dir.path(), &["second".to_string()]).unwrap();
        assert_eq!(load_history_from(dir.path()), vec!["second".to_string()]);
    }
}
