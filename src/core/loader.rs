//! Locating and parsing `.bot` files.
//!
//! The registry core never touches the filesystem; these functions are
//! the boundary that turns a directory or path into a
//! [`BotConfiguration`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::BotConfiguration;
use crate::core::constants;
use crate::error::{BotfileError, Result};

/// Find the single `*.bot` file in a directory.
///
/// # Errors
///
/// Returns `BotFileNotFound` if the directory has no `.bot` file and
/// `MultipleBotFiles` if it has more than one, since there is no way to
/// pick between them.
pub fn find_bot_file(dir: &Path) -> Result<PathBuf> {
    let mut found: Option<PathBuf> = None;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some(constants::BOT_FILE_EXTENSION) {
            if found.is_some() {
                return Err(BotfileError::MultipleBotFiles(dir.to_path_buf()));
            }
            found = Some(path);
        }
    }
    found.ok_or_else(|| BotfileError::BotFileNotFound(dir.to_path_buf()))
}

/// Load a bot configuration from a specific file.
///
/// # Errors
///
/// Returns an io error if the file cannot be read, or a parse error if
/// the contents are not a valid bot document.
pub fn load_file(path: &Path) -> Result<BotConfiguration> {
    debug!(path = %path.display(), "loading bot file");

    let contents = std::fs::read_to_string(path)?;
    let config: BotConfiguration = serde_json::from_str(&contents)?;

    debug!(services = config.services.len(), "bot file loaded");
    Ok(config)
}

/// Load the single `.bot` file found in a directory.
pub fn load_dir(dir: &Path) -> Result<BotConfiguration> {
    load_file(&find_bot_file(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_single_bot_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("my.bot"), "{}").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let found = find_bot_file(tmp.path()).unwrap();
        assert_eq!(found.file_name().and_then(|n| n.to_str()), Some("my.bot"));
    }

    #[test]
    fn test_no_bot_file_errors() {
        let tmp = TempDir::new().unwrap();
        let err = find_bot_file(tmp.path()).unwrap_err();
        assert!(matches!(err, BotfileError::BotFileNotFound(_)));
    }

    #[test]
    fn test_multiple_bot_files_errors() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.bot"), "{}").unwrap();
        std::fs::write(tmp.path().join("b.bot"), "{}").unwrap();

        let err = find_bot_file(tmp.path()).unwrap_err();
        assert!(matches!(err, BotfileError::MultipleBotFiles(_)));
    }

    #[test]
    fn test_load_file_parses_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sample.bot");
        std::fs::write(
            &path,
            r#"{"name":"sample","services":[{"type":"luis","name":"orders"}]}"#,
        )
        .unwrap();

        let config = load_file(&path).unwrap();
        assert_eq!(config.name.as_deref(), Some("sample"));
        assert_eq!(config.services.len(), 1);
        assert!(!config.services[0].is_decrypted());
    }

    #[test]
    fn test_load_file_rejects_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.bot");
        std::fs::write(&path, "not json").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, BotfileError::Parse(_)));
    }
}
