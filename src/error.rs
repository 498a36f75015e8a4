use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotfileError {
    #[error("no `{service_type}` service{suffix} found in the bot configuration", suffix = .name.as_ref().map(|n| format!(" named `{n}`")).unwrap_or_default())]
    ServiceNotFound {
        service_type: String,
        name: Option<String>,
    },

    #[error("invalid service type `{0}`: expected one of endpoint, abs, luis, qna, dispatch")]
    InvalidServiceType(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("no *.bot file found in {}", .0.display())]
    BotFileNotFound(PathBuf),

    #[error("multiple *.bot files found in {}", .0.display())]
    MultipleBotFiles(PathBuf),

    #[error("invalid hex ciphertext: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bot file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BotfileError>;
