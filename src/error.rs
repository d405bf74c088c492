use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing config key '{0}'")]
    MissingKey(&'static str),

    #[error("Invalid mail server '{0}', expected host or host:port")]
    InvalidMailServer(String),
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Line {line}: expected 'name,group', found '{content}'")]
    Malformed { line: usize, content: String },
}

#[derive(Error, Debug)]
pub enum AssignError {
    #[error("Cannot split reviews without any reviewers")]
    NoReviewers,
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid email address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("No recipients to send to")]
    NoRecipients,

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("Mail transport failed: {0}")]
    Transport(String),
}
