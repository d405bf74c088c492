mod defaults;
mod types;

pub use defaults::DEFAULT_CONFIG_FILE;
pub use types::*;

use crate::error::ConfigError;
use defaults::DEFAULT_SMTP_PORT;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file. A missing file is an empty config,
    /// since keys are only needed when a flag asks for them.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn gerrit_url(&self) -> Result<&str, ConfigError> {
        required(&self.gerrit_url, "gerrit_url").map(|url| url.trim_end_matches('/'))
    }

    pub fn from_email(&self) -> Result<&str, ConfigError> {
        required(&self.from_email, "from_email")
    }

    pub fn to_email(&self) -> Result<Vec<String>, ConfigError> {
        let addresses = self
            .to_email
            .as_ref()
            .map(Recipients::addresses)
            .unwrap_or_default();

        if addresses.is_empty() {
            return Err(ConfigError::MissingKey("to_email"));
        }
        Ok(addresses)
    }

    pub fn mail_server(&self) -> Result<MailServer, ConfigError> {
        let raw = required(&self.mail_server, "mail_server")?;

        let (host, port) = match raw.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidMailServer(raw.to_string()))?;
                (host, port)
            }
            None => (raw, DEFAULT_SMTP_PORT),
        };

        if host.is_empty() {
            return Err(ConfigError::InvalidMailServer(raw.to_string()));
        }

        Ok(MailServer {
            host: host.to_string(),
            port,
        })
    }
}

fn required<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingKey(key)),
    }
}
