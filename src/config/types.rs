use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Base URL that Gerrit queries are appended to
    #[serde(default)]
    pub gerrit_url: Option<String>,

    /// `host` or `host:port`
    #[serde(default)]
    pub mail_server: Option<String>,

    #[serde(default)]
    pub from_email: Option<String>,

    #[serde(default)]
    pub to_email: Option<Recipients>,
}

/// Either a YAML list or a single comma-separated string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Recipients {
    List(Vec<String>),
    Joined(String),
}

impl Recipients {
    pub fn addresses(&self) -> Vec<String> {
        let parts: Vec<&str> = match self {
            Recipients::List(list) => list.iter().map(String::as_str).collect(),
            Recipients::Joined(joined) => joined.split(',').collect(),
        };

        parts
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailServer {
    pub host: String,
    pub port: u16,
}
