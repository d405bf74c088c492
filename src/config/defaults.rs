pub const DEFAULT_CONFIG_FILE: &str = ".splitreviews.yaml";

pub const DEFAULT_SMTP_PORT: u16 = 25;
