use serde::{Deserialize, Serialize};

const APP_NAME: &str = "whoisparse";
const FILE_NAME: Option<&str> = None;

/// Persisted lookup defaults. CLI flags override each field.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct UserConfig {
  pub follow: Option<u16>,
  pub timeout_secs: Option<u64>,
  pub server: Option<String>,
}

/// Read ~/.config/whoisparse/default-config.toml (or OS equivalent).
pub fn load() -> UserConfig {
  confy::load(APP_NAME, FILE_NAME).unwrap_or_default()
}

pub fn store(cfg: &UserConfig) -> anyhow::Result<()> {
  confy::store(APP_NAME, FILE_NAME, cfg).map_err(Into::into)
}
