//! Service configuration from the environment.

use ras_engine::Config;

pub const DEFAULT_PORT: u16 = 5005;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
  pub port: u16,
  pub engine: Config,
}

impl ServiceConfig {
  /// Reads `PORT` and `RAS_ESTIMATE_SPLITS` (`true`/`false`).
  pub fn from_env() -> Result<Self, String> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
    let port = match lookup("PORT") {
      Some(p) => p
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("PORT must be a valid u16: {}", e))?,
      None => DEFAULT_PORT,
    };

    let mut engine = Config::default();
    if let Some(v) = lookup("RAS_ESTIMATE_SPLITS") {
      engine.estimate_missing_splits = match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => return Err(format!("RAS_ESTIMATE_SPLITS must be true or false, got {:?}", other)),
      };
    }

    Ok(Self { port, engine })
  }
}
