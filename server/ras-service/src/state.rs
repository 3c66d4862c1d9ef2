//! Shared, read-only handler state.

use ras_engine::Config;

pub struct AppState {
  pub config: Config,
}
