// config.rs - Host configuration
//
// Read from environment variables, falling back to defaults with a warning
// when a value cannot be used.

use std::env;
use std::path::PathBuf;

use life_engine::LifeConfig;

/// Refresh rate assumed when the monitor cannot be queried.
pub const FALLBACK_REFRESH_HZ: u32 = 60;

#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    /// JSON file holding a `LifeConfig`
    pub life_config_path: Option<PathBuf>,
    /// Forces the monitor refresh rate used for edit-mode pacing
    pub refresh_hz: Option<u32>,
    /// Drop back to edit mode once the grid repeats a recent generation
    pub stop_on_cycle: bool,
}

impl HostConfig {
    /// Create config from `LIFE_CONFIG`, `LIFE_REFRESH_HZ` and
    /// `LIFE_STOP_ON_CYCLE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("LIFE_CONFIG") {
            config.life_config_path = Some(PathBuf::from(path));
        }

        if let Ok(hz) = env::var("LIFE_REFRESH_HZ") {
            match hz.parse::<u32>() {
                Ok(hz) if hz > 1 => config.refresh_hz = Some(hz),
                _ => tracing::warn!(value = %hz, "ignoring LIFE_REFRESH_HZ"),
            }
        }

        config.stop_on_cycle = env::var("LIFE_STOP_ON_CYCLE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config
    }

    /// The engine configuration, or the defaults if the file is unusable.
    pub fn life_config(&self) -> LifeConfig {
        let Some(path) = &self.life_config_path else {
            return LifeConfig::default();
        };
        match LifeConfig::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to default configuration");
                LifeConfig::default()
            }
        }
    }
}
