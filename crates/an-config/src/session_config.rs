use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Mock backend latency constraints
pub const MIN_MOCK_LATENCY_MS: u64 = 0;
pub const MAX_MOCK_LATENCY_MS: u64 = 10_000;
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1_000;

/// Session container settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated network delay applied by the mock auth backend
    pub mock_latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.mock_latency_ms > MAX_MOCK_LATENCY_MS {
            return Err(ConfigError::session(format!(
                "session.mock_latency_ms must be {}-{}, got {}",
                MIN_MOCK_LATENCY_MS, MAX_MOCK_LATENCY_MS, self.mock_latency_ms
            )));
        }

        Ok(())
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}
