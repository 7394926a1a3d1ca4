// crates/dinedb-core/src/config.rs
use crate::suggest::DEFAULT_SUGGESTION_LIMIT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for an [`Engine`](crate::Engine).
///
/// Every field has a default, so a partial JSON document such as
/// `{"suggestion_limit": 5}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cap on completions per keystroke.
    pub suggestion_limit: usize,
    /// How long a device location request may take, in milliseconds.
    pub locate_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            locate_timeout_ms: 10_000,
        }
    }
}

impl EngineConfig {
    pub fn locate_timeout(&self) -> Duration {
        Duration::from_millis(self.locate_timeout_ms)
    }

    /// Read a JSON config file.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            crate::DineError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
