//! Assistant configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the stock behaviour. Configuration is read by the caller and
//! handed to the builder; the context builder itself never reads files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// How many movies each context shape may list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextLimits {
    /// Genre requests, over the merged catalog
    pub genre: usize,
    /// Popular movies offered when a genre request matches nothing
    pub genre_fallback: usize,
    /// Single-bucket requests (upcoming, now playing, popular, top rated)
    pub category: usize,
    /// Popular section of a general request
    pub general_popular: usize,
    /// Top-rated section of a general request
    pub general_top_rated: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self {
            genre: 25,
            genre_fallback: 8,
            category: 15,
            general_popular: 8,
            general_top_rated: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub limits: ContextLimits,
    /// Favorites listed in the user prompt's summary
    pub favorites_summary_limit: usize,
    /// Messages kept per chat session
    pub max_history: usize,
    /// Idle time after which a session is evicted
    pub session_ttl_secs: u64,
    /// How often idle sessions are swept
    pub sweep_interval_secs: u64,
    /// Name used when the caller doesn't supply one
    pub default_user_name: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            limits: ContextLimits::default(),
            favorites_summary_limit: 15,
            max_history: session::DEFAULT_MAX_HISTORY,
            session_ttl_secs: 30 * 60,
            sweep_interval_secs: 60,
            default_user_name: "there".to_string(),
        }
    }
}

impl AssistantConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.limits.genre, 25);
        assert_eq!(config.limits.genre_fallback, 8);
        assert_eq!(config.limits.category, 15);
        assert_eq!(config.limits.general_popular, 8);
        assert_eq!(config.limits.general_top_rated, 6);
        assert_eq!(config.favorites_summary_limit, 15);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AssistantConfig::from_json(r#"{"limits": {"category": 5}, "max_history": 4}"#).unwrap();
        assert_eq!(config.limits.category, 5);
        assert_eq!(config.limits.genre, 25);
        assert_eq!(config.max_history, 4);
        assert_eq!(config.session_ttl(), Duration::from_secs(1800));
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(AssistantConfig::from_json("{}").unwrap(), AssistantConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(AssistantConfig::from_json("{\"limits\": 3}").is_err());
    }
}
