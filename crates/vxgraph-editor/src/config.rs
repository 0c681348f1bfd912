//! Editor configuration.
//!
//! Read from environment variables:
//! - `VXGRAPH_MAX_UNDO`: undo depth (default: 5)
//! - `VXGRAPH_SHOW_VIRTUALS`: keep graph-local objects visible in derived
//!   graphs (default: false)

use serde::{Deserialize, Serialize};

pub const ENV_MAX_UNDO: &str = "VXGRAPH_MAX_UNDO";
pub const ENV_SHOW_VIRTUALS: &str = "VXGRAPH_SHOW_VIRTUALS";

/// Settings of one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Number of checkpoints kept; the oldest is discarded first.
    pub max_undo: usize,
    /// When false, graph-local pass-through objects are spliced out of the
    /// derived graphs.
    pub show_virtuals: bool,
    /// Base name for new graphs.
    pub default_graph_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            max_undo: 5,
            show_virtuals: false,
            default_graph_name: "graph".to_string(),
        }
    }
}

impl EditorConfig {
    /// Defaults overridden by the environment. Unparseable values are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = EditorConfig::default();
        if let Some(raw) = lookup(ENV_MAX_UNDO) {
            match raw.trim().parse::<usize>() {
                Ok(depth) => config.max_undo = depth,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_MAX_UNDO),
            }
        }
        if let Some(raw) = lookup(ENV_SHOW_VIRTUALS) {
            match parse_flag(&raw) {
                Some(flag) => config.show_virtuals = flag,
                None => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_SHOW_VIRTUALS),
            }
        }
        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.max_undo, 5);
        assert!(!config.show_virtuals);
        assert_eq!(config.default_graph_name, "graph");
    }

    #[test]
    fn environment_overrides() {
        let config =
            EditorConfig::from_lookup(lookup(&[(ENV_MAX_UNDO, "12"), (ENV_SHOW_VIRTUALS, "TRUE")]));
        assert_eq!(config.max_undo, 12);
        assert!(config.show_virtuals);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config =
            EditorConfig::from_lookup(lookup(&[(ENV_MAX_UNDO, "-3"), (ENV_SHOW_VIRTUALS, "maybe")]));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"max_undo": 2}"#).unwrap();
        assert_eq!(config.max_undo, 2);
        assert_eq!(config.default_graph_name, "graph");
    }
}
