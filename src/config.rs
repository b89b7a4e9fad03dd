// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::search::DEFAULT_CALL_BUDGET;
use crate::types::Direction;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub search: SearchConfig,
    pub appearance: AppearanceConfig,
    pub fallback: FallbackConfig,
    pub debug: DebugConfig,
}

/// Path search limits
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Recursive search calls allowed per food target
    pub call_budget: usize,
}

/// Values reported on GET / and POST /start
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppearanceConfig {
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub taunt: Option<String>,
    pub head_url: Option<String>,
}

/// What to answer when no path is found or the request cannot be used
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FallbackConfig {
    pub direction: Direction,
    pub parse_error_taunt: String,
    /// Try any in-bounds empty neighbour before falling back to `direction`
    pub prefer_safe_move: bool,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig {
                call_budget: DEFAULT_CALL_BUDGET,
            },
            appearance: AppearanceConfig {
                author: "pathfinder-snake".to_string(),
                color: "#00FF00".to_string(),
                head: "default".to_string(),
                tail: "default".to_string(),
                taunt: Some("battlesnake-go!".to_string()),
                head_url: None,
            },
            fallback: FallbackConfig {
                direction: Direction::Up,
                parse_error_taunt: "can't parse this!".to_string(),
                prefer_safe_move: true,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
