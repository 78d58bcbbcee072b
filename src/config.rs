//! Simulator configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file or a missing `--config` flag both yield a runnable setup.

use std::fs;
use std::path::Path;

use combat::BattleConfig;
use error::{Result, SimError, handle_error};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "battle_sim=info,combat=info,units=info,items=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub battle: BattleConfig,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config file");
        Self::from_toml_str(&source)
    }

    /// 命令行入口：有路径就加载，否则使用默认配置。
    /// 失败时给出面向用户的错误描述。
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        Self::load(path)
            .map_err(|e| anyhow::anyhow!("{}: {}", handle_error(&e), path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.battle.max_rounds == 0 {
            return Err(SimError::InvalidConfig(
                "battle.max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_source_uses_defaults() {
        assert_eq!(SimConfig::from_toml_str("").unwrap(), SimConfig::default());
    }

    #[test]
    fn test_partial_battle_table() {
        let config = SimConfig::from_toml_str(
            r#"
            log_level = "debug"

            [battle]
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.battle.seed, Some(42));
        assert_eq!(config.battle.max_rounds, 20);
        assert_eq!(config.battle.victory_xp, 150);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let err = SimConfig::from_toml_str("[battle]\nmax_rounds = 0").unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SimConfig::from_toml_str("[battle\nseed = 1").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(SimConfig::load_or_default(None).unwrap(), SimConfig::default());
    }

    #[test]
    fn test_load_or_default_reports_friendly_message() {
        let err = SimConfig::load_or_default(Some(Path::new("/definitely/not/here.toml")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "config file not found: /definitely/not/here.toml"
        );
    }
}
