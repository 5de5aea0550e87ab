//! 配置模块
//!
//! 统一的配置管理，从 ~/.config/sandhi/config.toml 加载

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::sandhi::RuleSetKind;

/// 变调引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandhiConfig {
    /// 默认规则表
    pub ruleset: RuleSetKind,
}

impl Default for SandhiConfig {
    fn default() -> Self {
        Self {
            ruleset: RuleSetKind::Regular,
        }
    }
}

impl SandhiConfig {
    /// 加载配置文件
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;

        tracing::info!("加载配置成功: {:?}", config_path);
        tracing::info!("默认规则表: {}", config.ruleset.name());
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path()?;

        // 确保目录存在
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        tracing::info!("保存配置成功: {:?}", config_path);
        Ok(())
    }

    /// 获取配置文件路径
    fn config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir()
            .ok_or("无法获取配置目录")?;

        Ok(config_dir.join("sandhi").join("config.toml"))
    }
}
