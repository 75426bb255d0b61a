//! 采集协议运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 采集协议运行配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    /// 默认日志过滤器（RUST_LOG 未设置时生效）。
    pub log_filter: String,
    /// 启动时是否注册内置协议族。
    pub register_defaults: bool,
    /// 注册后需要移除的协议族名称。
    pub disabled_protocols: Vec<String>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            register_defaults: true,
            disabled_protocols: Vec::new(),
        }
    }
}

impl HarvestConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_filter = read_optional("HARVEST_LOG").unwrap_or_else(|| "info".to_string());
        let register_defaults = read_bool_with_default("HARVEST_REGISTER_DEFAULTS", true)?;
        let disabled_protocols = read_list("HARVEST_DISABLED_PROTOCOLS");

        Ok(Self {
            log_filter,
            register_defaults,
            disabled_protocols,
        })
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn read_bool_with_default(key: &str, default: bool) -> Result<bool, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}

/// 逗号分隔列表，忽略空项。
fn read_list(key: &str) -> Vec<String> {
    read_optional(key)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
