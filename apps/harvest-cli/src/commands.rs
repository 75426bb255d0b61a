use harvest_config::HarvestConfig;
use harvest_protocol::ProtocolRegistry;
use harvest_telemetry::metrics;
use std::io::{self, Read};
use tracing::{info, warn};

type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

/// 按配置构建协议注册表：注册内置协议族，再移除禁用项。
pub fn build_registry(config: &HarvestConfig) -> ProtocolRegistry {
    let mut registry = ProtocolRegistry::new();
    if config.register_defaults {
        registry.init_default();
    }
    for name in &config.disabled_protocols {
        if registry.remove(name).is_none() {
            warn!(protocol = %name, "disabled protocol is not registered");
        }
    }
    info!(protocols = registry.len(), "protocol registry ready");
    registry
}

/// 读取描述符文本，"-" 表示标准输入。
pub fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

/// 解码描述符并输出 JSON 摘要。
pub fn decode(registry: &ProtocolRegistry, text: &str) -> CommandResult<String> {
    let protocol = registry.parse_descriptor(text)?;
    Ok(serde_json::to_string_pretty(&protocol.summary())?)
}

/// 批量解码，失败仅记录日志，最后输出计数快照。
pub fn stats(registry: &ProtocolRegistry, paths: &[String]) -> CommandResult<String> {
    for path in paths {
        let text = read_source(path)?;
        match registry.parse_descriptor(&text) {
            Ok(protocol) => info!(path = %path, protocol = protocol.kind(), "decoded"),
            Err(e) => warn!(path = %path, error = %e, "skipping descriptor"),
        }
    }
    Ok(serde_json::to_string_pretty(&metrics().snapshot())?)
}
