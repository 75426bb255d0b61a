//! ArcGIS Online / Portal 协议
//!
//! 在两个 Portal 之间复制条目：
//! - 源：`src-h`（主机）、`src-q`（查询）、`src-m`（最多复制条目数）
//! - 目标：`dest-h`（主机）、`dest-o`（所有者）、`dest-f`（目录）

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const AGP: &str = "AGP";

/// ArcGIS Online / Portal 协议配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgpProtocol {
    base: ProtocolBase,
    pub source_host: Option<String>,
    pub source_query: Option<String>,
    /// 最多复制条目数；`None` 表示不限
    pub max_items: Option<u32>,
    pub destination_host: Option<String>,
    pub destination_owner: Option<String>,
    pub destination_folder: Option<String>,
}

impl Protocol for AgpProtocol {
    fn kind(&self) -> &'static str {
        AGP
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        let max_items = attributes.parse::<u32>(AGP, "src-m")?;

        self.source_host = attributes.non_empty("src-h").map(str::to_string);
        self.source_query = attributes.non_empty("src-q").map(str::to_string);
        self.max_items = max_items;
        self.destination_host = attributes.non_empty("dest-h").map(str::to_string);
        self.destination_owner = attributes.non_empty("dest-o").map(str::to_string);
        self.destination_folder = attributes.non_empty("dest-f").map(str::to_string);
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// ArcGIS Online / Portal 协议工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct AgpProtocolFactory;

impl ProtocolFactory for AgpProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(AgpProtocol::default())
    }
}
