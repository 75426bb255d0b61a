//! OAI-PMH 协议

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const OAI: &str = "OAI";

const DEFAULT_PREFIX: &str = "oai_dc";

/// OAI-PMH 协议配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OaiProtocol {
    base: ProtocolBase,
    /// metadataPrefix（默认 oai_dc）
    pub prefix: String,
    /// 选择性采集的 set
    pub set: Option<String>,
}

impl Default for OaiProtocol {
    fn default() -> Self {
        Self {
            base: ProtocolBase::default(),
            prefix: DEFAULT_PREFIX.to_string(),
            set: None,
        }
    }
}

impl Protocol for OaiProtocol {
    fn kind(&self) -> &'static str {
        OAI
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        self.prefix = attributes
            .non_empty("prefix")
            .unwrap_or(DEFAULT_PREFIX)
            .to_string();
        self.set = attributes.non_empty("set").map(str::to_string);
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// OAI-PMH 协议工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct OaiProtocolFactory;

impl ProtocolFactory for OaiProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(OaiProtocol::default())
    }
}
