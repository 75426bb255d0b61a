//! 通用资源协议（单个 URL 资源），仅保留原始属性

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const RESOURCE: &str = "RES";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceProtocol {
    base: ProtocolBase,
}

impl Protocol for ResourceProtocol {
    fn kind(&self) -> &'static str {
        RESOURCE
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceProtocolFactory;

impl ProtocolFactory for ResourceProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(ResourceProtocol::default())
    }
}
