//! THREDDS 数据服务器目录协议，仅保留原始属性

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const THREDDS: &str = "THREDDS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreddsProtocol {
    base: ProtocolBase,
}

impl Protocol for ThreddsProtocol {
    fn kind(&self) -> &'static str {
        THREDDS
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
pub struct ThreddsProtocolFactory;

impl ProtocolFactory for ThreddsProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(ThreddsProtocol::default())
    }
}
