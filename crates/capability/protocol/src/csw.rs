//! CSW（OGC Catalogue Service for the Web）协议

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const CSW: &str = "CSW";

/// CSW 协议配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CswProtocol {
    base: ProtocolBase,
    /// CSW 配置档（profile）标识
    pub profile: Option<String>,
}

impl Protocol for CswProtocol {
    fn kind(&self) -> &'static str {
        CSW
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        self.profile = attributes.non_empty("profile").map(str::to_string);
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// CSW 协议工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct CswProtocolFactory;

impl ProtocolFactory for CswProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(CswProtocol::default())
    }
}
