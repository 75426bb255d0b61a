//! WAF（Web Accessible Folder）目录爬取协议

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const WAF: &str = "WAF";

/// WAF 协议配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WafProtocol {
    base: ProtocolBase,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Protocol for WafProtocol {
    fn kind(&self) -> &'static str {
        WAF
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        self.username = attributes.non_empty("username").map(str::to_string);
        self.password = attributes.non_empty("password").map(str::to_string);
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// WAF 协议工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct WafProtocolFactory;

impl ProtocolFactory for WafProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(WafProtocol::default())
    }
}
