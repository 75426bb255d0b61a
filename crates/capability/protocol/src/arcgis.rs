//! ArcGIS Server REST 协议

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const ARCGIS: &str = "ARCGIS";

/// ArcGIS Server 协议配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcGisProtocol {
    base: ProtocolBase,
    /// SOAP 端点
    pub soap_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Protocol for ArcGisProtocol {
    fn kind(&self) -> &'static str {
        ARCGIS
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        self.soap_url = attributes.non_empty("soapurl").map(str::to_string);
        self.username = attributes.non_empty("username").map(str::to_string);
        self.password = attributes.non_empty("password").map(str::to_string);
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// ArcGIS Server 协议工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcGisProtocolFactory;

impl ProtocolFactory for ArcGisProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(ArcGisProtocol::default())
    }
}
