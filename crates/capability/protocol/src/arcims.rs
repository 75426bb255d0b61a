//! ArcIMS 协议
//!
//! 通过 ArcIMS 服务的元数据目录采集，属性：
//! `port`、`service`、`rootFolder`、`username`、`password`。

use crate::error::PropertyError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::types::{AttributeMap, ProtocolBase};
use std::any::Any;

/// 协议族名称
pub const ARCIMS: &str = "ArcIms";

const DEFAULT_PORT: u16 = 80;

/// ArcIMS 协议配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcImsProtocol {
    base: ProtocolBase,
    /// 服务端口（默认 80）
    pub port: u16,
    /// 元数据服务名
    pub service_name: String,
    /// 起始目录
    pub root_folder: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for ArcImsProtocol {
    fn default() -> Self {
        Self {
            base: ProtocolBase::default(),
            port: DEFAULT_PORT,
            service_name: String::new(),
            root_folder: String::new(),
            username: None,
            password: None,
        }
    }
}

impl Protocol for ArcImsProtocol {
    fn kind(&self) -> &'static str {
        ARCIMS
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        let port = attributes.parse::<u16>(ARCIMS, "port")?.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            return Err(PropertyError::new(ARCIMS, "port", "port must be positive"));
        }

        self.port = port;
        self.service_name = attributes.get("service").unwrap_or_default().to_string();
        self.root_folder = attributes.get("rootFolder").unwrap_or_default().to_string();
        self.username = attributes.non_empty("username").map(str::to_string);
        self.password = attributes.non_empty("password").map(str::to_string);
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// ArcIMS 协议工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcImsProtocolFactory;

impl ProtocolFactory for ArcImsProtocolFactory {
    fn new_protocol(&self) -> Box<dyn Protocol> {
        Box::new(ArcImsProtocol::default())
    }
}
