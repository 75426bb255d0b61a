//! 协议工厂注册表
//!
//! 协议族名称不区分大小写（"csw"、"CSW"、"Csw" 指向同一工厂），
//! 按折叠后的名称字母序迭代。启动时注册，之后只读：
//! 注册类操作需要 `&mut self`，放入 `Arc` 共享后即无法再修改。

use crate::agp::{AGP, AgpProtocolFactory};
use crate::arcgis::{ARCGIS, ArcGisProtocolFactory};
use crate::arcims::{ARCIMS, ArcImsProtocolFactory};
use crate::csw::{CSW, CswProtocolFactory};
use crate::descriptor::Descriptor;
use crate::error::DecodeError;
use crate::factory::{Protocol, ProtocolFactory};
use crate::oai::{OAI, OaiProtocolFactory};
use crate::resource::{RESOURCE, ResourceProtocolFactory};
use crate::thredds::{THREDDS, ThreddsProtocolFactory};
use crate::waf::{WAF, WafProtocolFactory};
use harvest_telemetry::{
    record_descriptor_decoded, record_invalid_properties, record_malformed_descriptor,
    record_unsupported_protocol,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
struct Registration {
    /// 最近一次注册时使用的名称
    name: String,
    factory: Arc<dyn ProtocolFactory>,
}

/// 协议工厂注册表
#[derive(Clone, Default)]
pub struct ProtocolRegistry {
    factories: BTreeMap<String, Registration>,
}

/// 不区分大小写的键，按大写形式排序（`_`、`[`、`^` 排在字母之后）
fn fold(name: &str) -> String {
    name.to_uppercase()
}

impl ProtocolRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建并注册内置协议族
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.init_default();
        registry
    }

    /// 注册内置协议族（可重复调用）
    pub fn init_default(&mut self) {
        self.register(ARCIMS, ArcImsProtocolFactory);
        self.register(CSW, CswProtocolFactory);
        self.register(OAI, OaiProtocolFactory);
        self.register(WAF, WafProtocolFactory);
        self.register(RESOURCE, ResourceProtocolFactory);
        self.register(ARCGIS, ArcGisProtocolFactory);
        self.register(AGP, AgpProtocolFactory);
        self.register(THREDDS, ThreddsProtocolFactory);
    }

    /// 注册协议工厂，同名（不区分大小写）时替换并返回旧工厂
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Option<Arc<dyn ProtocolFactory>>
    where
        F: ProtocolFactory + 'static,
    {
        self.register_shared(name, Arc::new(factory))
    }

    /// 注册已共享的协议工厂
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        factory: Arc<dyn ProtocolFactory>,
    ) -> Option<Arc<dyn ProtocolFactory>> {
        let name = name.into();
        debug!(
            protocol = %name,
            factory = factory.type_name(),
            "registering protocol factory"
        );
        self.factories
            .insert(fold(&name), Registration { name, factory })
            .map(|previous| previous.factory)
    }

    /// 移除协议族，返回被移除的工厂
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn ProtocolFactory>> {
        self.factories
            .remove(&fold(name))
            .map(|registration| registration.factory)
    }

    /// 按名称查找工厂（不区分大小写，完全匹配）
    ///
    /// 空名称永远查不到，即使以空名称注册过。
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ProtocolFactory>> {
        if name.is_empty() {
            return None;
        }
        self.factories
            .get(&fold(name))
            .map(|registration| Arc::clone(&registration.factory))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&fold(name))
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// 已注册名称（按字母序）
    pub fn names(&self) -> Vec<&str> {
        self.factories
            .values()
            .map(|registration| registration.name.as_str())
            .collect()
    }

    /// 解码协议描述符并构造协议配置
    pub fn parse_descriptor(&self, text: &str) -> Result<Box<dyn Protocol>, DecodeError> {
        let result = Descriptor::parse(text).and_then(|descriptor| self.build(descriptor));

        match &result {
            Ok(protocol) => {
                record_descriptor_decoded();
                debug!(protocol = protocol.kind(), "decoded protocol descriptor");
            }
            Err(e) => {
                match e {
                    DecodeError::MalformedDescriptor(_) => record_malformed_descriptor(),
                    DecodeError::UnsupportedProtocol(_) => record_unsupported_protocol(),
                    DecodeError::PropertyValidation(_) => record_invalid_properties(),
                }
                warn!(error = %e, "failed to decode protocol descriptor");
            }
        }

        result
    }

    /// 由已解析的描述符构造协议：标志位 → 属性 → 发布目标
    pub fn build(&self, descriptor: Descriptor) -> Result<Box<dyn Protocol>, DecodeError> {
        let Some(factory) = self.lookup(&descriptor.family) else {
            return Err(DecodeError::UnsupportedProtocol(descriptor.family));
        };

        let mut protocol = factory.new_protocol();
        protocol.set_flags(descriptor.flags);
        protocol.apply_attributes(&descriptor.properties)?;
        if let Some(destinations) = descriptor.destinations {
            protocol.set_destinations(destinations);
        }

        Ok(protocol)
    }
}

impl fmt::Display for ProtocolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ProtocolRegistry (")?;
        for registration in self.factories.values() {
            writeln!(
                f,
                "protocol: name=\"{}\", factory=\"{}\"",
                registration.name,
                registration.factory.type_name()
            )?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for ProtocolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.factories
                    .values()
                    .map(|registration| (&registration.name, registration.factory.type_name())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_sorted() {
        let registry = ProtocolRegistry::with_defaults();
        assert_eq!(
            registry.names(),
            vec!["AGP", "ARCGIS", "ArcIms", "CSW", "OAI", "RES", "THREDDS", "WAF"]
        );
    }

    #[test]
    fn test_display_lists_factories() {
        let mut registry = ProtocolRegistry::new();
        registry.register("CSW", CswProtocolFactory);
        registry.register("agp", AgpProtocolFactory);

        assert_eq!(
            registry.to_string(),
            "ProtocolRegistry (\n\
             protocol: name=\"agp\", factory=\"harvest_protocol::agp::AgpProtocolFactory\"\n\
             protocol: name=\"CSW\", factory=\"harvest_protocol::csw::CswProtocolFactory\"\n\
             )"
        );
    }

    #[test]
    fn test_latest_spelling_displayed() {
        let mut registry = ProtocolRegistry::new();
        registry.register("csw", CswProtocolFactory);
        let previous = registry.register("CSW", CswProtocolFactory);
        assert!(previous.is_some());
        assert_eq!(registry.names(), vec!["CSW"]);
    }

    #[test]
    fn test_keys_sorted_by_upper_case_form() {
        let mut registry = ProtocolRegistry::new();
        registry.register("a_b", CswProtocolFactory);
        registry.register("AZ", CswProtocolFactory);
        registry.register("a[", CswProtocolFactory);
        assert_eq!(registry.names(), vec!["AZ", "a[", "a_b"]);
    }
}
