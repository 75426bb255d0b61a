//! 协议与协议工厂抽象

use crate::error::PropertyError;
use crate::types::{AttributeMap, ProtocolBase, ProtocolSummary};
use std::any::Any;
use std::fmt;

/// 采集协议配置
///
/// 由 [`ProtocolFactory`] 创建空实例，解码时依次应用标志位、属性和发布目标。
pub trait Protocol: fmt::Debug + Send + Sync {
    /// 协议族名称（如 "CSW"）
    fn kind(&self) -> &'static str;

    fn base(&self) -> &ProtocolBase;

    fn base_mut(&mut self) -> &mut ProtocolBase;

    /// 应用描述符属性，由协议族自行解释与校验
    ///
    /// 校验失败时不得修改自身状态。
    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError>;

    fn as_any(&self) -> &dyn Any;

    fn flags(&self) -> i64 {
        self.base().flags
    }

    fn set_flags(&mut self, flags: i64) {
        self.base_mut().flags = flags;
    }

    fn destinations(&self) -> Option<&[String]> {
        self.base().destinations.as_deref()
    }

    fn set_destinations(&mut self, destinations: Vec<String>) {
        self.base_mut().destinations = Some(destinations);
    }

    /// 最近一次应用的原始属性
    fn attributes(&self) -> &AttributeMap {
        &self.base().attributes
    }

    fn summary(&self) -> ProtocolSummary {
        let base = self.base();
        ProtocolSummary {
            kind: self.kind().to_string(),
            flags: base.flags,
            destinations: base.destinations.clone(),
            attributes: base.attributes.clone(),
        }
    }
}

impl dyn Protocol {
    /// 向下转型为具体协议族类型
    pub fn downcast_ref<T: Protocol + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// 协议工厂：每次调用都返回新的空协议实例
pub trait ProtocolFactory: Send + Sync {
    fn new_protocol(&self) -> Box<dyn Protocol>;

    /// 工厂类型名（用于注册表输出）
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> ProtocolFactory for F
where
    F: Fn() -> Box<dyn Protocol> + Send + Sync,
{
    fn new_protocol(&self) -> Box<dyn Protocol> {
        self()
    }
}
