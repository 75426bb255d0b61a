//! 协议错误类型定义

/// 描述符解码错误
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// 描述符不是合法的 XML
    #[error("malformed descriptor: {0}")]
    MalformedDescriptor(String),

    /// 协议族未注册
    #[error("unsupported protocol: {0:?}")]
    UnsupportedProtocol(String),

    /// 协议族拒绝了属性值
    #[error(transparent)]
    PropertyValidation(#[from] PropertyError),
}

/// 协议属性校验错误（由各协议族在应用属性时产生）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid property {property} for {protocol}: {reason}")]
pub struct PropertyError {
    /// 协议族名称
    pub protocol: &'static str,
    /// 属性名
    pub property: String,
    /// 失败原因
    pub reason: String,
}

impl PropertyError {
    pub fn new(
        protocol: &'static str,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            protocol,
            property: property.into(),
            reason: reason.into(),
        }
    }
}
