//! 协议描述符解析
//!
//! ## 描述符格式
//!
//! ```xml
//! <protocol type="CSW" flags="3" destinations="d1,d2">
//!   <host>http://example.org</host>
//! </protocol>
//! ```
//!
//! - `type`：协议族名称（去除首尾空白，缺失时为空串）
//! - `flags`：整数标志位，缺失或无法解析时为 0
//! - `destinations`：逗号分隔的发布目标，缺失或空白时视为未设置
//! - 每个直接子元素为一个属性：带前缀的标签名为键（如 `a:host`），
//!   全部文本内容为值（不去空白）
//! - 允许 DTD 声明

use crate::error::DecodeError;
use crate::types::AttributeMap;
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

/// 描述符根元素名
pub const PROTOCOL_ELEMENT: &str = "protocol";

/// 描述符原始字段（尚未绑定协议族）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    /// 协议族名称
    pub family: String,
    /// 标志位
    pub flags: i64,
    /// 发布目标；`None` 表示描述符未给出
    pub destinations: Option<Vec<String>>,
    /// 子元素属性，同名后写覆盖
    pub properties: AttributeMap,
}

impl Descriptor {
    /// 解析描述符文本
    ///
    /// 仅在文本不是合法 XML 时失败；找不到 `protocol` 元素时返回空协议族名称，
    /// 由注册表在查找工厂时报告。
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let doc = Document::parse_with_options(text, options)
            .map_err(|e| DecodeError::MalformedDescriptor(e.to_string()))?;

        let Some(node) = doc
            .descendants()
            .find(|node| node.is_element() && qualified_name(*node) == PROTOCOL_ELEMENT)
        else {
            debug!("no protocol element in descriptor");
            return Ok(Self::default());
        };

        let family = node.attribute("type").unwrap_or_default().trim().to_string();
        let flags = node.attribute("flags").map(parse_flags).unwrap_or(0);
        let destinations = node
            .attribute("destinations")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| value.split(',').map(str::to_string).collect());

        let mut properties = AttributeMap::new();
        for child in node.children().filter(Node::is_element) {
            properties.set(qualified_name(child), text_content(child));
        }

        Ok(Self {
            family,
            flags,
            destinations,
            properties,
        })
    }
}

/// 宽松解析标志位：无法解析时取 0
fn parse_flags(value: &str) -> i64 {
    match value.trim().parse::<i64>() {
        Ok(flags) => flags,
        Err(e) => {
            debug!(flags = value, error = %e, "ignoring unparsable protocol flags");
            0
        }
    }
}

/// 元素的限定名：有前缀时为 `prefix:local`，否则为本地名
fn qualified_name(node: Node<'_, '_>) -> String {
    let name = node.tag_name();
    match name.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, name.name()),
        _ => name.name().to_string(),
    }
}

/// 节点下全部文本（含 CDATA 与嵌套元素文本）
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}
