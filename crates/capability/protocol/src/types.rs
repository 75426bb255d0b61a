//! 协议相关类型定义

use crate::error::PropertyError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// 协议属性表
///
/// 键区分大小写，按键名排序；同名属性后写覆盖先写。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, String>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入属性，返回被覆盖的旧值
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// 读取非空属性（仅空白视为缺失），返回原值
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    /// 读取并解析属性（去除首尾空白后解析）
    ///
    /// 缺失或空白返回 `Ok(None)`；无法解析时返回 [`PropertyError`]。
    pub fn parse<T>(&self, protocol: &'static str, key: &str) -> Result<Option<T>, PropertyError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.non_empty(key) {
            Some(value) => value
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| PropertyError::new(protocol, key, format!("{:?}: {}", value, e))),
            None => Ok(None),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

/// 各协议族共有的状态：标志位、发布目标、原始属性
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolBase {
    /// 标志位（语义由调用方定义）
    pub flags: i64,
    /// 发布目标；`None` 表示未设置，区别于空列表
    pub destinations: Option<Vec<String>>,
    /// 描述符中的原始属性
    pub attributes: AttributeMap,
}

/// 协议摘要（用于输出与排查）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolSummary {
    pub kind: String,
    pub flags: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<String>>,
    pub attributes: AttributeMap,
}
