//! 追踪初始化与描述符解码计数。

use serde::Serialize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 解码指标快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub descriptors_decoded: u64,
    pub malformed_descriptors: u64,
    pub unsupported_protocols: u64,
    pub invalid_properties: u64,
}

impl MetricsSnapshot {
    /// 失败总数（格式错误 + 未注册协议 + 属性校验失败）。
    pub fn failures(&self) -> u64 {
        self.malformed_descriptors + self.unsupported_protocols + self.invalid_properties
    }
}

/// 解码计数器。
pub struct TelemetryMetrics {
    descriptors_decoded: AtomicU64,
    malformed_descriptors: AtomicU64,
    unsupported_protocols: AtomicU64,
    invalid_properties: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            descriptors_decoded: AtomicU64::new(0),
            malformed_descriptors: AtomicU64::new(0),
            unsupported_protocols: AtomicU64::new(0),
            invalid_properties: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            descriptors_decoded: self.descriptors_decoded.load(Ordering::Relaxed),
            malformed_descriptors: self.malformed_descriptors.load(Ordering::Relaxed),
            unsupported_protocols: self.unsupported_protocols.load(Ordering::Relaxed),
            invalid_properties: self.invalid_properties.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing：优先读取 RUST_LOG，否则使用传入的默认过滤器。
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 记录解码成功次数。
pub fn record_descriptor_decoded() {
    metrics().descriptors_decoded.fetch_add(1, Ordering::Relaxed);
}

/// 记录格式错误的描述符。
pub fn record_malformed_descriptor() {
    metrics()
        .malformed_descriptors
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录未注册协议族。
pub fn record_unsupported_protocol() {
    metrics()
        .unsupported_protocols
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录协议属性校验失败。
pub fn record_invalid_properties() {
    metrics().invalid_properties.fetch_add(1, Ordering::Relaxed);
}
