//! # 采集协议能力模块
//!
//! 将协议描述符解码为具体协议族的配置对象，支持：
//! - **ArcIms**：ArcIMS 元数据服务
//! - **CSW**：OGC Catalogue Service for the Web
//! - **OAI**：OAI-PMH
//! - **WAF**：Web Accessible Folder 目录爬取
//! - **RES**：通用资源
//! - **ARCGIS**：ArcGIS Server REST
//! - **AGP**：ArcGIS Online / Portal
//! - **THREDDS**：THREDDS 数据目录
//!
//! ## 架构设计
//!
//! ```text
//! 描述符 XML (<protocol type=... flags=... destinations=...>)
//!       │
//!       ▼
//! Descriptor::parse（类型名、标志位、发布目标、属性）
//!       │
//!       ▼
//! ProtocolRegistry（名称不区分大小写 → ProtocolFactory）
//!       │
//!       ├── new_protocol()
//!       ├── set_flags()
//!       ├── apply_attributes()   协议族自行校验
//!       └── set_destinations()   未设置时保持默认
//!       │
//!       ▼
//! Box<dyn Protocol> → 采集调度
//! ```
//!
//! ## 使用示例
//!
//! ```
//! use harvest_protocol::{CswProtocol, ProtocolRegistry};
//!
//! let registry = ProtocolRegistry::with_defaults();
//! let protocol = registry
//!     .parse_descriptor(r#"<protocol type="csw" flags="3"><profile>gpt</profile></protocol>"#)
//!     .unwrap();
//! assert_eq!(protocol.kind(), "CSW");
//! assert_eq!(protocol.flags(), 3);
//!
//! let csw = protocol.downcast_ref::<CswProtocol>().unwrap();
//! assert_eq!(csw.profile.as_deref(), Some("gpt"));
//! ```

mod agp;
mod arcgis;
mod arcims;
mod csw;
mod descriptor;
mod error;
mod factory;
mod oai;
mod registry;
mod resource;
mod thredds;
mod types;
mod waf;

pub use agp::{AGP, AgpProtocol, AgpProtocolFactory};
pub use arcgis::{ARCGIS, ArcGisProtocol, ArcGisProtocolFactory};
pub use arcims::{ARCIMS, ArcImsProtocol, ArcImsProtocolFactory};
pub use csw::{CSW, CswProtocol, CswProtocolFactory};
pub use descriptor::{Descriptor, PROTOCOL_ELEMENT};
pub use error::{DecodeError, PropertyError};
pub use factory::{Protocol, ProtocolFactory};
pub use oai::{OAI, OaiProtocol, OaiProtocolFactory};
pub use registry::ProtocolRegistry;
pub use resource::{RESOURCE, ResourceProtocol, ResourceProtocolFactory};
pub use thredds::{THREDDS, ThreddsProtocol, ThreddsProtocolFactory};
pub use types::*;
pub use waf::{WAF, WafProtocol, WafProtocolFactory};
