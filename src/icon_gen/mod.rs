//! # 图标生成模块（icon_gen）
//!
//! ## 设计思路
//!
//! 该模块把“源图加载 → 缩放决策 → 缩放/合成 → 写盘 → 容器/图标包”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `config`：生成配置与默认路径
//! - `catalog`：固定的输出尺寸与文件名清单
//! - `policy`：跳过规则与滤镜选择（纯函数）
//! - `pipeline`：解码、RGBA 归一化、缩放、背景合成、PNG 写入
//! - `container`：ICO 多尺寸容器
//! - `bundle`：平台图标包打包能力（可注入）
//! - `generator`：编排整条生成流程
//! - `report/error`：结果模型与错误
//!
//! ## 调用链
//!
//! ```text
//! generate-icons（CLI 参数 → IconGenConfig）
//!    ↓
//! generator.rs（统一编排 + 汇总日志）
//!    ├─ pipeline.rs（加载 + 缩放 + 合成 + 写 PNG）
//!    │     ↑ policy.rs（生成 / 跳过 / 滤镜）
//!    ├─ container.rs（ICO）
//!    └─ bundle.rs（ICNS 或 PNG 替代）
//!    ↓
//! GenerationReport / IconError → 退出码
//! ```

mod bundle;
mod catalog;
mod config;
mod container;
mod error;
mod generator;
mod pipeline;
mod policy;
mod report;

pub use bundle::{BundlePackager, NoPackager, SipsPackager};
pub use catalog::{
    BUNDLE_FILE, BUNDLE_SIZE, BUNDLE_SUBSTITUTE_FILE, BUNDLE_TEMP_FILE, ICO_FILE, ICO_SIZES,
    IconSpec, PNG_ICONS, STORE_LOGOS, png_catalog, total_outputs,
};
pub use config::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, IconGenConfig, parse_background};
pub use error::IconError;
pub use generator::IconGenerator;
pub use policy::{ResizeDecision, ResizeFilter, ResizePolicy, ScaleKind, SkipReason, SourceAdvice};
pub use report::{GenerationReport, OutputOutcome, OutputStatus};
