//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 该类型会在 CLI 层被上转为 `AppError`，最终转换为退出码 1。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源文件不存在：{}", .0.display())]
    SourceMissing(PathBuf),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("打包错误：{0}")]
    Bundle(String),

    #[error("参数错误：{0}")]
    InvalidArgument(String),
}
