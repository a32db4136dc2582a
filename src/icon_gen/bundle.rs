//! # 平台图标包
//!
//! ## 设计思路
//!
//! 图标包（`.icns`）只能借助外部工具生成。是否能打包取决于工具是否可用，
//! 而不是当前平台名称；不可用时走显式的 PNG 替代分支。
//!
//! `BundlePackager` 作为注入点，生成器只依赖该 trait，测试可替换为假实现。

use std::path::Path;
use std::process::Command;

use super::IconError;

/// 把一张 PNG 转换为平台图标包的能力。
pub trait BundlePackager {
    /// 当前环境是否具备打包能力。
    fn is_available(&self) -> bool;

    /// 名称，仅用于日志。
    fn name(&self) -> &str;

    /// 把 `png` 转换为 `output` 处的图标包。
    fn package(&self, png: &Path, output: &Path) -> Result<(), IconError>;
}

/// 基于 `sips` 的打包实现。
#[derive(Debug, Default, Clone, Copy)]
pub struct SipsPackager;

impl BundlePackager for SipsPackager {
    fn is_available(&self) -> bool {
        which::which("sips").is_ok()
    }

    fn name(&self) -> &str {
        "sips"
    }

    fn package(&self, png: &Path, output: &Path) -> Result<(), IconError> {
        let status = Command::new("sips")
            .arg("-s")
            .arg("format")
            .arg("icns")
            .arg(png)
            .arg("--out")
            .arg(output)
            .status()
            .map_err(|e| IconError::Bundle(format!("启动 sips 失败：{}", e)))?;

        if !status.success() {
            return Err(IconError::Bundle(format!("sips 执行失败：{}", status)));
        }
        Ok(())
    }
}

/// 不具备打包能力的环境，总是走 PNG 替代分支。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPackager;

impl BundlePackager for NoPackager {
    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "none"
    }

    fn package(&self, _png: &Path, _output: &Path) -> Result<(), IconError> {
        Err(IconError::Bundle("当前环境不支持图标包打包".to_string()))
    }
}
