//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconGenConfig`，保证一次生成的行为可观测、可测试。
//! CLI 只负责把参数填进这个结构体，生成器本身不关心参数从哪里来。
//!
//! ## 实现思路
//!
//! - `Default` 提供与打包流水线约定一致的默认路径与策略。
//! - `parse_background` 负责把 `#RRGGBB` / `#RRGGBBAA` 解析为背景色。

use std::path::PathBuf;

use image::Rgba;
use image::imageops::FilterType;

use super::IconError;

/// 默认源图像路径。
pub const DEFAULT_SOURCE: &str = "src-tauri/icons/logo.png";
/// 默认输出目录。
pub const DEFAULT_OUTPUT_DIR: &str = "src-tauri/icons";

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconGenConfig {
    /// 源图像路径。
    pub source: PathBuf,
    /// 输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 最大放大倍数，`0` 表示不限制。
    pub max_upscale: u32,
    /// 是否跳过比源图像更大的输出。
    pub skip_large: bool,
    /// 背景色；`None` 表示保持透明，不做合成。
    pub background: Option<Rgba<u8>>,
    /// 缩小或大图放大时使用的平滑滤镜。
    pub smooth_filter: FilterType,
    /// 源图长边不超过该值时，放大改用最近邻以保持像素边缘清晰。
    pub small_source_edge: u32,
}

impl Default for IconGenConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_upscale: 0,
            skip_large: false,
            background: None,
            smooth_filter: FilterType::Lanczos3,
            small_source_edge: 128,
        }
    }
}

impl IconGenConfig {
    /// 是否启用了任何跳过策略（用于汇总输出）。
    pub fn skip_options_active(&self) -> bool {
        self.skip_large || self.max_upscale > 0
    }
}

/// 解析背景色字符串。
///
/// 支持 `#RRGGBB`（不透明）与 `#RRGGBBAA`，前导 `#` 可省略。
/// 完全透明的颜色视为“无背景”，返回 `None`。
///
/// # 示例
/// ```rust
/// use app_asset_tools::icon_gen::parse_background;
///
/// let color = parse_background("#ffffff")?;
/// assert_eq!(color.map(|c| c.0), Some([255, 255, 255, 255]));
/// # Ok::<(), app_asset_tools::icon_gen::IconError>(())
/// ```
pub fn parse_background(value: &str) -> Result<Option<Rgba<u8>>, IconError> {
    let hex = value.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(IconError::InvalidArgument(format!(
            "背景色格式无效：{}（应为 #RRGGBB 或 #RRGGBBAA）",
            value
        )));
    }

    let mut channels = [0u8, 0, 0, 255];
    for (index, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let text = std::str::from_utf8(chunk)
            .map_err(|e| IconError::InvalidArgument(format!("背景色格式无效：{}", e)))?;
        channels[index] = u8::from_str_radix(text, 16).map_err(|_| {
            IconError::InvalidArgument(format!("背景色包含非十六进制字符：{}", value))
        })?;
    }

    if channels[3] == 0 {
        return Ok(None);
    }
    Ok(Some(Rgba(channels)))
}
