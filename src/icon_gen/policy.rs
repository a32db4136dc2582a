//! # 缩放决策
//!
//! ## 设计思路
//!
//! 是否生成、用什么滤镜生成，只取决于目标边长、源图长边与两项跳过策略。
//! 把这部分做成纯函数，便于单独测试。ICO 与图标包不受跳过策略影响，
//! 只复用其中的滤镜选择。
//!
//! ## 决策顺序
//!
//! 1. 开启 `skip_large` 且目标大于源图 → 跳过
//! 2. 设置了最大放大倍数且目标超过 `源图 × 倍数` → 跳过
//! 3. 目标不大于源图 → 平滑滤镜（缩小 / 原尺寸）
//! 4. 需要放大：源图长边 ≤ 小图阈值用最近邻，否则仍用平滑滤镜

use std::fmt;

use super::IconGenConfig;

/// 跳过原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 目标尺寸大于源图像。
    LargerThanSource,
    /// 超过最大放大倍数。
    ExceedsMaxUpscale(u32),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LargerThanSource => write!(f, "大于源图像"),
            Self::ExceedsMaxUpscale(limit) => write!(f, "超过最大放大倍数 {}x", limit),
        }
    }
}

/// 缩放滤镜类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeFilter {
    /// 抗锯齿平滑滤镜（由配置决定具体算法）。
    Smooth,
    /// 最近邻，保留小图标的像素边缘。
    Nearest,
}

/// 相对源图的缩放方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Upscale,
    Downscale,
    Exact,
}

impl ScaleKind {
    pub fn between(target: u32, source_edge: u32) -> Self {
        match target.cmp(&source_edge) {
            std::cmp::Ordering::Greater => Self::Upscale,
            std::cmp::Ordering::Less => Self::Downscale,
            std::cmp::Ordering::Equal => Self::Exact,
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Upscale => "放大",
            Self::Downscale => "缩小",
            Self::Exact => "原尺寸",
        };
        f.write_str(label)
    }
}

/// 单个目标尺寸的处理结论。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    Skip(SkipReason),
    Resize { filter: ResizeFilter, scale: ScaleKind },
}

/// 跳过策略与小图阈值。
#[derive(Debug, Clone, Copy)]
pub struct ResizePolicy {
    pub max_upscale: u32,
    pub skip_large: bool,
    pub small_source_edge: u32,
}

impl From<&IconGenConfig> for ResizePolicy {
    fn from(config: &IconGenConfig) -> Self {
        Self {
            max_upscale: config.max_upscale,
            skip_large: config.skip_large,
            small_source_edge: config.small_source_edge,
        }
    }
}

impl ResizePolicy {
    pub fn decide(&self, target: u32, source_edge: u32) -> ResizeDecision {
        if self.skip_large && target > source_edge {
            return ResizeDecision::Skip(SkipReason::LargerThanSource);
        }

        if self.max_upscale > 0
            && u64::from(target) > u64::from(source_edge) * u64::from(self.max_upscale)
        {
            return ResizeDecision::Skip(SkipReason::ExceedsMaxUpscale(self.max_upscale));
        }

        let (filter, scale) = self.select_filter(target, source_edge);
        ResizeDecision::Resize { filter, scale }
    }

    /// 只选择滤镜，不套用跳过规则。ICO 与图标包总是生成，走这里。
    pub fn select_filter(&self, target: u32, source_edge: u32) -> (ResizeFilter, ScaleKind) {
        let scale = ScaleKind::between(target, source_edge);
        let filter = if target <= source_edge || source_edge > self.small_source_edge {
            ResizeFilter::Smooth
        } else {
            ResizeFilter::Nearest
        };
        (filter, scale)
    }
}

/// 根据源图长边给出的质量建议。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceAdvice {
    /// 小于 256px：大尺寸图标质量会明显下降。
    TooSmall,
    /// 256~511px：可用，但建议更大的源图。
    Moderate,
    /// 512px 及以上。
    Good,
}

impl SourceAdvice {
    pub fn from_edge(edge: u32) -> Self {
        if edge < 256 {
            Self::TooSmall
        } else if edge < 512 {
            Self::Moderate
        } else {
            Self::Good
        }
    }

    pub fn log(self, edge: u32) {
        match self {
            Self::TooSmall => log::warn!(
                "⚠️ 源图像尺寸较小（{}px），建议使用至少 256x256 的图像以获得更好的大尺寸图标质量",
                edge
            ),
            Self::Moderate => log::info!(
                "💡 源图像尺寸适中（{}px），如需更高质量的大尺寸图标，建议使用 512x512 或更大的图像",
                edge
            ),
            Self::Good => log::info!("✅ 源图像尺寸良好（{}px），适合生成高质量图标", edge),
        }
    }
}
