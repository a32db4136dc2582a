//! # 输出目录清单
//!
//! 固定的图标尺寸与文件名。每一项都独立生成，顺序不影响结果。

/// 单个输出图标：目标边长与文件名。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: &'static str,
}

impl IconSpec {
    const fn new(size: u32, file_name: &'static str) -> Self {
        Self { size, file_name }
    }
}

/// 通用 PNG 图标。
pub const PNG_ICONS: &[IconSpec] = &[
    IconSpec::new(32, "32x32.png"),
    IconSpec::new(128, "128x128.png"),
    // 128 的 2x 版本
    IconSpec::new(256, "128x128@2x.png"),
    // 主图标
    IconSpec::new(1024, "icon.png"),
];

/// 应用商店方形 Logo。
pub const STORE_LOGOS: &[IconSpec] = &[
    IconSpec::new(30, "Square30x30Logo.png"),
    IconSpec::new(44, "Square44x44Logo.png"),
    IconSpec::new(71, "Square71x71Logo.png"),
    IconSpec::new(89, "Square89x89Logo.png"),
    IconSpec::new(107, "Square107x107Logo.png"),
    IconSpec::new(142, "Square142x142Logo.png"),
    IconSpec::new(150, "Square150x150Logo.png"),
    IconSpec::new(284, "Square284x284Logo.png"),
    IconSpec::new(310, "Square310x310Logo.png"),
    IconSpec::new(50, "StoreLogo.png"),
];

/// ICO 容器内打包的分辨率（容器支持多尺寸，这里只放一份）。
pub const ICO_SIZES: &[u32] = &[128];
pub const ICO_FILE: &str = "icon.ico";

/// 平台图标包。
pub const BUNDLE_FILE: &str = "icon.icns";
pub const BUNDLE_SIZE: u32 = 1024;
/// 打包前生成的中间 PNG，打包结束后删除。
pub const BUNDLE_TEMP_FILE: &str = "icon_temp.png";
/// 无法打包时的 PNG 替代文件名（与 `icon.icns` 同名换扩展名）。
pub const BUNDLE_SUBSTITUTE_FILE: &str = "icon.png";

/// 所有 PNG 输出（通用 + 商店）。
pub fn png_catalog() -> impl Iterator<Item = &'static IconSpec> {
    PNG_ICONS.iter().chain(STORE_LOGOS.iter())
}

/// 一次完整生成最多产出的条目数：全部 PNG + ICO + 图标包。
pub fn total_outputs() -> usize {
    PNG_ICONS.len() + STORE_LOGOS.len() + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_fourteen_pngs_with_unique_names() {
        let names: HashSet<_> = png_catalog().map(|spec| spec.file_name).collect();
        assert_eq!(png_catalog().count(), 14);
        assert_eq!(names.len(), 14);
        assert_eq!(total_outputs(), 16);
    }

    #[test]
    fn store_logo_names_follow_size() {
        for spec in STORE_LOGOS.iter().filter(|s| s.file_name.starts_with("Square")) {
            let expected = format!("Square{0}x{0}Logo.png", spec.size);
            assert_eq!(spec.file_name, expected);
        }
    }

    #[test]
    fn substitute_name_is_bundle_name_with_png_extension() {
        let derived = std::path::Path::new(BUNDLE_FILE).with_extension("png");
        assert_eq!(derived.to_str(), Some(BUNDLE_SUBSTITUTE_FILE));
    }
}
