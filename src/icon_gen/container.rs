//! # ICO 容器写入
//!
//! 把若干张已缩放的 RGBA 图像打包为一个多分辨率 `.ico` 文件。

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;

use super::IconError;

/// 写入 ICO 文件，每张图像成为容器中的一个条目。
pub fn write_ico(images: &[RgbaImage], path: &Path) -> Result<(), IconError> {
    if images.is_empty() {
        return Err(IconError::Encode("ICO 至少需要一个尺寸".to_string()));
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for image in images {
        let (width, height) = image.dimensions();
        let icon_image = IconImage::from_rgba_data(width, height, image.as_raw().clone());
        let entry = IconDirEntry::encode(&icon_image).map_err(|e| {
            IconError::Encode(format!("ICO 条目编码失败（{}x{}）：{}", width, height, e))
        })?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(path)
        .map_err(|e| IconError::FileSystem(format!("创建 {} 失败：{}", path.display(), e)))?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| IconError::Encode(format!("写入 ICO 失败：{}", e)))
}
