//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“文件 → 图像 → RGBA → 缩放 → (可选)背景合成 → PNG”的过程集中管理。
//! 源图加载后统一转换为 RGBA，后续每个尺寸都基于同一份 RGBA 数据独立生成。
//!
//! ## 实现思路
//!
//! 1. 检查源文件存在性并完整解码
//! 2. 转换 RGBA
//! 3. 优先使用 `fast_image_resize` 缩放，失败时回退 `image::imageops::resize`
//! 4. 仅在设置了背景色时进行合成
//! 5. 以 PNG 写盘

use std::path::Path;

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use super::IconError;
use super::policy::ResizeFilter;

/// 加载源图像并归一化为 RGBA。
pub fn load_source(path: &Path) -> Result<RgbaImage, IconError> {
    if !path.exists() {
        return Err(IconError::SourceMissing(path.to_path_buf()));
    }

    let decoded = image::open(path)
        .map_err(|e| IconError::Decode(format!("图片解码失败（{}）：{}", path.display(), e)))?;

    log::debug!(
        "源图像色彩模式：{:?}，统一转换为 RGBA",
        decoded.color()
    );

    Ok(decoded.to_rgba8())
}

/// 把图像缩放为 `size × size`。
///
/// 非正方形源图会被直接拉伸到正方形，与图标素材的约定一致。
pub fn resize_square(
    image: &RgbaImage,
    size: u32,
    filter: ResizeFilter,
    smooth_filter: FilterType,
) -> RgbaImage {
    match resize_with_fast_image_resize(image, size, filter, smooth_filter) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            let fallback = match filter {
                ResizeFilter::Smooth => smooth_filter,
                ResizeFilter::Nearest => FilterType::Nearest,
            };
            image::imageops::resize(image, size, size, fallback)
        }
    }
}

fn resize_with_fast_image_resize(
    image: &RgbaImage,
    size: u32,
    filter: ResizeFilter,
    smooth_filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = image.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(size, size, fr::PixelType::U8x4);

    let algorithm = match filter {
        ResizeFilter::Smooth => fr::ResizeAlg::Convolution(to_fast_filter(smooth_filter)),
        ResizeFilter::Nearest => fr::ResizeAlg::Nearest,
    };

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(algorithm);

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(size, size, dst_image.into_vec())
        .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

/// 在纯色画布上按 alpha 绘制图像。
pub fn composite_on_background(image: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut canvas = RgbaImage::from_pixel(width, height, background);
    image::imageops::overlay(&mut canvas, image, 0, 0);
    canvas
}

/// 以 PNG 格式保存图像。
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Encode(format!("保存 PNG 失败（{}）：{}", path.display(), e)))
}
