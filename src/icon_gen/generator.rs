//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不关心参数来源，也不直接调用外部工具：
//! 1. 检查源文件并创建输出目录
//! 2. 加载源图并给出尺寸建议
//! 3. 按清单逐个生成 PNG
//! 4. 生成 ICO 容器
//! 5. 生成平台图标包（失败只记录警告，不中断）
//!
//! ## 实现思路
//!
//! - PNG 清单走 `ResizePolicy::decide`，可被跳过策略跳过；
//!   ICO 与图标包总会生成，只复用滤镜选择。
//! - 致命错误直接 `?` 向上返回，已写出的文件不回滚。
//! - 图标包打包通过 `BundlePackager` 注入，便于测试替换。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbaImage;

use super::bundle::{BundlePackager, SipsPackager};
use super::catalog::{
    BUNDLE_FILE, BUNDLE_SIZE, BUNDLE_SUBSTITUTE_FILE, BUNDLE_TEMP_FILE, ICO_FILE, ICO_SIZES,
    IconSpec, png_catalog,
};
use super::container::write_ico;
use super::pipeline::{composite_on_background, load_source, resize_square, save_png};
use super::policy::{ResizeDecision, ResizeFilter, ResizePolicy, ScaleKind, SourceAdvice};
use super::report::{GenerationReport, OutputOutcome, OutputStatus};
use super::{IconError, IconGenConfig};

/// 图标生成器。
pub struct IconGenerator<P: BundlePackager = SipsPackager> {
    config: IconGenConfig,
    packager: P,
}

impl IconGenerator<SipsPackager> {
    /// 使用默认的 `sips` 打包器创建生成器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use app_asset_tools::icon_gen::{IconGenConfig, IconGenerator};
    ///
    /// let report = IconGenerator::new(IconGenConfig::default()).run()?;
    /// println!("generated {}", report.generated_count());
    /// # Ok::<(), app_asset_tools::icon_gen::IconError>(())
    /// ```
    pub fn new(config: IconGenConfig) -> Self {
        Self::with_packager(config, SipsPackager)
    }
}

impl<P: BundlePackager> IconGenerator<P> {
    pub fn with_packager(config: IconGenConfig, packager: P) -> Self {
        Self { config, packager }
    }

    /// 处理主入口：生成整套图标素材。
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        let total_start = Instant::now();
        let config = &self.config;

        if !config.source.exists() {
            return Err(IconError::SourceMissing(config.source.clone()));
        }

        fs::create_dir_all(&config.output_dir).map_err(|e| {
            IconError::FileSystem(format!(
                "创建输出目录 {} 失败：{}",
                config.output_dir.display(),
                e
            ))
        })?;

        let source = load_source(&config.source)?;
        let (width, height) = source.dimensions();
        let source_edge = width.max(height);
        if source_edge == 0 {
            return Err(IconError::Decode("源图像尺寸为 0".to_string()));
        }

        log::info!("📁 源图像：{}（{}x{}）", config.source.display(), width, height);
        SourceAdvice::from_edge(source_edge).log(source_edge);

        let policy = ResizePolicy::from(config);
        let mut outcomes = Vec::new();

        for spec in png_catalog() {
            outcomes.push(self.render_png(&source, source_edge, &policy, spec)?);
        }

        outcomes.push(self.render_ico(&source, source_edge, &policy)?);
        outcomes.push(self.render_bundle(&source, source_edge, &policy));

        let report = GenerationReport {
            source_width: width,
            source_height: height,
            skip_options_active: config.skip_options_active(),
            outcomes,
        };

        log::info!(
            "🎉 图标生成完成！共生成 {} 个文件（耗时 {} ms）",
            report.generated_count(),
            total_start.elapsed().as_millis()
        );
        log::info!("📂 输出目录：{}", config.output_dir.display());
        if report.skip_options_active && report.skipped_count() > 0 {
            log::info!("⏭️ 跳过 {} 个大尺寸文件", report.skipped_count());
        }

        Ok(report)
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        self.config.output_dir.join(file_name)
    }

    /// 缩放并按需合成背景。
    fn prepare(&self, source: &RgbaImage, size: u32, filter: ResizeFilter) -> RgbaImage {
        let resized = resize_square(source, size, filter, self.config.smooth_filter);
        match self.config.background {
            Some(color) => composite_on_background(&resized, color),
            None => resized,
        }
    }

    fn render_png(
        &self,
        source: &RgbaImage,
        source_edge: u32,
        policy: &ResizePolicy,
        spec: &IconSpec,
    ) -> Result<OutputOutcome, IconError> {
        let path = self.output_path(spec.file_name);
        let status = match policy.decide(spec.size, source_edge) {
            ResizeDecision::Skip(reason) => {
                log_skip(&path, spec.size, &reason.to_string());
                OutputStatus::Skipped(reason)
            }
            ResizeDecision::Resize { filter, scale } => {
                save_png(&self.prepare(source, spec.size, filter), &path)?;
                log::info!(
                    "✓ 生成：{}（{}x{}）[{}]",
                    path.display(),
                    spec.size,
                    spec.size,
                    scale
                );
                OutputStatus::Generated(scale)
            }
        };

        Ok(OutputOutcome {
            file_name: spec.file_name.to_string(),
            size: spec.size,
            status,
        })
    }

    fn render_ico(
        &self,
        source: &RgbaImage,
        source_edge: u32,
        policy: &ResizePolicy,
    ) -> Result<OutputOutcome, IconError> {
        let path = self.output_path(ICO_FILE);
        let largest = ICO_SIZES.iter().copied().max().unwrap_or_default();

        let images: Vec<RgbaImage> = ICO_SIZES
            .iter()
            .map(|&size| {
                let (filter, _) = policy.select_filter(size, source_edge);
                self.prepare(source, size, filter)
            })
            .collect();

        write_ico(&images, &path)?;
        log::info!("✓ 生成：{}（多尺寸 ICO：{:?}）", path.display(), ICO_SIZES);

        Ok(OutputOutcome {
            file_name: ICO_FILE.to_string(),
            size: largest,
            status: OutputStatus::Generated(ScaleKind::between(largest, source_edge)),
        })
    }

    /// 图标包步骤自行兜底所有错误，只降级为警告。
    fn render_bundle(
        &self,
        source: &RgbaImage,
        source_edge: u32,
        policy: &ResizePolicy,
    ) -> OutputOutcome {
        let path = self.output_path(BUNDLE_FILE);
        let (filter, scale) = policy.select_filter(BUNDLE_SIZE, source_edge);
        let status = match self.try_bundle(source, filter, &path) {
            Ok(Some(substitute)) => OutputStatus::Substituted {
                file_name: substitute,
            },
            Ok(None) => OutputStatus::Generated(scale),
            Err(err) => {
                log::warn!("⚠️ 图标包生成失败：{}", err);
                OutputStatus::Failed(err.to_string())
            }
        };

        OutputOutcome {
            file_name: BUNDLE_FILE.to_string(),
            size: BUNDLE_SIZE,
            status,
        }
    }

    /// 返回 `Some(替代文件名)` 表示走了 PNG 替代分支。
    fn try_bundle(
        &self,
        source: &RgbaImage,
        filter: ResizeFilter,
        bundle_path: &Path,
    ) -> Result<Option<String>, IconError> {
        let image = self.prepare(source, BUNDLE_SIZE, filter);

        if !self.packager.is_available() {
            let substitute = self.output_path(BUNDLE_SUBSTITUTE_FILE);
            save_png(&image, &substitute)?;
            log::warn!(
                "⚠️ 打包工具 {} 不可用，已生成 PNG 替代：{}",
                self.packager.name(),
                substitute.display()
            );
            return Ok(Some(BUNDLE_SUBSTITUTE_FILE.to_string()));
        }

        let temp_png = self.output_path(BUNDLE_TEMP_FILE);
        save_png(&image, &temp_png)?;
        let packaged = self.packager.package(&temp_png, bundle_path);

        if let Err(err) = fs::remove_file(&temp_png) {
            log::warn!("清理中间文件 {} 失败：{}", temp_png.display(), err);
        }

        packaged?;
        log::info!(
            "✓ 生成：{}（平台图标包，{}）",
            bundle_path.display(),
            self.packager.name()
        );
        Ok(None)
    }
}

fn log_skip(path: &Path, size: u32, reason: &str) {
    log::warn!("⏭️ 跳过：{}（{}x{}）[{}]", path.display(), size, size, reason);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_gen::bundle::NoPackager;
    use image::Rgba;
    use std::cell::Cell;

    struct FakePackager {
        available: bool,
        fail: bool,
        calls: Cell<usize>,
    }

    impl FakePackager {
        fn new(available: bool, fail: bool) -> Self {
            Self {
                available,
                fail,
                calls: Cell::new(0),
            }
        }
    }

    impl BundlePackager for FakePackager {
        fn is_available(&self) -> bool {
            self.available
        }

        fn name(&self) -> &str {
            "fake"
        }

        fn package(&self, png: &Path, output: &Path) -> Result<(), IconError> {
            self.calls.set(self.calls.get() + 1);
            assert!(png.exists(), "intermediate png must exist while packaging");
            if self.fail {
                return Err(IconError::Bundle("fake failure".to_string()));
            }
            fs::write(output, b"icns").map_err(|e| IconError::FileSystem(e.to_string()))
        }
    }

    fn config_with_source(dir: &Path, edge: u32) -> IconGenConfig {
        let source = dir.join("logo.png");
        RgbaImage::from_pixel(edge, edge, Rgba([10, 200, 30, 255]))
            .save(&source)
            .expect("write source failed");
        IconGenConfig {
            source,
            output_dir: dir.join("icons"),
            ..IconGenConfig::default()
        }
    }

    #[test]
    fn available_packager_produces_bundle_and_removes_intermediate() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let config = config_with_source(dir.path(), 64);
        let out = config.output_dir.clone();
        let generator = IconGenerator::with_packager(config, FakePackager::new(true, false));

        let report = generator.run().expect("run failed");

        assert_eq!(generator.packager.calls.get(), 1);
        assert!(out.join(BUNDLE_FILE).exists());
        assert!(!out.join(BUNDLE_TEMP_FILE).exists());
        assert!(matches!(
            report.outcome(BUNDLE_FILE).map(|o| &o.status),
            Some(OutputStatus::Generated(_))
        ));
    }

    #[test]
    fn failing_packager_is_not_fatal() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let config = config_with_source(dir.path(), 64);
        let out = config.output_dir.clone();
        let generator = IconGenerator::with_packager(config, FakePackager::new(true, true));

        let report = generator.run().expect("bundle failure must not abort the run");

        assert!(!out.join(BUNDLE_TEMP_FILE).exists());
        assert!(matches!(
            report.outcome(BUNDLE_FILE).map(|o| &o.status),
            Some(OutputStatus::Failed(_))
        ));
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.generated_count(), 15);
    }

    #[test]
    fn unavailable_packager_writes_png_substitute() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let config = config_with_source(dir.path(), 64);
        let out = config.output_dir.clone();
        let generator = IconGenerator::with_packager(config, NoPackager);

        let report = generator.run().expect("run failed");

        assert!(!out.join(BUNDLE_FILE).exists());
        let substitute = image::open(out.join(BUNDLE_SUBSTITUTE_FILE)).expect("open substitute");
        assert_eq!((substitute.width(), substitute.height()), (1024, 1024));
        assert_eq!(
            report.outcome(BUNDLE_FILE).map(|o| &o.status),
            Some(&OutputStatus::Substituted {
                file_name: BUNDLE_SUBSTITUTE_FILE.to_string()
            })
        );
    }

    #[test]
    fn background_is_composited_when_requested() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let source = dir.path().join("logo.png");
        RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]))
            .save(&source)
            .expect("write source failed");
        let config = IconGenConfig {
            source,
            output_dir: dir.path().join("icons"),
            background: Some(Rgba([255, 255, 255, 255])),
            ..IconGenConfig::default()
        };
        let out = config.output_dir.clone();

        IconGenerator::with_packager(config, NoPackager)
            .run()
            .expect("run failed");

        let icon = image::open(out.join("32x32.png")).expect("open icon").to_rgba8();
        assert_eq!(*icon.get_pixel(16, 16), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn missing_source_is_fatal_and_creates_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let config = IconGenConfig {
            source: dir.path().join("missing.png"),
            output_dir: dir.path().join("icons"),
            ..IconGenConfig::default()
        };

        let result = IconGenerator::with_packager(config, NoPackager).run();

        assert!(matches!(result, Err(IconError::SourceMissing(_))));
        assert!(!dir.path().join("icons").exists());
    }
}
