//! # 图标生成工具 — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与退出码映射。
//! 生成流程见 `icon_gen::IconGenerator`。

use std::path::PathBuf;
use std::process::ExitCode;

use app_asset_tools::error::AppError;
use app_asset_tools::icon_gen::{
    DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, GenerationReport, IconError, IconGenConfig,
    IconGenerator, parse_background,
};
use clap::Parser;

/// 从 logo.png 生成桌面应用打包所需的图标素材
#[derive(Debug, Parser)]
#[command(name = "generate-icons", version)]
struct Cli {
    /// 源图标文件路径
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// 输出目录（不存在时自动创建）
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// 最大放大倍数，0 表示无限制
    #[arg(short, long, default_value_t = 0)]
    max_upscale: u32,

    /// 跳过生成比源图像大的图标
    #[arg(long)]
    skip_large: bool,

    /// 背景色（#RRGGBB 或 #RRGGBBAA），默认保持透明
    #[arg(long)]
    background: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<IconGenConfig, AppError> {
        let background = match self.background.as_deref() {
            Some(value) => parse_background(value)?,
            None => None,
        };

        Ok(IconGenConfig {
            source: self.source,
            output_dir: self.output_dir,
            max_upscale: self.max_upscale,
            skip_large: self.skip_large,
            background,
            ..IconGenConfig::default()
        })
    }
}

fn run(cli: Cli) -> Result<GenerationReport, AppError> {
    let config = cli.into_config()?;
    Ok(IconGenerator::new(config).run()?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(AppError::Icon(err @ IconError::SourceMissing(_))) => {
            log::error!("❌ {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("❌ 生成失败: {err}");
            ExitCode::FAILURE
        }
    }
}
