//! # 公钥混淆工具 — 命令行入口
//!
//! 生成的 Rust 源码写到 stdout，调用方自行重定向；诊断信息走日志（stderr）。

use std::path::PathBuf;
use std::process::ExitCode;

use app_asset_tools::error::AppError;
use app_asset_tools::key_obfuscator::{
    DEFAULT_XOR_KEY, RustSnippet, USAGE, obfuscate_file, parse_xor_key,
};
use clap::Parser;
use clap::error::ErrorKind;

/// 读取 PEM 公钥，XOR 混淆 Base64 载荷并生成 Rust 代码
#[derive(Debug, Parser)]
#[command(name = "obfuscate-key", version)]
struct Cli {
    /// 公钥文件路径
    public_key_path: PathBuf,

    /// XOR 混淆密钥（支持 0x / 0o / 0b 前缀）
    #[arg(value_parser = parse_xor_key)]
    xor_key: Option<u8>,

    /// 多余的位置参数，忽略
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    extra: Vec<String>,
}

fn run(cli: Cli) -> Result<(), AppError> {
    if !cli.extra.is_empty() {
        log::debug!("忽略多余参数：{:?}", cli.extra);
    }
    let key = cli.xor_key.unwrap_or(DEFAULT_XOR_KEY);
    let obfuscated = obfuscate_file(&cli.public_key_path, key)?;
    print!("{}", RustSnippet(&obfuscated));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            ErrorKind::MissingRequiredArgument => {
                println!("{USAGE}");
                return ExitCode::FAILURE;
            }
            _ => {
                log::error!("{}", AppError::Usage(err.to_string()));
                println!("{USAGE}");
                return ExitCode::FAILURE;
            }
        },
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
