//! # 公钥混淆模块（key_obfuscator）
//!
//! 读取 PEM 公钥，去掉信封，把 Base64 载荷逐字节 XOR 后生成 Rust 常量源码。
//!
//! - `pem`：信封剥离与 Base64 探测
//! - `xor`：混淆 / 还原
//! - `codegen`：源码渲染
//! - `args`：密钥字面量解析与用法说明
//!
//! 输入不做 PEM 结构校验：任何文本都会被处理，载荷不是合法 Base64 时只记录警告。

mod args;
mod codegen;
mod pem;
mod xor;

use std::fs;
use std::io;
use std::path::Path;

pub use args::{USAGE, parse_xor_key};
pub use codegen::{BYTES_PER_ROW, RustSnippet, render_rust_source};
pub use pem::{PEM_BOUNDARY, extract_payload, looks_like_base64};
pub use xor::{DEFAULT_XOR_KEY, ObfuscatedKey, xor_bytes};

/// 读取公钥文件并混淆。I/O 错误原样返回。
pub fn obfuscate_file(path: &Path, key: u8) -> io::Result<ObfuscatedKey> {
    let pem_text = fs::read_to_string(path)?;
    let obfuscated = ObfuscatedKey::from_pem(&pem_text, key);

    if !looks_like_base64(&obfuscated.payload) {
        log::warn!(
            "⚠️ {} 的载荷不是合法的 Base64（{} 字节），仍按原样混淆",
            path.display(),
            obfuscated.payload.len()
        );
    }
    log::debug!(
        "已混淆 {} 字节，密钥 0x{:02X}",
        obfuscated.bytes.len(),
        key
    );

    Ok(obfuscated)
}
