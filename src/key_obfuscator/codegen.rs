//! # Rust 源码生成
//!
//! 把 `ObfuscatedKey` 渲染为可直接粘贴进项目的 Rust 常量定义。
//! 每行 16 字节，行尾注释给出对应位置的原始 Base64 片段，便于人工核对。

use std::fmt;

use super::ObfuscatedKey;

/// 每行输出的字节数。
pub const BYTES_PER_ROW: usize = 16;

/// 生成代码的 `Display` 包装。
pub struct RustSnippet<'a>(pub &'a ObfuscatedKey);

impl fmt::Display for RustSnippet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.0;
        let payload = key.payload.as_str();

        writeln!(f, "/// 混淆的公钥数据")?;
        writeln!(f, "///")?;
        writeln!(f, "/// 使用 XOR 混淆，密钥为 0x{:02X}", key.key)?;
        writeln!(f, "/// 原始数据为 Base64 编码的公钥（去除 PEM 头尾）")?;
        writeln!(
            f,
            "const OBFUSCATED_PUBLIC_KEY: [u8; {}] = [",
            key.bytes.len()
        )?;

        for (row, chunk) in key.bytes.chunks(BYTES_PER_ROW).enumerate() {
            let start = row * BYTES_PER_ROW;
            let end = (start + chunk.len()).min(payload.len());
            let hex = chunk
                .iter()
                .map(|b| format!("0x{:02x}", b))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "    {}, // {}", hex, row_text(payload, start, end))?;
        }

        writeln!(f, "];")?;
        writeln!(f)?;
        writeln!(f, "/// XOR 混淆密钥")?;
        writeln!(f, "const XOR_KEY: u8 = 0x{:02X};", key.key)?;
        writeln!(f)?;
        writeln!(f, "// 原始公钥（用于验证）:")?;
        writeln!(f, "// {}", key.payload)
    }
}

/// 取 `[start, end)` 字节范围对应的原文。多字节字符归入首字节所在的行，
/// 两端都向后挪到字符边界。
fn row_text(payload: &str, start: usize, end: usize) -> &str {
    let forward = |mut i: usize| {
        while !payload.is_char_boundary(i) {
            i += 1;
        }
        i
    };
    let to = forward(end);
    let from = forward(start).min(to);
    &payload[from..to]
}

pub fn render_rust_source(key: &ObfuscatedKey) -> String {
    RustSnippet(key).to_string()
}
