//! # PEM 信封处理
//!
//! 去掉 `-----BEGIN ...-----` / `-----END ...-----` 之类的边界行，
//! 把剩余行按原顺序直接拼接为 Base64 载荷。不校验 PEM 结构。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// PEM 边界行前缀。
pub const PEM_BOUNDARY: &str = "-----";

/// 提取 Base64 载荷。
///
/// # 示例
/// ```rust
/// use app_asset_tools::key_obfuscator::extract_payload;
///
/// let pem = "-----BEGIN PUBLIC KEY-----\nQUJD\nREVG\n-----END PUBLIC KEY-----\n";
/// assert_eq!(extract_payload(pem), "QUJDREVG");
/// ```
pub fn extract_payload(pem_text: &str) -> String {
    pem_text
        .trim()
        .lines()
        .filter(|line| !line.starts_with(PEM_BOUNDARY))
        .collect()
}

/// 载荷是否为非空且可解码的标准 Base64。
pub fn looks_like_base64(payload: &str) -> bool {
    !payload.is_empty() && STANDARD.decode(payload).is_ok()
}
