//! 命令行参数辅助：XOR 密钥字面量解析与用法说明。

/// 用法说明，缺少参数时原样输出到 stdout。
pub const USAGE: &str = "\
Usage: obfuscate-key <public_key_path> [xor_key]
Example: obfuscate-key server/keys/public.pem 0x5A";

/// 解析整数字面量形式的 XOR 密钥。
///
/// 支持十进制与 `0x` / `0o` / `0b` 前缀（大小写均可），允许 `_` 分隔，
/// 结果必须落在单字节范围内。带前导零的十进制（如 `010`）有歧义，拒绝；
/// 全零（`0`、`00`）可以。
///
/// # 示例
/// ```rust
/// use app_asset_tools::key_obfuscator::parse_xor_key;
///
/// assert_eq!(parse_xor_key("0x5A"), Ok(0x5A));
/// assert_eq!(parse_xor_key("90"), Ok(90));
/// assert!(parse_xor_key("0x100").is_err());
/// ```
pub fn parse_xor_key(literal: &str) -> Result<u8, String> {
    let trimmed = literal.trim();
    let cleaned: String = trimmed.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() || trimmed.starts_with('_') || trimmed.ends_with('_') {
        return Err(format!("无效的 XOR 密钥：{}", literal));
    }

    if radix == 10 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0') {
        return Err(format!("无效的 XOR 密钥：{}（十进制不能有前导零）", literal));
    }

    let value = u32::from_str_radix(digits, radix)
        .map_err(|e| format!("无效的 XOR 密钥：{}（{}）", literal, e))?;

    u8::try_from(value).map_err(|_| format!("XOR 密钥超出单字节范围（0~255）：{}", literal))
}
