//! 单字节 XOR 混淆。XOR 自反：同一密钥再做一次即可还原。

/// 默认混淆密钥。
pub const DEFAULT_XOR_KEY: u8 = 0x5A;

pub fn xor_bytes(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}

/// 混淆后的公钥数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscatedKey {
    /// 原始 Base64 载荷（未混淆）。
    pub payload: String,
    pub key: u8,
    /// 逐字节混淆结果，长度等于载荷的 UTF-8 字节数。
    pub bytes: Vec<u8>,
}

impl ObfuscatedKey {
    pub fn new(payload: String, key: u8) -> Self {
        let bytes = xor_bytes(payload.as_bytes(), key);
        Self {
            payload,
            key,
            bytes,
        }
    }

    /// 从 PEM 文本构建。
    pub fn from_pem(pem_text: &str, key: u8) -> Self {
        Self::new(super::pem::extract_payload(pem_text), key)
    }

    /// 再次 XOR 还原载荷。
    pub fn reveal(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(xor_bytes(&self.bytes, self.key))
    }
}
