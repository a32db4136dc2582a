//! # 应用素材工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌─ generate-icons ──┐        ┌─ obfuscate-key ───┐
//! │ clap → IconGenCfg │        │ clap → path + key │
//! └────────┬──────────┘        └────────┬──────────┘
//!          ↓                            ↓
//!   icon_gen::IconGenerator     key_obfuscator::obfuscate_file
//!          ↓                            ↓
//!   PNG / ICO / ICNS 文件        Rust 源码 → stdout
//! ```
//!
//! 两个工具互不依赖，只共享统一错误类型。
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，两个二进制的 `main` 返回类型 |
//! | [`icon_gen`] | 从 logo 生成整套桌面应用图标素材 |
//! | [`key_obfuscator`] | PEM 公钥 XOR 混淆与 Rust 源码生成 |

pub mod error;
pub mod icon_gen;
pub mod key_obfuscator;
