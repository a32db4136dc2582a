// Binary-level behaviour: exit codes and stdout contents
use std::fs;
use std::process::Command;

use app_asset_tools::key_obfuscator::USAGE;

#[test]
fn obfuscate_key_without_arguments_prints_usage_and_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_obfuscate-key"))
        .output()
        .expect("spawn obfuscate-key failed");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{USAGE}\n"));
}

#[test]
fn obfuscate_key_prints_generated_source() {
    let dir = tempfile::tempdir().expect("create temp dir failed");
    let pem = dir.path().join("public.pem");
    fs::write(&pem, "-----BEGIN PUBLIC KEY-----\nQUJD\n-----END PUBLIC KEY-----\n")
        .expect("write fixture failed");

    let output = Command::new(env!("CARGO_BIN_EXE_obfuscate-key"))
        .arg(&pem)
        .output()
        .expect("spawn obfuscate-key failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("    0x0b, 0x0f, 0x10, 0x1e, // QUJD\n"));
    assert!(stdout.contains("const XOR_KEY: u8 = 0x5A;"));
}

#[test]
fn obfuscate_key_accepts_custom_key_literal() {
    let dir = tempfile::tempdir().expect("create temp dir failed");
    let pem = dir.path().join("public.pem");
    fs::write(&pem, "QUJD\n").expect("write fixture failed");

    let output = Command::new(env!("CARGO_BIN_EXE_obfuscate-key"))
        .arg(&pem)
        .arg("0b1")
        .output()
        .expect("spawn obfuscate-key failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("使用 XOR 混淆，密钥为 0x01"));
    assert!(stdout.contains("0x50, 0x54, 0x4b, 0x45, // QUJD"));
}

#[test]
fn obfuscate_key_ignores_extra_arguments() {
    let dir = tempfile::tempdir().expect("create temp dir failed");
    let pem = dir.path().join("public.pem");
    fs::write(&pem, "QUJD\n").expect("write fixture failed");

    let output = Command::new(env!("CARGO_BIN_EXE_obfuscate-key"))
        .arg(&pem)
        .arg("0x5A")
        .arg("unused")
        .output()
        .expect("spawn obfuscate-key failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("    0x0b, 0x0f, 0x10, 0x1e, // QUJD\n"));
}

#[test]
fn obfuscate_key_rejects_leading_zero_decimal_key() {
    let dir = tempfile::tempdir().expect("create temp dir failed");
    let pem = dir.path().join("public.pem");
    fs::write(&pem, "QUJD\n").expect("write fixture failed");

    let output = Command::new(env!("CARGO_BIN_EXE_obfuscate-key"))
        .arg(&pem)
        .arg("010")
        .output()
        .expect("spawn obfuscate-key failed");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: obfuscate-key"));
}

#[test]
fn obfuscate_key_fails_on_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_obfuscate-key"))
        .arg("no/such/public.pem")
        .output()
        .expect("spawn obfuscate-key failed");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn generate_icons_fails_when_source_is_missing() {
    let dir = tempfile::tempdir().expect("create temp dir failed");

    let output = Command::new(env!("CARGO_BIN_EXE_generate-icons"))
        .arg("--source")
        .arg(dir.path().join("missing.png"))
        .arg("--output-dir")
        .arg(dir.path().join("icons"))
        .output()
        .expect("spawn generate-icons failed");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn generate_icons_short_flags_and_skip_large() {
    let dir = tempfile::tempdir().expect("create temp dir failed");
    let source = dir.path().join("logo.png");
    image::RgbaImage::from_pixel(40, 40, image::Rgba([9, 9, 9, 255]))
        .save(&source)
        .expect("write source failed");
    let out = dir.path().join("icons");

    let status = Command::new(env!("CARGO_BIN_EXE_generate-icons"))
        .arg("-s")
        .arg(&source)
        .arg("-o")
        .arg(&out)
        .arg("--skip-large")
        .status()
        .expect("spawn generate-icons failed");

    assert!(status.success());
    assert!(out.join("32x32.png").exists());
    assert!(out.join("Square30x30Logo.png").exists());
    assert!(!out.join("128x128.png").exists());
    assert!(out.join("icon.ico").exists());
}
