//! CLIの終了コードと出力の確認

use std::process::Command;
use tempfile::{tempdir, TempDir};

/// HOMEを一時ディレクトリに向けたコマンド（TempDirはテスト終了まで保持する）
fn moving_sale() -> (Command, TempDir) {
    let home = tempdir().expect("Failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_moving-sale"));
    // 利用者の設定ファイルを読まないようにする
    cmd.env("HOME", home.path());
    (cmd, home)
}

fn photo_folder() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    image::RgbImage::new(64, 32)
        .save(dir.path().join("photo.png"))
        .unwrap();
    dir
}

const CHAIR_CSV: &str = "Item,New price,Asking price,Available,Images,Notes,Status\n\
                         Chair,500,300,now,\"chair1.jpg,chair2.jpg\",Good condition,\n\
                         Lamp,???,50,June 30,lamp.jpg,,Sold\n";

#[test]
fn test_compress_without_argument_exits_1() {
    let (mut cmd, _home) = moving_sale();
    let status = cmd.arg("compress").status().unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_compress_missing_folder_exits_1() {
    let (mut cmd, _home) = moving_sale();
    let status = cmd
        .args(["compress", "/nonexistent/images/folder"])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_compress_existing_folder_exits_0() {
    let dir = photo_folder();
    let (mut cmd, _home) = moving_sale();
    let status = cmd.arg("compress").arg(dir.path()).status().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_compress_folder_without_images_exits_0() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (mut cmd, _home) = moving_sale();
    let status = cmd.arg("compress").arg(dir.path()).status().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_compress_with_broken_config_exits_0() {
    let dir = photo_folder();
    let (mut cmd, home) = moving_sale();
    let config_dir = home.path().join(".config").join("moving-sale");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{oops").unwrap();

    let output = cmd.arg("compress").arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    // 既定値で続行したことを警告する
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_config_with_broken_file_exits_1() {
    let (mut cmd, home) = moving_sale();
    let config_dir = home.path().join(".config").join("moving-sale");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{oops").unwrap();

    let status = cmd.args(["config", "--show"]).status().unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_render_page_to_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("items.csv");
    let out = dir.path().join("index.html");
    std::fs::write(&csv, CHAIR_CSV).unwrap();

    let (mut cmd, _home) = moving_sale();
    let status = cmd
        .arg("render")
        .arg(&csv)
        .arg("--page")
        .arg("-o")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("300 AED"));
    assert!(html.contains("New: 500 AED"));
    assert!(html.contains("Available now"));
    assert!(html.contains(r#"class="item-card sold""#));
    assert!(html.contains(r#"data-role="modal""#));
}

#[test]
fn test_check_json_outputs_items() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("items.csv");
    std::fs::write(&csv, CHAIR_CSV).unwrap();

    let (mut cmd, _home) = moving_sale();
    let output = cmd.arg("check").arg(&csv).arg("--json").output().unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items.as_array().map(Vec::len), Some(2));
    assert_eq!(items[0]["images"][1], "images/chair2.jpg");
    assert_eq!(items[1]["newPrice"], serde_json::Value::Null);
    assert_eq!(items[1]["availability"], "Available from June 30");
}

#[test]
fn test_render_missing_csv_exits_1() {
    let (mut cmd, _home) = moving_sale();
    let status = cmd
        .args(["render", "/nonexistent/items.csv"])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}
