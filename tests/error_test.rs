//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use moving_sale::compress::{self, CompressOptions};
use moving_sale::error::MovingSaleError;
use moving_sale::{read_catalog_text, scanner};
use std::path::Path;
use tempfile::tempdir;

const OPTIONS: CompressOptions = CompressOptions { max_size: 1600, quality: 80, force: false };

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(MovingSaleError::FolderNotFound(_))));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.unwrap().is_empty());
}

/// 画像のないフォルダを圧縮しようとした場合
#[test]
fn test_compress_folder_without_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("items.csv"), "Item\nChair\n").unwrap();

    // 画像がないだけならエラーにせず、0枚の結果を返す
    let summary = compress::compress_folder(dir.path(), OPTIONS, false).unwrap();
    assert_eq!(summary.total(), 0);
    assert!(!dir.path().join(".compress-cache.json").exists());
}

/// 存在しないフォルダを圧縮しようとした場合
#[test]
fn test_compress_missing_folder() {
    let result = compress::compress_folder(Path::new("/nonexistent/images"), OPTIONS, false);
    assert!(matches!(result, Err(MovingSaleError::FolderNotFound(_))));
}

/// 不正な品質指定
#[test]
fn test_compress_invalid_quality() {
    let dir = tempdir().expect("Failed to create temp dir");
    let options = CompressOptions { quality: 0, ..OPTIONS };
    let result = compress::compress_folder(dir.path(), options, false);
    assert!(matches!(result, Err(MovingSaleError::InvalidQuality(0))));
}

/// CSVファイルがない場合
#[test]
fn test_read_missing_catalog() {
    let result = read_catalog_text(Path::new("/nonexistent/items.csv"));
    assert!(matches!(result, Err(MovingSaleError::FileNotFound(_))));
}

/// MovingSaleErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        MovingSaleError::Config("テスト設定エラー".to_string()),
        MovingSaleError::FileNotFound("items.csv".to_string()),
        MovingSaleError::FolderNotFound("/path/to/folder".to_string()),
        MovingSaleError::ImageLoad("sofa.jpg".to_string()),
        MovingSaleError::ImageEncode("sofa.jpg".to_string()),
        MovingSaleError::InvalidQuality(101),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MovingSaleError = io_err.into();

    assert!(matches!(err, MovingSaleError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MovingSaleError = json_err.into();

    assert!(matches!(err, MovingSaleError::JsonParse(_)));
}
