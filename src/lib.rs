//! moving-sale CLI
//!
//! 出品リストCSVの確認・事前描画と、掲載用画像の一括圧縮

pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;

use error::{MovingSaleError, Result};
use std::path::Path;

/// 出品リストCSVを読み込む
pub fn read_catalog_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(MovingSaleError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
