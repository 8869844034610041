use crate::error::{MovingSaleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 出品リストCSV
    pub data_file: PathBuf,
    /// 一括圧縮時の長辺の最大ピクセル
    pub max_image_size: u32,
    /// 一括圧縮時のJPEG品質 (1-100)
    pub jpeg_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(moving_sale_common::page::DATA_FILE),
            max_image_size: 1600,
            jpeg_quality: 80,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MovingSaleError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("moving-sale").join("config.json"))
    }

    pub fn set_jpeg_quality(&mut self, quality: u8) -> Result<()> {
        if !(1..=100).contains(&quality) {
            return Err(MovingSaleError::InvalidQuality(quality));
        }
        self.jpeg_quality = quality;
        Ok(())
    }

    pub fn set_max_image_size(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            return Err(MovingSaleError::Config("最大サイズは1以上を指定してください".into()));
        }
        self.max_image_size = size;
        Ok(())
    }
}
