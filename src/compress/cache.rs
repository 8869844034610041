//! 圧縮済みキャッシュ
//!
//! 書き出したファイルのSHA-256を記録し、次回実行時に
//! 内容と設定が変わっていない画像の再圧縮をスキップする。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".compress-cache.json";

/// 圧縮設定（変わったらキャッシュを捨てる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    pub max_size: u32,
    pub quality: u8,
}

/// キャッシュファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// バージョン（互換性チェック用）
    version: u32,
    settings: Option<CacheSettings>,
    /// ファイル名 → エントリ
    entries: HashMap<String, CacheEntry>,
}

/// キャッシュエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// 書き出したファイルのハッシュ
    pub hash: String,
    pub file_size: u64,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// キャッシュファイルを読み込み
    ///
    /// 設定が異なる場合は空のキャッシュを返す。
    pub fn load(folder: &Path, settings: CacheSettings) -> Self {
        let empty = Self::new(settings);

        let file = match File::open(Self::cache_path(folder)) {
            Ok(f) => f,
            Err(_) => return empty,
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, CacheFile>(reader) {
            Ok(cache) => {
                // バージョンチェック
                if cache.version != Self::CURRENT_VERSION {
                    eprintln!("キャッシュバージョン不一致、再生成します");
                    return empty;
                }
                if cache.settings != Some(settings) {
                    return empty;
                }
                cache
            }
            Err(_) => empty,
        }
    }

    pub fn new(settings: CacheSettings) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            settings: Some(settings),
            entries: HashMap::new(),
        }
    }

    /// キャッシュファイルを保存
    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// 前回書き出した内容から変わっていないか
    pub fn is_fresh(&self, file_name: &str, hash: &str) -> bool {
        self.entries
            .get(file_name)
            .is_some_and(|entry| entry.hash == hash)
    }

    pub fn insert(&mut self, file_name: String, hash: String, file_size: u64) {
        self.entries.insert(file_name, CacheEntry { hash, file_size });
    }

    /// キャッシュ件数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// ファイル内容のSHA-256（16進文字列）
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}
