use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovingSaleError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("画像書き出しエラー: {0}")]
    ImageEncode(String),

    #[error("JPEG品質は1〜100で指定してください: {0}")]
    InvalidQuality(u8),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MovingSaleError>;
