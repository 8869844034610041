use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moving-sale")]
#[command(about = "引っ越しセールの出品カタログ生成・画像圧縮ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVから出品カードのHTMLを生成
    Render {
        /// 出品リストCSV（省略時は設定の data_file）
        input: Option<PathBuf>,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ライトボックスを含むHTML文書全体を出力
        #[arg(long)]
        page: bool,

        /// ページタイトル（--page 時のみ）
        #[arg(short, long, default_value = moving_sale_common::page::DEFAULT_TITLE)]
        title: String,
    },

    /// CSVを読み込んで内容を確認
    Check {
        /// 出品リストCSV（省略時は設定の data_file）
        input: Option<PathBuf>,

        /// 正規化したアイテムをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// フォルダ内の画像を一括で縮小・再圧縮
    Compress {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 長辺の最大ピクセル（省略時は設定値）
        #[arg(short, long)]
        max_size: Option<u32>,

        /// JPEG品質 1-100（省略時は設定値）
        #[arg(short, long)]
        quality: Option<u8>,

        /// 圧縮済みの画像も処理し直す
        #[arg(long)]
        force: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 出品リストCSVのパスを設定
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// 長辺の最大ピクセルを設定
        #[arg(long)]
        set_max_size: Option<u32>,

        /// JPEG品質を設定
        #[arg(long)]
        set_quality: Option<u8>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
