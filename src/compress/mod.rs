//! 画像の一括縮小・再圧縮
//!
//! - EXIFの向きを画素に反映してから縮小する（再エンコードでEXIFは消えるため）
//! - 長辺が max_size を超える画像だけ縮小し、拡大はしない
//! - JPEGは指定品質で、PNGは可逆で書き戻す
//! - 1枚の失敗は全体を止めず、結果に記録する

mod cache;

pub use cache::{compute_file_hash, CacheFile, CacheSettings};

use crate::error::{MovingSaleError, Result};
use crate::scanner::{self, ImageInfo, ImageKind};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct CompressOptions {
    pub max_size: u32,
    pub quality: u8,
    pub force: bool,
}

impl CompressOptions {
    fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            max_size: self.max_size,
            quality: self.quality,
        }
    }
}

/// 1枚分の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Compressed { before: u64, after: u64 },
    /// 前回の出力から変わっていない
    Skipped,
    /// 再エンコードしても小さくならなかったので元のまま
    Unchanged,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct CompressSummary {
    pub compressed: usize,
    pub skipped: usize,
    pub unchanged: usize,
    /// (ファイル名, エラー内容)
    pub failed: Vec<(String, String)>,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl CompressSummary {
    pub fn total(&self) -> usize {
        self.compressed + self.skipped + self.unchanged + self.failed.len()
    }

    fn record(&mut self, file_name: &str, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Compressed { before, after } => {
                self.compressed += 1;
                self.bytes_before += before;
                self.bytes_after += after;
            }
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Failed(e) => self.failed.push((file_name.to_string(), e.clone())),
        }
    }
}

/// フォルダ直下の画像をまとめて処理
pub fn compress_folder(folder: &Path, options: CompressOptions, verbose: bool) -> Result<CompressSummary> {
    if options.quality == 0 || options.quality > 100 {
        return Err(MovingSaleError::InvalidQuality(options.quality));
    }
    if options.max_size == 0 {
        return Err(MovingSaleError::Config("最大サイズは1以上を指定してください".into()));
    }

    let images = scanner::scan_folder(folder)?;
    if images.is_empty() {
        // 画像がなくても失敗扱いにはしない
        println!("  画像が見つかりません: {}", folder.display());
        return Ok(CompressSummary::default());
    }

    let mut cache = CacheFile::load(folder, options.cache_settings());

    let progress = ProgressBar::new(images.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let results: Vec<(&ImageInfo, FileOutcome, Option<(String, u64)>)> = images
        .par_iter()
        .map(|info| {
            let (outcome, written) = process_one(info, &cache, options);
            progress.inc(1);
            (info, outcome, written)
        })
        .collect();
    progress.finish_and_clear();

    let mut summary = CompressSummary::default();
    for (info, outcome, written) in results {
        if verbose {
            println!("  {} → {:?}", info.file_name, outcome);
        }
        if let Some((hash, size)) = written {
            cache.insert(info.file_name.clone(), hash, size);
        }
        summary.record(&info.file_name, &outcome);
    }

    if let Err(e) = cache.save(folder) {
        eprintln!("⚠ キャッシュ保存に失敗: {}", e);
    }

    Ok(summary)
}

/// 1枚を処理し、結果とキャッシュに記録する (ハッシュ, サイズ) を返す
fn process_one(
    info: &ImageInfo,
    cache: &CacheFile,
    options: CompressOptions,
) -> (FileOutcome, Option<(String, u64)>) {
    let hash = match compute_file_hash(&info.path) {
        Ok(h) => h,
        Err(e) => return (FileOutcome::Failed(e.to_string()), None),
    };

    if !options.force && cache.is_fresh(&info.file_name, &hash) {
        return (FileOutcome::Skipped, None);
    }

    let outcome = match compress_image(info, options.max_size, options.quality) {
        Ok(outcome) => outcome,
        Err(e) => return (FileOutcome::Failed(e.to_string()), None),
    };

    // 書き出し後（または元のまま）の内容を記録
    let written = compute_file_hash(&info.path)
        .ok()
        .zip(std::fs::metadata(&info.path).ok().map(|m| m.len()));

    (outcome, written)
}

/// 1枚の画像を縮小・再圧縮して上書き
pub fn compress_image(info: &ImageInfo, max_size: u32, quality: u8) -> Result<FileOutcome> {
    let original = std::fs::read(&info.path)?;
    let before = original.len() as u64;

    let image = ImageReader::new(Cursor::new(&original))
        .with_guessed_format()?
        .decode()
        .map_err(|e| MovingSaleError::ImageLoad(format!("{}: {}", info.file_name, e)))?;

    let orientation = scanner::read_orientation(&info.path).unwrap_or(1);
    let image = apply_orientation(image, orientation);
    let needs_resize = image.width().max(image.height()) > max_size;
    let image = resize_to_fit(image, max_size);

    let encoded = encode(&image, info.kind, quality)
        .map_err(|e| MovingSaleError::ImageEncode(format!("{}: {}", info.file_name, e)))?;

    // 向きもサイズも変わらず、大きくなるだけなら書き換えない
    if !needs_resize && orientation == 1 && encoded.len() as u64 >= before {
        return Ok(FileOutcome::Unchanged);
    }

    std::fs::write(&info.path, &encoded)?;
    Ok(FileOutcome::Compressed {
        before,
        after: encoded.len() as u64,
    })
}

fn encode(image: &DynamicImage, kind: ImageKind, quality: u8) -> image::ImageResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match kind {
        ImageKind::Jpeg => {
            let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            encoder.encode_image(&image.to_rgb8())?;
        }
        ImageKind::Png => {
            image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        }
    }
    Ok(buffer)
}

/// 長辺が max_size 以下になるよう縮小（アスペクト比維持、拡大しない）
pub fn resize_to_fit(image: DynamicImage, max_size: u32) -> DynamicImage {
    if image.width().max(image.height()) <= max_size {
        return image;
    }
    image.resize(max_size, max_size, FilterType::Lanczos3)
}

/// EXIF Orientation の値に従って画素を回転・反転
pub fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}

/// バイト数を "1.2 MB" 形式に
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
