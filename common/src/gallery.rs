//! ギャラリー状態
//!
//! カードごと（＋モーダル1つ）に画像リストと現在位置を持つ。
//! 移動は画像枚数で剰余を取って循環する。

use serde::Serialize;

/// 移動方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// 画像リストと現在のインデックス
///
/// `images` が空でなければ `current_index < images.len()` を常に満たす。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryState {
    images: Vec<String>,
    current_index: usize,
}

impl GalleryState {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current_index: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 矢印・スワイプで移動できるか（2枚以上）
    pub fn is_navigable(&self) -> bool {
        self.images.len() > 1
    }

    /// 表示中の画像パス
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    /// "2 / 5" 形式のカウンター
    pub fn counter_label(&self) -> String {
        if self.images.is_empty() {
            return String::new();
        }
        format!("{} / {}", self.current_index + 1, self.images.len())
    }

    /// 1つ移動。移動しなかった場合（1枚以下）は false
    pub fn step(&mut self, direction: Direction) -> bool {
        if !self.is_navigable() {
            return false;
        }
        let len = self.images.len();
        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % len,
            Direction::Prev => (self.current_index + len - 1) % len,
        };
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(Direction::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.step(Direction::Prev)
    }
}

/// source の画像リストと位置を target にコピー
///
/// 描画には触れない。カード→モーダル、モーダル→カードの両方向で使う。
pub fn sync_gallery(source: &GalleryState, target: &mut GalleryState) {
    target.images.clone_from(&source.images);
    target.current_index = source.current_index;
}
