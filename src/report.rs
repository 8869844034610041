//! `check` コマンドの集計

use moving_sale_common::catalog::{self, CatalogItem};
use moving_sale_common::csv::CsvTable;

/// CSVの内容確認結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub sold: usize,
    /// 画像のないアイテム名
    pub without_images: Vec<String>,
    /// 希望価格が未定のアイテム名
    pub unknown_price: Vec<String>,
    /// ヘッダーにない列
    pub missing_columns: Vec<String>,
}

impl CatalogSummary {
    pub fn build(table: &CsvTable, items: &[CatalogItem]) -> Self {
        Self {
            total: items.len(),
            sold: items.iter().filter(|i| i.sold).count(),
            without_images: items
                .iter()
                .filter(|i| i.images.is_empty())
                .map(|i| i.name.clone())
                .collect(),
            unknown_price: items
                .iter()
                .filter(|i| i.asking_price.is_none() && !i.sold)
                .map(|i| i.name.clone())
                .collect(),
            missing_columns: table
                .missing_columns(catalog::COLUMNS)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// 出品中（未売却）の件数
    pub fn available(&self) -> usize {
        self.total - self.sold
    }

    pub fn print(&self) {
        println!("アイテム数: {} (出品中 {} / 売約済み {})", self.total, self.available(), self.sold);

        if !self.missing_columns.is_empty() {
            println!("⚠ ヘッダーにない列: {}", self.missing_columns.join(", "));
        }
        if !self.without_images.is_empty() {
            println!("⚠ 画像なし ({}件):", self.without_images.len());
            for name in &self.without_images {
                println!("  - {}", name);
            }
        }
        if !self.unknown_price.is_empty() {
            println!("⚠ 価格未定 ({}件):", self.unknown_price.len());
            for name in &self.unknown_price {
                println!("  - {}", name);
            }
        }
    }
}
