//! カタログ（出品リスト）の正規化とHTML生成
//!
//! CSVの1行（RawRow）を CatalogItem に正規化し、カードのマークアップを生成する。
//! ユーザー入力のテキストはすべてHTMLエスケープする。

use crate::csv::{self, RawRow};
use serde::Serialize;
use std::fmt::Write;

// CSV列名（大文字小文字を区別）
pub const COL_ITEM: &str = "Item";
pub const COL_NEW_PRICE: &str = "New price";
pub const COL_ASKING_PRICE: &str = "Asking price";
pub const COL_AVAILABLE: &str = "Available";
pub const COL_IMAGES: &str = "Images";
pub const COL_NOTES: &str = "Notes";
pub const COL_STATUS: &str = "Status";

/// 期待する列の一覧
pub const COLUMNS: &[&str] = &[
    COL_ITEM,
    COL_NEW_PRICE,
    COL_ASKING_PRICE,
    COL_AVAILABLE,
    COL_IMAGES,
    COL_NOTES,
    COL_STATUS,
];

/// 「不明」を表す値
pub const UNKNOWN_SENTINEL: &str = "???";
/// 名前が空のときの表示名
pub const PLACEHOLDER_NAME: &str = "Unnamed item";
/// 画像ディレクトリ
pub const IMAGE_DIR: &str = "images";
pub const CURRENCY: &str = "AED";
/// 読み込み失敗時に一覧へ表示するメッセージ
pub const LOAD_ERROR_MESSAGE: &str =
    "Sorry, the item list could not be loaded. Please try again later.";

const AVAILABLE_NOW: &str = "Available now";
const AVAILABLE_FROM: &str = "Available from";
const SOLD_STATUS: &str = "sold";

/// 正規化済みの出品アイテム
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,
    pub new_price: Option<String>,
    pub asking_price: Option<String>,
    /// 表示用の文言（"Available now" など）
    pub availability: Option<String>,
    /// `images/<ファイル名>` 形式の相対パス
    pub images: Vec<String>,
    pub notes: String,
    pub sold: bool,
}

/// カードの画像レイアウト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// 画像なし（画像領域を出さない）
    NoImage,
    /// 1枚のみ（ナビゲーションなし）
    Single,
    /// 複数枚（矢印・カウンターあり）
    Multi,
}

impl CardLayout {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => CardLayout::NoImage,
            1 => CardLayout::Single,
            _ => CardLayout::Multi,
        }
    }

    /// `data-layout` 属性の値
    pub fn as_str(&self) -> &'static str {
        match self {
            CardLayout::NoImage => "none",
            CardLayout::Single => "single",
            CardLayout::Multi => "multi",
        }
    }
}

impl CatalogItem {
    pub fn layout(&self) -> CardLayout {
        CardLayout::for_count(self.images.len())
    }
}

/// CSVテキストを読み込んでアイテム列にする
pub fn load_catalog(text: &str) -> Vec<CatalogItem> {
    csv::parse(text).iter().map(normalize).collect()
}

/// 1行を CatalogItem に正規化
pub fn normalize(row: &RawRow) -> CatalogItem {
    let field = |key: &str| row.get(key).map(String::as_str).unwrap_or("");

    let name = field(COL_ITEM).trim();
    let name = if name.is_empty() { PLACEHOLDER_NAME } else { name };

    CatalogItem {
        name: name.to_string(),
        new_price: known_value(field(COL_NEW_PRICE)),
        asking_price: known_value(field(COL_ASKING_PRICE)),
        availability: known_value(field(COL_AVAILABLE)).map(|v| availability_phrase(&v)),
        images: image_paths(field(COL_IMAGES)),
        notes: field(COL_NOTES).to_string(),
        sold: field(COL_STATUS).trim().eq_ignore_ascii_case(SOLD_STATUS),
    }
}

/// 空文字と `???` を None にする。それ以外はそのまま
fn known_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN_SENTINEL {
        None
    } else {
        Some(raw.to_string())
    }
}

fn availability_phrase(value: &str) -> String {
    if value.trim().eq_ignore_ascii_case("now") {
        AVAILABLE_NOW.to_string()
    } else {
        format!("{} {}", AVAILABLE_FROM, value.trim())
    }
}

fn image_paths(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!("{}/{}", IMAGE_DIR, name))
        .collect()
}

/// テキストノード・属性値どちらにも安全なエスケープ
fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// 1枚のカードを描画
///
/// 同じアイテムからは常に同じマークアップを返す。
pub fn render(item: &CatalogItem) -> String {
    let layout = item.layout();
    let mut html = String::new();

    let class = if item.sold { "item-card sold" } else { "item-card" };
    let _ = write!(
        html,
        r#"<article class="{}" data-role="card" data-layout="{}">"#,
        class,
        layout.as_str()
    );

    if let Some(first) = item.images.first() {
        html.push_str(r#"<div class="item-gallery">"#);
        let _ = write!(
            html,
            r#"<img class="item-image" data-role="primary-image" src="{}" alt="{}" loading="lazy">"#,
            html_escape::encode_double_quoted_attribute(first),
            escape(&item.name)
        );
        if layout == CardLayout::Multi {
            html.push_str(
                r#"<button type="button" class="gallery-arrow gallery-prev" data-role="prev" aria-label="Previous image">&#8249;</button>"#,
            );
            html.push_str(
                r#"<button type="button" class="gallery-arrow gallery-next" data-role="next" aria-label="Next image">&#8250;</button>"#,
            );
            let _ = write!(
                html,
                r#"<span class="gallery-counter" data-role="counter">1 / {}</span>"#,
                item.images.len()
            );
        }
        html.push_str("</div>");
    }

    html.push_str(r#"<div class="item-details">"#);
    let _ = write!(html, r#"<h3 class="item-name">{}</h3>"#, escape(&item.name));
    if item.sold {
        html.push_str(r#"<span class="sold-badge">Sold</span>"#);
    }
    if let Some(price) = &item.asking_price {
        let _ = write!(html, r#"<p class="item-price">{} {}</p>"#, escape(price), CURRENCY);
    }
    if let Some(price) = &item.new_price {
        let _ = write!(
            html,
            r#"<p class="item-new-price">New: {} {}</p>"#,
            escape(price),
            CURRENCY
        );
    }
    if let Some(availability) = &item.availability {
        let _ = write!(html, r#"<p class="item-availability">{}</p>"#, escape(availability));
    }
    if !item.notes.trim().is_empty() {
        let _ = write!(html, r#"<p class="item-notes">{}</p>"#, escape(&item.notes));
    }
    html.push_str("</div></article>");

    html
}

/// 全カードを連結
pub fn render_all(items: &[CatalogItem]) -> String {
    items.iter().map(render).collect()
}

/// 読み込み失敗時に一覧を置き換えるマークアップ
pub fn render_load_error() -> String {
    format!(r#"<p class="load-error">{}</p>"#, LOAD_ERROR_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn chair_row(status: &str) -> RawRow {
        row(&[
            ("Item", "Chair"),
            ("New price", "500"),
            ("Asking price", "300"),
            ("Available", "now"),
            ("Images", "chair1.jpg,chair2.jpg"),
            ("Notes", "Good condition"),
            ("Status", status),
        ])
    }

    // =============================================
    // normalize テスト
    // =============================================

    #[test]
    fn test_normalize_chair() {
        let item = normalize(&chair_row(""));
        assert_eq!(item.name, "Chair");
        assert_eq!(item.new_price.as_deref(), Some("500"));
        assert_eq!(item.asking_price.as_deref(), Some("300"));
        assert_eq!(item.availability.as_deref(), Some("Available now"));
        assert_eq!(item.images, vec!["images/chair1.jpg", "images/chair2.jpg"]);
        assert_eq!(item.notes, "Good condition");
        assert!(!item.sold);
    }

    #[test]
    fn test_asking_price_sentinels() {
        assert_eq!(normalize(&row(&[("Asking price", "")])).asking_price, None);
        assert_eq!(normalize(&row(&[("Asking price", "???")])).asking_price, None);
        assert_eq!(normalize(&row(&[("Item", "Lamp")])).asking_price, None);
        assert_eq!(
            normalize(&row(&[("Asking price", "150 (negotiable)")])).asking_price.as_deref(),
            Some("150 (negotiable)")
        );
    }

    #[test]
    fn test_sentinel_is_case_sensitive_literal() {
        // "???" 以外の疑問符はそのまま残す
        assert_eq!(
            normalize(&row(&[("New price", "??")])).new_price.as_deref(),
            Some("??")
        );
    }

    #[test]
    fn test_availability_phrases() {
        let avail = |v: &str| normalize(&row(&[("Available", v)])).availability;
        assert_eq!(avail("NOW").as_deref(), Some("Available now"));
        assert_eq!(avail(" Now ").as_deref(), Some("Available now"));
        assert_eq!(avail("June 30").as_deref(), Some("Available from June 30"));
        assert_eq!(avail("???"), None);
        assert_eq!(avail(""), None);
    }

    #[test]
    fn test_blank_name_placeholder() {
        assert_eq!(normalize(&row(&[("Item", "   ")])).name, PLACEHOLDER_NAME);
        assert_eq!(normalize(&RawRow::new()).name, PLACEHOLDER_NAME);
    }

    #[test]
    fn test_image_list_trimmed() {
        let item = normalize(&row(&[("Images", " a.jpg , ,b.png,")]));
        assert_eq!(item.images, vec!["images/a.jpg", "images/b.png"]);
        assert!(normalize(&row(&[("Images", "")])).images.is_empty());
    }

    #[test]
    fn test_sold_status() {
        assert!(normalize(&chair_row("Sold")).sold);
        assert!(normalize(&chair_row("  SOLD ")).sold);
        assert!(!normalize(&chair_row("reserved")).sold);
    }

    // =============================================
    // render テスト
    // =============================================

    #[test]
    fn test_render_chair_card() {
        let html = render(&normalize(&chair_row("")));
        assert!(html.contains(r#"class="item-card""#));
        assert!(html.contains(r#"data-layout="multi""#));
        assert!(html.contains("300 AED"));
        assert!(html.contains("New: 500 AED"));
        assert!(html.contains("Available now"));
        assert!(html.contains(r#"src="images/chair1.jpg""#));
        assert!(html.contains(r#"data-role="prev""#));
        assert!(html.contains(r#"data-role="next""#));
        assert!(html.contains("1 / 2"));
        assert!(!html.contains("sold"));
    }

    #[test]
    fn test_render_sold_card() {
        let html = render(&normalize(&chair_row("Sold")));
        assert!(html.contains(r#"class="item-card sold""#));
        assert!(html.contains("sold-badge"));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let item = normalize(&row(&[
            ("Item", "<img src=x onerror=alert(1)>"),
            ("Notes", "<script>alert('x')</script>"),
            ("Images", "a.jpg"),
        ]));
        let html = render(&item);
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_escapes_attribute_breaking_name() {
        let item = normalize(&row(&[("Item", r#"" onload="x"#), ("Images", "a.jpg")]));
        let html = render(&item);
        assert!(!html.contains(r#"alt="" onload="x""#));
    }

    #[test]
    fn test_render_single_image_has_no_navigation() {
        let item = normalize(&row(&[("Item", "Lamp"), ("Images", "lamp.jpg")]));
        let html = render(&item);
        assert!(html.contains(r#"data-layout="single""#));
        assert!(html.contains(r#"data-role="primary-image""#));
        assert!(!html.contains(r#"data-role="prev""#));
        assert!(!html.contains(r#"data-role="counter""#));
    }

    #[test]
    fn test_render_without_images_omits_gallery() {
        let item = normalize(&row(&[("Item", "Desk")]));
        let html = render(&item);
        assert!(html.contains(r#"data-layout="none""#));
        assert!(!html.contains("item-gallery"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_render_omits_absent_fields() {
        let item = normalize(&row(&[("Item", "Desk"), ("Asking price", "???")]));
        let html = render(&item);
        assert!(!html.contains("item-price"));
        assert!(!html.contains("item-new-price"));
        assert!(!html.contains("item-availability"));
        assert!(!html.contains("item-notes"));
    }

    #[test]
    fn test_render_is_pure() {
        let item = normalize(&chair_row(""));
        assert_eq!(render(&item), render(&item));
    }

    #[test]
    fn test_render_all_concatenates_in_order() {
        let items = load_catalog("Item\nFirst\nSecond\n");
        let html = render_all(&items);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches(r#"data-role="card""#).count(), 2);
    }

    #[test]
    fn test_end_to_end_chair() {
        let text = "Item,New price,Asking price,Available,Images,Notes,Status\n\
                    Chair,500,300,now,\"chair1.jpg,chair2.jpg\",Good condition,\n";
        let items = load_catalog(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].images, vec!["images/chair1.jpg", "images/chair2.jpg"]);
        assert!(!items[0].sold);

        let html = render_all(&items);
        assert!(html.contains("300 AED"));
        assert!(html.contains("New: 500 AED"));
        assert!(html.contains("Available now"));
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = normalize(&chair_row("sold"));
        let json = serde_json::to_string(&item).expect("シリアライズ失敗");
        assert!(json.contains("\"askingPrice\":\"300\""));
        assert!(json.contains("\"sold\":true"));
    }

    #[test]
    fn test_load_error_markup() {
        assert!(render_load_error().contains(LOAD_ERROR_MESSAGE));
    }
}
