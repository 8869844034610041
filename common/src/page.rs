//! 静的ページのひな形
//!
//! CLIの `render --page` で事前描画したページを書き出すときに使う。
//! ライトボックスの構造はWASM版のコンポーネントと同じ `data-role` を持つ。

use crate::controller::Role;
use std::fmt::Write;

pub const DEFAULT_TITLE: &str = "Moving Sale";
/// ページから読み込むCSVの相対パス
pub const DATA_FILE: &str = "items.csv";

/// ライトボックス（モーダル）のマークアップ
pub fn lightbox_markup() -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="modal" data-role="{}" aria-hidden="true">"#,
        Role::Modal.as_str()
    );
    let _ = write!(html, r#"<div class="modal-content" data-role="{}">"#, Role::ModalContent.as_str());
    let _ = write!(
        html,
        r#"<button type="button" class="modal-close" data-role="{}" aria-label="Close">&times;</button>"#,
        Role::ModalClose.as_str()
    );
    let _ = write!(html, r#"<img class="modal-image" data-role="{}" src="" alt="">"#, Role::ModalImage.as_str());
    let _ = write!(
        html,
        r#"<button type="button" class="modal-arrow modal-prev" data-role="{}" aria-label="Previous image">&#8249;</button>"#,
        Role::ModalPrev.as_str()
    );
    let _ = write!(
        html,
        r#"<button type="button" class="modal-arrow modal-next" data-role="{}" aria-label="Next image">&#8250;</button>"#,
        Role::ModalNext.as_str()
    );
    let _ = write!(html, r#"<span class="modal-counter" data-role="{}"></span>"#, Role::ModalCounter.as_str());
    html.push_str("</div></div>");
    html
}

/// 一覧を埋め込んだHTML文書全体
pub fn render_page(title: &str, grid_html: &str) -> String {
    let title = html_escape::encode_text(title);
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", title);
    html.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<header class=\"header\"><h1>{}</h1></header>", title);
    let _ = writeln!(
        html,
        "<main class=\"items-grid\" data-role=\"{}\">{}</main>",
        Role::ItemsGrid.as_str(),
        grid_html
    );
    html.push_str(&lightbox_markup());
    html.push_str("\n</body>\n</html>\n");
    html
}
