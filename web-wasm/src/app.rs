//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    header::Header,
    items_grid::ItemsGrid,
    lightbox::Lightbox,
};
use moving_sale_common::page::DEFAULT_TITLE;

/// ページ骨格（ヘッダー・一覧・ライトボックス）
///
/// 一覧の中身は読み込み後に `loader` が差し込む。
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Header title=DEFAULT_TITLE />
        <ItemsGrid />
        <Lightbox />
    }
}
