//! 出品リストの読み込み
//!
//! 同一オリジンの CSV を1回だけ取得し、一覧に差し込んでからイベントを結び付ける。
//! 取得に失敗した場合は一覧を固定のメッセージに置き換える（再試行はしない）。

use crate::dom;
use moving_sale_common::{catalog, page, Controller, Role};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Response};

pub async fn load_items() {
    let Some(grid) = dom::query(&Role::ItemsGrid.selector()) else {
        gloo::console::error!("items-grid が見つかりません");
        return;
    };

    if let Some(controller) = fill_grid(&grid, fetch_text(page::DATA_FILE).await) {
        dom::attach(controller);
    }
}

/// 取得結果を一覧に反映する
///
/// 成功時はカードを描画・採番してコントローラーを返す。
/// 失敗時は一覧を固定メッセージに置き換え、`None` を返す。
pub fn fill_grid(grid: &Element, result: Result<String, JsValue>) -> Option<Controller> {
    match result {
        Ok(text) => {
            let items = catalog::load_catalog(&text);
            grid.set_inner_html(&catalog::render_all(&items));
            dom::number_cards(grid);
            Some(Controller::from_items(&items))
        }
        Err(e) => {
            gloo::console::error!(format!("出品リストの読み込みに失敗: {:?}", e));
            grid.set_inner_html(&catalog::render_load_error());
            None
        }
    }
}

/// テキストを取得（2xx以外はエラー）
async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("レスポンスを文字列に変換できません"))
}
