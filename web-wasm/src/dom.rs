//! DOMとの橋渡し
//!
//! ドキュメントに委譲リスナーを1組だけ登録し、イベントを `Input` に変換して
//! コントローラーに渡す。返ってきた `Effect` をDOMに反映する。
//! カードは動的に生成されるため、要素ではなく `data-role` で役割を判定する。

use gloo::events::EventListener;
use moving_sale_common::{Controller, Effect, Input, Key, Role, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, TouchEvent};

/// カード番号を持たせる属性
pub const CARD_INDEX_ATTR: &str = "data-card";
const MODAL_OPEN_CLASS: &str = "open";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// 描画順にカードへ番号を振る（コントローラーのカード順と一致）
pub fn number_cards(grid: &Element) {
    let Ok(cards) = grid.query_selector_all(&Role::Card.selector()) else {
        return;
    };
    for i in 0..cards.length() {
        if let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            let _ = card.set_attribute(CARD_INDEX_ATTR, &i.to_string());
        }
    }
}

/// 委譲リスナーを登録
///
/// リスナーはページが閉じられるまで生きる。
pub fn attach(controller: Controller) {
    let Some(document) = document() else {
        return;
    };
    let controller = Rc::new(RefCell::new(controller));

    let listeners = [
        listen(&document, "click", &controller, on_click),
        listen(&document, "touchstart", &controller, on_touch_start),
        listen(&document, "touchend", &controller, on_touch_end),
        listen(&document, "keydown", &controller, on_key_down),
    ];
    for listener in listeners {
        listener.forget();
    }
}

fn listen(
    document: &Document,
    event_type: &'static str,
    controller: &Rc<RefCell<Controller>>,
    to_input: fn(&Event) -> Option<Input>,
) -> EventListener {
    let controller = Rc::clone(controller);
    EventListener::new(document, event_type, move |event| {
        if let Some(input) = to_input(event) {
            let effects = controller.borrow_mut().handle(input);
            apply(&effects);
        }
    })
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// 最も近い `data-role` 要素の役割
fn closest_role(element: &Element) -> Option<Role> {
    let owner = element.closest("[data-role]").ok().flatten()?;
    Role::from_attr(&owner.get_attribute("data-role")?)
}

fn card_index(element: &Element) -> Option<usize> {
    let card = element.closest(&Role::Card.selector()).ok().flatten()?;
    card.get_attribute(CARD_INDEX_ATTR)?.parse().ok()
}

fn is_within(element: &Element, role: Role) -> bool {
    matches!(element.closest(&role.selector()), Ok(Some(_)))
}

fn on_click(event: &Event) -> Option<Input> {
    let target = target_element(event)?;
    // 矢印の中のクリックは Prev/Next に解決されるので、画像のクリック扱いにはならない
    let role = closest_role(&target)?;
    Some(Input::Click {
        role,
        card: card_index(&target),
    })
}

fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn on_touch_start(event: &Event) -> Option<Input> {
    let target = target_element(event)?;
    let surface = if is_within(&target, Role::Modal) {
        Surface::Modal
    } else if is_within(&target, Role::PrimaryImage) {
        Surface::Card(card_index(&target)?)
    } else {
        return None;
    };
    Some(Input::TouchStart {
        surface,
        x: touch_x(event)?,
    })
}

fn on_touch_end(event: &Event) -> Option<Input> {
    Some(Input::TouchEnd { x: touch_x(event)? })
}

fn on_key_down(event: &Event) -> Option<Input> {
    let key = event.dyn_ref::<KeyboardEvent>()?.key();
    Key::from_key_name(&key).map(Input::Key)
}

/// Effect をDOMに反映
pub fn apply(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::ShowImage { surface, src, counter } => show_image(*surface, src, counter),
            Effect::OpenModal { show_navigation } => open_modal(*show_navigation),
            Effect::CloseModal => close_modal(),
        }
    }
}

fn show_image(surface: Surface, src: &str, counter: &str) {
    let (root, image_role, counter_role) = match surface {
        Surface::Card(index) => (
            query(&format!(
                r#"{}[{}="{}"]"#,
                Role::Card.selector(),
                CARD_INDEX_ATTR,
                index
            )),
            Role::PrimaryImage,
            Role::Counter,
        ),
        Surface::Modal => (
            query(&Role::Modal.selector()),
            Role::ModalImage,
            Role::ModalCounter,
        ),
    };
    let Some(root) = root else {
        return;
    };

    if let Ok(Some(image)) = root.query_selector(&image_role.selector()) {
        let _ = image.set_attribute("src", src);
    }
    if let Ok(Some(label)) = root.query_selector(&counter_role.selector()) {
        label.set_text_content(Some(counter));
    }
}

fn open_modal(show_navigation: bool) {
    let Some(modal) = query(&Role::Modal.selector()) else {
        return;
    };
    let _ = modal.class_list().add_1(MODAL_OPEN_CLASS);
    let _ = modal.set_attribute("aria-hidden", "false");

    for role in [Role::ModalPrev, Role::ModalNext, Role::ModalCounter] {
        if let Ok(Some(control)) = modal.query_selector(&role.selector()) {
            let _ = if show_navigation {
                control.remove_attribute("hidden")
            } else {
                control.set_attribute("hidden", "")
            };
        }
    }

    set_page_scroll(false);
}

fn close_modal() {
    if let Some(modal) = query(&Role::Modal.selector()) {
        let _ = modal.class_list().remove_1(MODAL_OPEN_CLASS);
        let _ = modal.set_attribute("aria-hidden", "true");
    }
    set_page_scroll(true);
}

fn set_page_scroll(enabled: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if enabled {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", "hidden")
    };
}
