//! ギャラリー／ライトボックスの状態遷移
//!
//! DOMに依存しない状態機械。入力イベント（クリック・タッチ・キー）を受け取り、
//! 画面に反映すべき変更（Effect）の列を返す。実際のDOM操作は呼び出し側が行う。
//!
//! - カードごとに GalleryState を持つ
//! - モーダルは開いたカードの状態を複製して持ち、双方向に同期する
//! - タッチ開始位置とモーダルの紐付け先カードもこの構造体のフィールド

use crate::catalog::CatalogItem;
use crate::gallery::{sync_gallery, Direction, GalleryState};
use crate::gesture::classify_swipe;

/// `data-role` 属性で識別するDOM上の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    ItemsGrid,
    Card,
    PrimaryImage,
    Prev,
    Next,
    Counter,
    /// モーダルの背景（コンテンツ外）
    Modal,
    ModalContent,
    ModalImage,
    ModalPrev,
    ModalNext,
    ModalCounter,
    ModalClose,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::ItemsGrid,
        Role::Card,
        Role::PrimaryImage,
        Role::Prev,
        Role::Next,
        Role::Counter,
        Role::Modal,
        Role::ModalContent,
        Role::ModalImage,
        Role::ModalPrev,
        Role::ModalNext,
        Role::ModalCounter,
        Role::ModalClose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ItemsGrid => "items-grid",
            Role::Card => "card",
            Role::PrimaryImage => "primary-image",
            Role::Prev => "prev",
            Role::Next => "next",
            Role::Counter => "counter",
            Role::Modal => "modal",
            Role::ModalContent => "modal-content",
            Role::ModalImage => "modal-image",
            Role::ModalPrev => "modal-prev",
            Role::ModalNext => "modal-next",
            Role::ModalCounter => "modal-counter",
            Role::ModalClose => "modal-close",
        }
    }

    pub fn from_attr(value: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|role| role.as_str() == value)
    }

    /// `[data-role="..."]` セレクタ
    pub fn selector(&self) -> String {
        format!(r#"[data-role="{}"]"#, self.as_str())
    }
}

/// クリックで起きる遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NavigateCard(Direction),
    NavigateModal(Direction),
    OpenModal,
    CloseModal,
}

/// 役割 → 遷移 の対応表
const CLICK_ACTIONS: &[(Role, Action)] = &[
    (Role::Prev, Action::NavigateCard(Direction::Prev)),
    (Role::Next, Action::NavigateCard(Direction::Next)),
    (Role::PrimaryImage, Action::OpenModal),
    (Role::ModalPrev, Action::NavigateModal(Direction::Prev)),
    (Role::ModalNext, Action::NavigateModal(Direction::Next)),
    (Role::ModalClose, Action::CloseModal),
    (Role::Modal, Action::CloseModal),
];

/// クリックされた要素の役割に対応する遷移
pub fn click_action(role: Role) -> Option<Action> {
    CLICK_ACTIONS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, action)| *action)
}

/// 画像を表示している面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Card(usize),
    Modal,
}

/// 扱うキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Key {
    /// `KeyboardEvent.key` の値から変換
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// 入力イベント
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// `card` はクリック位置を含むカードの番号（カード外なら None）
    Click { role: Role, card: Option<usize> },
    TouchStart { surface: Surface, x: f64 },
    TouchEnd { x: f64 },
    Key(Key),
}

/// 画面への反映内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 画像とカウンターを更新
    ShowImage {
        surface: Surface,
        src: String,
        counter: String,
    },
    /// モーダルを表示してページのスクロールを止める
    OpenModal { show_navigation: bool },
    /// モーダルを閉じてスクロールを戻す
    CloseModal,
}

#[derive(Debug, Clone)]
struct ModalBinding {
    card: usize,
    state: GalleryState,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    cards: Vec<GalleryState>,
    modal: Option<ModalBinding>,
    touch_start: Option<(Surface, f64)>,
}

impl Controller {
    pub fn new(cards: Vec<GalleryState>) -> Self {
        Self {
            cards,
            modal: None,
            touch_start: None,
        }
    }

    /// 描画したアイテムと同じ順序でカードの状態を作る
    pub fn from_items(items: &[CatalogItem]) -> Self {
        Self::new(
            items
                .iter()
                .map(|item| GalleryState::new(item.images.clone()))
                .collect(),
        )
    }

    pub fn card(&self, index: usize) -> Option<&GalleryState> {
        self.cards.get(index)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// モーダルが映しているカード
    pub fn modal_card(&self) -> Option<usize> {
        self.modal.as_ref().map(|m| m.card)
    }

    pub fn modal_state(&self) -> Option<&GalleryState> {
        self.modal.as_ref().map(|m| &m.state)
    }

    /// 入力を1つ処理する
    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Click { role, card } => self.on_click(role, card),
            Input::TouchStart { surface, x } => {
                self.touch_start = Some((surface, x));
                Vec::new()
            }
            Input::TouchEnd { x } => self.on_touch_end(x),
            Input::Key(key) => self.on_key(key),
        }
    }

    fn on_click(&mut self, role: Role, card: Option<usize>) -> Vec<Effect> {
        match (click_action(role), card) {
            (Some(Action::NavigateCard(direction)), Some(index)) => {
                self.navigate(Surface::Card(index), direction)
            }
            (Some(Action::OpenModal), Some(index)) => self.open_modal(index),
            (Some(Action::NavigateModal(direction)), _) => {
                self.navigate(Surface::Modal, direction)
            }
            (Some(Action::CloseModal), _) => self.close_modal(),
            _ => Vec::new(),
        }
    }

    fn on_touch_end(&mut self, end_x: f64) -> Vec<Effect> {
        let Some((surface, start_x)) = self.touch_start.take() else {
            return Vec::new();
        };
        match classify_swipe(start_x, end_x) {
            Some(direction) => self.navigate(surface, direction),
            None => Vec::new(),
        }
    }

    fn on_key(&mut self, key: Key) -> Vec<Effect> {
        if !self.is_modal_open() {
            return Vec::new();
        }
        match key {
            Key::ArrowLeft => self.navigate(Surface::Modal, Direction::Prev),
            Key::ArrowRight => self.navigate(Surface::Modal, Direction::Next),
            Key::Escape => self.close_modal(),
        }
    }

    /// カードまたはモーダルの画像を1つ移動
    ///
    /// モーダルが同じカードを映していれば、もう一方も同じ位置に揃える。
    pub fn navigate(&mut self, surface: Surface, direction: Direction) -> Vec<Effect> {
        let mut effects = Vec::new();

        match surface {
            Surface::Card(index) => {
                let Some(card) = self.cards.get_mut(index) else {
                    return effects;
                };
                if !card.step(direction) {
                    return effects;
                }
                effects.extend(show_image(surface, card));

                if let Some(modal) = self.modal.as_mut().filter(|m| m.card == index) {
                    sync_gallery(card, &mut modal.state);
                    effects.extend(show_image(Surface::Modal, &modal.state));
                }
            }
            Surface::Modal => {
                let Some(modal) = self.modal.as_mut() else {
                    return effects;
                };
                if !modal.state.step(direction) {
                    return effects;
                }
                effects.extend(show_image(Surface::Modal, &modal.state));

                if let Some(card) = self.cards.get_mut(modal.card) {
                    sync_gallery(&modal.state, card);
                    effects.extend(show_image(Surface::Card(modal.card), card));
                }
            }
        }

        effects
    }

    /// カードの画像からモーダルを開く
    pub fn open_modal(&mut self, index: usize) -> Vec<Effect> {
        let Some(card) = self.cards.get(index) else {
            return Vec::new();
        };
        if card.is_empty() {
            return Vec::new();
        }

        let mut state = GalleryState::default();
        sync_gallery(card, &mut state);

        let mut effects = vec![Effect::OpenModal {
            show_navigation: state.is_navigable(),
        }];
        effects.extend(show_image(Surface::Modal, &state));

        self.modal = Some(ModalBinding { card: index, state });
        effects
    }

    /// モーダルを閉じる（カード側の状態はそのまま）
    pub fn close_modal(&mut self) -> Vec<Effect> {
        match self.modal.take() {
            Some(_) => vec![Effect::CloseModal],
            None => Vec::new(),
        }
    }
}

fn show_image(surface: Surface, state: &GalleryState) -> Option<Effect> {
    state.current().map(|src| Effect::ShowImage {
        surface,
        src: src.to_string(),
        counter: state.counter_label(),
    })
}
