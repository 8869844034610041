//! ライトボックス（全カード共通のモーダル）
//!
//! 開閉と画像の切り替えは `dom` がコントローラーの Effect に従って行う。

use leptos::prelude::*;
use moving_sale_common::Role;

#[component]
pub fn Lightbox() -> impl IntoView {
    view! {
        <div class="modal" data-role=Role::Modal.as_str() aria-hidden="true">
            <div class="modal-content" data-role=Role::ModalContent.as_str()>
                <button
                    type="button"
                    class="modal-close"
                    data-role=Role::ModalClose.as_str()
                    aria-label="Close"
                >
                    "×"
                </button>
                <img class="modal-image" data-role=Role::ModalImage.as_str() src="" alt="" />
                <button
                    type="button"
                    class="modal-arrow modal-prev"
                    data-role=Role::ModalPrev.as_str()
                    aria-label="Previous image"
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="modal-arrow modal-next"
                    data-role=Role::ModalNext.as_str()
                    aria-label="Next image"
                >
                    "›"
                </button>
                <span class="modal-counter" data-role=Role::ModalCounter.as_str()></span>
            </div>
        </div>
    }
}
