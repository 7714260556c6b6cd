use crate::components::{Gallery, ModalAddImage};
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn HomeScreen() -> Element {
    let mut modal_open = use_signal(|| false);

    rsx! {
        div { class: "header",
            h1 { style: "margin: 0; font-size: 28px; color: #dd6b20;", {t!("app-title")} }
            button {
                class: "btn-primary",
                onclick: move |_| modal_open.set(true),
                "➕ "
                {t!("action-add-image")}
            }
        }

        Gallery {}

        if modal_open() {
            ModalAddImage { on_close: move |_| modal_open.set(false) }
        }
    }
}
