use dioxus::prelude::*;
use dioxus_i18n::t;
use image_form::FormAddImage;

/// Modal hosting the image registration form
#[component]
pub fn ModalAddImage(on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                    h2 { style: "margin: 0; font-size: 22px;", {t!("modal-add-title")} }
                    button {
                        class: "btn-secondary",
                        title: t!("action-close"),
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                FormAddImage { close_modal: move |_| on_close.call(()) }
            }
        }
    }
}
