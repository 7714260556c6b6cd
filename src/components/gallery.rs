use dioxus::prelude::*;
use dioxus_i18n::t;
use image_form::{Image, ImageFormContext, QueryCache, IMAGES_TAG};

/// Paginated image grid
///
/// The first page is refetched every time the `images` tag is invalidated.
#[component]
pub fn Gallery() -> Element {
    let context = use_context::<ImageFormContext>();
    let cache = use_context::<Signal<QueryCache>>();

    let mut images = use_signal(Vec::<Image>::new);
    let mut after = use_signal(|| None::<String>);
    let mut loading_more = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut viewing = use_signal(|| None::<Image>);

    let api = context.api.clone();
    let first_page = use_resource(move || {
        let api = api.clone();
        let generation = cache.read().generation(IMAGES_TAG);
        async move {
            log::debug!("Loading first image page (generation {})", generation);
            api.list_images(None).await
        }
    });

    use_effect(move || match &*first_page.read() {
        Some(Ok(page)) => {
            images.set(page.data.clone());
            after.set(page.after.clone());
            error.set(None);
        }
        Some(Err(e)) => {
            log::error!("Failed to load images: {}", e);
            error.set(Some(t!("gallery-load-error")));
        }
        None => {}
    });

    let api = context.api.clone();
    let load_more = move |_| {
        let Some(cursor) = after() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            loading_more.set(true);
            match api.list_images(Some(&cursor)).await {
                Ok(page) => {
                    images.write().extend(page.data);
                    after.set(page.after);
                }
                Err(e) => {
                    log::error!("Failed to load more images: {}", e);
                    error.set(Some(t!("gallery-load-error")));
                }
            }
            loading_more.set(false);
        });
    };

    rsx! {
        if let Some(err) = error() {
            div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin: 24px; border-radius: 8px; font-size: 14px;",
                "⚠️ {err}"
            }
        }

        if first_page.read().is_none() {
            div { style: "padding: 24px; text-align: center;", {t!("action-loading")} }
        } else if images.read().is_empty() {
            div { style: "padding: 24px; text-align: center; color: #a1a1aa;", {t!("gallery-empty")} }
        } else {
            div { class: "gallery",
                for image in images() {
                    ImageCard {
                        key: "{image.id}",
                        image: image.clone(),
                        on_view: move |image: Image| viewing.set(Some(image)),
                    }
                }
            }
        }

        if after().is_some() {
            div { style: "display: flex; justify-content: center; padding-bottom: 24px;",
                button {
                    class: "btn-primary",
                    disabled: loading_more(),
                    onclick: load_more,
                    if loading_more() {
                        {t!("action-loading")}
                    } else {
                        {t!("action-load-more")}
                    }
                }
            }
        }

        if let Some(image) = viewing() {
            ModalViewImage { image, on_close: move |_| viewing.set(None) }
        }
    }
}

#[component]
fn ImageCard(image: Image, on_view: EventHandler<Image>) -> Element {
    let card_image = image.clone();

    rsx! {
        div {
            class: "image-card",
            onclick: move |_| on_view.call(card_image.clone()),
            img { src: "{image.url}", alt: "{image.title}" }
            div { class: "image-card-body",
                h3 { style: "margin: 0 0 4px 0; font-size: 18px;", "{image.title}" }
                p { style: "margin: 0; font-size: 14px; color: #a1a1aa;", "{image.description}" }
            }
        }
    }
}

#[component]
fn ModalViewImage(image: Image, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div {
                style: "max-width: 900px; max-height: 600px; background: #27272a; border-radius: 8px; overflow: hidden;",
                onclick: move |evt| evt.stop_propagation(),
                img {
                    src: "{image.url}",
                    alt: "{image.title}",
                    style: "display: block; max-width: 900px; max-height: 540px;",
                }
                div { style: "padding: 12px 16px;",
                    a { href: "{image.url}", target: "_blank", {t!("action-open-original")} }
                }
            }
        }
    }
}
