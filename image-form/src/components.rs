//! Dioxus UI components for the image form
//!
//! `FormAddImage` reads its collaborators from context: an
//! [`ImageFormContext`], a `Signal<QueryCache>` and a [`Toaster`]. The
//! application provides them once with [`use_query_cache`], [`use_toaster`]
//! and `use_context_provider`.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::cache::{QueryCache, QueryInvalidator};
use crate::form_state::FormState;
use crate::models::{SelectedFile, UploadState};
use crate::notification::{Notifier, Toast};
use crate::preview::preview_data_url;
use crate::submit::{ImageSubmitter, MissingImagePolicy};
use crate::upload::ImageHostClient;
use crate::validation::validate_image;

const UPLOAD_FAILED_MESSAGE: &str = "Falha no envio da imagem";

/// Collaborators shared by every image form in the app
#[derive(Clone)]
pub struct ImageFormContext {
    pub api: ApiClient,
    pub uploader: ImageHostClient,
    pub missing_image_policy: MissingImagePolicy,
}

impl ImageFormContext {
    pub fn new(api: ApiClient, uploader: ImageHostClient) -> Self {
        Self {
            api,
            uploader,
            missing_image_policy: MissingImagePolicy::default(),
        }
    }
}

impl QueryInvalidator for Signal<QueryCache> {
    fn invalidate(&self, tag: &str) {
        let mut cache = *self;
        cache.write().invalidate(tag);
    }
}

/// Provide a query cache to all child components
pub fn use_query_cache() -> Signal<QueryCache> {
    use_context_provider(|| Signal::new(QueryCache::new()))
}

#[derive(Debug, Clone, PartialEq)]
struct ToastEntry {
    id: u64,
    toast: Toast,
}

/// Signal backed toast queue; every toast removes itself after its duration
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn dismiss(&self, id: u64) {
        let mut entries = self.entries;
        entries.write().retain(|entry| entry.id != id);
    }
}

impl Notifier for Toaster {
    fn notify(&self, toast: Toast) {
        let mut entries = self.entries;
        let mut next_id = self.next_id;

        let id = *next_id.peek();
        next_id.set(id + 1);

        let duration = std::time::Duration::from_millis(toast.duration_ms);
        entries.write().push(ToastEntry { id, toast });

        let toaster = *self;
        spawn(async move {
            tokio::time::sleep(duration).await;
            toaster.dismiss(id);
        });
    }
}

/// Provide a toaster to all child components
pub fn use_toaster() -> Toaster {
    let entries = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toaster { entries, next_id })
}

/// Renders the toasts queued in the context toaster
#[component]
pub fn ToastHost() -> Element {
    let toaster = use_context::<Toaster>();

    rsx! {
        div { class: "toast-host",
            for entry in toaster.entries.read().iter().cloned() {
                div {
                    key: "{entry.id}",
                    class: "toast toast-{entry.toast.status}",
                    div { class: "toast-body",
                        p { class: "toast-title", "{entry.toast.title}" }
                        if let Some(description) = entry.toast.description.clone() {
                            p { class: "toast-description", "{description}" }
                        }
                    }
                    if entry.toast.is_closable {
                        button {
                            class: "toast-close",
                            onclick: move |_| toaster.dismiss(entry.id),
                            "✕"
                        }
                    }
                }
            }
        }
    }
}

/// Single line text input with an inline error message
#[component]
pub fn TextInput(
    name: String,
    placeholder: String,
    value: String,
    #[props(!optional)] error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-control",
            input {
                class: if error.is_some() { "input input-invalid" } else { "input" },
                r#type: "text",
                name: "{name}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
            if let Some(message) = &error {
                div { class: "form-error", "{message}" }
            }
        }
    }
}

/// File picker that shows a local preview and uploads valid files
///
/// The preview URL and the uploaded URL are written into `upload`. Files
/// that fail `validate_image` are reported through `on_select` but never
/// uploaded.
#[component]
pub fn FileInput(
    upload: Signal<UploadState>,
    #[props(!optional)] error: Option<String>,
    on_select: EventHandler<SelectedFile>,
    on_upload_error: EventHandler<String>,
) -> Element {
    let context = use_context::<ImageFormContext>();
    let mut upload = upload;
    let mut uploading = use_signal(|| false);

    let handle_change = move |evt: FormEvent| {
        let uploader = context.uploader.clone();
        spawn(async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };

            let selected = SelectedFile::new(
                file.name(),
                file.size(),
                file.content_type().unwrap_or_default(),
            );
            upload.write().clear();
            on_select.call(selected.clone());

            if validate_image(Some(&selected)).is_err() {
                return;
            }

            uploading.set(true);
            match file.read_bytes().await {
                Ok(bytes) => {
                    let bytes = bytes.to_vec();
                    upload.write().local_image_url = preview_data_url(&selected.mime_type, &bytes);

                    match uploader
                        .upload(&selected.name, &selected.mime_type, bytes)
                        .await
                    {
                        Ok(url) => upload.write().image_url = url,
                        Err(e) => {
                            log::error!("Upload of {} failed: {}", selected.name, e);
                            on_upload_error.call(UPLOAD_FAILED_MESSAGE.to_string());
                        }
                    }
                }
                Err(e) => {
                    log::error!("Reading {} failed: {:?}", selected.name, e);
                    on_upload_error.call(UPLOAD_FAILED_MESSAGE.to_string());
                }
            }
            uploading.set(false);
        });
    };

    let local_image_url = upload.read().local_image_url.clone();

    rsx! {
        div { class: "form-control",
            label {
                class: if error.is_some() { "file-input file-input-invalid" } else { "file-input" },
                if !local_image_url.is_empty() {
                    img {
                        src: local_image_url,
                        alt: "Pré-visualização",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                } else {
                    span { "Adicione sua imagem" }
                }
                if uploading() {
                    div { class: "file-input-progress", "⏳ Enviando..." }
                }
                input {
                    r#type: "file",
                    name: "image",
                    accept: "image/*",
                    style: "display: none;",
                    disabled: uploading(),
                    onchange: handle_change,
                }
            }
            if let Some(message) = &error {
                div { class: "form-error", "{message}" }
            }
        }
    }
}

/// Form for registering a new image
#[component]
pub fn FormAddImage(close_modal: EventHandler<()>) -> Element {
    let context = use_context::<ImageFormContext>();
    let cache = use_context::<Signal<QueryCache>>();
    let toaster = use_context::<Toaster>();

    let submitter = use_hook(|| {
        Rc::new(
            ImageSubmitter::new(context.api.clone(), cache, toaster)
                .with_policy(context.missing_image_policy),
        )
    });

    let mut upload = use_signal(UploadState::default);
    let mut fields = use_signal(FormState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !fields.write().begin_submit() {
            return;
        }

        let submitter = submitter.clone();
        let values = fields.read().values.clone();

        spawn(async move {
            let mut state = upload();
            let outcome = submitter
                .submit(&values, &mut state, move || close_modal.call(()))
                .await;
            upload.set(state);
            fields.write().finish_submit(&outcome);
        });
    };

    let state = fields();

    rsx! {
        form { class: "image-form", onsubmit: handle_submit,
            div { class: "stack",
                FileInput {
                    upload,
                    error: state.image_error(),
                    on_select: move |file: SelectedFile| fields.write().select_image(file),
                    on_upload_error: move |message: String| fields.write().upload_error = Some(message),
                }

                TextInput {
                    name: "title".to_string(),
                    placeholder: "Título da imagem...".to_string(),
                    value: state.values.title.clone(),
                    error: state.errors.title.map(|e| e.message().to_string()),
                    on_input: move |value: String| fields.write().set_title(value),
                }

                TextInput {
                    name: "description".to_string(),
                    placeholder: "Descrição da imagem...".to_string(),
                    value: state.values.description.clone(),
                    error: state.errors.description.map(|e| e.message().to_string()),
                    on_input: move |value: String| fields.write().set_description(value),
                }
            }

            button {
                class: "btn-primary",
                r#type: "submit",
                style: "width: 100%; margin: 24px 0; padding: 14px;",
                disabled: state.is_submitting,
                if state.is_submitting {
                    "⏳ Enviando..."
                } else {
                    "Enviar"
                }
            }
        }
    }
}
