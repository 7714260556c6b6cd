//! Toast notifications and the sink that displays them

/// Default time a toast stays visible
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Error,
}

impl ToastStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastStatus::Success => "success",
            ToastStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ToastStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient, non-blocking notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub status: ToastStatus,
    pub duration_ms: u64,
    pub is_closable: bool,
}

impl Toast {
    pub fn new(title: impl Into<String>, status: ToastStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            is_closable: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Shown when the form is submitted before the upload finished
    pub fn image_missing() -> Self {
        Toast::new("Imagem não adicionada", ToastStatus::Error).with_description(
            "É preciso adicionar e aguardar o upload de uma imagem antes de realizar o cadastro.",
        )
    }

    pub fn image_created() -> Self {
        Toast::new("Imagem cadastrada", ToastStatus::Success)
    }

    pub fn image_create_failed() -> Self {
        Toast::new("Erro ao cadastrar imagem", ToastStatus::Error)
    }
}

/// Fire-and-forget notification sink
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}
