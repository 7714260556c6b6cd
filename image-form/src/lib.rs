//! # Image Form
//!
//! A reusable image registration form: validated input, image upload,
//! metadata submission and cache invalidation.
//!
//! This crate provides:
//! - Field validation with fixed user-facing messages
//! - The submission flow (`ImageSubmitter`) with guaranteed cleanup of the
//!   upload state
//! - A tag based query cache and toast notifications
//! - A REST client and an image host upload client (feature `http`)
//! - Dioxus components for the form and its inputs (feature `components`)
//!
//! ## Separation of Concerns
//!
//! The submission flow only talks to collaborators through the `ImageApi`,
//! `QueryInvalidator` and `Notifier` traits. It does **not**:
//! - Render toasts (handled by `ToastHost` or the application)
//! - Decide when cached data is refetched (handled by whoever reads the
//!   cache generation)
//! - Upload the file itself (handled by `FileInput`)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use image_form::{ImageSubmitter, ImageFormValues, UploadState};
//!
//! let submitter = ImageSubmitter::new(api, cache, toaster);
//! let outcome = submitter.submit(&values, &mut upload_state, || close()).await;
//! ```

pub mod api;
pub mod cache;
pub mod form_state;
pub mod models;
pub mod notification;
pub mod preview;
pub mod submit;
pub mod validation;

#[cfg(feature = "http")]
pub mod upload;

#[cfg(feature = "components")]
pub mod components;

pub use api::{ApiError, ImageApi};
pub use cache::{QueryCache, QueryInvalidator, IMAGES_TAG};
pub use form_state::FormState;
pub use models::{Image, ImageFormValues, ImagesPage, NewImage, SelectedFile, UploadState};
pub use notification::{Notifier, Toast, ToastStatus};
pub use preview::preview_data_url;
pub use submit::{ImageSubmitter, MissingImagePolicy, SubmitOutcome};
pub use validation::{
    validate_description, validate_form, validate_image, validate_title, FieldError, FormErrors,
};

#[cfg(feature = "http")]
pub use api::ApiClient;

#[cfg(feature = "http")]
pub use upload::{ImageHostClient, ImageHostConfig, UploadError, UploadResult};

#[cfg(feature = "components")]
pub use components::{
    use_query_cache, use_toaster, FileInput, FormAddImage, ImageFormContext, TextInput, ToastHost,
    Toaster,
};
