//! Submission flow of the image form
//!
//! One submit attempt validates the form, posts the metadata once, and
//! reports the result through the notifier. Whatever happens after
//! validation passed, the upload state is cleared before `submit` returns.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::api::ImageApi;
use crate::cache::{QueryInvalidator, IMAGES_TAG};
use crate::models::{ImageFormValues, NewImage, UploadState};
use crate::notification::{Notifier, Toast};
use crate::validation::{validate_form, FormErrors};

/// What to do when the form is submitted before an image URL is known
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingImagePolicy {
    /// Warn the user and submit anyway with an empty URL
    #[default]
    WarnAndContinue,
    /// Warn the user and stop
    Block,
}

/// Result of one call to [`ImageSubmitter::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent and the upload state is untouched
    Invalid(FormErrors),
    /// Another submission of this form is still in flight
    Busy,
    /// Stopped because no image URL was available (`MissingImagePolicy::Block`)
    Blocked,
    /// The image was registered; the caller should reset the form fields
    Created,
    /// The request failed
    Failed,
}

/// Clears the in-flight flag when dropped
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Submits the image form against its collaborators
pub struct ImageSubmitter<A, C, N> {
    api: A,
    cache: C,
    notifier: N,
    policy: MissingImagePolicy,
    in_flight: Cell<bool>,
}

impl<A, C, N> ImageSubmitter<A, C, N>
where
    A: ImageApi,
    C: QueryInvalidator,
    N: Notifier,
{
    pub fn new(api: A, cache: C, notifier: N) -> Self {
        Self {
            api,
            cache,
            notifier,
            policy: MissingImagePolicy::default(),
            in_flight: Cell::new(false),
        }
    }

    pub fn with_policy(mut self, policy: MissingImagePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Run one submit attempt
    ///
    /// `close_modal` is only called after the image was registered.
    pub async fn submit(
        &self,
        values: &ImageFormValues,
        upload: &mut UploadState,
        close_modal: impl FnOnce(),
    ) -> SubmitOutcome {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            log::debug!("Submit ignored, previous submission still running");
            return SubmitOutcome::Busy;
        };

        let errors = validate_form(values);
        if !errors.is_valid() {
            return SubmitOutcome::Invalid(errors);
        }

        let outcome = self.send(values, upload, close_modal).await;
        upload.clear();
        outcome
    }

    async fn send(
        &self,
        values: &ImageFormValues,
        upload: &UploadState,
        close_modal: impl FnOnce(),
    ) -> SubmitOutcome {
        if !upload.has_remote_image() {
            self.notifier.notify(Toast::image_missing());

            match self.policy {
                MissingImagePolicy::Block => return SubmitOutcome::Blocked,
                MissingImagePolicy::WarnAndContinue => {
                    log::warn!("Submitting image '{}' without an uploaded image URL", values.title);
                }
            }
        }

        let payload = NewImage::from_form(values, &upload.image_url);
        match self.api.create_image(&payload).await {
            Ok(()) => {
                self.cache.invalidate(IMAGES_TAG);
                self.notifier.notify(Toast::image_created());
                close_modal();
                SubmitOutcome::Created
            }
            Err(e) => {
                log::error!("Failed to register image: {}", e);
                self.notifier.notify(Toast::image_create_failed());
                SubmitOutcome::Failed
            }
        }
    }
}
