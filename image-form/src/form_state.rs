//! Field state of one image form instance
//!
//! Field edits re-validate a field only once it has shown an error, and the
//! submitting flag stays set until the submission that set it has finished.

use crate::models::{ImageFormValues, SelectedFile};
use crate::submit::SubmitOutcome;
use crate::validation::{validate_description, validate_image, validate_title, FormErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: ImageFormValues,
    pub errors: FormErrors,
    /// Set by the file input when the image host rejected the file
    pub upload_error: Option<String>,
    pub is_submitting: bool,
}

impl FormState {
    /// Message shown below the file input
    pub fn image_error(&self) -> Option<String> {
        self.errors
            .image
            .map(|e| e.message().to_string())
            .or_else(|| self.upload_error.clone())
    }

    /// A newly picked file is validated right away
    pub fn select_image(&mut self, file: SelectedFile) {
        self.errors.image = validate_image(Some(&file)).err();
        self.upload_error = None;
        self.values.image = Some(file);
    }

    pub fn set_title(&mut self, title: String) {
        if self.errors.title.is_some() {
            self.errors.title = validate_title(&title).err();
        }
        self.values.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        if self.errors.description.is_some() {
            self.errors.description = validate_description(&description).err();
        }
        self.values.description = description;
    }

    /// Marks the form as submitting; `false` if a submission is already running
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// Applies the result of the submission started by `begin_submit`
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            // Another submission owns the flag and will clear it
            SubmitOutcome::Busy => return,
            SubmitOutcome::Invalid(errors) => self.errors = *errors,
            SubmitOutcome::Created => {
                self.values = ImageFormValues::default();
                self.errors = FormErrors::default();
                self.upload_error = None;
            }
            SubmitOutcome::Blocked | SubmitOutcome::Failed => {}
        }
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_form, FieldError};

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.select_image(SelectedFile::new("sunset.png", 2 * 1024 * 1024, "image/png"));
        state.set_title("Sunset".to_string());
        state.set_description("A photo of a sunset over water".to_string());
        state
    }

    #[test]
    fn test_created_resets_fields() {
        let mut state = filled();
        assert!(state.begin_submit());

        state.finish_submit(&SubmitOutcome::Created);

        assert_eq!(state, FormState::default());
    }

    #[test]
    fn test_failed_keeps_fields() {
        let mut state = filled();
        assert!(state.begin_submit());

        state.finish_submit(&SubmitOutcome::Failed);

        assert_eq!(state.values.title, "Sunset");
        assert!(state.values.image.is_some());
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_blocked_keeps_fields() {
        let mut state = filled();
        assert!(state.begin_submit());

        state.finish_submit(&SubmitOutcome::Blocked);

        assert_eq!(state.values.description, "A photo of a sunset over water");
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_busy_leaves_submit_disabled() {
        let mut state = filled();
        assert!(state.begin_submit());
        assert!(!state.begin_submit());

        state.finish_submit(&SubmitOutcome::Busy);
        assert!(state.is_submitting);

        state.finish_submit(&SubmitOutcome::Created);
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_invalid_shows_errors_and_keeps_fields() {
        let mut state = FormState::default();
        state.set_title("A".to_string());
        assert!(state.begin_submit());

        let errors = validate_form(&state.values);
        state.finish_submit(&SubmitOutcome::Invalid(errors));

        assert_eq!(state.errors.title, Some(FieldError::TitleTooShort));
        assert_eq!(state.errors.image, Some(FieldError::ImageRequired));
        assert_eq!(state.values.title, "A");
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_field_revalidates_after_error() {
        let mut state = FormState::default();
        state.set_title("A".to_string());
        assert_eq!(state.errors.title, None);

        state.errors.title = Some(FieldError::TitleTooShort);
        state.set_title("Ab".to_string());
        assert_eq!(state.errors.title, None);
    }

    #[test]
    fn test_image_error_prefers_validation() {
        let mut state = FormState::default();
        state.upload_error = Some("Falha no envio da imagem".to_string());
        assert_eq!(state.image_error().as_deref(), Some("Falha no envio da imagem"));

        state.select_image(SelectedFile::new("big.png", 20 * 1024 * 1024, "image/png"));
        assert_eq!(
            state.image_error().as_deref(),
            Some("O arquivo deve ser menor que 10MB")
        );
    }
}
