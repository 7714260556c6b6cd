//! Field validation for the image form
//!
//! Every rule maps to one fixed message that is shown inline next to the
//! field. Rules of a field are checked in order and the first failing rule
//! wins.

use crate::models::{ImageFormValues, SelectedFile};

/// Files of this size or larger are rejected (10 MiB)
pub const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types accepted for the image field
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/gif"];

pub const TITLE_MIN_LEN: usize = 2;
pub const TITLE_MAX_LEN: usize = 20;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 65;

/// A failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    ImageRequired,
    ImageTooLarge,
    ImageUnsupportedFormat,
    TitleRequired,
    TitleTooShort,
    TitleTooLong,
    DescriptionRequired,
    DescriptionTooShort,
    DescriptionTooLong,
}

impl FieldError {
    /// Message shown to the user below the field
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::ImageRequired => "Arquivo obrigatório",
            FieldError::ImageTooLarge => "O arquivo deve ser menor que 10MB",
            FieldError::ImageUnsupportedFormat => "Somente são aceitos arquivos PNG, JPEG e GIF",
            FieldError::TitleRequired => "Título obrigatório",
            FieldError::TitleTooShort => "Mínimo de 2 caracteres",
            FieldError::TitleTooLong => "Máximo de 20 caracteres",
            FieldError::DescriptionRequired => "Descrição obrigatória",
            FieldError::DescriptionTooShort => "Mínimo de 10 caracteres",
            FieldError::DescriptionTooLong => "Máximo de 65 caracteres",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Validation result of the whole form, one slot per field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub image: Option<FieldError>,
    pub title: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.image.is_none() && self.title.is_none() && self.description.is_none()
    }
}

pub fn validate_image(file: Option<&SelectedFile>) -> Result<(), FieldError> {
    let file = file.ok_or(FieldError::ImageRequired)?;

    if file.size >= MAX_IMAGE_SIZE {
        return Err(FieldError::ImageTooLarge);
    }

    // Substring match: parameters such as "image/png; charset=binary" pass
    if !ACCEPTED_MIME_TYPES
        .iter()
        .any(|accepted| file.mime_type.contains(accepted))
    {
        return Err(FieldError::ImageUnsupportedFormat);
    }

    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), FieldError> {
    validate_length(
        title,
        TITLE_MIN_LEN,
        TITLE_MAX_LEN,
        [
            FieldError::TitleRequired,
            FieldError::TitleTooShort,
            FieldError::TitleTooLong,
        ],
    )
}

pub fn validate_description(description: &str) -> Result<(), FieldError> {
    validate_length(
        description,
        DESCRIPTION_MIN_LEN,
        DESCRIPTION_MAX_LEN,
        [
            FieldError::DescriptionRequired,
            FieldError::DescriptionTooShort,
            FieldError::DescriptionTooLong,
        ],
    )
}

/// Runs every field rule and collects the failures
pub fn validate_form(values: &ImageFormValues) -> FormErrors {
    FormErrors {
        image: validate_image(values.image.as_ref()).err(),
        title: validate_title(&values.title).err(),
        description: validate_description(&values.description).err(),
    }
}

/// `errors` is `[required, too_short, too_long]`
fn validate_length(
    value: &str,
    min: usize,
    max: usize,
    errors: [FieldError; 3],
) -> Result<(), FieldError> {
    let [required, too_short, too_long] = errors;

    if value.is_empty() {
        return Err(required);
    }

    let len = value.chars().count();
    if len < min {
        return Err(too_short);
    }
    if len > max {
        return Err(too_long);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: u64) -> SelectedFile {
        SelectedFile::new("photo.png", size, "image/png")
    }

    #[test]
    fn test_image_required() {
        assert_eq!(validate_image(None), Err(FieldError::ImageRequired));
    }

    #[test]
    fn test_image_size_limit() {
        assert_eq!(
            validate_image(Some(&png(MAX_IMAGE_SIZE))),
            Err(FieldError::ImageTooLarge)
        );
        assert_eq!(
            validate_image(Some(&png(MAX_IMAGE_SIZE + 1))),
            Err(FieldError::ImageTooLarge)
        );
        assert_eq!(validate_image(Some(&png(MAX_IMAGE_SIZE - 1))), Ok(()));
        assert_eq!(validate_image(Some(&png(0))), Ok(()));
    }

    #[test]
    fn test_image_formats() {
        for mime in ["image/jpeg", "image/jpg", "image/png", "image/gif"] {
            let file = SelectedFile::new("photo", 1024, mime);
            assert_eq!(validate_image(Some(&file)), Ok(()), "{} should pass", mime);
        }

        for mime in ["image/webp", "image/svg+xml", "application/pdf", "", "IMAGE/PNG"] {
            let file = SelectedFile::new("photo", 1024, mime);
            assert_eq!(
                validate_image(Some(&file)),
                Err(FieldError::ImageUnsupportedFormat),
                "{} should fail",
                mime
            );
        }
    }

    #[test]
    fn test_oversized_file_reports_size_before_format() {
        let file = SelectedFile::new("doc.pdf", MAX_IMAGE_SIZE * 2, "application/pdf");
        assert_eq!(validate_image(Some(&file)), Err(FieldError::ImageTooLarge));
    }

    #[test]
    fn test_title_length() {
        assert_eq!(validate_title(""), Err(FieldError::TitleRequired));
        assert_eq!(validate_title("A"), Err(FieldError::TitleTooShort));
        assert_eq!(validate_title("Ab"), Ok(()));
        assert_eq!(validate_title(&"a".repeat(20)), Ok(()));
        assert_eq!(validate_title(&"a".repeat(21)), Err(FieldError::TitleTooLong));
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        // 20 characters, 40 bytes
        assert_eq!(validate_title(&"ç".repeat(20)), Ok(()));
    }

    #[test]
    fn test_whitespace_title_is_not_empty() {
        assert_eq!(validate_title("  "), Ok(()));
    }

    #[test]
    fn test_description_length() {
        assert_eq!(validate_description(""), Err(FieldError::DescriptionRequired));
        assert_eq!(
            validate_description(&"a".repeat(9)),
            Err(FieldError::DescriptionTooShort)
        );
        assert_eq!(validate_description(&"a".repeat(10)), Ok(()));
        assert_eq!(validate_description(&"a".repeat(65)), Ok(()));
        assert_eq!(
            validate_description(&"a".repeat(66)),
            Err(FieldError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_validate_form() {
        let values = ImageFormValues {
            image: Some(SelectedFile::new("sunset.png", 2 * 1024 * 1024, "image/png")),
            title: "Sunset".to_string(),
            description: "A photo of a sunset over water".to_string(),
        };
        assert!(validate_form(&values).is_valid());

        let errors = validate_form(&ImageFormValues::default());
        assert!(!errors.is_valid());
        assert_eq!(errors.image, Some(FieldError::ImageRequired));
        assert_eq!(errors.title, Some(FieldError::TitleRequired));
        assert_eq!(errors.description, Some(FieldError::DescriptionRequired));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::ImageTooLarge.to_string(),
            "O arquivo deve ser menor que 10MB"
        );
        assert_eq!(FieldError::TitleTooShort.message(), "Mínimo de 2 caracteres");
        assert_eq!(
            FieldError::DescriptionTooLong.message(),
            "Máximo de 65 caracteres"
        );
    }
}
