use serde::{Deserialize, Serialize};

/// Metadata of the file picked in the file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// Current values of the form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageFormValues {
    pub image: Option<SelectedFile>,
    pub title: String,
    pub description: String,
}

/// Upload related state owned by one form instance
///
/// `image_url` is only set once the image host accepted the file,
/// `local_image_url` is set as soon as a file is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub image_url: String,
    pub local_image_url: String,
}

impl UploadState {
    pub fn has_remote_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    pub fn clear(&mut self) {
        self.image_url.clear();
        self.local_image_url.clear();
    }
}

/// Body of `POST /api/images`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImage {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl NewImage {
    /// Builds the payload from the form values; the URL always comes from the
    /// upload state, never from the form.
    pub fn from_form(values: &ImageFormValues, image_url: &str) -> Self {
        Self {
            title: values.title.clone(),
            description: values.description.clone(),
            url: image_url.to_string(),
        }
    }
}

/// Image record as returned by `GET /api/images`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub ts: u64,
}

/// One page of the image listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesPage {
    pub data: Vec<Image>,
    /// Cursor for the next page, `None` on the last page
    #[serde(default)]
    pub after: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_upload_url() {
        let values = ImageFormValues {
            image: Some(SelectedFile::new("sunset.png", 2 * 1024 * 1024, "image/png")),
            title: "Sunset".to_string(),
            description: "A photo of a sunset over water".to_string(),
        };

        let payload = NewImage::from_form(&values, "https://x/y.png");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Sunset",
                "description": "A photo of a sunset over water",
                "url": "https://x/y.png",
            })
        );
    }

    #[test]
    fn test_upload_state_clear() {
        let mut state = UploadState {
            image_url: "https://x/y.png".to_string(),
            local_image_url: "data:image/png;base64,AAAA".to_string(),
        };
        assert!(state.has_remote_image());

        state.clear();
        assert_eq!(state, UploadState::default());
        assert!(!state.has_remote_image());
    }

    #[test]
    fn test_images_page_last_page() {
        let page: ImagesPage = serde_json::from_str(
            r#"{"data":[{"id":"1","title":"A","description":"Description","url":"https://x/a.png","ts":1}],"after":null}"#,
        )
        .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].title, "A");
        assert!(page.after.is_none());
    }
}
