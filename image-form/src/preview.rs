//! Local preview of a picked file

use base64::{engine::general_purpose, Engine as _};

/// Builds a data URL for showing a picked file before it is uploaded
pub fn preview_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    let encoded = general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}
