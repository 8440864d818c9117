use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{
    application::services::ConversionOutcome,
    domain::models::{image::ConvertedImage, skipped::SkippedItem},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertedImageResponse {
    pub filename: String,
    /// Base64 encoded image bytes.
    pub data: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Length of the decoded bytes.
    pub size: u64,
}

impl From<ConvertedImage> for ConvertedImageResponse {
    fn from(image: ConvertedImage) -> Self {
        Self {
            size: image.size(),
            data: STANDARD.encode(&image.data),
            mime_type: image.mime_type.to_string(),
            filename: image.filename,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkippedItemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub reason: String,
}

impl From<SkippedItem> for SkippedItemResponse {
    fn from(item: SkippedItem) -> Self {
        Self {
            filename: item.filename,
            reason: item.reason,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub images: Vec<ConvertedImageResponse>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItemResponse>,
}

impl From<ConversionOutcome> for ConvertResponse {
    fn from(outcome: ConversionOutcome) -> Self {
        let images: Vec<ConvertedImageResponse> =
            outcome.images.into_iter().map(Into::into).collect();
        Self {
            success: true,
            count: images.len(),
            images,
            skipped: outcome.skipped.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_original_shape_without_skips() {
        let response = ConvertResponse::from(ConversionOutcome {
            images: vec![ConvertedImage {
                filename: "a.gif".to_string(),
                data: vec![1, 2, 3],
                mime_type: "image/png",
            }],
            skipped: Vec::new(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "images": [{
                    "filename": "a.gif",
                    "data": "AQID",
                    "mimeType": "image/png",
                    "size": 3
                }],
                "count": 1
            })
        );
    }

    #[test]
    fn lists_skipped_files_when_present() {
        let response = ConvertResponse::from(ConversionOutcome {
            images: Vec::new(),
            skipped: vec![SkippedItem::new(Some("x.png".into()), "Cannot decode image")],
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["skipped"][0]["filename"], "x.png");
        assert_eq!(json["count"], 0);
    }
}
