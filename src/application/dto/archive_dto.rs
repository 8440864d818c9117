use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/download-zip`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ArchiveRequestDTO {
    /// `None` when the field is absent or not a JSON array.
    #[serde(default, deserialize_with = "array_or_none")]
    pub images: Option<Vec<ArchiveImageDTO>>,
}

/// One previously converted image, as returned by the conversion endpoint.
/// Extra fields such as `mimeType` and `size` are accepted and ignored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveImageDTO {
    pub filename: Option<String>,
    /// Base64 encoded file content.
    pub data: Option<String>,
}

impl ArchiveImageDTO {
    pub fn new(filename: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            data: Some(data.into()),
        }
    }
}

// Entries of the wrong shape become empty DTOs, which the archive service
// then skips like any other incomplete entry.
fn array_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<ArchiveImageDTO>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conversion_output_records() {
        let dto: ArchiveRequestDTO = serde_json::from_str(
            r#"{"images":[{"filename":"a.png","data":"AAEC","mimeType":"image/png","size":3}]}"#,
        )
        .unwrap();
        assert_eq!(dto.images, Some(vec![ArchiveImageDTO::new("a.png", "AAEC")]));
    }

    #[test]
    fn non_array_images_read_as_missing() {
        for body in [r#"{}"#, r#"{"images":null}"#, r#"{"images":"nope"}"#] {
            let dto: ArchiveRequestDTO = serde_json::from_str(body).unwrap();
            assert!(dto.images.is_none(), "{body}");
        }
    }

    #[test]
    fn malformed_entries_become_empty() {
        let dto: ArchiveRequestDTO =
            serde_json::from_str(r#"{"images":[{"filename":42,"data":"AA=="},"junk"]}"#).unwrap();
        assert_eq!(
            dto.images,
            Some(vec![ArchiveImageDTO::default(), ArchiveImageDTO::default()])
        );
    }
}
