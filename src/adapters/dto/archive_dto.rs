use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::dto::conversion_dto::SkippedItemResponse, application::services::ArchiveOutcome,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ArchiveResponse {
    pub success: bool,
    /// Base64 encoded ZIP archive.
    #[serde(rename = "zipData")]
    pub zip_data: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItemResponse>,
}

impl From<ArchiveOutcome> for ArchiveResponse {
    fn from(outcome: ArchiveOutcome) -> Self {
        Self {
            success: true,
            zip_data: STANDARD.encode(&outcome.data),
            filename: outcome.filename,
            skipped: outcome.skipped.into_iter().map(Into::into).collect(),
        }
    }
}
