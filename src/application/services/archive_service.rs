use std::{collections::HashMap, path::Path, sync::Arc};

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::{
    application::{
        dto::archive_dto::ArchiveImageDTO, error::ApplicationError, services::ArchiveCodec,
    },
    domain::models::{archive::ArchiveEntry, skipped::SkippedItem},
};

pub const NO_IMAGES: &str = "No images provided";
pub const ARCHIVE_FAILED: &str = "Failed to create ZIP file";

/// Standard alphabet, padding optional, non-zero trailing bits ignored.
/// URL-safe input is folded onto the standard alphabet before decoding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug)]
pub struct ArchiveOutcome {
    pub filename: String,
    pub data: Vec<u8>,
    pub entries: usize,
    pub skipped: Vec<SkippedItem>,
}

pub struct ArchiveService {
    codec: Arc<dyn ArchiveCodec>,
}

impl ArchiveService {
    pub fn new(codec: Arc<dyn ArchiveCodec>) -> Self {
        Self { codec }
    }

    pub async fn create(
        &self,
        images: Option<Vec<ArchiveImageDTO>>,
    ) -> Result<ArchiveOutcome, ApplicationError> {
        self.create_at(images, Utc::now()).await
    }

    /// Packs the decodable entries into one archive named after `now`.
    ///
    /// Entries without a filename or data, or whose data is not base64, are
    /// left out and reported in `skipped`. A repeated filename replaces the
    /// earlier content but keeps the earlier position.
    pub async fn create_at(
        &self,
        images: Option<Vec<ArchiveImageDTO>>,
        now: DateTime<Utc>,
    ) -> Result<ArchiveOutcome, ApplicationError> {
        let images = match images {
            Some(images) if !images.is_empty() => images,
            _ => return Err(ApplicationError::validation(NO_IMAGES)),
        };
        info!(images = images.len(), "Archive requested");

        let mut entries: Vec<ArchiveEntry> = Vec::with_capacity(images.len());
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut skipped = Vec::new();

        for (index, image) in images.into_iter().enumerate() {
            let (filename, data) = match (image.filename, image.data) {
                (Some(filename), Some(data)) if !filename.is_empty() && !data.is_empty() => {
                    (filename, data)
                }
                (filename, _) => {
                    warn!(index, "Skipping archive entry with missing filename or data");
                    skipped.push(SkippedItem::new(filename, "missing filename or data"));
                    continue;
                }
            };

            let content = match decode_base64(&data) {
                Ok(content) => content,
                Err(e) => {
                    warn!(index, file = %filename, error = %e, "Skipping archive entry with invalid base64");
                    skipped.push(SkippedItem::new(Some(filename), "data is not valid base64"));
                    continue;
                }
            };

            let name = entry_name(&filename, index);
            match positions.get(&name) {
                Some(&pos) => entries[pos].content = content,
                None => {
                    positions.insert(name.clone(), entries.len());
                    entries.push(ArchiveEntry::new(name, content));
                }
            }
        }

        let entry_count = entries.len();
        let data = self.codec.pack(entries).await.map_err(|e| {
            error!(error = %e, "Archive creation failed");
            ApplicationError::processing(ARCHIVE_FAILED)
        })?;

        let filename = format!("converted-images-{}.zip", now.timestamp_millis());
        info!(
            file = %filename,
            entries = entry_count,
            skipped = skipped.len(),
            bytes = data.len(),
            "Archive created"
        );

        Ok(ArchiveOutcome {
            filename,
            data,
            entries: entry_count,
            skipped,
        })
    }
}

fn decode_base64(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = data
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    LENIENT_BASE64.decode(compact)
}

/// Keeps relative names as given; names that are absolute or climb out with
/// `..` are reduced to their last component.
fn entry_name(filename: &str, index: usize) -> String {
    let path = Path::new(filename);
    let escapes = path.is_absolute()
        || filename.starts_with('/')
        || path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir));
    if !escapes {
        return filename.to_string();
    }

    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("image-{}", index + 1))
}
