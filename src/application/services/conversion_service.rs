use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    application::{error::ApplicationError, services::ImageCodec},
    domain::{
        config::server::MAX_FILES_PER_REQUEST,
        models::{
            image::{ConvertedImage, TargetFormat},
            part::Part,
            skipped::SkippedItem,
        },
    },
};

pub const NO_FORM_DATA: &str = "No form data received";
pub const INVALID_FORMAT: &str = "Invalid format specified";
pub const INVALID_FILE_COUNT: &str = "Invalid number of files (1-10 allowed)";
pub const NOTHING_CONVERTED: &str = "Failed to convert any images";

const FILE_FIELD_PREFIX: &str = "file";

#[derive(Debug)]
pub struct ConversionOutcome {
    pub images: Vec<ConvertedImage>,
    pub skipped: Vec<SkippedItem>,
}

pub struct ConversionService {
    codec: Arc<dyn ImageCodec>,
}

impl ConversionService {
    pub fn new(codec: Arc<dyn ImageCodec>) -> Self {
        Self { codec }
    }

    /// Converts every `file*` part to the format named by the `format` part.
    ///
    /// Files that lack data or a filename, or that the codec rejects, are
    /// skipped. The call only fails as a whole on invalid input or when
    /// nothing could be converted.
    pub async fn convert(&self, parts: Vec<Part>) -> Result<ConversionOutcome, ApplicationError> {
        info!(parts = parts.len(), "Conversion requested");

        if parts.is_empty() {
            return Err(ApplicationError::validation(NO_FORM_DATA));
        }

        let format = find_part(&parts, "format")
            .and_then(|part| part.text().parse::<TargetFormat>().ok())
            .ok_or_else(|| ApplicationError::validation(INVALID_FORMAT))?;

        // Advisory only: never checked against the real number of files.
        let declared_count = find_part(&parts, "count")
            .map(|part| parse_leading_int(&part.text()))
            .unwrap_or(0);
        debug!(%format, declared_count, "Parsed conversion options");

        let files: Vec<Part> = parts
            .into_iter()
            .filter(|part| part.name.starts_with(FILE_FIELD_PREFIX))
            .collect();

        if files.is_empty() || files.len() > MAX_FILES_PER_REQUEST {
            warn!(files = files.len(), "Rejected file count");
            return Err(ApplicationError::validation(INVALID_FILE_COUNT));
        }

        let mut images = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for (index, file) in files.into_iter().enumerate() {
            let filename = match file.filename.as_deref() {
                Some(name) if !name.is_empty() && !file.data.is_empty() => name.to_string(),
                _ => {
                    warn!(index, field = %file.name, "Skipping file part with missing data or filename");
                    skipped.push(SkippedItem::new(
                        file.filename.clone(),
                        "missing data or filename",
                    ));
                    continue;
                }
            };

            let output_name = format.output_filename(&filename);

            match self.codec.transcode(file.data, format).await {
                Ok(data) => {
                    info!(
                        source = %filename,
                        target = %output_name,
                        bytes = data.len(),
                        "Converted image"
                    );
                    images.push(ConvertedImage {
                        filename: output_name,
                        data,
                        mime_type: format.mime_type(),
                    });
                }
                Err(e) => {
                    warn!(source = %filename, error = %e, "Failed to convert image");
                    skipped.push(SkippedItem::new(Some(filename), e.to_string()));
                }
            }
        }

        info!(
            converted = images.len(),
            skipped = skipped.len(),
            "Conversion completed"
        );

        if images.is_empty() {
            return Err(ApplicationError::processing(NOTHING_CONVERTED));
        }

        Ok(ConversionOutcome { images, skipped })
    }
}

fn find_part<'a>(parts: &'a [Part], name: &str) -> Option<&'a Part> {
    parts.iter().find(|part| part.name == name)
}

/// Reads an optional sign and the leading digits, ignoring the rest;
/// anything unparsable counts as 0.
fn parse_leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
