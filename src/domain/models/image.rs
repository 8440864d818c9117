use std::{fmt, str::FromStr};

use serde::Serialize;

/// Output formats accepted by the conversion endpoint.
///
/// `Gif` is accepted for compatibility but is encoded as PNG: the filename
/// keeps the `.gif` extension while the payload and MIME type are PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetFormat {
    #[serde(rename = "jpg")]
    Jpg,
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "webp")]
    Webp,
    #[serde(rename = "gif")]
    Gif,
}

/// Encoding actually written by the codec for a [`TargetFormat`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoding {
    Jpeg { quality: u8 },
    Png,
    WebP { quality: f32 },
}

pub const JPEG_QUALITY: u8 = 90;
pub const WEBP_QUALITY: f32 = 90.0;

impl TargetFormat {
    pub const ALL: [TargetFormat; 4] = [
        TargetFormat::Jpg,
        TargetFormat::Png,
        TargetFormat::Webp,
        TargetFormat::Gif,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Jpg => "jpg",
            TargetFormat::Png => "png",
            TargetFormat::Webp => "webp",
            TargetFormat::Gif => "gif",
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            TargetFormat::Jpg => Encoding::Jpeg {
                quality: JPEG_QUALITY,
            },
            TargetFormat::Png | TargetFormat::Gif => Encoding::Png,
            TargetFormat::Webp => Encoding::WebP {
                quality: WEBP_QUALITY,
            },
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self.encoding() {
            Encoding::Jpeg { .. } => "image/jpeg",
            Encoding::Png => "image/png",
            Encoding::WebP { .. } => "image/webp",
        }
    }

    /// `photo.jpeg` with `Webp` becomes `photo.webp`.
    pub fn output_filename(self, original: &str) -> String {
        format!("{}.{}", strip_extension(original), self.extension())
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFormat(pub String);

impl FromStr for TargetFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpg" => Ok(TargetFormat::Jpg),
            "png" => Ok(TargetFormat::Png),
            "webp" => Ok(TargetFormat::Webp),
            "gif" => Ok(TargetFormat::Gif),
            other => Err(UnsupportedFormat(other.to_string())),
        }
    }
}

/// Removes a trailing `.ext`, where `ext` is one or more characters that are
/// neither `.` nor `/`.
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => {
            let ext = &filename[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                filename
            } else {
                &filename[..idx]
            }
        }
        None => filename,
    }
}

/// One successfully converted file, ready for JSON transport.
#[derive(Debug, Clone)]
pub struct ConvertedImage {
    pub filename: String,
    pub data: Vec<u8>,
    pub mime_type: &'static str,
}

impl ConvertedImage {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}
