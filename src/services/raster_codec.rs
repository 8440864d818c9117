use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use image::{codecs::jpeg::JpegEncoder, DynamicImage, ImageFormat};
use tracing::debug;

use crate::{
    application::{error::ApplicationError, services::ImageCodec},
    domain::models::image::{Encoding, TargetFormat},
    services::error::CodecError,
};

/// libwebp rejects anything wider or taller than this.
const WEBP_MAX_DIMENSION: u32 = 16383;

/// Image codec backed by the `image` crate, with lossy WebP from `webp`.
#[derive(Debug, Default, Clone)]
pub struct RasterImageCodec;

impl RasterImageCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn transcode_blocking(input: &[u8], format: TargetFormat) -> Result<Vec<u8>, CodecError> {
        let img = image::load_from_memory(input).map_err(|e| CodecError::Decode(e.to_string()))?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            %format,
            "Decoded source image"
        );

        match format.encoding() {
            Encoding::Jpeg { quality } => encode_jpeg(&img, quality),
            Encoding::Png => encode_png(&img),
            Encoding::WebP { quality } => encode_webp(&img, quality),
        }
    }
}

#[async_trait]
impl ImageCodec for RasterImageCodec {
    async fn transcode(
        &self,
        input: Bytes,
        format: TargetFormat,
    ) -> Result<Vec<u8>, ApplicationError> {
        let output = tokio::task::spawn_blocking(move || Self::transcode_blocking(&input, format))
            .await
            .map_err(CodecError::from)??;
        Ok(output)
    }
}

/// JPEG has no alpha channel, so the image is flattened to RGB first.
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)?;
    Ok(buf)
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn encode_webp(img: &DynamicImage, quality: f32) -> Result<Vec<u8>, CodecError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
        return Err(CodecError::Dimensions {
            format: "webp",
            width,
            height,
        });
    }

    let encoded = webp::Encoder::from_rgba(&rgba, width, height)
        .encode_simple(false, quality)
        .map_err(|e| CodecError::Encode(format!("{:?}", e)))?;
    Ok(encoded.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba, RgbaImage};

    fn sample_png() -> Vec<u8> {
        let img: RgbaImage = ImageBuffer::from_fn(8, 6, |x, y| {
            Rgba([(x * 30) as u8, (y * 40) as u8, 128, if x == 0 { 0 } else { 255 }])
        });
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn detected(bytes: &[u8]) -> ImageFormat {
        image::guess_format(bytes).expect("recognisable output")
    }

    #[test]
    fn png_to_jpeg_drops_alpha() {
        let out = RasterImageCodec::transcode_blocking(&sample_png(), TargetFormat::Jpg).unwrap();
        assert_eq!(detected(&out), ImageFormat::Jpeg);

        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn png_to_webp() {
        let out = RasterImageCodec::transcode_blocking(&sample_png(), TargetFormat::Webp).unwrap();
        assert_eq!(detected(&out), ImageFormat::WebP);
        assert_eq!(&out[..4], b"RIFF");
    }

    #[test]
    fn gif_target_produces_png_bytes() {
        let jpeg = RasterImageCodec::transcode_blocking(&sample_png(), TargetFormat::Jpg).unwrap();
        let out = RasterImageCodec::transcode_blocking(&jpeg, TargetFormat::Gif).unwrap();
        assert_eq!(detected(&out), ImageFormat::Png);
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let err = RasterImageCodec::transcode_blocking(b"definitely not an image", TargetFormat::Png)
            .unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[tokio::test]
    async fn async_transcode_maps_errors_to_processing() {
        let codec = RasterImageCodec::new();

        let out = codec
            .transcode(Bytes::from(sample_png()), TargetFormat::Png)
            .await
            .unwrap();
        assert_eq!(detected(&out), ImageFormat::Png);

        let err = codec
            .transcode(Bytes::from_static(b"nope"), TargetFormat::Png)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Processing(_)));
        assert!(err.to_string().starts_with("Cannot decode image"));
    }
}
