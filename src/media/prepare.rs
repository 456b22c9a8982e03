// SPDX-License-Identifier: MPL-2.0
//! Client-side image preparation before upload.
//!
//! Large photos are downscaled so the longest edge stays at or below
//! [`MAX_UPLOAD_EDGE_PX`] and re-encoded as JPEG. This is a bandwidth
//! optimization only: if anything about the file cannot be decoded or
//! re-encoded, the original bytes go up unchanged.

use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView};
use std::io::Cursor;

/// Longest edge allowed before downscaling kicks in. Large, but tames 8K
/// photos ahead of server-side processing.
pub const MAX_UPLOAD_EDGE_PX: u32 = 3000;

const JPEG_QUALITY: u8 = 90;

/// The payload that actually goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Downscales and re-encodes `bytes`, falling back to the original file on
/// any failure. The returned filename carries a `.jpg` extension when the
/// transform succeeded, since the payload is then always JPEG.
pub fn prepare_for_upload(original_name: &str, bytes: Vec<u8>) -> PreparedImage {
    match transcode(&bytes) {
        Ok(encoded) => PreparedImage {
            filename: jpeg_name(original_name),
            bytes: encoded,
        },
        Err(err) => {
            eprintln!("image preparation fell back to original for {original_name}: {err}");
            PreparedImage {
                filename: original_name.to_string(),
                bytes,
            }
        }
    }
}

fn transcode(bytes: &[u8]) -> Result<Vec<u8>> {
    let image = image_rs::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has zero dimensions".to_string()));
    }

    let longest = width.max(height);
    let image = if longest > MAX_UPLOAD_EDGE_PX {
        let scale = f64::from(MAX_UPLOAD_EDGE_PX) / f64::from(longest);
        let target_width = (f64::from(width) * scale).round().max(1.0) as u32;
        let target_height = (f64::from(height) * scale).round().max(1.0) as u32;
        image.resize_exact(target_width, target_height, FilterType::Lanczos3)
    } else {
        image
    };

    // JPEG has no alpha channel; flatten to RGB before encoding.
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut output = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut output, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;
    Ok(output.into_inner())
}

/// Swaps the extension for `.jpg`, keeping the stem.
fn jpeg_name(original: &str) -> String {
    let stem = match original.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => original,
    };
    if stem.is_empty() {
        "image.jpg".to_string()
    } else {
        format!("{stem}.jpg")
    }
}
