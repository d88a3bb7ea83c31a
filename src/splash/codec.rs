#![forbid(unsafe_code)]

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use log::warn;

use crate::splash::error::{SplashError, SplashResult};

/// Interleaved 3-byte-per-pixel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbPixels {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Standard raster codec used on the directory side of the conversion.
pub trait ImageCodec {
    /// File extension (without dot) of the images this codec reads and writes.
    fn extension(&self) -> &'static str;

    /// Decode a file into RGB pixels, dropping any alpha channel.
    fn decode(&self, bytes: &[u8]) -> SplashResult<RgbPixels>;

    /// Encode `width * height` RGB pixels into a file.
    fn encode(&self, pixels: &[u8], width: u32, height: u32) -> SplashResult<Vec<u8>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn decode(&self, bytes: &[u8]) -> SplashResult<RgbPixels> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| SplashError::Codec(e.to_string()))?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(RgbPixels {
            data: rgb.into_raw(),
            width,
            height,
        })
    }

    fn encode(&self, pixels: &[u8], width: u32, height: u32) -> SplashResult<Vec<u8>> {
        let needed = width as u64 * height as u64 * 3;
        if (pixels.len() as u64) < needed {
            return Err(SplashError::Codec(format!(
                "{width}x{height} image needs {needed} pixel bytes, got {}",
                pixels.len()
            )));
        }
        if pixels.len() as u64 > needed {
            warn!(
                "{} trailing pixel bytes ignored for {width}x{height} image",
                pixels.len() as u64 - needed
            );
        }

        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&pixels[..needed as usize], width, height, ExtendedColorType::Rgb8)
            .map_err(|e| SplashError::Codec(e.to_string()))?;
        Ok(out)
    }
}
