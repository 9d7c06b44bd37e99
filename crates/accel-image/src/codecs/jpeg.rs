/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Baseline jpeg loading
//!
//! Decoding is delegated to `zune-jpeg`. Output is always forced to
//! 3 component RGB, the codec's integer (non-approximated) IDCT is used.
//!
//! Every step returns a `Result`, the first failure short circuits out
//! and the decoder state plus any partially filled buffer are dropped on the way.
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use log::{trace, warn};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::buffer::PixelBuffer;
use crate::codecs::DecodeResult;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, IntoImage};
use crate::utils::{checked_product, try_vec};
use crate::view::CHANNELS;

/// Where jpeg bytes come from
#[derive(Copy, Clone)]
pub enum JpegSource<'a> {
    /// A file on disk
    Path(&'a Path),
    /// Bytes already in memory
    Memory(&'a [u8])
}

impl Display for JpegSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JpegSource::Path(path) => write!(f, "{}", path.display()),
            JpegSource::Memory(_) => write!(f, "in-memory buffer")
        }
    }
}

impl Debug for JpegSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JpegSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            JpegSource::Memory(data) => write!(f, "Memory({} bytes)", data.len())
        }
    }
}

/// Jpeg decoder producing row packed RGB
pub struct JpegDecoder<'a> {
    source:  JpegSource<'a>,
    options: DecoderOptions
}

impl<'a> JpegDecoder<'a> {
    /// Create a decoder with strict decoding options
    ///
    /// Strict mode makes the codec refuse malformed headers. Streams cut
    /// short inside their scan data are refused whatever the options.
    #[must_use]
    pub fn new(source: JpegSource<'a>) -> JpegDecoder<'a> {
        JpegDecoder::new_with_options(source, DecoderOptions::default().set_strict_mode(true))
    }

    /// Create a decoder with caller supplied options
    ///
    /// The output colorspace is always overridden to RGB
    #[must_use]
    pub fn new_with_options(source: JpegSource<'a>, options: DecoderOptions) -> JpegDecoder<'a> {
        JpegDecoder {
            source,
            options: options.jpeg_set_out_colorspace(ColorSpace::RGB)
        }
    }

    fn codec_error(&self, reason: &str) -> ImageErrors {
        trace!("Jpeg decoding failed for {}", self.source);

        ImageErrors::Io(format!(
            "JPEG decoding failed: {} ({})",
            reason.trim_end(),
            self.source
        ))
    }

    fn decode_bytes(&self, data: &[u8]) -> Result<DecodeResult, ImageErrors> {
        let mut decoder = zune_jpeg::JpegDecoder::new_with_options(data, self.options);

        decoder
            .decode_headers()
            .map_err(|e| self.codec_error(&format!("{e:?}")))?;

        let (width, height) = decoder
            .dimensions()
            .ok_or_else(|| self.codec_error("no image dimensions"))?;

        let out_size = decoder
            .output_buffer_size()
            .ok_or_else(|| self.codec_error("unknown output size"))?;

        trace!("Image dimensions: ({width},{height})");

        // the codec pads a scan that runs out of data, so look for the end ourselves
        check_end_of_image(data).map_err(|reason| self.codec_error(reason))?;

        let pixel_count = checked_product(&[width, height], "decode buffer")?;

        if pixel_count == 0 || out_size % pixel_count != 0 {
            return Err(self.codec_error("inconsistent output size"));
        }
        let components = out_size / pixel_count;

        let mut pixels = try_vec::<u8>(out_size, "decode buffer")?;

        decoder
            .decode_into(&mut pixels)
            .map_err(|e| self.codec_error(&format!("{e:?}")))?;

        let pixels = expand_to_rgb(pixels, components)?;

        DecodeResult::new(PixelBuffer::from_vec(pixels), width, height, CHANNELS)
    }
}

impl DecoderTrait for JpegDecoder<'_> {
    fn decode(&mut self) -> Result<DecodeResult, ImageErrors> {
        match self.source {
            JpegSource::Path(path) => {
                let data = std::fs::read(path).map_err(|e| {
                    ImageErrors::Io(format!("failed to open file {}: {e}", path.display()))
                })?;
                self.decode_bytes(&data)
            }
            JpegSource::Memory(data) => self.decode_bytes(data)
        }
    }

    fn name(&self) -> &'static str {
        "Jpeg decoder"
    }
}

impl IntoImage for JpegDecoder<'_> {
    fn into_image(mut self) -> Result<Image, ImageErrors> {
        Ok(self.decode()?.into_image())
    }
}

const PREMATURE_END: &str = "premature end of data";

/// Walk the marker segments and scans of `data` until the end of image marker
///
/// Fails if the data runs out first.
fn check_end_of_image(data: &[u8]) -> Result<(), &'static str> {
    if !data.starts_with(&[0xFF, 0xD8]) {
        return Err("missing start of image marker");
    }
    let mut pos = 2;

    loop {
        // any number of fill bytes may precede a marker
        while data.get(pos) == Some(&0xFF) && data.get(pos + 1) == Some(&0xFF) {
            pos += 1;
        }
        let (Some(&prefix), Some(&marker)) = (data.get(pos), data.get(pos + 1)) else {
            return Err(PREMATURE_END);
        };
        if prefix != 0xFF {
            return Err("expected a marker between segments");
        }
        pos += 2;

        match marker {
            // EOI
            0xD9 => return Ok(()),
            // markers without a length field
            0x01 | 0xD0..=0xD8 => continue,
            _ => {
                let length = data
                    .get(pos..pos + 2)
                    .map(|b| usize::from(u16::from_be_bytes([b[0], b[1]])))
                    .ok_or(PREMATURE_END)?;

                if length < 2 {
                    return Err("invalid marker segment length");
                }
                pos += length;

                if pos > data.len() {
                    return Err(PREMATURE_END);
                }
                // SOS, entropy coded data follows the header
                if marker == 0xDA {
                    pos = skip_scan_data(data, pos).ok_or(PREMATURE_END)?;
                }
            }
        }
    }
}

/// Position of the first marker that ends the scan starting at `pos`
///
/// Stuffed zero bytes and restart markers belong to the scan.
fn skip_scan_data(data: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        pos += data.get(pos..)?.iter().position(|&b| b == 0xFF)?;

        match *data.get(pos + 1)? {
            0x00 | 0xD0..=0xD7 => pos += 2,
            0xFF => pos += 1,
            _ => return Some(pos)
        }
    }
}

/// Bring whatever the codec produced to 3 interleaved components
fn expand_to_rgb(pixels: Vec<u8>, components: usize) -> Result<Vec<u8>, ImageErrors> {
    if components == CHANNELS {
        return Ok(pixels);
    }
    if components == 0 || components > 4 {
        return Err(ImageErrors::System {
            stage:  "color conversion",
            status: i32::try_from(components).unwrap_or(i32::MAX)
        });
    }
    warn!("Codec produced {components} components, expanding to RGB");

    let pixel_count = pixels.len() / components;
    let mut rgb = try_vec::<u8>(pixel_count * CHANNELS, "color conversion")?;

    for (out, pixel) in rgb
        .chunks_exact_mut(CHANNELS)
        .zip(pixels.chunks_exact(components))
    {
        match components {
            // gray and gray + alpha, replicate luma
            1 | 2 => out.fill(pixel[0]),
            // RGBA, drop alpha
            _ => out.copy_from_slice(&pixel[..CHANNELS])
        }
    }
    Ok(rgb)
}
