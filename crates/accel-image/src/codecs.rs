/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for image decoders
//!
//! Decoders produce a [`DecodeResult`], a transient bundle of geometry and
//! samples. Nothing reaches an [`Image`] until the result is complete, so a
//! failed decode never leaves a half initialized image behind.
use crate::buffer::PixelBuffer;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::utils::checked_product;
use crate::view::CHANNELS;

pub mod jpeg;

/// Pixels and geometry of a successful decode
#[derive(Debug)]
pub struct DecodeResult {
    pub(crate) width:    usize,
    pub(crate) height:   usize,
    pub(crate) channels: usize,
    pub(crate) pixels:   PixelBuffer
}

impl DecodeResult {
    /// Bundle decoded, row packed samples
    ///
    /// # Errors
    /// [`ImageErrors::System`] if the sample count doesn't match the geometry,
    /// including geometry whose sample count overflows
    pub fn new(
        pixels: PixelBuffer, width: usize, height: usize, channels: usize
    ) -> Result<DecodeResult, ImageErrors> {
        let expected = checked_product(&[width, height, channels], "decode result").ok();

        if channels != CHANNELS || expected != Some(pixels.len()) {
            return Err(ImageErrors::System {
                stage:  "decode result",
                status: -1
            });
        }
        Ok(DecodeResult {
            width,
            height,
            channels,
            pixels
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn channels(&self) -> usize {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        self.pixels.as_slice()
    }

    /// Commit every field at once into a new image
    pub fn into_image(self) -> Image {
        Image::from_parts(self.pixels, self.width, self.height)
    }
}
