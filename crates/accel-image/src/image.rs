/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - one owned buffer of interleaved RGB samples
//!     - with a view describing which rectangle of that buffer
//!       the image currently is
//!
//! Crops only move the view, mirrors rewrite samples inside the view
//! and resizes swap in a whole new buffer.
use std::path::Path;

use zune_core::options::DecoderOptions;

use crate::buffer::PixelBuffer;
use crate::codecs::jpeg::{JpegDecoder, JpegSource};
use crate::errors::ImageErrors;
use crate::traits::IntoImage;
use crate::utils::checked_product;
use crate::view::{ImageView, CHANNELS};

/// Represents a single image
#[derive(Clone, Debug)]
pub struct Image {
    buffer: PixelBuffer,
    view:   ImageView
}

impl Image {
    /// Commit a row packed buffer and a full frame view.
    ///
    /// Callers guarantee `buffer.len() == width*height*CHANNELS`
    pub(crate) fn from_parts(buffer: PixelBuffer, width: usize, height: usize) -> Image {
        debug_assert_eq!(buffer.len(), width * height * CHANNELS);

        Image {
            buffer,
            view: ImageView::packed(width, height)
        }
    }

    /// Decode a jpeg file
    ///
    /// # Errors
    /// If the file can't be read or isn't a decodable jpeg
    ///
    /// # Example
    /// ```no_run
    /// use accel_image::image::Image;
    ///
    /// let image = Image::open("chicago.jpg").unwrap();
    /// println!("{:?}", image.dimensions());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
        JpegDecoder::new(JpegSource::Path(path.as_ref())).into_image()
    }

    /// Decode jpeg bytes already in memory
    ///
    /// # Errors
    /// If the bytes are not a decodable jpeg
    pub fn from_memory(data: &[u8]) -> Result<Image, ImageErrors> {
        JpegDecoder::new(JpegSource::Memory(data)).into_image()
    }

    /// Decode from any source with explicit decoder options
    ///
    /// # Errors
    /// If the source can't be read or decoded
    pub fn decode_with_options(
        source: JpegSource<'_>, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        JpegDecoder::new_with_options(source, options).into_image()
    }

    /// Create an image from row packed interleaved RGB samples
    ///
    /// # Errors
    /// - [`ImageErrors::Validation`] if `pixels` doesn't hold `width*height*3` samples
    /// - [`ImageErrors::Memory`] if that sample count overflows `usize`
    pub fn from_rgb(pixels: Vec<u8>, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let expected = checked_product(&[width, height, CHANNELS], "rgb image")?;

        if pixels.len() != expected {
            return Err(ImageErrors::Validation(format!(
                "expected {expected} samples for a {width}x{height} RGB image; got {}",
                pixels.len()
            )));
        }
        Ok(Image::from_parts(PixelBuffer::from_vec(pixels), width, height))
    }

    /// Create an image with every sample set to `value`
    ///
    /// # Errors
    /// [`ImageErrors::Memory`] if the buffer can't be sized or allocated
    pub fn fill(value: u8, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let samples = checked_product(&[width, height, CHANNELS], "fill")?;
        let mut buffer = PixelBuffer::try_new(samples, "fill")?;
        buffer.as_mut_slice().fill(value);

        Ok(Image::from_parts(buffer, width, height))
    }

    /// Samples per pixel, always 3
    pub const fn channels(&self) -> usize {
        self.view.channels()
    }

    pub const fn width(&self) -> usize {
        self.view.width()
    }

    pub const fn height(&self) -> usize {
        self.view.height()
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.view.width(), self.view.height())
    }

    /// The window of the buffer this image currently is
    pub const fn view(&self) -> &ImageView {
        &self.view
    }

    /// Every sample of the underlying buffer, including those outside the view
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// The view together with mutable access to the storage it addresses
    pub fn view_and_buffer_mut(&mut self) -> (ImageView, &mut [u8]) {
        (self.view, self.buffer.as_mut_slice())
    }

    /// Iterate over the rows of the current view
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.view.rows(self.buffer.as_slice())
    }

    /// Replace the view, keeping the buffer
    ///
    /// # Errors
    /// [`ImageErrors::Validation`] if the window would reach outside the buffer
    pub fn set_view(&mut self, view: ImageView) -> Result<(), ImageErrors> {
        if view.channels() != CHANNELS || !view.fits(self.buffer.len()) {
            return Err(ImageErrors::Validation(format!(
                "view {view:?} does not fit in a buffer of {} samples",
                self.buffer.len()
            )));
        }
        self.view = view;
        Ok(())
    }

    /// Swap in a complete, row packed buffer of `width x height` pixels
    ///
    /// The old buffer is released only after the new one is in place and
    /// the view is reset to the full frame.
    ///
    /// # Errors
    /// [`ImageErrors::Validation`] if the sample count doesn't match the geometry
    /// or the geometry overflows, the image is then left untouched.
    pub fn replace_buffer(
        &mut self, buffer: PixelBuffer, width: usize, height: usize
    ) -> Result<(), ImageErrors> {
        let expected = checked_product(&[width, height, CHANNELS], "replace buffer").ok();

        if expected != Some(buffer.len()) {
            return Err(ImageErrors::Validation(format!(
                "buffer of {} samples can't hold a {width}x{height} RGB image",
                buffer.len()
            )));
        }
        let old = std::mem::replace(&mut self.buffer, buffer);
        self.view = ImageView::packed(width, height);
        drop(old);

        Ok(())
    }

    /// Copy the current view into a new row packed vector
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.view.sample_count());
        self.rows().for_each(|row| out.extend_from_slice(row));
        out
    }
}
