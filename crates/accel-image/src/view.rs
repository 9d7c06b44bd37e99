/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Geometry of the window an image currently exposes
//!
//! A view is a rectangle inside a bigger, row packed, buffer
//!
//! ```text
//!    row_stride ─────────────────────────►
//! │ ┌─────────────────────────────────────┐
//! │ │                                     │
//! │ │  (x_offset,y_offset)   width        │
//! │ │     ┌────────────────────┐          │
//! │ │   h │                    │          │
//! │ │   e │                    │          │
//! │ │   i │     VIEW           │          │
//! │ │   g │                    │          │
//! │ │   h │                    │          │
//! │ │   t └────────────────────┘          │
//! ▼ │                                     │
//!   └─────────────────────────────────────┘
//! ```
//!
//! Cropping is then only a matter of moving the offsets and shrinking
//! width and height, no sample is ever copied.
use crate::errors::ImageErrors;

/// Number of interleaved samples per pixel.
///
/// Only RGB is supported
pub const CHANNELS: usize = 3;

/// Describes a rectangular window inside a [`PixelBuffer`](crate::buffer::PixelBuffer)
///
/// All quantities are in pixels, multiply by [`channels`](ImageView::channels)
/// to get sample positions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ImageView {
    channels:   usize,
    height:     usize,
    width:      usize,
    row_stride: usize,
    y_offset:   usize,
    x_offset:   usize
}

impl ImageView {
    /// Full frame view over a freshly allocated, row packed buffer
    #[must_use]
    pub const fn packed(width: usize, height: usize) -> ImageView {
        ImageView {
            channels: CHANNELS,
            height,
            width,
            row_stride: width,
            y_offset: 0,
            x_offset: 0
        }
    }

    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Pixels between the start of two consecutive rows in storage
    #[must_use]
    pub const fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[must_use]
    pub const fn x_offset(&self) -> usize {
        self.x_offset
    }

    #[must_use]
    pub const fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Sample index of the top left pixel of the window
    #[must_use]
    pub const fn origin(&self) -> usize {
        (self.y_offset * self.row_stride + self.x_offset) * self.channels
    }

    /// Samples between two consecutive rows in storage
    #[must_use]
    pub const fn physical_row_len(&self) -> usize {
        self.row_stride * self.channels
    }

    /// Samples in one row of the window
    #[must_use]
    pub const fn logical_row_len(&self) -> usize {
        self.width * self.channels
    }

    /// Samples the window covers once copied out, `channels*width*height`
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.channels * self.width * self.height
    }

    /// Return true if the window is row packed and starts at the buffer origin
    #[must_use]
    pub const fn is_packed(&self) -> bool {
        self.row_stride == self.width && self.x_offset == 0 && self.y_offset == 0
    }

    /// Check that the window lies entirely inside a buffer of `buffer_len` samples
    #[must_use]
    pub fn fits(&self, buffer_len: usize) -> bool {
        if self.x_offset + self.width > self.row_stride {
            return false;
        }
        if self.width == 0 || self.height == 0 {
            return self.origin() <= buffer_len;
        }
        // last sample of the last row in the window
        let end = self.origin()
            + (self.height - 1) * self.physical_row_len()
            + self.logical_row_len();

        end <= buffer_len
    }

    /// Narrow the window to the box `(left, upper, right, lower)`
    ///
    /// Coordinates are relative to the current window, signed because
    /// they usually come straight from a scripting host. Offsets accumulate,
    /// so repeated crops compose.
    ///
    /// # Errors
    /// [`ImageErrors::Validation`] naming the first offending bound
    pub fn crop(&self, left: i64, upper: i64, right: i64, lower: i64) -> Result<ImageView, ImageErrors> {
        let width = i64::try_from(self.width).unwrap_or(i64::MAX);
        let height = i64::try_from(self.height).unwrap_or(i64::MAX);

        if left < 0 {
            return Err(ImageErrors::Validation(format!(
                "non-negative left offset expected; got {left}"
            )));
        }
        if upper < 0 {
            return Err(ImageErrors::Validation(format!(
                "non-negative upper offset expected; got {upper}"
            )));
        }
        if right > width {
            return Err(ImageErrors::Validation(format!(
                "right coordinate ({right}) extends beyond image width ({width})"
            )));
        }
        if lower > height {
            return Err(ImageErrors::Validation(format!(
                "lower coordinate ({lower}) extends beyond image height ({height})"
            )));
        }
        if right <= left {
            return Err(ImageErrors::Validation(format!(
                "right coordinate ({right}) does not exceed left coordinate ({left})"
            )));
        }
        if lower <= upper {
            return Err(ImageErrors::Validation(format!(
                "lower coordinate ({lower}) does not exceed upper coordinate ({upper})"
            )));
        }
        // all four are now known to be in 0..=dimension
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let (left, upper, right, lower) = (left as usize, upper as usize, right as usize, lower as usize);

        Ok(ImageView {
            x_offset: self.x_offset + left,
            y_offset: self.y_offset + upper,
            width: right - left,
            height: lower - upper,
            ..*self
        })
    }

    /// Iterate over the rows of the window inside `data`
    ///
    /// Each item holds exactly [`logical_row_len`](Self::logical_row_len) samples.
    ///
    /// # Panics
    /// If the window does not [`fit`](Self::fits) in `data`, callers
    /// holding an [`Image`](crate::image::Image) never hit this.
    pub fn rows<'a>(&self, data: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        let logical = self.logical_row_len();
        let physical = self.physical_row_len().max(1);

        data[self.origin()..]
            .chunks(physical)
            .take(self.height)
            .map(move |row| &row[..logical])
    }

    /// Mutable counterpart of [`rows`](Self::rows)
    pub fn rows_mut<'a>(&self, data: &'a mut [u8]) -> impl Iterator<Item = &'a mut [u8]> + 'a {
        let logical = self.logical_row_len();
        let physical = self.physical_row_len().max(1);

        data[self.origin()..]
            .chunks_mut(physical)
            .take(self.height)
            .map(move |row| &mut row[..logical])
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageErrors, ImageView, CHANNELS};

    #[test]
    fn packed_view_covers_buffer() {
        let view = ImageView::packed(5, 4);
        assert!(view.is_packed());
        assert_eq!(view.origin(), 0);
        assert!(view.fits(5 * 4 * CHANNELS));
        assert!(!view.fits(5 * 4 * CHANNELS - 1));
    }

    #[test]
    fn crop_moves_offsets_and_keeps_stride() {
        let view = ImageView::packed(10, 8);
        let cropped = view.crop(2, 3, 7, 8).unwrap();

        assert_eq!(cropped.width(), 5);
        assert_eq!(cropped.height(), 5);
        assert_eq!(cropped.row_stride(), 10);
        assert_eq!(cropped.x_offset(), 2);
        assert_eq!(cropped.y_offset(), 3);
        assert_eq!(cropped.origin(), (3 * 10 + 2) * CHANNELS);
        assert!(cropped.fits(10 * 8 * CHANNELS));
    }

    #[test]
    fn repeated_crops_accumulate() {
        let view = ImageView::packed(10, 10);
        let once = view.crop(1, 2, 9, 10).unwrap();
        let twice = once.crop(3, 1, 5, 4).unwrap();

        assert_eq!(twice.x_offset(), 4);
        assert_eq!(twice.y_offset(), 3);
        assert_eq!((twice.width(), twice.height()), (2, 3));
    }

    #[test]
    fn crop_rejections_name_the_bound() {
        let view = ImageView::packed(4, 3);
        let message = |r: Result<ImageView, ImageErrors>| r.unwrap_err().to_string();

        assert_eq!(
            message(view.crop(-1, 0, 2, 2)),
            "non-negative left offset expected; got -1"
        );
        assert_eq!(
            message(view.crop(0, -2, 2, 2)),
            "non-negative upper offset expected; got -2"
        );
        assert_eq!(
            message(view.crop(0, 0, 5, 2)),
            "right coordinate (5) extends beyond image width (4)"
        );
        assert_eq!(
            message(view.crop(0, 0, 2, 4)),
            "lower coordinate (4) extends beyond image height (3)"
        );
        assert_eq!(
            message(view.crop(2, 0, 2, 2)),
            "right coordinate (2) does not exceed left coordinate (2)"
        );
        assert_eq!(
            message(view.crop(0, 2, 2, 1)),
            "lower coordinate (1) does not exceed upper coordinate (2)"
        );
    }

    #[test]
    fn rows_respect_stride() {
        // 3x2 buffer, pixel value = index
        let data: Vec<u8> = (0..18).collect();
        let view = ImageView::packed(3, 2).crop(1, 0, 3, 2).unwrap();
        let rows: Vec<&[u8]> = view.rows(&data).collect();

        assert_eq!(rows, vec![&[3, 4, 5, 6, 7, 8][..], &[12, 13, 14, 15, 16, 17][..]]);
    }
}
