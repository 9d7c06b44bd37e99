/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Reflect an image left to right, in place.
//!
//! ```text
//!  old image     new image
//!  ┌─────────┐   ┌──────────┐
//!  │a b c d e│   │e d c b a │
//!  │f g h i j│   │j i h g f │
//!  └─────────┘   └──────────┘
//! ```
//!
//! Each letter is a whole pixel, the samples inside a pixel keep their order.
use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::traits::OperationsTrait;
use accel_image::view::ImageView;

/// Reflect the current view of an image around its vertical axis
///
/// Only the pixels inside the view move, anything outside it,
/// e.g. left behind by an earlier crop, is untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct Mirror;

impl Mirror {
    /// Create a new mirror filter
    #[must_use]
    pub fn new() -> Mirror {
        Mirror
    }
}

impl OperationsTrait for Mirror {
    fn name(&self) -> &'static str {
        "Mirror"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (view, buffer) = image.view_and_buffer_mut();
        mirror(buffer, &view);

        Ok(())
    }
}

/// Reverse the pixel order of every row inside `view`
///
/// # Arguments
/// - pixels: Storage the view addresses
/// - view: The window to mirror
pub fn mirror(pixels: &mut [u8], view: &ImageView) {
    let channels = view.channels();

    if channels == 0 {
        return;
    }
    for row in view.rows_mut(pixels) {
        // split into 2, the middle pixel of an odd row stays put
        let half = (row.len() / channels / 2) * channels;
        let (left, right) = row.split_at_mut(half);

        left.chunks_exact_mut(channels)
            .zip(right.rchunks_exact_mut(channels))
            .for_each(|(l, r)| l.swap_with_slice(r));
    }
}
