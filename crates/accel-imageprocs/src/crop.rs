/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Crop an image
//!
//! # Algorithm
//!
//! A crop is a view into a sub-image, so nothing is copied, we only
//! move the view's offsets and shrink its width and height. The
//! storage, and its row stride, stay exactly as they were.
//!
//! See [`ImageView`](accel_image::view::ImageView) for the geometry.
use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::traits::OperationsTrait;

/// Crop out a part of an image
///
/// The box is `(left, upper, right, lower)` relative to the image as it
/// currently is, right and lower being exclusive.
///
/// # Example
/// Crop the center 100x100 part out of a 1000x1000 image
/// ```
/// use accel_image::image::Image;
/// use accel_image::errors::ImageErrors;
/// use accel_image::traits::OperationsTrait;
/// use accel_imageprocs::crop::Crop;
///
/// fn main() -> Result<(), ImageErrors> {
///     let mut image = Image::fill(255, 1000, 1000)?;
///
///     Crop::new(450, 450, 550, 550).execute(&mut image)?;
///     assert_eq!(image.dimensions(), (100, 100));
///
///     Ok(())
/// }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Crop {
    left:  i64,
    upper: i64,
    right: i64,
    lower: i64
}

impl Crop {
    /// Create a new crop operation
    ///
    /// # Arguments
    /// - left: First column kept
    /// - upper: First row kept
    /// - right: One past the last column kept
    /// - lower: One past the last row kept
    #[must_use]
    pub fn new(left: i64, upper: i64, right: i64, lower: i64) -> Crop {
        Crop {
            left,
            upper,
            right,
            lower
        }
    }
}

impl OperationsTrait for Crop {
    fn name(&self) -> &'static str {
        "Crop"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let view = image
            .view()
            .crop(self.left, self.upper, self.right, self.lower)?;

        image.set_view(view)
    }
}
