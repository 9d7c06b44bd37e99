/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by decoders and image operations
use std::time::Instant;

use log::Level::Trace;
use log::{log_enabled, trace};

use crate::codecs::DecodeResult;
use crate::errors::ImageErrors;
use crate::image::Image;

/// Encapsulates an image decoder.
///
/// A decoder hands back a [`DecodeResult`] which is only turned into
/// an [`Image`] once decoding fully succeeded.
pub trait DecoderTrait {
    /// Decode the source the decoder was created with
    ///
    /// # Errors
    ///  - Any open or decode failure, carrying the source identifier
    fn decode(&mut self) -> Result<DecodeResult, ImageErrors>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;
}

/// Anything that can be turned into an image
pub trait IntoImage {
    /// Consume `self` and produce an image
    ///
    /// # Errors
    /// Whatever producing the pixels failed with
    fn into_image(self) -> Result<Image, ImageErrors>;
}

/// This encapsulates an image operation.
///
/// Operations validate their arguments before touching the image and
/// either complete, or leave the image as it was.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation, implementors put the actual work here
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute the operation on `image`, timing it when trace logging is on
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    ///
    /// # Example
    /// ```
    /// use accel_image::image::Image;
    /// use accel_image::traits::OperationsTrait;
    /// use accel_image::errors::ImageErrors;
    ///
    /// struct Nothing;
    ///
    /// impl OperationsTrait for Nothing {
    ///     fn name(&self) -> &'static str {
    ///         "Nothing"
    ///     }
    ///     fn execute_impl(&self, _: &mut Image) -> Result<(), ImageErrors> {
    ///         Ok(())
    ///     }
    /// }
    /// let mut image = Image::fill(0, 10, 10).unwrap();
    /// Nothing.execute(&mut image).unwrap();
    /// ```
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        trace!("Running {}", self.name());

        let start = Instant::now();
        self.execute_impl(image)?;

        if log_enabled!(Trace) {
            trace!(
                "Finished running `{}` in {} ms",
                self.name(),
                start.elapsed().as_millis()
            );
        }
        Ok(())
    }
}
