/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resize an image to new dimensions
//!
//! Resampling is separable linear interpolation with replicated borders.
//! With antialiasing on, the triangle kernel is widened by the shrink
//! factor on every axis that gets smaller, so downscales average all
//! source pixels they cover instead of sampling two of them.
//!
//! A resize always reads the current view (so a previous crop is honored)
//! and produces a brand new, row packed buffer. The image only changes
//! once that buffer is complete.
use accel_image::buffer::PixelBuffer;
use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::traits::OperationsTrait;
use accel_image::utils::try_vec;
use log::debug;

use crate::resize::plan::ResizePlan;

mod linear;
pub mod plan;

/// Resize an image
///
/// # Example
/// ```
/// use accel_image::image::Image;
/// use accel_image::errors::ImageErrors;
/// use accel_image::traits::OperationsTrait;
/// use accel_imageprocs::resize::Resize;
///
/// fn main() -> Result<(), ImageErrors> {
///     let mut image = Image::fill(10, 640, 480)?;
///
///     Resize::new(224, 224).execute(&mut image)?;
///     assert_eq!(image.dimensions(), (224, 224));
///
///     Ok(())
/// }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Resize {
    new_height: i64,
    new_width:  i64,
    antialias:  bool
}

impl Resize {
    /// Create a new resize operation with antialiasing on
    ///
    /// # Arguments
    /// - new_height: Height after resizing
    /// - new_width: Width after resizing
    #[must_use]
    pub fn new(new_height: i64, new_width: i64) -> Resize {
        Resize {
            new_height,
            new_width,
            antialias: true
        }
    }

    /// Turn the downscaling prefilter on or off
    #[must_use]
    pub fn antialias(mut self, yes: bool) -> Resize {
        self.antialias = yes;
        self
    }

    /// Validate the target size, returning `(height, width)`
    fn dimensions(&self) -> Result<(usize, usize), ImageErrors> {
        let height = usize::try_from(self.new_height)
            .ok()
            .filter(|h| *h > 0)
            .ok_or_else(|| {
                ImageErrors::Validation(format!(
                    "positive height expected; got {}",
                    self.new_height
                ))
            })?;
        let width = usize::try_from(self.new_width)
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| {
                ImageErrors::Validation(format!("positive width expected; got {}", self.new_width))
            })?;

        Ok((height, width))
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (new_height, new_width) = self.dimensions()?;
        let view = *image.view();

        let plan = ResizePlan::query(
            view.width(),
            view.height(),
            new_width,
            new_height,
            view.channels(),
            self.antialias
        )?;
        let sizes = plan.scratch_sizes();

        debug!(
            "Resizing {}x{} -> {new_width}x{new_height}, {} taps horizontally, {} vertically, {} bytes of scratch",
            view.width(),
            view.height(),
            plan.horizontal().taps(),
            plan.vertical().taps(),
            sizes.bytes()
        );

        let mut destination = PixelBuffer::try_new(plan.destination_len(), "destination")?;
        let mut specification = try_vec::<usize>(sizes.specification, "resize specification")?;
        let mut initialization = try_vec::<f32>(sizes.initialization, "filter initialization")?;
        let mut working = try_vec::<f32>(sizes.working, "working buffer")?;

        let split = plan.horizontal().entries();
        let (h_indices, v_indices) = specification.split_at_mut(split);
        let (h_weights, v_weights) = initialization.split_at_mut(split);

        linear::init_axis(plan.horizontal(), h_indices, h_weights)?;
        linear::init_axis(plan.vertical(), v_indices, v_weights)?;

        let (intermediate, accumulator) = working.split_at_mut(plan.intermediate_len());

        linear::horizontal_pass(
            image.rows(),
            plan.horizontal(),
            h_indices,
            h_weights,
            plan.channels(),
            intermediate
        )?;
        linear::vertical_pass(
            intermediate,
            plan.intermediate_row_len(),
            plan.vertical(),
            v_indices,
            v_weights,
            accumulator,
            destination.as_mut_slice()
        )?;

        image.replace_buffer(destination, new_width, new_height)
    }
}
