/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `accel-image`
//!
//! This implements the preprocessing steps usually run on a freshly decoded
//! image before it is handed to a model: crop, mirror, resize and export
//! to planar bytes or floats.
//!
//! Operations implement the `OperationsTrait` defined by accel-image,
//! plane export borrows the image immutably and lives in [`deinterleave`].
//!
//! # Example
//! - Resize to 256x256, take the center 224x224 and export as floats
//! ```
//! use accel_image::image::Image;
//! use accel_image::traits::OperationsTrait;
//! use accel_imageprocs::crop::Crop;
//! use accel_imageprocs::deinterleave::{copy_to, Destination};
//! use accel_imageprocs::resize::Resize;
//!
//! let mut image = Image::fill(233, 500, 375).unwrap();
//!
//! Resize::new(256, 256).execute(&mut image).unwrap();
//! Crop::new(16, 16, 240, 240).execute(&mut image).unwrap();
//!
//! let mut planes = vec![0.0_f32; 224 * 224 * 3];
//! copy_to(&image, Destination::F32(&mut planes)).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::inline_always,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod crop;
pub mod deinterleave;
pub mod mirror;
pub mod resize;
pub mod transpose;
