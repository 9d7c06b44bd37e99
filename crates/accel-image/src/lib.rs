/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An RGB image container for fast loading and preprocessing
//!
//! The crate ties a jpeg decoder to a small, strided image model
//!
//! - [`PixelBuffer`](crate::buffer::PixelBuffer): one owned allocation of interleaved
//!   8-bit RGB samples
//! - [`ImageView`](crate::view::ImageView): the rectangle of that buffer the image currently
//!   is, cropping only moves this rectangle
//! - [`Image`](crate::image::Image): owns exactly one buffer and its view
//!
//! Pixel operations (crop, mirror, resize and plane extraction) live in
//! `accel-imageprocs` and implement [`OperationsTrait`](crate::traits::OperationsTrait).
//!
//! # Example
//! ```
//! use accel_image::image::Image;
//!
//! let mut image = Image::fill(128, 64, 48).unwrap();
//! let view = image.view().crop(8, 8, 40, 40).unwrap();
//! image.set_view(view).unwrap();
//!
//! assert_eq!(image.dimensions(), (32, 32));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::doc_markdown
)]

pub mod buffer;
pub mod codecs;
pub mod errors;
pub mod image;
pub mod traits;
pub mod utils;
pub mod view;
