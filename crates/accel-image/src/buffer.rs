/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Owned pixel storage
//!
//! A [`PixelBuffer`] is one contiguous allocation of interleaved 8-bit
//! samples. It knows nothing about geometry, that lives in
//! [`ImageView`](crate::view::ImageView), so that a crop never has to
//! touch the samples themselves.
use std::fmt::{Debug, Formatter};

use crate::errors::ImageErrors;
use crate::utils::try_vec;

/// Contiguous interleaved 8-bit samples, exclusively owned.
///
/// The allocation is released exactly once, when the buffer is dropped.
#[derive(Clone, Eq, PartialEq, Default)]
pub struct PixelBuffer {
    data: Vec<u8>
}

impl PixelBuffer {
    /// Allocate a zeroed buffer of `length` samples.
    ///
    /// # Errors
    /// [`ImageErrors::Memory`] naming `stage` if the allocator refuses
    pub fn try_new(length: usize, stage: &'static str) -> Result<PixelBuffer, ImageErrors> {
        Ok(PixelBuffer {
            data: try_vec(length, stage)?
        })
    }

    /// Take ownership of already decoded samples
    #[must_use]
    pub fn from_vec(data: Vec<u8>) -> PixelBuffer {
        PixelBuffer { data }
    }

    /// Number of samples in the allocation
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give the samples back, consuming the buffer
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // never dump megabytes of samples into logs
        f.debug_struct("PixelBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}
