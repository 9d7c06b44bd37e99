/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fallible allocation helpers
use crate::errors::ImageErrors;

/// Allocate a vector of `length` default elements without aborting
/// the process when the allocator refuses.
///
/// # Arguments
/// - length: Number of elements
/// - stage: The stage name reported if the allocation fails
///
/// # Errors
/// [`ImageErrors::Memory`] carrying `stage` if memory could not be reserved
pub fn try_vec<T: Default + Clone>(length: usize, stage: &'static str) -> Result<Vec<T>, ImageErrors> {
    let mut data = Vec::new();
    data.try_reserve_exact(length)
        .map_err(ImageErrors::out_of_memory(stage))?;
    data.resize(length, T::default());
    Ok(data)
}

/// Multiply all terms, reporting overflow as an allocation failure of `stage`
pub fn checked_product(terms: &[usize], stage: &'static str) -> Result<usize, ImageErrors> {
    terms
        .iter()
        .try_fold(1_usize, |acc, term| acc.checked_mul(*term))
        .ok_or(ImageErrors::Memory(stage))
}
