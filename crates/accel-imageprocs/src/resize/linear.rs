/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Separable linear (triangle) resampling
//!
//! Each axis gets a table of source indices and weights, `taps` entries
//! per output sample. Rows are first resampled horizontally into an `f32`
//! scratch buffer, which is then resampled vertically into the destination.
//!
//! Indices past the edges are clamped, so border pixels are replicated.
use accel_image::errors::ImageErrors;

use crate::resize::plan::{AxisPlan, STATUS_DIV_BY_ZERO, STATUS_SIZE_ERR};

#[inline(always)]
fn triangle(x: f64) -> f64 {
    let x = x.abs();

    if x < 1.0 {
        1.0 - x
    } else {
        0.0
    }
}

const fn size_error(stage: &'static str) -> ImageErrors {
    ImageErrors::System {
        stage,
        status: STATUS_SIZE_ERR
    }
}

/// Fill the index and weight tables of one axis
///
/// Both tables must hold exactly `plan.entries()` elements.
pub(crate) fn init_axis(
    plan: &AxisPlan, indices: &mut [usize], weights: &mut [f32]
) -> Result<(), ImageErrors> {
    let stage = "filter init";

    if indices.len() != plan.entries() || weights.len() != plan.entries() {
        return Err(size_error(stage));
    }
    #[allow(clippy::cast_precision_loss)]
    let scale = plan.in_size as f64 / plan.out_size as f64;
    let support = plan.filter_scale;

    #[allow(clippy::cast_possible_wrap)]
    let last = plan.in_size as i64 - 1;

    for (out_pos, (idx_row, weight_row)) in indices
        .chunks_exact_mut(plan.taps)
        .zip(weights.chunks_exact_mut(plan.taps))
        .enumerate()
    {
        // pixel centers sit at half integers in both spaces
        #[allow(clippy::cast_precision_loss)]
        let center = (out_pos as f64 + 0.5) * scale;

        #[allow(clippy::cast_possible_truncation)]
        let first = (center - support - 0.5).ceil() as i64;

        let mut total = 0.0;

        for (tap, (idx, weight)) in idx_row.iter_mut().zip(weight_row.iter_mut()).enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            let src = first + tap as i64;
            #[allow(clippy::cast_precision_loss)]
            let w = triangle((src as f64 + 0.5 - center) / support);

            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            {
                *idx = src.clamp(0, last) as usize;
            }
            #[allow(clippy::cast_possible_truncation)]
            {
                *weight = w as f32;
            }
            total += w;
        }
        if total <= 0.0 {
            return Err(ImageErrors::System {
                stage,
                status: STATUS_DIV_BY_ZERO
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        let total = total as f32;

        weight_row.iter_mut().for_each(|w| *w /= total);
    }
    Ok(())
}

/// Resample every row horizontally into `out`
///
/// `out` receives `plan.out_size * channels` samples per source row.
pub(crate) fn horizontal_pass<'a>(
    rows: impl Iterator<Item = &'a [u8]>, plan: &AxisPlan, indices: &[usize], weights: &[f32],
    channels: usize, out: &mut [f32]
) -> Result<(), ImageErrors> {
    let out_row_len = plan.out_size * channels;

    if out_row_len == 0 || out.len() % out_row_len != 0 {
        return Err(size_error("transform"));
    }
    let mut rows_done = 0;

    for (row, out_row) in rows.zip(out.chunks_exact_mut(out_row_len)) {
        if row.len() != plan.in_size * channels {
            return Err(size_error("transform"));
        }
        for ((idx, wts), out_px) in indices
            .chunks_exact(plan.taps)
            .zip(weights.chunks_exact(plan.taps))
            .zip(out_row.chunks_exact_mut(channels))
        {
            out_px.fill(0.0);

            for (&src, &w) in idx.iter().zip(wts) {
                let px = &row[src * channels..(src + 1) * channels];

                for (acc, &sample) in out_px.iter_mut().zip(px) {
                    *acc += w * f32::from(sample);
                }
            }
        }
        rows_done += 1;
    }
    if rows_done * out_row_len != out.len() {
        return Err(size_error("transform"));
    }
    Ok(())
}

/// Resample the horizontal pass output vertically into `out`
///
/// `accumulator` holds one row of `row_len` samples.
pub(crate) fn vertical_pass(
    scratch: &[f32], row_len: usize, plan: &AxisPlan, indices: &[usize], weights: &[f32],
    accumulator: &mut [f32], out: &mut [u8]
) -> Result<(), ImageErrors> {
    if accumulator.len() != row_len
        || scratch.len() != row_len * plan.in_size
        || out.len() != row_len * plan.out_size
    {
        return Err(size_error("transform"));
    }

    for ((idx, wts), out_row) in indices
        .chunks_exact(plan.taps)
        .zip(weights.chunks_exact(plan.taps))
        .zip(out.chunks_exact_mut(row_len))
    {
        accumulator.fill(0.0);

        for (&src, &w) in idx.iter().zip(wts) {
            let src_row = &scratch[src * row_len..(src + 1) * row_len];

            for (acc, &sample) in accumulator.iter_mut().zip(src_row) {
                *acc += w * sample;
            }
        }
        for (dst, &acc) in out_row.iter_mut().zip(accumulator.iter()) {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            {
                *dst = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(())
}
