/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Size queries for a resize
//!
//! Everything a resize allocates is sized here, from the old and new
//! dimensions alone, before the first allocation happens.
use accel_image::errors::ImageErrors;
use accel_image::utils::checked_product;

/// Status reported when a dimension is zero
pub const STATUS_SIZE_ERR: i32 = -6;
/// Status reported when a kernel row has no weight to normalize by
pub const STATUS_DIV_BY_ZERO: i32 = -10;

/// How one axis is resampled
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisPlan {
    pub(crate) in_size:      usize,
    pub(crate) out_size:     usize,
    /// Widening applied to the triangle kernel, 1.0 is plain linear
    pub(crate) filter_scale: f64,
    /// Taps per output sample
    pub(crate) taps:         usize,
    entries:                 usize
}

impl AxisPlan {
    fn new(in_size: usize, out_size: usize, antialias: bool) -> Result<AxisPlan, ImageErrors> {
        if in_size == 0 || out_size == 0 {
            return Err(ImageErrors::System {
                stage:  "size query",
                status: STATUS_SIZE_ERR
            });
        }
        #[allow(clippy::cast_precision_loss)]
        let scale = in_size as f64 / out_size as f64;

        // prefilter only matters when shrinking
        let filter_scale = if antialias { scale.max(1.0) } else { 1.0 };

        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let radius = filter_scale.ceil() as usize;

        let taps = radius
            .checked_mul(2)
            .and_then(|t| t.checked_add(1))
            .ok_or(ImageErrors::Memory("size query"))?;
        let entries = checked_product(&[out_size, taps], "size query")?;

        Ok(AxisPlan {
            in_size,
            out_size,
            filter_scale,
            taps,
            entries
        })
    }

    /// Number of (index, weight) pairs this axis needs
    pub const fn entries(&self) -> usize {
        self.entries
    }

    pub const fn taps(&self) -> usize {
        self.taps
    }

    pub const fn filter_scale(&self) -> f64 {
        self.filter_scale
    }
}

/// Element counts of the three scratch regions a resize needs
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ScratchSizes {
    /// Source tap indices for both axes, `usize` entries
    pub specification:  usize,
    /// Kernel weights for both axes, `f32` entries
    pub initialization: usize,
    /// Horizontally resampled rows plus one accumulator row, `f32` entries
    pub working:        usize
}

impl ScratchSizes {
    /// Total bytes across all three regions, saturating
    pub const fn bytes(&self) -> usize {
        let tables = self.specification.saturating_mul(std::mem::size_of::<usize>());
        let floats = self
            .initialization
            .saturating_add(self.working)
            .saturating_mul(std::mem::size_of::<f32>());

        tables.saturating_add(floats)
    }
}

/// Geometry and scratch requirements of one resize
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizePlan {
    channels:   usize,
    horizontal: AxisPlan,
    vertical:   AxisPlan,
    sizes:      ScratchSizes,
    out_len:    usize
}

impl ResizePlan {
    /// Work out everything a resize from `in_*` to `out_*` will allocate
    ///
    /// # Errors
    /// - [`ImageErrors::System`] if a dimension is zero
    /// - [`ImageErrors::Memory`] if a size overflows, naming `size query` for the
    ///   tables and `buffer size query` for the working buffer
    pub fn query(
        in_width: usize, in_height: usize, out_width: usize, out_height: usize,
        channels: usize, antialias: bool
    ) -> Result<ResizePlan, ImageErrors> {
        let horizontal = AxisPlan::new(in_width, out_width, antialias)?;
        let vertical = AxisPlan::new(in_height, out_height, antialias)?;

        let stage = "size query";
        let out_row = checked_product(&[out_width, channels], stage)?;

        let entries = horizontal
            .entries()
            .checked_add(vertical.entries())
            .ok_or(ImageErrors::Memory(stage))?;
        let rows = in_height
            .checked_add(1)
            .ok_or(ImageErrors::Memory("buffer size query"))?;
        let working = checked_product(&[rows, out_row], "buffer size query")?;

        Ok(ResizePlan {
            channels,
            horizontal,
            vertical,
            sizes: ScratchSizes {
                specification:  entries,
                initialization: entries,
                working
            },
            out_len: checked_product(&[out_row, out_height], stage)?
        })
    }

    pub const fn horizontal(&self) -> &AxisPlan {
        &self.horizontal
    }

    pub const fn vertical(&self) -> &AxisPlan {
        &self.vertical
    }

    pub const fn channels(&self) -> usize {
        self.channels
    }

    pub const fn scratch_sizes(&self) -> ScratchSizes {
        self.sizes
    }

    /// Samples in the destination buffer
    pub const fn destination_len(&self) -> usize {
        self.out_len
    }

    /// Samples in one horizontally resampled row
    pub const fn intermediate_row_len(&self) -> usize {
        self.horizontal.out_size * self.channels
    }

    /// Samples of working scratch holding the horizontal pass output
    pub const fn intermediate_len(&self) -> usize {
        self.intermediate_row_len() * self.vertical.in_size
    }
}
