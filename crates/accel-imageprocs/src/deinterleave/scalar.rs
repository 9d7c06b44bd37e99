/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#[inline(always)]
pub(crate) fn de_interleave_3_channels_scalar(
    source: &[u8], (c1, c2, c3): (&mut [u8], &mut [u8], &mut [u8])
) {
    for (((val, a), b), c) in source
        .chunks_exact(3)
        .zip(c1.iter_mut())
        .zip(c2.iter_mut())
        .zip(c3.iter_mut())
    {
        *a = val[0];
        *b = val[1];
        *c = val[2];
    }
}

#[inline(always)]
pub(crate) fn widen_to_unit_float(source: &[u8], dest: &mut [f32]) {
    for (out, &sample) in dest.iter_mut().zip(source) {
        *out = f32::from(sample) / 255.0;
    }
}
