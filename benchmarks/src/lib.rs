/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use jpeg_encoder::{ColorType, Encoder, EncodingError};

/// Encode a `width x height` RGB jpeg with smooth gradients and some texture
///
/// # Errors
/// If the encoder refuses the dimensions
pub fn sample_jpeg(width: u16, height: u16) -> Result<Vec<u8>, EncodingError> {
    let mut pixels = Vec::with_capacity(usize::from(width) * usize::from(height) * 3);

    for y in 0..u32::from(height) {
        for x in 0..u32::from(width) {
            let texture = (x ^ y) & 31;
            pixels.extend_from_slice(&[
                ((x * 255 / u32::from(width)) + texture).min(255) as u8,
                ((y * 255 / u32::from(height)) + texture).min(255) as u8,
                (((x + y) / 4) & 255) as u8
            ]);
        }
    }
    let mut out = Vec::new();
    Encoder::new(&mut out, 90).encode(&pixels, width, height, ColorType::Rgb)?;

    Ok(out)
}
