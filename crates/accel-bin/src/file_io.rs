/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::utils::{checked_product, try_vec};
use accel_imageprocs::deinterleave::{copy_to, Destination};
use log::info;

/// Write the planes of `image` to `writer`, as bytes or little endian floats
pub fn write_planes<W: Write>(image: &Image, float: bool, writer: &mut W) -> Result<(), ImageErrors> {
    let samples = checked_product(
        &[image.width(), image.height(), image.channels()],
        "output planes"
    )?;

    if float {
        let mut planes = try_vec::<f32>(samples, "output planes")?;
        copy_to(image, Destination::F32(&mut planes))?;

        for value in planes {
            writer.write_all(&value.to_le_bytes())?;
        }
    } else {
        let mut planes = try_vec::<u8>(samples, "output planes")?;
        copy_to(image, Destination::U8(&mut planes))?;

        writer.write_all(&planes)?;
    }
    Ok(())
}

/// Dump the planes of `image` into a new file at `path`
pub fn write_planes_to_file(image: &Image, float: bool, path: &Path) -> Result<(), ImageErrors> {
    info!(
        "Writing {} planes of {}x{} to {path:?}",
        image.channels(),
        image.width(),
        image.height()
    );
    let mut writer = BufWriter::new(File::create(path)?);

    write_planes(image, float, &mut writer)?;
    writer.flush()?;

    Ok(())
}
