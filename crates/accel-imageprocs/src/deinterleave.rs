/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Export the current view as separate color planes
//!
//! The destination receives `channels` planes back to back, plane `k`
//! holding channel `k` of every pixel in row-major order:
//!
//! ```text
//!  interleaved          planar
//!  R G B R G B ...  ->  R R ... G G ... B B ...
//! ```
//!
//! Float destinations get the same layout with every sample divided by 255.
//!
//! Nothing here mutates the image, and every check runs before the first
//! write to the destination.
use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::utils::{checked_product, try_vec};
use accel_image::view::CHANNELS;
use log::trace;

use crate::deinterleave::scalar::{de_interleave_3_channels_scalar, widen_to_unit_float};

mod scalar;

/// A caller owned buffer to copy planes into
#[derive(Debug)]
pub enum Destination<'a> {
    /// One unsigned byte per sample
    U8(&'a mut [u8]),
    /// One float in `[0, 1]` per sample
    F32(&'a mut [f32]),
    /// Any other element representation, named by its format code
    Other(&'a str)
}

impl<'a> Destination<'a> {
    /// Interpret raw bytes according to a buffer format code
    ///
    /// `"B"` is unsigned bytes and `"f"` native 32 bit floats, anything
    /// else becomes [`Destination::Other`] and is refused on copy.
    ///
    /// Trailing bytes that don't make up a whole float are left out of a
    /// float destination, so they count against its size like any other
    /// short buffer.
    ///
    /// # Errors
    /// [`ImageErrors::Type`] if a float buffer is not 4 byte aligned
    pub fn from_raw(bytes: &'a mut [u8], format: &'a str) -> Result<Destination<'a>, ImageErrors> {
        match format {
            "B" => Ok(Destination::U8(bytes)),
            "f" => {
                let whole = bytes.len() - bytes.len() % std::mem::size_of::<f32>();

                bytemuck::try_cast_slice_mut(&mut bytes[..whole])
                    .map(Destination::F32)
                    .map_err(|_| ImageErrors::Type("float buffer must be 4 byte aligned"))
            }
            other => Ok(Destination::Other(other))
        }
    }
}

/// Copy the current view of `image` into `destination` as planes
///
/// # Errors
/// - [`ImageErrors::Type`] for an unsupported element kind
/// - [`ImageErrors::Size`] if the destination is smaller than the image, in bytes
/// - [`ImageErrors::Memory`] if the float conversion scratch can't be allocated
///
/// # Example
/// ```
/// use accel_image::image::Image;
/// use accel_imageprocs::deinterleave::{copy_to, Destination};
///
/// let image = Image::from_rgb(vec![1, 2, 3, 4, 5, 6], 2, 1).unwrap();
/// let mut planes = [0_u8; 6];
///
/// copy_to(&image, Destination::U8(&mut planes)).unwrap();
/// assert_eq!(planes, [1, 4, 2, 5, 3, 6]);
/// ```
pub fn copy_to(image: &Image, destination: Destination<'_>) -> Result<(), ImageErrors> {
    let samples = image.view().sample_count();

    match destination {
        Destination::U8(out) => {
            trace!("Copying {samples} samples to byte planes");
            deinterleave_u8(image, out)?;
        }
        Destination::F32(out) => {
            let element_size = std::mem::size_of::<f32>();
            let expected = checked_product(&[samples, element_size], "buffer size query")?;

            check_size(out.len() * element_size, expected)?;
            trace!("Copying {samples} samples to float planes");

            let mut planes = try_vec::<u8>(samples, "float conversion")?;
            deinterleave_u8(image, &mut planes)?;
            widen_to_unit_float(&planes, &mut out[..samples]);
        }
        Destination::Other(kind) => {
            trace!("Refusing destination of kind {kind:?}");

            return Err(ImageErrors::Type(
                "buffer of unsigned byte or float elements expected"
            ));
        }
    }
    Ok(())
}

const fn check_size(found: usize, expected: usize) -> Result<(), ImageErrors> {
    if found < expected {
        return Err(ImageErrors::Size { found, expected });
    }
    Ok(())
}

/// Split the view of `image` into the leading `width*height*channels`
/// bytes of `out`
///
/// # Errors
/// [`ImageErrors::Size`] if `out` is too short, nothing is written then
pub fn deinterleave_u8(image: &Image, out: &mut [u8]) -> Result<(), ImageErrors> {
    let view = image.view();
    let plane = view.width() * view.height();
    let samples = checked_product(&[plane, CHANNELS], "buffer size query")?;

    check_size(out.len(), samples)?;

    if plane == 0 {
        return Ok(());
    }
    let (c1, rest) = out[..samples].split_at_mut(plane);
    let (c2, c3) = rest.split_at_mut(plane);

    for (((row, r), g), b) in image
        .rows()
        .zip(c1.chunks_exact_mut(view.width()))
        .zip(c2.chunks_exact_mut(view.width()))
        .zip(c3.chunks_exact_mut(view.width()))
    {
        de_interleave_3_channels_scalar(row, (r, g, b));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use accel_image::errors::ImageErrors;
    use accel_image::image::Image;
    use accel_image::traits::OperationsTrait;
    use nanorand::Rng;

    use crate::crop::Crop;
    use crate::deinterleave::{copy_to, deinterleave_u8, Destination};

    fn noise(width: usize, height: usize) -> Image {
        let mut pixels = vec![0_u8; width * height * 3];
        nanorand::WyRand::new_seed(42).fill(&mut pixels);
        Image::from_rgb(pixels, width, height).unwrap()
    }

    #[test]
    fn planes_reinterleave_to_view() {
        let mut image = noise(19, 11);
        Crop::new(2, 3, 17, 9).execute(&mut image).unwrap();

        let (w, h) = image.dimensions();
        let plane = w * h;
        let mut planes = vec![0_u8; plane * 3];
        copy_to(&image, Destination::U8(&mut planes)).unwrap();

        let rebuilt: Vec<u8> = (0..plane)
            .flat_map(|i| [planes[i], planes[plane + i], planes[2 * plane + i]])
            .collect();
        assert_eq!(rebuilt, image.to_rgb());
    }

    #[test]
    fn floats_are_normalized() {
        let image = noise(13, 7);
        let mut bytes = vec![0_u8; 13 * 7 * 3];
        let mut floats = vec![-1.0_f32; 13 * 7 * 3];

        copy_to(&image, Destination::U8(&mut bytes)).unwrap();
        copy_to(&image, Destination::F32(&mut floats)).unwrap();

        for (&b, &f) in bytes.iter().zip(&floats) {
            assert!((0.0..=1.0).contains(&f));
            assert_eq!(f, f32::from(b) / 255.0);
        }
    }

    #[test]
    fn larger_destination_keeps_tail() {
        let image = Image::fill(9, 2, 2).unwrap();
        let mut planes = vec![0xAA_u8; 20];

        copy_to(&image, Destination::U8(&mut planes)).unwrap();

        assert!(planes[..12].iter().all(|&s| s == 9));
        assert!(planes[12..].iter().all(|&s| s == 0xAA));
    }

    #[test]
    fn undersized_destination_is_refused() {
        let image = noise(4, 4);

        let mut bytes = vec![7_u8; 47];
        let err = copy_to(&image, Destination::U8(&mut bytes)).unwrap_err();
        assert_eq!(err.to_string(), "buffer size (47) is smaller than image size (48)");
        assert!(bytes.iter().all(|&s| s == 7));

        let mut floats = vec![0.5_f32; 47];
        let err = copy_to(&image, Destination::F32(&mut floats)).unwrap_err();
        assert_eq!(err.to_string(), "buffer size (188) is smaller than image size (192)");
        assert!(floats.iter().all(|&s| s == 0.5));
    }

    #[test]
    fn other_kinds_are_refused() {
        let image = noise(2, 2);
        let mut raw = vec![0_u8; 64];

        let destination = Destination::from_raw(&mut raw, "h").unwrap();
        let err = copy_to(&image, destination).unwrap_err();

        assert!(matches!(err, ImageErrors::Type(_)));
        assert_eq!(
            err.to_string(),
            "buffer of unsigned byte or float elements expected"
        );
    }

    #[test]
    fn raw_float_buffers_are_accepted() {
        let image = Image::fill(255, 2, 2).unwrap();
        let mut storage = vec![0.0_f32; 12];

        let destination =
            Destination::from_raw(bytemuck::cast_slice_mut(&mut storage), "f").unwrap();
        copy_to(&image, destination).unwrap();

        assert!(storage.iter().all(|&f| f == 1.0));
    }

    #[test]
    fn partial_float_is_a_size_error() {
        let image = noise(4, 4);
        let mut storage = vec![0.5_f32; 12];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);

        let destination = Destination::from_raw(&mut bytes[..47], "f").unwrap();
        let err = copy_to(&image, destination).unwrap_err();

        assert!(matches!(err, ImageErrors::Size { .. }), "{err:?}");
        assert!(storage.iter().all(|&f| f == 0.5));
    }

    #[test]
    fn partial_float_tail_is_untouched() {
        let image = Image::fill(255, 2, 2).unwrap();
        let mut storage = vec![0.5_f32; 13];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);

        let destination = Destination::from_raw(&mut bytes[..51], "f").unwrap();
        copy_to(&image, destination).unwrap();

        assert!(storage[..12].iter().all(|&f| f == 1.0));
        assert_eq!(storage[12], 0.5);
    }

    #[test]
    fn misaligned_floats_are_refused() {
        let mut storage = vec![0.0_f32; 4];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);

        let err = Destination::from_raw(&mut bytes[1..13], "f").unwrap_err();
        assert!(matches!(err, ImageErrors::Type(_)), "{err:?}");
    }

    #[test]
    fn short_plane_slice_is_refused() {
        let image = noise(5, 3);
        let mut out = vec![3_u8; 44];

        let err = deinterleave_u8(&image, &mut out).unwrap_err();

        assert_eq!(err.to_string(), "buffer size (44) is smaller than image size (45)");
        assert!(out.iter().all(|&s| s == 3));
    }
}
