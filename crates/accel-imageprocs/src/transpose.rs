/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Flip and rotate requests, addressed by PIL method codes
//!
//! Only the left to right flip is carried out, every other method is
//! refused with its own error instead of being approximated.
use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::traits::OperationsTrait;

use crate::mirror::Mirror;

/// Transpose methods, numbered as `PIL.Image` numbers them
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransposeMethod {
    FlipLeftRight,
    FlipTopBottom,
    Rotate90,
    Rotate180,
    Rotate270,
    Transpose
}

impl TransposeMethod {
    /// Map a PIL method code to a method
    ///
    /// # Errors
    /// [`ImageErrors::Validation`] for codes PIL doesn't define
    pub fn from_code(code: i64) -> Result<TransposeMethod, ImageErrors> {
        match code {
            0 => Ok(TransposeMethod::FlipLeftRight),
            1 => Ok(TransposeMethod::FlipTopBottom),
            2 => Ok(TransposeMethod::Rotate90),
            3 => Ok(TransposeMethod::Rotate180),
            4 => Ok(TransposeMethod::Rotate270),
            5 => Ok(TransposeMethod::Transpose),
            _ => Err(ImageErrors::Validation(format!("unknown method ({code})")))
        }
    }

    /// The constant's name in `PIL.Image`
    #[must_use]
    pub const fn pil_name(self) -> &'static str {
        match self {
            TransposeMethod::FlipLeftRight => "FLIP_LEFT_RIGHT",
            TransposeMethod::FlipTopBottom => "FLIP_TOP_BOTTOM",
            TransposeMethod::Rotate90 => "ROTATE_90",
            TransposeMethod::Rotate180 => "ROTATE_180",
            TransposeMethod::Rotate270 => "ROTATE_270",
            TransposeMethod::Transpose => "TRANSPOSE"
        }
    }
}

/// Flip/rotate an image
#[derive(Copy, Clone, Debug)]
pub struct Transpose {
    method: TransposeMethod
}

impl Transpose {
    #[must_use]
    pub fn new(method: TransposeMethod) -> Transpose {
        Transpose { method }
    }

    /// Create the operation from a PIL method code
    ///
    /// # Errors
    /// [`ImageErrors::Validation`] for unknown codes
    pub fn from_code(code: i64) -> Result<Transpose, ImageErrors> {
        Ok(Transpose::new(TransposeMethod::from_code(code)?))
    }
}

impl OperationsTrait for Transpose {
    fn name(&self) -> &'static str {
        "Transpose"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match self.method {
            TransposeMethod::FlipLeftRight => Mirror::new().execute_impl(image),
            method => Err(ImageErrors::Validation(format!(
                "unsupported method: PIL.Image.{}",
                method.pil_name()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use accel_image::image::Image;
    use accel_image::traits::OperationsTrait;

    use crate::transpose::Transpose;

    #[test]
    fn flip_left_right_mirrors() {
        let mut image = Image::from_rgb((0..12).collect(), 2, 2).unwrap();
        Transpose::from_code(0).unwrap().execute(&mut image).unwrap();

        assert_eq!(
            image.to_rgb(),
            vec![3, 4, 5, 0, 1, 2, 9, 10, 11, 6, 7, 8]
        );
    }

    #[test]
    fn other_methods_are_refused_by_name() {
        let names = [
            "FLIP_TOP_BOTTOM",
            "ROTATE_90",
            "ROTATE_180",
            "ROTATE_270",
            "TRANSPOSE"
        ];
        for (code, name) in (1..=5).zip(names) {
            let mut image = Image::fill(3, 4, 4).unwrap();
            let err = Transpose::from_code(code)
                .unwrap()
                .execute(&mut image)
                .unwrap_err();

            assert_eq!(err.to_string(), format!("unsupported method: PIL.Image.{name}"));
            assert_eq!(image.to_rgb(), vec![3; 48]);
        }
    }

    #[test]
    fn unknown_codes_are_refused() {
        assert_eq!(
            Transpose::from_code(6).unwrap_err().to_string(),
            "unknown method (6)"
        );
        assert_eq!(
            Transpose::from_code(-1).unwrap_err().to_string(),
            "unknown method (-1)"
        );
    }
}
