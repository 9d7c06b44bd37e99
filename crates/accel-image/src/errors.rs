/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image loading and processing
use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// All possible image errors that can occur.
///
/// Every failure is terminal for the call that produced it, the image
/// the call was operating on is left in its last good state.
pub enum ImageErrors {
    /// Bad geometry or an unsupported/unknown method.
    ///
    /// Raised before anything is allocated or mutated.
    Validation(String),
    /// Opening or decoding the source failed.
    ///
    /// The text carries the codec diagnostic and the source identifier.
    Io(String),
    /// An io error bubbled up from the standard library
    IoError(std::io::Error),
    /// An allocation failed, the payload names the stage that tried it
    Memory(&'static str),
    /// The destination's element representation is not supported
    Type(&'static str),
    /// The destination is smaller than the image, sizes are in bytes
    Size { found: usize, expected: usize },
    /// A backend stage reported a status we do not know how to map
    System { stage: &'static str, status: i32 }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(reason) => writeln!(f, "{reason}"),
            Self::Io(reason) => writeln!(f, "{reason}"),
            Self::IoError(err) => writeln!(f, "{err}"),
            Self::Memory(stage) => {
                writeln!(f, "Out of memory while allocating for {stage}")
            }
            Self::Type(reason) => writeln!(f, "{reason}"),
            Self::Size { found, expected } => {
                writeln!(
                    f,
                    "buffer size ({found}) is smaller than image size ({expected})"
                )
            }
            Self::System { stage, status } => {
                writeln!(f, "{stage} failed with status {status}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Debug already carries the human readable message, minus the newline
        let message = format!("{self:?}");
        f.write_str(message.trim_end())
    }
}

impl std::error::Error for ImageErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        ImageErrors::IoError(value)
    }
}

impl ImageErrors {
    /// Tag an allocation failure with the stage that attempted it.
    ///
    /// `TryReserveError` has no stage context so this can't be a `From` impl
    pub fn out_of_memory(stage: &'static str) -> impl FnOnce(TryReserveError) -> ImageErrors {
        move |_| ImageErrors::Memory(stage)
    }

    /// Return true if this error was raised by eager validation
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
