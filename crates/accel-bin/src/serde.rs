/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use accel_image::image::Image;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct ImageInfo<'a> {
    file:  OsString,
    image: &'a Image
}

impl<'a> ImageInfo<'a> {
    pub fn new(file: OsString, image: &'a Image) -> ImageInfo<'a> {
        ImageInfo { file, image }
    }
}

impl Serialize for ImageInfo<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageInfo", 4)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.image.width())?;
        state.serialize_field("height", &self.image.height())?;
        state.serialize_field("channels", &self.image.channels())?;

        state.end()
    }
}
