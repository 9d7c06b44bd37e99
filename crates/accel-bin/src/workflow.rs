/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use accel_image::codecs::jpeg::JpegSource;
use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::traits::OperationsTrait;
use accel_imageprocs::crop::Crop;
use accel_imageprocs::resize::Resize;
use accel_imageprocs::transpose::{Transpose, TransposeMethod};
use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_args::arg_parsers::{CropBox, ResizeDims};
use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::write_planes_to_file;
use crate::serde::ImageInfo;

/// Operations requested on the command line, in the order they run
fn collect_operations(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Vec<Box<dyn OperationsTrait>> {
    let mut operations: Vec<Box<dyn OperationsTrait>> = Vec::new();

    if let Some(b) = args.get_one::<CropBox>("crop") {
        debug!("Added crop to {b:?}");
        operations.push(Box::new(Crop::new(b.left, b.upper, b.right, b.lower)));
    }
    if let Some(d) = args.get_one::<ResizeDims>("resize") {
        debug!("Added resize to {}x{}", d.height, d.width);
        operations.push(Box::new(
            Resize::new(d.height, d.width).antialias(cmd_opts.antialias)
        ));
    }
    if args.get_flag("flip") {
        debug!("Added left to right flip");
        operations.push(Box::new(Transpose::new(TransposeMethod::FlipLeftRight)));
    }
    operations
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| ImageErrors::Validation("no input file".to_string()))?;

    let mut image = Image::decode_with_options(
        JpegSource::Path(in_file),
        get_decoder_options(cmd_opts)
    )?;
    info!("Decoded {in_file:?}, dimensions {:?}", image.dimensions());

    for operation in collect_operations(args, cmd_opts) {
        operation.execute(&mut image)?;
    }

    if cmd_opts.probe {
        let info = ImageInfo::new(in_file.clone().into_os_string(), &image);
        let json = serde_json::to_string_pretty(&info).map_err(std::io::Error::from)?;

        println!("{json}");
    }
    if let Some(out_file) = args.get_one::<PathBuf>("out") {
        write_planes_to_file(&image, cmd_opts.float, out_file)?;
    }
    Ok(())
}
