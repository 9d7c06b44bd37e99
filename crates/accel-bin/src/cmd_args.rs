/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{CropBox, ResizeDims};

pub mod arg_parsers;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("accel")
        .about("Decode a jpeg, crop, resize and flip it, then dump the color planes")
        .arg(Arg::new("in")
            .short('i')
            .help("Input jpeg to read data from")
            .long("input")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Write the planar samples of the final image to this file")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Refuse to decode images wider than this")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse to decode images taller than this")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Print the final image geometry as json"))
        .arg(Arg::new("crop")
            .long("crop")
            .help_heading("OPERATIONS")
            .help("Crop the image to left,upper,right,lower")
            .long_help("Crop the image to the box left,upper,right,lower.\nRight and lower are exclusive, e.g --crop 50,50,150,150 keeps a 100x100 region")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(CropBox)))
        .arg(Arg::new("resize")
            .long("resize")
            .help_heading("OPERATIONS")
            .help("Resize the image to HEIGHTxWIDTH")
            .long_help("Resize the image with linear interpolation, e.g --resize 224x224.\nRuns after --crop")
            .value_parser(value_parser!(ResizeDims)))
        .arg(Arg::new("no-antialias")
            .long("no-antialias")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Don't prefilter when resizing down")
            .requires("resize"))
        .arg(Arg::new("flip")
            .long("flip")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Mirror the image left to right, runs last"))
        .arg(Arg::new("float")
            .long("float")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Write normalized little endian f32 planes instead of bytes")
            .requires("out"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::create_cmd_args;
    use crate::cmd_args::arg_parsers::{CropBox, ResizeDims};

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn operations_are_parsed() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "accel", "-i", "chicago.jpg", "--crop", "50,50,150,150", "--resize", "200x100",
                "--flip"
            ])
            .unwrap();

        assert_eq!(
            matches.get_one::<PathBuf>("in"),
            Some(&PathBuf::from("chicago.jpg"))
        );
        assert_eq!(
            matches.get_one::<CropBox>("crop"),
            Some(&CropBox {
                left:  50,
                upper: 50,
                right: 150,
                lower: 150
            })
        );
        assert_eq!(
            matches.get_one::<ResizeDims>("resize"),
            Some(&ResizeDims {
                height: 200,
                width:  100
            })
        );
        assert!(matches.get_flag("flip"));
        assert!(!matches.get_flag("float"));
    }

    #[test]
    fn float_needs_output() {
        assert!(create_cmd_args()
            .try_get_matches_from(["accel", "-i", "a.jpg", "--float"])
            .is_err());
    }

    #[test]
    fn bad_crop_box_is_rejected() {
        assert!(create_cmd_args()
            .try_get_matches_from(["accel", "-i", "a.jpg", "--crop", "1,2,3"])
            .is_err());
    }
}
