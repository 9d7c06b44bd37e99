/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:  usize,
    pub max_height: usize,
    pub antialias:  bool,
    pub float:      bool,
    pub probe:      bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:  16384,
            max_height: 16384,
            antialias:  true,
            float:      false,
            probe:      false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if options.get_flag("no-antialias") {
        info!("Turning off antialiasing for resizes");
        cmd_options.antialias = false;
    }
    cmd_options.float = options.get_flag("float");
    cmd_options.probe = options.get_flag("probe");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::parse_options;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["accel", "-i", "a.jpg"])
            .unwrap();
        let options = parse_options(&matches);

        assert!(options.antialias);
        assert!(!options.float);
        assert!(!options.probe);
        assert_eq!(options.max_width, 16384);
    }

    #[test]
    fn flags_reach_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "accel", "-i", "a.jpg", "-o", "a.raw", "--float", "--resize", "4x4",
                "--no-antialias", "--probe", "--max-width", "100"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert!(!options.antialias);
        assert!(options.float);
        assert!(options.probe);
        assert_eq!(options.max_width, 100);
        assert_eq!(options.max_height, 16384);
    }
}
