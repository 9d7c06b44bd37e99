/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `--crop left,upper,right,lower`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CropBox {
    pub left:  i64,
    pub upper: i64,
    pub right: i64,
    pub lower: i64
}

impl std::str::FromStr for CropBox {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Invalid crop box {s}: {e}"))?;

        match values[..] {
            [left, upper, right, lower] => Ok(CropBox {
                left,
                upper,
                right,
                lower
            }),
            _ => Err(format!(
                "Invalid crop box {s}: expected 4 values, got {}",
                values.len()
            ))
        }
    }
}

/// `--resize HEIGHTxWIDTH`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ResizeDims {
    pub height: i64,
    pub width:  i64
}

impl std::str::FromStr for ResizeDims {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (height, width) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Invalid size {s}: expected HEIGHTxWIDTH"))?;

        let parse = |v: &str| {
            v.trim()
                .parse::<i64>()
                .map_err(|e| format!("Invalid size {s}: {e}"))
        };
        Ok(ResizeDims {
            height: parse(height)?,
            width:  parse(width)?
        })
    }
}
