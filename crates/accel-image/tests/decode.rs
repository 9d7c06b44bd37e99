/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use accel_image::codecs::jpeg::{JpegDecoder, JpegSource};
use accel_image::errors::ImageErrors;
use accel_image::image::Image;
use accel_image::traits::DecoderTrait;
use jpeg_encoder::{ColorType, Encoder};
use nanorand::Rng;

fn encode(pixels: &[u8], width: u16, height: u16, color: ColorType) -> Vec<u8> {
    let mut out = Vec::new();
    Encoder::new(&mut out, 90)
        .encode(pixels, width, height, color)
        .unwrap();
    out
}

fn noisy_jpeg(width: u16, height: u16) -> Vec<u8> {
    let mut pixels = vec![0_u8; usize::from(width) * usize::from(height) * 3];
    nanorand::WyRand::new_seed(0x5eed).fill(&mut pixels);
    encode(&pixels, width, height, ColorType::Rgb)
}

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("accel-image-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn decodes_rgb_to_packed_view() {
    let image = Image::from_memory(&noisy_jpeg(37, 21)).unwrap();

    assert_eq!(image.dimensions(), (37, 21));
    assert_eq!(image.channels(), 3);
    assert!(image.view().is_packed());
    assert_eq!(image.buffer().len(), 37 * 21 * 3);
}

#[test]
fn flat_color_survives_round_trip() {
    let pixels: Vec<u8> = [200_u8, 40, 90].repeat(16 * 16);
    let image = Image::from_memory(&encode(&pixels, 16, 16, ColorType::Rgb)).unwrap();

    for pixel in image.buffer().chunks_exact(3) {
        assert!(pixel[0].abs_diff(200) <= 4, "{pixel:?}");
        assert!(pixel[1].abs_diff(40) <= 4, "{pixel:?}");
        assert!(pixel[2].abs_diff(90) <= 4, "{pixel:?}");
    }
}

#[test]
fn grayscale_source_becomes_rgb() {
    let luma: Vec<u8> = (0..24 * 8).map(|x| (x * 5 % 256) as u8).collect();
    let image = Image::from_memory(&encode(&luma, 24, 8, ColorType::Luma)).unwrap();

    assert_eq!(image.channels(), 3);
    assert_eq!(image.buffer().len(), 24 * 8 * 3);
    for pixel in image.buffer().chunks_exact(3) {
        assert!(pixel[0].abs_diff(pixel[1]) <= 1 && pixel[1].abs_diff(pixel[2]) <= 1);
    }
}

#[test]
fn path_and_memory_decode_identically() {
    let data = noisy_jpeg(50, 33);
    let path = temp_file("identical.jpg", &data);

    let from_path = Image::open(&path).unwrap();
    let from_memory = Image::from_memory(&data).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(from_path.dimensions(), from_memory.dimensions());
    assert_eq!(from_path.buffer(), from_memory.buffer());
}

#[test]
fn garbage_names_in_memory_source() {
    let err = Image::from_memory(b"definitely not a jpeg").unwrap_err();

    assert!(matches!(err, ImageErrors::Io(_)));
    let message = err.to_string();
    assert!(message.starts_with("JPEG decoding failed:"), "{message}");
    assert!(message.ends_with("(in-memory buffer)"), "{message}");
}

#[test]
fn truncated_file_names_path() {
    let data = noisy_jpeg(40, 40);
    let path = temp_file("truncated.jpg", &data[..data.len() / 2]);

    let err = Image::open(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, ImageErrors::Io(_)));
    let message = err.to_string();
    assert!(message.starts_with("JPEG decoding failed:"), "{message}");
    assert!(message.contains(&path.display().to_string()), "{message}");
}

#[test]
fn truncated_headers_are_refused() {
    let data = noisy_jpeg(40, 40);
    let err = Image::from_memory(&data[..100]).unwrap_err();

    assert!(matches!(err, ImageErrors::Io(_)));
    assert!(err.to_string().ends_with("(in-memory buffer)"));
}

#[test]
fn truncated_scan_data_is_refused() {
    let data = noisy_jpeg(128, 128);
    assert!(Image::from_memory(&data).is_ok());

    for percent in [30, 50, 70, 90, 99] {
        let cut = data.len() * percent / 100;
        let err = Image::from_memory(&data[..cut]).unwrap_err();

        assert!(matches!(err, ImageErrors::Io(_)), "cut at {percent}%: {err:?}");
        let message = err.to_string();
        assert!(message.starts_with("JPEG decoding failed:"), "{message}");
        assert!(message.ends_with("(in-memory buffer)"), "{message}");
    }
}

#[test]
fn missing_end_marker_is_refused() {
    let data = noisy_jpeg(64, 64);
    assert!(data.ends_with(&[0xFF, 0xD9]));

    let err = Image::from_memory(&data[..data.len() - 2]).unwrap_err();

    assert!(matches!(err, ImageErrors::Io(_)));
    assert_eq!(
        err.to_string(),
        "JPEG decoding failed: premature end of data (in-memory buffer)"
    );
}

#[test]
fn bytes_after_end_marker_are_ignored() {
    let mut data = noisy_jpeg(20, 20);
    let expected = Image::from_memory(&data).unwrap();

    data.extend_from_slice(&[0, 0, 0, 0]);
    let image = Image::from_memory(&data).unwrap();

    assert_eq!(image.buffer(), expected.buffer());
}

#[test]
fn missing_file_fails_to_open() {
    let err = Image::open("/definitely/not/here.jpg").unwrap_err();
    assert!(err
        .to_string()
        .starts_with("failed to open file /definitely/not/here.jpg"));
}

#[test]
fn failed_decode_keeps_previous_image() {
    let mut image = Image::from_memory(&noisy_jpeg(12, 12)).unwrap();
    let before = image.to_rgb();

    let data = noisy_jpeg(30, 30);
    if let Ok(fresh) = Image::from_memory(&data[..64]) {
        image = fresh;
    }

    assert_eq!(image.dimensions(), (12, 12));
    assert_eq!(image.to_rgb(), before);
}

#[test]
fn decoder_trait_reports_geometry() {
    let data = noisy_jpeg(9, 7);
    let mut decoder = JpegDecoder::new(JpegSource::Memory(&data));

    assert_eq!(decoder.name(), "Jpeg decoder");
    let result = decoder.decode().unwrap();

    assert_eq!(result.dimensions(), (9, 7));
    assert_eq!(result.channels(), 3);
    assert_eq!(result.pixels().len(), 9 * 7 * 3);
}
