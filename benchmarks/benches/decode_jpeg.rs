/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Benchmarks for jpeg decoding into an image

use std::time::Duration;

use accel_benches::sample_jpeg;
use accel_image::image::Image;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn decode_memory(c: &mut Criterion) {
    let data = sample_jpeg(1920, 1080).unwrap();
    let mut group = c.benchmark_group("jpeg: decode to RGB");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("accel-image", |b| {
        b.iter(|| black_box(Image::from_memory(data.as_slice()).unwrap()))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=decode_memory);

criterion_main!(benches);
