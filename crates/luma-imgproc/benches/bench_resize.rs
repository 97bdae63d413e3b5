use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use luma_image::{GrayImage, ImageSize};
use luma_imgproc::interpolation::InterpolationMode;
use luma_imgproc::resize::resize;

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let image_sizes = vec![(256, 224), (512, 448), (1024, 896)];

    for (width, height) in image_sizes {
        let image_size = ImageSize { width, height };
        let id = format!("{}x{}", width, height);
        let image = GrayImage::from_size_val(image_size, 128).unwrap();
        let new_size = ImageSize {
            width: width / 2,
            height: height / 2,
        };
        group.bench_with_input(BenchmarkId::new("nearest", &id), &image, |b, i| {
            b.iter(|| {
                let mut resized = GrayImage::from_size_val(new_size, 0).unwrap();
                resize(black_box(i), &mut resized, InterpolationMode::Nearest).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("bilinear", &id), &image, |b, i| {
            b.iter(|| {
                let mut resized = GrayImage::from_size_val(new_size, 0).unwrap();
                resize(black_box(i), &mut resized, InterpolationMode::Bilinear).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
