//! Rendering benchmarks

use asciigen::color_space::{strip_ansi_codes, AnsiColor};
use asciigen::config::VariantPreferences;
use asciigen::export::format_text;
use asciigen::render_engines::banner::render;
use asciigen::render_engines::fonts::FontLibrary;
use asciigen::state::{RenderRequest, TextFormat};
use asciigen::variants::build_variants;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, RgbImage};

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            let b = (((x + y) as f32 / (width + height) as f32) * 255.0) as u8;
            img.put_pixel(x, y, image::Rgb([r, g, b]));
        }
    }
    DynamicImage::ImageRgb8(img)
}

fn benchmark_banner_render(c: &mut Criterion) {
    let fonts = FontLibrary::bundled();

    let mut group = c.benchmark_group("Banner Rendering");

    for text in ["Hi", "Hello", "ASCII Art", "The quick brown fox"].iter() {
        group.bench_function(format!("len_{}", text.len()), |b| {
            b.iter(|| {
                render(
                    black_box(RenderRequest::new(*text, "standard", AnsiColor::Cyan)),
                    black_box(&fonts),
                )
            })
        });
    }

    group.finish();
}

fn benchmark_text_export(c: &mut Criterion) {
    let fonts = FontLibrary::bundled();
    let art = match render(
        RenderRequest::new("Export me", "standard", AnsiColor::Magenta),
        &fonts,
    ) {
        Ok(art) => art,
        Err(e) => panic!("bench setup failed: {}", e),
    };

    let mut group = c.benchmark_group("Text Export");

    for format in TextFormat::ALL.iter() {
        group.bench_function(format.extension(), |b| {
            b.iter(|| format_text(black_box(&art), black_box(*format)))
        });
    }

    group.bench_function("strip_ansi", |b| {
        b.iter(|| strip_ansi_codes(black_box(art.colored())))
    });

    group.finish();
}

fn benchmark_image_variants(c: &mut Criterion) {
    let image = create_test_image(640, 480);
    let prefs = VariantPreferences::default();

    let mut group = c.benchmark_group("Image Variants");
    group.sample_size(10);

    group.bench_function("build_all", |b| {
        b.iter(|| build_variants(black_box(&image), black_box(&prefs)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_banner_render,
    benchmark_text_export,
    benchmark_image_variants,
);

criterion_main!(benches);
