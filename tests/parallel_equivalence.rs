#![cfg(feature = "rayon")]

use maskmatch::{Mask, MatchConfig, MatchMode, MatchReport, Matcher, Pixel, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FG: Pixel = Pixel::rgb(200, 40, 60);

/// Noisy background with `count` solid 4x4 blocks at random positions.
fn make_scene(rng: &mut StdRng, width: usize, height: usize, count: usize) -> RgbaImage {
    let data = (0..width * height)
        .map(|_| {
            Pixel::rgb(
                20 + rng.random_range(0..12),
                60 + rng.random_range(0..12),
                110 + rng.random_range(0..12),
            )
        })
        .collect();
    let mut img = RgbaImage::new(data, width, height).unwrap();
    for _ in 0..count {
        let row = rng.random_range(0..height - 4);
        let col = rng.random_range(0..width - 4);
        for r in row..row + 4 {
            for c in col..col + 4 {
                img.set_pixel(r, c, FG);
            }
        }
    }
    img
}

/// 8x8 mask with a 4x4 pattern block in the middle.
fn block_mask() -> Mask {
    let mut pixels = vec![Pixel::MARKER; 64];
    for r in 2..6 {
        for c in 2..6 {
            pixels[r * 8 + c] = Pixel::rgb(255, 255, 255);
        }
    }
    Mask::new(pixels, 8, 8).unwrap()
}

fn run(image: &RgbaImage, mask: &Mask, cfg: MatchConfig) -> MatchReport {
    Matcher::new(mask.clone())
        .with_config(cfg)
        .match_image(image.view())
        .unwrap()
}

fn assert_invariants(report: &MatchReport, image: &RgbaImage) {
    for (i, a) in report.matches.iter().enumerate() {
        assert!(a.fits_within(image.width(), image.height()), "{a}");
        for b in &report.matches[i + 1..] {
            assert!(!a.intersects(b), "{a} overlaps {b}");
        }
    }
    let mut sorted = report.matches.clone();
    sorted.sort();
    assert_eq!(sorted, report.matches);
}

#[test]
fn parallel_scan_matches_sequential_scan() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mask = block_mask();
    for _ in 0..6 {
        let image = make_scene(&mut rng, 96, 72, 5);
        let base = MatchConfig {
            match_percent: 80,
            tolerance: 24,
            ..MatchConfig::default()
        };
        let seq = run(
            &image,
            &mask,
            MatchConfig {
                parallel: false,
                ..base.clone()
            },
        );
        let par = run(
            &image,
            &mask,
            MatchConfig {
                parallel: true,
                ..base
            },
        );
        assert_eq!(seq, par);
        assert!(!par.matches.is_empty());
        assert_invariants(&par, &image);
    }
}

#[test]
fn repeated_parallel_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let image = make_scene(&mut rng, 128, 96, 12);
    let mask = block_mask();
    let first = run(&image, &mask, MatchConfig::default());
    for _ in 0..5 {
        assert_eq!(run(&image, &mask, MatchConfig::default()), first);
    }
    assert_invariants(&first, &image);
}

#[test]
fn sub_image_mode_parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(5);
    let image = make_scene(&mut rng, 80, 60, 4);
    let sub = Mask::from_image(image.crop(10, 10, 12, 9).unwrap());
    let base = MatchConfig {
        mode: MatchMode::SubImage,
        match_percent: 80,
        tolerance: 16,
        ..MatchConfig::default()
    };
    let seq = run(
        &image,
        &sub,
        MatchConfig {
            parallel: false,
            ..base.clone()
        },
    );
    let par = run(&image, &sub, base);
    assert_eq!(seq, par);
    assert_invariants(&par, &image);
}
