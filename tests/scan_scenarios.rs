//! End-to-end scans over small synthetic scenes.

use maskmatch::{
    BackgroundFallback, Mask, MatchConfig, MatchMode, MatchRect, Matcher, Pixel, RgbaImage,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BG: Pixel = Pixel::rgb(240, 240, 240);
const FG: Pixel = Pixel::rgb(30, 30, 30);
const PATTERN: Pixel = Pixel::rgb(255, 255, 255);

fn scene(width: usize, height: usize, blocks: &[(usize, usize, usize, usize)]) -> RgbaImage {
    let mut img = RgbaImage::filled(width, height, BG).unwrap();
    for &(row, col, w, h) in blocks {
        for r in row..row + h {
            for c in col..col + w {
                img.set_pixel(r, c, FG);
            }
        }
    }
    img
}

fn pattern_mask(width: usize, height: usize) -> Mask {
    Mask::new(vec![PATTERN; width * height], width, height).unwrap()
}

fn config(match_percent: u32, tolerance: u32) -> MatchConfig {
    MatchConfig {
        match_percent,
        tolerance,
        ..MatchConfig::default()
    }
}

#[test]
fn single_block_yields_one_match() {
    let image = scene(10, 10, &[(3, 3, 2, 2)]);
    let matcher = Matcher::new(pattern_mask(2, 2)).with_config(config(75, 32));
    let report = matcher.match_image(image.view()).unwrap();

    assert_eq!(report.matches, vec![MatchRect::new(3, 3, 2, 2)]);
    assert_eq!(report.count(), 1);
    assert_eq!(report.windows_scanned, 81);
    assert_eq!(
        report.to_string(),
        "sub-image matched at: 3, 3, 5, 5\nNumber of matches: 1"
    );
}

#[test]
fn pattern_only_mask_with_reject_fallback_finds_nothing() {
    let image = scene(10, 10, &[(3, 3, 2, 2)]);
    let cfg = MatchConfig {
        background_fallback: BackgroundFallback::Reject,
        ..config(75, 32)
    };
    let report = Matcher::new(pattern_mask(2, 2))
        .with_config(cfg)
        .match_image(image.view())
        .unwrap();
    assert!(report.matches.is_empty());
    assert_eq!(report.candidates, 0);
}

#[test]
fn threshold_equality_is_rejected() {
    // Three of four window pixels differ from the background: exactly 75%.
    let mut image = scene(10, 10, &[(3, 3, 2, 2)]);
    image.set_pixel(4, 4, BG);
    let mask = pattern_mask(2, 2);

    let at_75 = Matcher::new(mask.clone())
        .with_config(config(75, 32))
        .match_image(image.view())
        .unwrap();
    assert!(at_75.matches.is_empty());

    let at_74 = Matcher::new(mask)
        .with_config(config(74, 32))
        .match_image(image.view())
        .unwrap();
    assert_eq!(at_74.matches, vec![MatchRect::new(3, 3, 2, 2)]);
}

#[test]
fn adjacent_accepting_windows_collapse_to_one() {
    let image = scene(12, 12, &[(4, 5, 4, 4)]);
    let report = Matcher::new(pattern_mask(2, 2))
        .with_config(config(75, 32))
        .match_image(image.view())
        .unwrap();
    assert_eq!(report.candidates, 9);
    assert_eq!(report.matches, vec![MatchRect::new(4, 5, 2, 2)]);
}

#[test]
fn report_is_sorted_by_row_then_column() {
    let image = scene(14, 14, &[(8, 1, 2, 2), (1, 9, 2, 2), (1, 1, 2, 2)]);
    let report = Matcher::new(pattern_mask(2, 2))
        .with_config(config(75, 32))
        .match_image(image.view())
        .unwrap();
    assert_eq!(
        report.matches,
        vec![
            MatchRect::new(1, 1, 2, 2),
            MatchRect::new(1, 9, 2, 2),
            MatchRect::new(8, 1, 2, 2),
        ]
    );
    for pair in report.matches.windows(2) {
        assert!((pair[0].row1, pair[0].col1) <= (pair[1].row1, pair[1].col1));
    }
}

#[test]
fn oversized_mask_yields_no_matches() {
    let image = scene(10, 10, &[(3, 3, 2, 2)]);
    for (w, h) in [(11, 2), (2, 11), (12, 12)] {
        let report = Matcher::new(pattern_mask(w, h))
            .match_image(image.view())
            .unwrap();
        assert!(report.matches.is_empty());
        assert_eq!(report.windows_scanned, 0);
    }
}

#[test]
fn mask_equal_to_image_scans_one_window() {
    let image = scene(4, 4, &[(1, 1, 2, 2)]);
    let mut mask_pixels = vec![Pixel::MARKER; 16];
    for r in 1..3 {
        for c in 1..3 {
            mask_pixels[r * 4 + c] = PATTERN;
        }
    }
    let mask = Mask::new(mask_pixels, 4, 4).unwrap();
    let report = Matcher::new(mask).match_image(image.view()).unwrap();
    assert_eq!(report.windows_scanned, 1);
    assert_eq!(report.matches, vec![MatchRect::new(0, 0, 4, 4)]);
}

#[test]
fn mask_cropped_from_scene_matches_at_crop_origin() {
    let bg = Pixel::rgb(40, 90, 140);
    let fg = Pixel::rgb(220, 30, 30);
    let mut image = RgbaImage::filled(30, 24, bg).unwrap();
    let (row0, col0) = (9, 13);
    for r in 2..6 {
        for c in 2..6 {
            image.set_pixel(row0 + r, col0 + c, fg);
        }
    }

    // Background pixels of the crop become markers, the block stays pattern.
    let crop = image.crop(row0, col0, 8, 8).unwrap();
    let mask_pixels = crop
        .pixels()
        .iter()
        .map(|&px| if px == bg { Pixel::MARKER } else { px })
        .collect();
    let mask = Mask::new(mask_pixels, 8, 8).unwrap();

    let report = Matcher::new(mask)
        .with_config(config(90, 32))
        .match_image(image.view())
        .unwrap();
    assert_eq!(report.matches, vec![MatchRect::new(row0, col0, 8, 8)]);
}

#[test]
fn sub_image_mode_finds_exact_crop() {
    let mut rng = StdRng::seed_from_u64(7);
    let (width, height) = (40, 30);
    let data = (0..width * height)
        .map(|_| Pixel::rgb(rng.random(), rng.random(), rng.random()))
        .collect();
    let image = RgbaImage::new(data, width, height).unwrap();
    let (row0, col0) = (17, 21);
    let sub = image.crop(row0, col0, 5, 4).unwrap();

    let cfg = MatchConfig {
        mode: MatchMode::SubImage,
        ..config(95, 1)
    };
    let report = Matcher::new(Mask::from_image(sub))
        .with_config(cfg)
        .match_image(image.view())
        .unwrap();
    assert_eq!(report.matches, vec![MatchRect::new(row0, col0, 5, 4)]);
}

#[test]
fn match_and_mark_draws_red_frames_only() {
    let image = scene(10, 10, &[(3, 3, 3, 3)]);
    let matcher = Matcher::new(pattern_mask(3, 3)).with_config(config(75, 32));
    let (report, marked) = matcher.match_and_mark(&image).unwrap();
    assert_eq!(report.matches, vec![MatchRect::new(3, 3, 3, 3)]);
    assert_eq!(marked.width(), image.width());
    assert_eq!(marked.height(), image.height());

    for row in 0..10 {
        for col in 0..10 {
            let original = image.pixel(row, col).unwrap();
            let got = marked.pixel(row, col).unwrap();
            let on_frame = (3..=5).contains(&row)
                && (3..=5).contains(&col)
                && !(row == 4 && col == 4);
            if on_frame {
                assert_eq!(got, Pixel { red: 255, ..original }, "({row}, {col})");
            } else {
                assert_eq!(got, original, "({row}, {col})");
            }
        }
    }
}

#[test]
fn invalid_percent_is_an_error() {
    let image = scene(10, 10, &[]);
    let err = Matcher::new(pattern_mask(2, 2))
        .with_config(config(101, 32))
        .match_image(image.view())
        .unwrap_err();
    assert_eq!(err, maskmatch::MaskMatchError::InvalidPercent(101));
}

#[test]
fn blocks_straddling_scan_bands_collapse_to_one_match_each() {
    // Origin rows 63/64 and 127/128 fall on either side of a band boundary.
    let rows = [1, 30, 63, 100, 127, 140];
    let cols = [2, 20];
    let blocks: Vec<_> = rows
        .iter()
        .flat_map(|&r| cols.iter().map(move |&c| (r, c, 3, 3)))
        .collect();
    let image = scene(40, 150, &blocks);
    let mask = pattern_mask(2, 2);

    let mut reports = Vec::new();
    for parallel in [false, true] {
        let cfg = MatchConfig {
            parallel,
            ..config(75, 32)
        };
        let report = Matcher::new(mask.clone())
            .with_config(cfg)
            .match_image(image.view())
            .unwrap();
        reports.push(report);
    }

    let expected: Vec<_> = rows
        .iter()
        .flat_map(|&r| cols.iter().map(move |&c| MatchRect::new(r, c, 2, 2)))
        .collect();
    for report in &reports {
        assert_eq!(report.matches, expected);
        assert_eq!(report.candidates, 4 * expected.len());
        assert_eq!(report.windows_scanned, 149 * 39);
    }
}
