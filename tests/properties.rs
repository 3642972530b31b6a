//! Algebraic properties of the transforms, checked over generated rasters.

use proptest::prelude::*;
use rastershop::imaging::{
    CenterCoord, DecodeLimits, Operation, Strength, SwirlParams, Threshold, apply, color, edges,
    geometry, read_ppm, swirl_source, write_ppm,
};
use rastershop::raster::{Pixel, Raster};

fn arb_pixel() -> impl Strategy<Value = Pixel> {
    any::<[u8; 3]>().prop_map(Pixel::from_channels)
}

fn arb_raster(min: usize, max: usize) -> impl Strategy<Value = Raster> {
    (min..=max, min..=max).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(arb_pixel(), rows * cols)
            .prop_map(move |pixels| Raster::from_pixels(rows, cols, pixels).unwrap())
    })
}

fn arb_strength() -> impl Strategy<Value = Strength> {
    prop_oneof![-500i32..=-1, 1i32..=500].prop_map(|s| Strength::new(s).unwrap())
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Grayscale),
        Just(Operation::Swap),
        Just(Operation::Invert),
        Just(Operation::ZoomOut),
        Just(Operation::RotateRight),
        arb_strength().prop_map(|s| Operation::Swirl(SwirlParams::centered(s))),
        (0i32..200).prop_map(|t| Operation::EdgeDetection(Threshold(t))),
    ]
}

fn is_border(r: usize, c: usize, rows: usize, cols: usize) -> bool {
    r == 0 || c == 0 || r + 1 == rows || c + 1 == cols
}

proptest! {
    #[test]
    fn grayscale_is_idempotent(raster in arb_raster(0, 12)) {
        let mut once = raster.clone();
        color::grayscale(&mut once).unwrap();
        let mut twice = once.clone();
        color::grayscale(&mut twice).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn grayscale_pixels_have_equal_channels(raster in arb_raster(1, 12)) {
        let mut gray = raster;
        color::grayscale(&mut gray).unwrap();
        for p in gray.pixels() {
            prop_assert!(p.r == p.g && p.g == p.b);
        }
    }

    #[test]
    fn invert_is_an_involution(raster in arb_raster(0, 12)) {
        let mut twice = raster.clone();
        color::invert(&mut twice).unwrap();
        color::invert(&mut twice).unwrap();
        prop_assert_eq!(twice, raster);
    }

    #[test]
    fn swap_is_a_three_cycle(raster in arb_raster(0, 12)) {
        let mut swapped = raster.clone();
        color::swap_channels(&mut swapped).unwrap();
        let changes = raster.pixels().iter().any(|p| p.r != p.g || p.g != p.b);
        prop_assert_eq!(swapped != raster, changes);

        color::swap_channels(&mut swapped).unwrap();
        color::swap_channels(&mut swapped).unwrap();
        prop_assert_eq!(swapped, raster);
    }

    #[test]
    fn zoom_out_halves_dimensions_and_averages_blocks(raster in arb_raster(0, 13)) {
        let (rows, cols) = raster.dimensions();
        let small = geometry::zoom_out(&raster).unwrap();
        prop_assert_eq!(small.dimensions(), (rows / 2, cols / 2));

        for r in 0..rows / 2 {
            for c in 0..cols / 2 {
                let block = [
                    raster[(2 * r, 2 * c)],
                    raster[(2 * r, 2 * c + 1)],
                    raster[(2 * r + 1, 2 * c)],
                    raster[(2 * r + 1, 2 * c + 1)],
                ];
                let mean = |channel: usize| {
                    (block.iter().map(|p| p.channels()[channel] as u32).sum::<u32>() / 4) as u8
                };
                prop_assert_eq!(small[(r, c)], Pixel::new(mean(0), mean(1), mean(2)));
            }
        }
    }

    #[test]
    fn rotate_right_moves_every_pixel_and_cycles(raster in arb_raster(0, 10)) {
        let (rows, cols) = raster.dimensions();
        let once = geometry::rotate_right(&raster).unwrap();
        prop_assert_eq!(once.dimensions(), (cols, rows));
        for r in 0..rows {
            for c in 0..cols {
                prop_assert_eq!(once[(c, rows - 1 - r)], raster[(r, c)]);
            }
        }

        let mut turned = once;
        for _ in 0..3 {
            turned = geometry::rotate_right(&turned).unwrap();
        }
        prop_assert_eq!(turned, raster);
    }

    #[test]
    fn swirl_samples_source_or_black(raster in arb_raster(1, 12), strength in arb_strength()) {
        let (rows, cols) = raster.dimensions();
        let params = SwirlParams::centered(strength);
        let out = geometry::swirl(&raster, &params).unwrap();
        prop_assert_eq!(out.dimensions(), (rows, cols));

        let (cx, cy) = ((cols / 2) as i64, (rows / 2) as i64);
        for r in 0..rows {
            for c in 0..cols {
                let (sr, sc) = swirl_source(r as i64, c as i64, cx, cy, strength.value());
                let expected = raster.get_signed(sr, sc).copied().unwrap_or(Pixel::BLACK);
                prop_assert_eq!(out[(r, c)], expected);
            }
        }
        // Zero distance means zero rotation at the centre.
        let centre = (rows / 2, cols / 2);
        prop_assert_eq!(out[centre], raster[centre]);
    }

    #[test]
    fn swirl_sentinel_matches_explicit_centre(raster in arb_raster(1, 10), strength in arb_strength()) {
        let (rows, cols) = raster.dimensions();
        let sentinel = SwirlParams::centered(strength);
        let explicit = SwirlParams {
            cx: CenterCoord::from_arg((cols / 2) as i32),
            cy: CenterCoord::from_arg((rows / 2) as i32),
            strength,
        };
        prop_assert_eq!(
            geometry::swirl(&raster, &sentinel).unwrap(),
            geometry::swirl(&raster, &explicit).unwrap()
        );
    }

    #[test]
    fn edge_detection_keeps_grayscaled_border(raster in arb_raster(3, 12), threshold in -10i32..300) {
        let mut input = raster;
        let out = edges::detect_edges(&mut input, Threshold(threshold)).unwrap();
        let (rows, cols) = input.dimensions();
        prop_assert_eq!(out.dimensions(), (rows, cols));

        for r in 0..rows {
            for c in 0..cols {
                if is_border(r, c, rows, cols) {
                    prop_assert_eq!(out[(r, c)], input[(r, c)]);
                } else {
                    prop_assert!(out[(r, c)] == Pixel::BLACK || out[(r, c)] == Pixel::WHITE);
                }
            }
        }
    }

    #[test]
    fn uniform_raster_has_white_interior(
        rows in 3usize..12,
        cols in 3usize..12,
        pixel in arb_pixel(),
        threshold in 0i32..300,
    ) {
        let mut input = Raster::filled(rows, cols, pixel);
        let out = edges::detect_edges(&mut input, Threshold(threshold)).unwrap();
        for r in 1..rows - 1 {
            for c in 1..cols - 1 {
                prop_assert_eq!(out[(r, c)], Pixel::WHITE);
            }
        }
    }

    #[test]
    fn every_operation_rejects_released_raster(
        rows in 1usize..8,
        cols in 1usize..8,
        op in arb_operation(),
    ) {
        let mut raster = Raster::new(rows, cols);
        raster.take_pixels();
        prop_assert!(apply(&op, raster).is_err());
    }

    #[test]
    fn ppm_written_bytes_parse_back(raster in arb_raster(1, 12)) {
        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &raster).unwrap();
        let parsed = read_ppm(bytes.as_slice(), &DecodeLimits::default()).unwrap();
        prop_assert_eq!(parsed, raster);
    }
}
