//! Gray-level reduction regression test
//!
//! Runs the full 8-bit ramp through every step factor used for the
//! banding comparison and checks the quantization laws.

use pixres_color::{gray_level_reduction, quantization_levels};
use pixres_core::{Factor, PixelDepth};
use pixres_test::{RegParams, gradient_image, ramp_image};

const FACTORS: [u32; 7] = [2, 4, 8, 16, 32, 64, 5];

#[test]
fn graylevel_reg() {
    let mut rp = RegParams::new("graylevel");

    let pixs = ramp_image().expect("ramp fixture");
    rp.compare_values(256.0, pixs.count_levels() as f64, 0.0);

    for f in FACTORS {
        let factor = Factor::new(f).expect("factor");
        let reduced = gray_level_reduction(&pixs, factor).expect("reduce");

        // Never brighter, always a multiple of the step
        let laws_hold = pixs
            .data()
            .iter()
            .zip(reduced.data())
            .all(|(&v, &q)| q <= v && u32::from(q) % f == 0);
        rp.check(laws_hold, &format!("q <= v and q % {f} == 0"));

        // The ramp contains every value, so every output level appears
        let expected_levels = quantization_levels(PixelDepth::Bit8, factor);
        rp.compare_values(expected_levels as f64, reduced.count_levels() as f64, 0.0);

        // Idempotent for the same step
        let twice = gray_level_reduction(&reduced, factor).expect("reduce twice");
        rp.compare_images(&reduced, &twice);

        eprintln!("  factor {}: {} levels", f, reduced.count_levels());
    }

    assert!(rp.cleanup(), "graylevel regression test failed");
}

#[test]
fn graylevel_color_reg() {
    let mut rp = RegParams::new("graylevel_color");

    let pixs = gradient_image(9, 7, 3).expect("gradient fixture");
    let eight = Factor::new(8).unwrap();
    let reduced = gray_level_reduction(&pixs, eight).expect("reduce rgb");

    rp.compare_values(pixs.channels() as f64, reduced.channels() as f64, 0.0);
    rp.check(pixs.sizes_equal(&reduced), "geometry preserved");

    let mut per_sample = true;
    for y in 0..pixs.height() {
        for x in 0..pixs.width() {
            for c in 0..3 {
                let v = pixs.get_sample(x, y, c).unwrap();
                let q = reduced.get_sample(x, y, c).unwrap();
                if q != (v / 8) * 8 {
                    per_sample = false;
                }
            }
        }
    }
    rp.check(per_sample, "every channel quantized independently");

    assert!(rp.cleanup(), "graylevel_color regression test failed");
}
