use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Determine the hue of unit-scaled RGB coordinates as a fraction of the full
/// circle.
///
/// The caller must ensure that `max` and `min` are the largest and smallest
/// coordinate and that they differ.
fn unit_hue(value: &[Float; 3], max: Float, min: Float) -> Float {
    let [r, g, b] = *value;
    let range = max - min;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (hue / 6.0).rem_euclid(1.0)
}

/// Convert unit-scaled RGB coordinates to HSL.
///
/// The result has the hue in degrees `0..360` as well as saturation and
/// lightness in `0..=1`. Grays have hue and saturation zero. The hue is not
/// wrapped around in any way, so reds just below 360° are far away from 0°.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let lightness = sum / 2.0;

    if max == min {
        return [0.0, 0.0, lightness];
    }

    // Not 2.0 - sum, which rounds differently right at the tolerance limit.
    let range = max - min;
    let saturation = if lightness <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max - min)
    };

    [unit_hue(value, max, min) * 360.0, saturation, lightness]
}

/// Convert unit-scaled RGB coordinates to HSV.
///
/// The result has the hue in degrees `0..360` as well as saturation and value
/// in `0..=1`.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return [0.0, 0.0, max];
    }

    [unit_hue(value, max, min) * 360.0, (max - min) / max, max]
}

#[cfg(test)]
mod test {
    use super::{from_24bit, rgb_to_hsl, rgb_to_hsv};
    use crate::Float;

    fn assert_close(actual: [Float; 3], expected: [Float; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a - e).abs() < 1e-4,
                "coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_hsl() {
        assert_close(rgb_to_hsl(&from_24bit(0, 0, 0)), [0.0, 0.0, 0.0]);
        assert_close(rgb_to_hsl(&from_24bit(255, 255, 255)), [0.0, 0.0, 1.0]);
        assert_close(rgb_to_hsl(&from_24bit(128, 128, 128)), [0.0, 0.0, 0.50196]);
        assert_close(rgb_to_hsl(&from_24bit(255, 0, 0)), [0.0, 1.0, 0.5]);
        assert_close(rgb_to_hsl(&from_24bit(0, 255, 0)), [120.0, 1.0, 0.5]);
        assert_close(rgb_to_hsl(&from_24bit(0, 0, 255)), [240.0, 1.0, 0.5]);
        assert_close(rgb_to_hsl(&from_24bit(230, 30, 30)), [0.0, 0.8, 0.50980]);

        // Slightly blue red lands near 360, not near 0.
        let [h, _, _] = rgb_to_hsl(&from_24bit(255, 0, 8));
        assert!(358.0 < h && h < 360.0, "hue {} should be close to 360", h);

        // Pastel blue above lightness 0.5
        assert_close(rgb_to_hsl(&from_24bit(128, 128, 255)), [240.0, 1.0, 0.75098]);
    }

    #[test]
    fn test_hsl_saturation_rounding() {
        // 95% saturation requested, 100% measured, exactly at the limit.
        let [_, s, _] = rgb_to_hsl(&from_24bit(244, 247, 255));
        assert_eq!(s * 100.0, 100.0);
    }

    #[test]
    fn test_hsv() {
        assert_close(rgb_to_hsv(&from_24bit(0, 0, 0)), [0.0, 0.0, 0.0]);
        assert_close(rgb_to_hsv(&from_24bit(255, 255, 0)), [60.0, 1.0, 1.0]);
        assert_close(rgb_to_hsv(&from_24bit(0, 128, 128)), [180.0, 1.0, 0.50196]);
        assert_close(rgb_to_hsv(&from_24bit(255, 128, 128)), [0.0, 0.49804, 1.0]);
    }
}
