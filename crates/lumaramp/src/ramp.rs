use crate::Float;

/// The ratio vectors for the supported hues.
///
/// Each vector describes how the red, green, and blue channels follow the
/// scan index. For every hue, at least one channel has ratio 0 and at least
/// one channel has ratio 1, which anchors the ramp's low and high endpoints.
/// The primaries have two zero ratios and the secondaries two unit ratios.
#[rustfmt::skip]
const HUE_RATIOS: [(Float, [Float; 3]); 14] = [
    (  0.0, [1.0, 0.0,  0.0 ]), // red
    ( 30.0, [1.0, 0.5,  0.0 ]), // orange
    ( 45.0, [1.0, 0.75, 0.0 ]), // golden yellow
    ( 60.0, [1.0, 1.0,  0.0 ]), // yellow
    ( 90.0, [0.5, 1.0,  0.0 ]), // chartreuse
    (120.0, [0.0, 1.0,  0.0 ]), // green
    (150.0, [0.0, 1.0,  0.5 ]), // spring green
    (180.0, [0.0, 1.0,  1.0 ]), // cyan
    (210.0, [0.0, 0.5,  1.0 ]), // azure
    (225.0, [0.0, 0.25, 1.0 ]), // cobalt
    (240.0, [0.0, 0.0,  1.0 ]), // blue
    (270.0, [0.5, 0.0,  1.0 ]), // violet
    (300.0, [1.0, 0.0,  1.0 ]), // magenta
    (330.0, [1.0, 0.0,  0.5 ]), // rose
];

/// The ratio vector for grays and for hues without entry.
pub(crate) const ACHROMATIC_RATIO: [Float; 3] = [1.0, 1.0, 1.0];

/// Look up the ratio vector for the hue in degrees.
///
/// This function only matches the supported hues exactly and returns `None`
/// for all other hues.
pub(crate) fn hue_ratio(degrees: Float) -> Option<[Float; 3]> {
    HUE_RATIOS
        .iter()
        .find(|(hue, _)| *hue == degrees)
        .map(|(_, ratio)| *ratio)
}

/// Get an iterator over the supported hues in degrees.
pub(crate) fn supported_hues() -> impl Iterator<Item = Float> {
    HUE_RATIOS.iter().map(|(hue, _)| *hue)
}

// --------------------------------------------------------------------------------------------------------------------

/// One step of a ramp.
///
/// The coordinates are rounded to integers but not clamped. For saturations
/// in `0..=100`, they always fall into `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RampStep {
    /// The scan index.
    pub index: u8,
    /// The color anchored at minimum saturation.
    pub low: [Float; 3],
    /// The color anchored at maximum saturation.
    pub high: [Float; 3],
}

/// A ramp for one hue and saturation.
///
/// A ramp is an iterator over 256 [`RampStep`]s, one per scan index `i` in
/// `0..=255`. For each step, the low color blends the channels between the
/// minimum-saturation anchor `i·(100−s)/(100+s)` and `i`, whereas the high
/// color blends them between `i` and the maximum-saturation anchor
/// `i + 2s·(255−i)/(100+s)`. Each channel's ratio serves as blending weight.
///
/// Since both anchors grow with `i`, every channel of both colors is
/// non-decreasing along the ramp. Hence their luma is non-decreasing, too.
/// The iterator is fused and exact.
#[derive(Clone, Debug)]
pub struct Ramp {
    ratio: [Float; 3],
    saturation: Float,
    index: u16,
}

impl Ramp {
    /// The number of steps.
    pub const LENGTH: usize = 256;

    /// Create a new ramp for the ratio vector and saturation percentage.
    pub fn new(ratio: [Float; 3], saturation: Float) -> Self {
        Self {
            ratio,
            saturation,
            index: 0,
        }
    }

    /// Get the ratio vector.
    pub fn ratio(&self) -> [Float; 3] {
        self.ratio
    }

    /// Compute the step for the given index.
    #[allow(clippy::suboptimal_flops)] // anchors must round exactly as unfused
    pub fn step(&self, index: u8) -> RampStep {
        let i = index as Float;
        let s = self.saturation;
        let low_anchor = i * (100.0 - s) / (100.0 + s);
        let high_anchor = i + 2.0 * s * (255.0 - i) / (100.0 + s);

        let mut low = [0.0; 3];
        let mut high = [0.0; 3];
        for (channel, ratio) in self.ratio.iter().enumerate() {
            (low[channel], high[channel]) = if *ratio == 0.0 {
                (low_anchor.round(), i)
            } else if *ratio == 1.0 {
                (i, high_anchor.round())
            } else {
                (
                    (ratio * (i - low_anchor) + low_anchor).round(),
                    (ratio * (high_anchor - i) + i).round(),
                )
            };
        }

        RampStep { index, low, high }
    }
}

impl Iterator for Ramp {
    type Item = RampStep;

    fn next(&mut self) -> Option<Self::Item> {
        if Self::LENGTH <= self.index as usize {
            None
        } else {
            let step = self.step(self.index as u8);
            self.index += 1;
            Some(step)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Self::LENGTH - self.index as usize;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for Ramp {
    fn len(&self) -> usize {
        Self::LENGTH - self.index as usize
    }
}

impl std::iter::FusedIterator for Ramp {}

#[cfg(test)]
mod test {
    use super::{hue_ratio, supported_hues, Ramp, ACHROMATIC_RATIO};
    use crate::{Float, LumaAlgorithm, Rgb};

    #[test]
    fn test_ratios() {
        for hue in supported_hues() {
            let ratio = hue_ratio(hue).expect("supported hue has ratio");
            assert!(
                ratio.contains(&0.0),
                "hue {} should have at least one zero ratio",
                hue
            );
            assert!(
                ratio.contains(&1.0),
                "hue {} should have at least one unit ratio",
                hue
            );
        }

        assert_eq!(hue_ratio(0.0), Some([1.0, 0.0, 0.0]));
        assert_eq!(hue_ratio(180.0), Some([0.0, 1.0, 1.0]));
        assert_eq!(hue_ratio(225.0), Some([0.0, 0.25, 1.0]));

        assert_eq!(hue_ratio(15.0), None);
        assert_eq!(hue_ratio(-1.0), None);
    }

    #[test]
    fn test_steps() {
        let ramp = Ramp::new(hue_ratio(0.0).expect("red"), 80.0);
        let step = ramp.step(30);
        assert_eq!(step.low, [30.0, 3.0, 3.0]);
        assert_eq!(step.high, [230.0, 30.0, 30.0]);

        let ramp = Ramp::new(ACHROMATIC_RATIO, 0.0);
        for step in ramp {
            let i = step.index as Float;
            assert_eq!(step.low, [i, i, i]);
            assert_eq!(step.high, [i, i, i]);
        }

        let mut ramp = Ramp::new(ACHROMATIC_RATIO, 0.0);
        assert_eq!(ramp.ratio(), ACHROMATIC_RATIO);
        assert_eq!(ramp.len(), 256);
        assert_eq!(ramp.nth(255).map(|s| s.index), Some(255));
        assert_eq!(ramp.next(), None);
    }

    #[test]
    fn test_full_saturation_endpoints() {
        for hue in supported_hues() {
            let ramp = Ramp::new(hue_ratio(hue).expect("supported hue"), 100.0);
            for index in [0, 255] {
                let step = ramp.step(index);
                assert!(Rgb::from_rounded(&step.low).is_some(), "{:?}", step);
                assert!(Rgb::from_rounded(&step.high).is_some(), "{:?}", step);
            }
        }
    }

    #[test]
    fn test_monotonic_luma() {
        let algorithms = [
            LumaAlgorithm::W3c,
            LumaAlgorithm::Rec709,
            LumaAlgorithm::Quadratic,
        ];
        let ratios = supported_hues()
            .map(|hue| hue_ratio(hue).expect("supported hue"))
            .chain(std::iter::once(ACHROMATIC_RATIO));

        for ratio in ratios {
            for saturation in (0..=100).step_by(5) {
                let saturation = saturation as Float;
                let mut previous: Option<(Rgb, Rgb)> = None;

                for step in Ramp::new(ratio, saturation) {
                    let low = Rgb::from_rounded(&step.low).expect("in-range low color");
                    let high = Rgb::from_rounded(&step.high).expect("in-range high color");

                    if let Some((previous_low, previous_high)) = previous {
                        for algorithm in algorithms {
                            assert!(
                                algorithm.luma(&previous_low) <= algorithm.luma(&low),
                                "low luma decreases for {:?} at saturation {}, index {}",
                                ratio,
                                saturation,
                                step.index
                            );
                            assert!(
                                algorithm.luma(&previous_high) <= algorithm.luma(&high),
                                "high luma decreases for {:?} at saturation {}, index {}",
                                ratio,
                                saturation,
                                step.index
                            );
                        }
                    }
                    previous = Some((low, high));
                }
            }
        }
    }
}
