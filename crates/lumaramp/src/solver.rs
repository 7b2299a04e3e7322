#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ConfigError;
use crate::ramp::{hue_ratio, supported_hues, Ramp, ACHROMATIC_RATIO};
use crate::trace::{LogTrace, Trace, TraceEvent};
use crate::{Float, LumaAlgorithm, Rgb};

/// A hue.
///
/// A hue either is an angle in degrees on the HSL color wheel or achromatic,
/// i.e., on the gray axis. Achromatic hues force the saturation to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hue {
    Degrees(Float),
    Achromatic,
}

impl Hue {
    /// Determine whether this hue has a dedicated ratio vector.
    ///
    /// The solver silently treats unsupported hues like grays, though it does
    /// report them as [`TraceEvent::UnknownHue`]. Callers that want strict
    /// validation should check hues with this method first.
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Degrees(degrees) => hue_ratio(*degrees).is_some(),
            Self::Achromatic => true,
        }
    }

    /// Get an iterator over the supported hues in ascending order.
    pub fn supported() -> impl Iterator<Item = Hue> {
        supported_hues().map(Hue::Degrees)
    }
}

impl From<Option<Float>> for Hue {
    fn from(value: Option<Float>) -> Self {
        value.map_or(Hue::Achromatic, Hue::Degrees)
    }
}

impl std::str::FromStr for Hue {
    type Err = ConfigError;

    /// Parse `none` (ignoring case) as achromatic and numbers as degrees.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("none") {
            Ok(Self::Achromatic)
        } else {
            t.parse::<Float>()
                .ok()
                .filter(|d| d.is_finite())
                .map(Self::Degrees)
                .ok_or_else(|| ConfigError::MalformedHue(s.to_string()))
        }
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degrees(degrees) => write!(f, "{}", degrees),
            Self::Achromatic => f.write_str("none"),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A ramp branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Colors anchored at minimum saturation.
    Low,
    /// Colors anchored at maximum saturation.
    High,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::High => "high",
        })
    }
}

/// An admissible ramp color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// The ramp's scan index.
    pub index: u8,
    /// The color.
    pub color: Rgb,
    /// The absolute difference between measured and requested hue.
    pub hue_diff: Float,
    /// The absolute difference between measured and requested saturation.
    pub saturation_diff: Float,
    /// The color's luma in `0..=1`.
    pub luma: Float,
}

impl Candidate {
    /// Compute the weighted deviation for the given luma difference.
    #[allow(clippy::suboptimal_flops)] // fused rounding breaks exact ties
    pub fn deviation(&self, luma_diff: Float) -> Float {
        let [wh, ws, wl] = Solver::WEIGHTS;
        let h = self.hue_diff;
        let s = self.saturation_diff;
        (wh * h * h + ws * s * s + wl * luma_diff * luma_diff).sqrt()
    }
}

/// The admissible candidates for one hue and saturation.
///
/// Both branches are ordered by ascending scan index and hence by
/// non-decreasing luma.
#[derive(Clone, Debug, Default)]
pub struct Candidates {
    low: Vec<Candidate>,
    high: Vec<Candidate>,
}

impl Candidates {
    /// Get the candidates for the branch.
    pub fn branch(&self, branch: Branch) -> &[Candidate] {
        match branch {
            Branch::Low => &self.low,
            Branch::High => &self.high,
        }
    }

    /// Determine whether both branches are empty.
    pub fn is_empty(&self) -> bool {
        self.low.is_empty() && self.high.is_empty()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The color solver.
///
/// Given a hue, a saturation percentage, and target luma percentages, the
/// solver searches the 24-bit RGB space for the closest matching color per
/// target:
///
///  1. It scans a [`Ramp`] with two colors per step and admits every color
///     whose measured hue and saturation each differ by at most
///     [`Solver::THRESHOLD`] from the request.
///  2. For each target luma, it walks the low candidates from the brightest
///     down and the high candidates from the darkest up. Once a candidate is
///     more than the threshold away in luma, the remaining candidates of that
///     branch only get further away, so the walk stops. Candidates that are
///     still too far off in the other direction are skipped.
///  3. It scores the remaining candidates by their weighted deviation and
///     keeps the first one with the smallest score below the threshold. The
///     low branch goes first and hence wins ties.
///
/// A target without such candidate resolves to `None`, which is distinct from
/// black. Every call to the solver is independent of all others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solver {
    algorithm: LumaAlgorithm,
}

impl Solver {
    /// The maximum hue, saturation, and luma deviation.
    pub const THRESHOLD: Float = 5.0;

    /// The weights for hue, saturation, and luma deviation.
    pub const WEIGHTS: [Float; 3] = [0.5, 0.2, 0.3];

    /// Create a new solver with the luma algorithm.
    pub fn new(algorithm: LumaAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Get the luma algorithm.
    pub fn algorithm(&self) -> LumaAlgorithm {
        self.algorithm
    }

    /// Collect the admissible candidates for the hue and saturation.
    pub fn candidates<T: Trace>(&self, hue: Hue, saturation: Float, trace: &mut T) -> Candidates {
        let (ratio, target_hue, target_saturation) = match hue {
            Hue::Achromatic => (ACHROMATIC_RATIO, 0.0, 0.0),
            Hue::Degrees(degrees) => {
                let ratio = hue_ratio(degrees).unwrap_or_else(|| {
                    trace.record(&TraceEvent::UnknownHue { hue });
                    ACHROMATIC_RATIO
                });
                (ratio, degrees, saturation)
            }
        };

        let mut candidates = Candidates::default();
        for step in Ramp::new(ratio, target_saturation) {
            for (branch, coordinates) in [(Branch::Low, step.low), (Branch::High, step.high)] {
                let Some(color) = Rgb::from_rounded(&coordinates) else {
                    trace.record(&TraceEvent::OutOfRange {
                        branch,
                        index: step.index,
                        coordinates,
                    });
                    continue;
                };

                let [h, s, _] = color.to_hsl();
                let hue_diff = (target_hue - h).abs();
                let saturation_diff = (target_saturation - s).abs();

                if hue_diff <= Self::THRESHOLD && saturation_diff <= Self::THRESHOLD {
                    let candidate = Candidate {
                        index: step.index,
                        color,
                        hue_diff,
                        saturation_diff,
                        luma: self.algorithm.luma(&color),
                    };
                    match branch {
                        Branch::Low => candidates.low.push(candidate),
                        Branch::High => candidates.high.push(candidate),
                    }
                } else {
                    trace.record(&TraceEvent::Filtered {
                        branch,
                        index: step.index,
                        color,
                        hue_diff,
                        saturation_diff,
                    });
                }
            }
        }

        trace.record(&TraceEvent::Admitted {
            low: candidates.low.len(),
            high: candidates.high.len(),
        });
        candidates
    }

    /// Find the best candidate for the target luma percentage.
    pub fn find<T: Trace>(
        &self,
        candidates: &Candidates,
        target: Float,
        trace: &mut T,
    ) -> Option<Rgb> {
        let mut best = (Self::THRESHOLD, None);
        self.scan(Branch::Low, candidates.low.iter().rev(), target, &mut best, trace);
        self.scan(Branch::High, candidates.high.iter(), target, &mut best, trace);

        let (_, color) = best;
        if color.is_none() {
            trace.record(&TraceEvent::NotFound { target });
        }
        color
    }

    /// Scan one branch in luma order away from the target, updating the best
    /// deviation and color so far.
    fn scan<'a, I, T>(
        &self,
        branch: Branch,
        walk: I,
        target: Float,
        best: &mut (Float, Option<Rgb>),
        trace: &mut T,
    ) where
        I: Iterator<Item = &'a Candidate>,
        T: Trace,
    {
        for candidate in walk {
            let luma = candidate.luma * 100.0;
            // Positive means too dark for low and too bright for high.
            let diff = match branch {
                Branch::Low => target - luma,
                Branch::High => luma - target,
            };

            if Self::THRESHOLD < diff {
                trace.record(&TraceEvent::Break {
                    branch,
                    index: candidate.index,
                    luma,
                });
                break;
            } else if diff < -Self::THRESHOLD {
                trace.record(&TraceEvent::Skip {
                    branch,
                    index: candidate.index,
                    luma,
                });
                continue;
            }

            let deviation = candidate.deviation(diff);
            trace.record(&TraceEvent::Scored {
                branch,
                index: candidate.index,
                color: candidate.color,
                deviation,
                luma,
            });
            if deviation < best.0 {
                *best = (deviation, Some(candidate.color));
            }
        }
    }

    /// Solve for the hue, saturation, and target lumas while reporting to the
    /// trace.
    ///
    /// The result has one entry per target luma, in the same order.
    pub fn solve_with<T: Trace>(
        &self,
        hue: Hue,
        saturation: Float,
        lumas: &[Float],
        trace: &mut T,
    ) -> Vec<Option<Rgb>> {
        let candidates = self.candidates(hue, saturation, trace);
        lumas
            .iter()
            .map(|target| self.find(&candidates, *target, trace))
            .collect()
    }

    /// Solve for the hue, saturation, and target lumas.
    ///
    /// Warnings about unknown hues go to the `log` facade.
    pub fn solve(&self, hue: Hue, saturation: Float, lumas: &[Float]) -> Vec<Option<Rgb>> {
        self.solve_with(hue, saturation, lumas, &mut LogTrace::quiet())
    }
}

/// Solve for the hue, saturation, and target lumas with the luma algorithm.
///
/// This function is a shorthand for creating a [`Solver`] and invoking
/// [`Solver::solve`].
pub fn solve_colors(
    hue: Hue,
    saturation: Float,
    lumas: &[Float],
    algorithm: LumaAlgorithm,
) -> Vec<Option<Rgb>> {
    Solver::new(algorithm).solve(hue, saturation, lumas)
}

/// Solve for the hue, saturation, and target lumas. <i
/// class=python-only>Python only!</i>
///
/// A hue of `None` is achromatic. The result has one RGB tuple or `None` per
/// target luma.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "solve_colors")]
pub fn py_solve_colors(
    hue: Option<Float>,
    saturation: Float,
    lumas: Vec<Float>,
    algorithm: LumaAlgorithm,
) -> Vec<Option<(u8, u8, u8)>> {
    solve_colors(Hue::from(hue), saturation, &lumas, algorithm)
        .into_iter()
        .map(|c| c.map(|c| (c[0], c[1], c[2])))
        .collect()
}
