#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ConfigError;
use crate::util::{Env, Environment};
use crate::{Float, Rgb};

/// The environment variable for selecting the luma algorithm.
pub(crate) const LUMA_VARIABLE: &str = "LUMARAMP_LUMA";

const W3C_WEIGHTS: [Float; 3] = [0.299, 0.587, 0.114];
const REC709_WEIGHTS: [Float; 3] = [0.2126, 0.7152, 0.0722];

/// The algorithm for estimating a color's brightness.
///
/// All three algorithms map 24-bit RGB colors to `0..=1`. They differ
/// materially for darker colors, with the quadratic formula biased towards
/// brighter results. Since the solver ranks candidates by luma, the choice of
/// algorithm changes every derived color. Hence a palette is always computed
/// with one algorithm only.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "lumaramp")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LumaAlgorithm {
    /// The weights from the W3C's working draft on accessibility, i.e.,
    /// `0.299r + 0.587g + 0.114b`.
    W3c,
    /// The weights from Rec. 709, i.e., `0.2126r + 0.7152g + 0.0722b`.
    Rec709,
    /// The weighted Euclidean distance in RGB space with the W3C weights,
    /// i.e., `sqrt(0.299r² + 0.587g² + 0.114b²)`.
    #[default]
    Quadratic,
}

impl LumaAlgorithm {
    /// Determine the luma algorithm from the `LUMARAMP_LUMA` environment
    /// variable.
    ///
    /// If the variable is undefined or blank, this method returns the default
    /// algorithm. If it holds anything but an algorithm's name, this method
    /// fails.
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::from_env(&Env::default())
    }

    pub(crate) fn from_env<E: Environment>(env: &E) -> Result<Self, ConfigError> {
        env.read_setting(LUMA_VARIABLE)
            .map_or_else(|| Ok(Self::default()), |name| name.parse())
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl LumaAlgorithm {
    /// Get this algorithm's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::W3c => "w3c",
            Self::Rec709 => "rec709",
            Self::Quadratic => "quadratic",
        }
    }

    /// Estimate the brightness of the given coordinates.
    ///
    /// The coordinates are not validated. They are expected to fall into
    /// `0..=255`, in which case the result falls into `0..=1`.
    #[allow(clippy::suboptimal_flops)] // fused rounding breaks exact ties
    pub fn luma_of(&self, r: Float, g: Float, b: Float) -> Float {
        let [wr, wg, wb] = match self {
            Self::W3c | Self::Quadratic => W3C_WEIGHTS,
            Self::Rec709 => REC709_WEIGHTS,
        };

        match self {
            Self::Quadratic => (wr * r * r + wg * g * g + wb * b * b).sqrt() / 255.0,
            _ => (wr * r + wg * g + wb * b) / 255.0,
        }
    }
}

impl LumaAlgorithm {
    /// Estimate the brightness of the given color.
    pub fn luma(&self, color: &Rgb) -> Float {
        let [r, g, b] = *color.as_ref();
        self.luma_of(r as Float, g as Float, b as Float)
    }
}

impl std::str::FromStr for LumaAlgorithm {
    type Err = ConfigError;

    /// Parse the name of a luma algorithm, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w3c" => Ok(Self::W3c),
            "rec709" => Ok(Self::Rec709),
            "quadratic" => Ok(Self::Quadratic),
            _ => Err(ConfigError::UnknownLumaAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for LumaAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
