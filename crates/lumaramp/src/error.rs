//! Utility module with lumaramp's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::table::Axis;

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// Currently, the only such range is `0..=15` for the ANSI slots of a
/// [`ColorScheme`](crate::scheme::ColorScheme).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: usize, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self { value, expected }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is neither hashed hexadecimal nor a decimal triple.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A decimal triple that is missing a coordinate. For example, `12,,7`
    /// is missing the second coordinate.
    MissingCoordinate,

    /// A decimal triple with a coordinate larger than 255.
    OversizedCoordinate,

    /// A hashed color with a malformed hexadecimal number, e.g., `#efg`.
    MalformedHex,

    /// A decimal triple with a malformed number, e.g., `1,2,x`.
    MalformedDecimal,

    /// A decimal triple with more than three coordinates.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should be `#rgb`, `#rrggbb`, or `r,g,b` but is not")
            }
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            OversizedCoordinate => {
                f.write_str("color format coordinates should be at most 255 but one is larger")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedDecimal => {
                f.write_str("color format coordinates should be decimal integers but are not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A configuration error.
///
/// Configuration errors are fatal and reported before any solving begins.
/// They are distinct from a solver coming up empty, which is a regular outcome
/// represented by `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A table's axis roles do not include the axis.
    MissingAxis(Axis),

    /// A name that does not denote hue, saturation, or luma.
    UnknownAxis(String),

    /// An axis with a different number of labels than values.
    LabelCount {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// A palette role whose hue is neither defined directly nor after
    /// stripping the `br` prefix.
    UnresolvedHue(String),

    /// A gray set with the wrong number of target lumas.
    WrongLumaCount { expected: usize, actual: usize },

    /// A name that does not denote a luma algorithm.
    UnknownLumaAlgorithm(String),

    /// A hue that is neither `none` nor a number of degrees.
    MalformedHue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ConfigError::*;

        match self {
            MissingAxis(axis) => write!(f, "table axes should include {} but do not", axis.name()),
            UnknownAxis(name) => write!(
                f,
                "axis should be `hue`, `saturation`, or `luma` but is `{}`",
                name
            ),
            LabelCount {
                axis,
                expected,
                actual,
            } => write!(
                f,
                "{} axis should have {} labels but has {}",
                axis.name(),
                expected,
                actual
            ),
            UnresolvedHue(role) => write!(f, "could not resolve hue for color role `{}`", role),
            WrongLumaCount { expected, actual } => write!(
                f,
                "gray set should have {} target lumas but has {}",
                expected, actual
            ),
            UnknownLumaAlgorithm(name) => write!(
                f,
                "luma algorithm should be `w3c`, `rec709`, or `quadratic` but is `{}`",
                name
            ),
            MalformedHue(text) => write!(
                f,
                "hue should be `none` or a number of degrees but is `{}`",
                text
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(feature = "pyffi")]
impl From<ConfigError> for PyErr {
    fn from(value: ConfigError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
