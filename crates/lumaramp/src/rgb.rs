use crate::core::{from_24bit, parse, rgb_to_hsl, rgb_to_hsv};
use crate::error::ColorFormatError;
use crate::{Float, LumaAlgorithm};

/// A 24-bit RGB color.
///
/// This is the solver's result type. Displaying a color produces its hashed
/// hexadecimal notation with uppercase digits, e.g., `#E61E1E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new RGB color from rounded floating point coordinates.
    ///
    /// This associated function returns `None` if any coordinate is not an
    /// integer in `0..=255`. It does not clamp.
    pub fn from_rounded(coordinates: &[Float; 3]) -> Option<Self> {
        fn convert(c: Float) -> Option<u8> {
            if (0.0..=255.0).contains(&c) && c.fract() == 0.0 {
                Some(c as u8)
            } else {
                None
            }
        }

        let [r, g, b] = *coordinates;
        Some(Self([convert(r)?, convert(g)?, convert(b)?]))
    }

    /// Access this color's coordinates.
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this color to unit-scaled floating point coordinates.
    pub fn to_unit(&self) -> [Float; 3] {
        let [r, g, b] = self.0;
        from_24bit(r, g, b)
    }

    /// Convert this color to HSL.
    ///
    /// The hue is in degrees `0..360`, saturation and lightness are
    /// percentages `0..=100`. Grays have hue 0 and saturation 0.
    pub fn to_hsl(&self) -> [Float; 3] {
        let [h, s, l] = rgb_to_hsl(&self.to_unit());
        [h, s * 100.0, l * 100.0]
    }

    /// Convert this color to HSV.
    ///
    /// The hue is in degrees `0..360`, saturation and value are percentages
    /// `0..=100`.
    pub fn to_hsv(&self) -> [Float; 3] {
        let [h, s, v] = rgb_to_hsv(&self.to_unit());
        [h, s * 100.0, v * 100.0]
    }

    /// Estimate this color's brightness with the given algorithm.
    pub fn luma(&self, algorithm: LumaAlgorithm) -> Float {
        algorithm.luma(self)
    }

    /// Determine whether this color is a gray.
    pub fn is_gray(&self) -> bool {
        let [r, g, b] = self.0;
        r == g && g == b
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse `#rgb`, `#rrggbb`, the same without hash, or a decimal `r,g,b`
    /// triple.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Rgb)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        let hex = format!("#{:02X}{:02X}{:02X}", r, g, b);
        f.pad(&hex)
    }
}
