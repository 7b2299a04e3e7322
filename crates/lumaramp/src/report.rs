//! Textual reports on color schemes and colors.
//!
//! All reports are [`Display`](std::fmt::Display) wrappers, so they can be
//! written to any formatter without intermediate strings.

use crate::error::ColorFormatError;
use crate::scheme::{ColorScheme, ACCENT_ROLES, ANSI_ROLES};
use crate::{LumaAlgorithm, Rgb};

const NOT_FOUND: &str = "     <not found>";

fn write_label(f: &mut std::fmt::Formatter<'_>, role: &str) -> std::fmt::Result {
    write!(f, "{:<10}:", role)
}

fn write_color(f: &mut std::fmt::Formatter<'_>, color: Option<Rgb>) -> std::fmt::Result {
    let Some(color) = color else {
        return writeln!(f, "{}", NOT_FOUND);
    };

    let [r, g, b] = color.coordinates();
    writeln!(f, " {}   {:3},{:3},{:3}", color, r, g, b)
}

/// The scheme report.
///
/// The report lists the ANSI roles and then the accents, one line per role
/// with either hexadecimal and decimal coordinates or `<not found>`.
#[derive(Clone, Copy, Debug)]
pub struct SchemeReport<'a> {
    scheme: &'a ColorScheme,
}

impl<'a> SchemeReport<'a> {
    /// Create a new scheme report.
    pub fn new(scheme: &'a ColorScheme) -> Self {
        Self { scheme }
    }
}

impl std::fmt::Display for SchemeReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<Colorscheme>")?;
        for role in ANSI_ROLES {
            write_label(f, role)?;
            write_color(f, self.scheme.get(role))?;
        }
        writeln!(f)?;
        for role in ACCENT_ROLES {
            write_label(f, role)?;
            write_color(f, self.scheme.get(role))?;
        }
        writeln!(f)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color's coordinates, HSL, HSV, and luma.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorDetail {
    color: Option<Rgb>,
    algorithm: LumaAlgorithm,
}

impl ColorDetail {
    /// Create a new color detail.
    pub fn new(color: Option<Rgb>, algorithm: LumaAlgorithm) -> Self {
        Self { color, algorithm }
    }

    /// Parse a color string and create a new color detail.
    pub fn parse(s: &str, algorithm: LumaAlgorithm) -> Result<Self, ColorFormatError> {
        Ok(Self::new(Some(s.parse()?), algorithm))
    }
}

impl std::fmt::Display for ColorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_color(f, self.color)?;

        if let Some(color) = self.color {
            let [h, s, l] = color.to_hsl();
            writeln!(
                f,
                "  HSL = {:.2}, {:.4}, {:.4} (Hue Saturation% Lightness%)",
                h, s, l
            )?;
            let [h, s, v] = color.to_hsv();
            writeln!(
                f,
                "  HSV = {:.2}, {:.4}, {:.4} (Hue Saturation% Value%)",
                h, s, v
            )?;
            writeln!(f, "  Luma% = {:.4}", color.luma(self.algorithm) * 100.0)?;
        }

        Ok(())
    }
}

/// Describe a color string on its own.
///
/// ```
/// # use lumaramp::{LumaAlgorithm, report::describe};
/// let text = describe("#000", LumaAlgorithm::W3c)?;
/// assert!(text.starts_with("Color:\n #000000     0,  0,  0\n"));
/// # Ok::<(), lumaramp::error::ColorFormatError>(())
/// ```
pub fn describe(s: &str, algorithm: LumaAlgorithm) -> Result<String, ColorFormatError> {
    let detail = ColorDetail::parse(s, algorithm)?;
    Ok(format!("Color:\n{}", detail))
}

/// The detailed scheme report.
///
/// In addition to the roles of the [`SchemeReport`], this report also
/// includes all other roles of the scheme.
#[derive(Clone, Copy, Debug)]
pub struct SchemeDetails<'a> {
    scheme: &'a ColorScheme,
    algorithm: LumaAlgorithm,
}

impl<'a> SchemeDetails<'a> {
    /// Create a new detailed scheme report.
    pub fn new(scheme: &'a ColorScheme, algorithm: LumaAlgorithm) -> Self {
        Self { scheme, algorithm }
    }

    fn write_role(&self, f: &mut std::fmt::Formatter<'_>, role: &str) -> std::fmt::Result {
        write_label(f, role)?;
        write!(f, "{}", ColorDetail::new(self.scheme.get(role), self.algorithm))
    }
}

impl std::fmt::Display for SchemeDetails<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<Details>")?;
        for role in ANSI_ROLES {
            self.write_role(f, role)?;
        }
        writeln!(f)?;
        for role in ACCENT_ROLES {
            self.write_role(f, role)?;
        }

        let mut extras = self
            .scheme
            .roles()
            .filter(|role| !ANSI_ROLES.contains(role) && !ACCENT_ROLES.contains(role))
            .peekable();
        if extras.peek().is_some() {
            writeln!(f)?;
        }
        for role in extras {
            self.write_role(f, role)?;
        }

        Ok(())
    }
}
