//! Assembling color schemes from perceptual targets.
//!
//! A [`ColorScheme`] maps role names such as `Red`, `brBlack`, or
//! `Background` to solved colors. It is built from sets that share one
//! [`Tone`], from per-role [`RoleHueSpec`]s, or all at once from a
//! [`Preset`]. Every builder resolves all hues before solving anything, so
//! that a [`ConfigError`] never leaves a half-built scheme behind.

use indexmap::IndexMap;

use crate::error::{ConfigError, OutOfBoundsError};
use crate::trace::LogTrace;
use crate::{Float, Hue, Rgb, Solver};

/// The 16 ANSI roles in report order.
pub const ANSI_ROLES: [&str; 16] = [
    "Black",
    "Red",
    "Green",
    "Blue",
    "Yellow",
    "Cyan",
    "Magenta",
    "White",
    "brBlack",
    "brRed",
    "brGreen",
    "brBlue",
    "brYellow",
    "brCyan",
    "brMagenta",
    "brWhite",
];

/// The 16 ANSI roles in escape code order, i.e., indexed by slot.
pub const ANSI_SLOTS: [&str; 16] = [
    "Black",
    "Red",
    "Green",
    "Yellow",
    "Blue",
    "Magenta",
    "Cyan",
    "White",
    "brBlack",
    "brRed",
    "brGreen",
    "brYellow",
    "brBlue",
    "brMagenta",
    "brCyan",
    "brWhite",
];

/// The user interface accents in report order.
pub const ACCENT_ROLES: [&str; 5] = ["Background", "Foreground", "SelectBg", "SelectFg", "Links"];

/// The achromatic roles, from darkest to brightest.
pub const GRAY_ROLES: [&str; 4] = ["Black", "brBlack", "White", "brWhite"];

/// The regular chromatic roles.
pub const DARK_ROLES: [&str; 6] = ["Red", "Green", "Blue", "Yellow", "Cyan", "Magenta"];

/// The bright chromatic roles.
pub const LIGHT_ROLES: [&str; 6] = [
    "brRed",
    "brGreen",
    "brBlue",
    "brYellow",
    "brCyan",
    "brMagenta",
];

// ====================================================================================================================

/// A color scheme.
///
/// A color scheme maps role names to solved colors, with `None` standing in
/// for targets the solver could not match. Roles keep their insertion order
/// and inserting an existing role replaces its color in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorScheme {
    colors: IndexMap<String, Option<Rgb>>,
}

impl ColorScheme {
    /// Create a new, empty color scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the color for the role.
    ///
    /// This method returns the previous color if the role was present.
    pub fn insert<S: Into<String>>(&mut self, role: S, color: Option<Rgb>) -> Option<Option<Rgb>> {
        self.colors.insert(role.into(), color)
    }

    /// Determine whether this scheme has an entry for the role, found or not.
    pub fn contains(&self, role: &str) -> bool {
        self.colors.contains_key(role)
    }

    /// Get the color for the role.
    ///
    /// This method returns `None` if the role has no entry or the solver did
    /// not find a color for the role.
    pub fn get(&self, role: &str) -> Option<Rgb> {
        self.colors.get(role).copied().flatten()
    }

    /// Get the number of roles.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determine whether this scheme has no roles.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get an iterator over the roles and colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Rgb>)> {
        self.colors.iter().map(|(role, color)| (role.as_str(), *color))
    }

    /// Get an iterator over the roles in insertion order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Merge the other scheme into this one.
    ///
    /// Roles of the other scheme replace existing roles in place and are
    /// appended otherwise.
    pub fn merge(&mut self, other: ColorScheme) {
        self.colors.extend(other.colors);
    }

    /// Get the color for the ANSI slot.
    ///
    /// Slots are numbered as in escape codes, with 0 for black and 15 for
    /// bright white.
    pub fn ansi(&self, slot: usize) -> Result<Option<Rgb>, OutOfBoundsError> {
        ANSI_SLOTS
            .get(slot)
            .map(|role| self.get(role))
            .ok_or_else(|| OutOfBoundsError::new(slot, 0..=15))
    }

    /// Get the colors for all 16 ANSI slots.
    pub fn to_ansi_slots(&self) -> [Option<Rgb>; 16] {
        ANSI_SLOTS.map(|role| self.get(role))
    }
}

impl<S: Into<String>> FromIterator<(S, Option<Rgb>)> for ColorScheme {
    fn from_iter<I: IntoIterator<Item = (S, Option<Rgb>)>>(iter: I) -> Self {
        let mut scheme = Self::new();
        scheme.extend(iter);
        scheme
    }
}

impl<S: Into<String>> Extend<(S, Option<Rgb>)> for ColorScheme {
    fn extend<I: IntoIterator<Item = (S, Option<Rgb>)>>(&mut self, iter: I) {
        for (role, color) in iter {
            self.insert(role, color);
        }
    }
}

// ====================================================================================================================

/// A table from role names to hues.
///
/// Bright roles without entry of their own fall back on the hue of the role
/// without `br` prefix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueTable {
    entries: &'static [(&'static str, Hue)],
}

/// The textbook hues.
pub const STANDARD_HUES: HueTable = HueTable::new(&[
    ("Red", Hue::Degrees(0.0)),
    ("Green", Hue::Degrees(120.0)),
    ("Blue", Hue::Degrees(240.0)),
    ("Yellow", Hue::Degrees(60.0)),
    ("Cyan", Hue::Degrees(180.0)),
    ("Magenta", Hue::Degrees(300.0)),
    ("White", Hue::Achromatic),
]);

/// Hues with a lighter blue and a more golden yellow.
pub const NICER_HUES: HueTable = HueTable::new(&[
    ("Red", Hue::Degrees(0.0)),
    ("Green", Hue::Degrees(120.0)),
    ("Blue", Hue::Degrees(225.0)),
    ("Yellow", Hue::Degrees(45.0)),
    ("Cyan", Hue::Degrees(180.0)),
    ("Magenta", Hue::Degrees(300.0)),
    ("White", Hue::Achromatic),
]);

impl HueTable {
    /// Create a new hue table with the given entries.
    pub const fn new(entries: &'static [(&'static str, Hue)]) -> Self {
        Self { entries }
    }

    /// Look up the role's own entry.
    pub fn get(&self, role: &str) -> Option<Hue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, hue)| *hue)
    }

    /// Resolve the hue for the role.
    ///
    /// This method first looks up the role itself and then, for roles
    /// starting with `br`, the role without that prefix.
    pub fn resolve(&self, role: &str) -> Result<Hue, ConfigError> {
        self.get(role)
            .or_else(|| role.strip_prefix("br").and_then(|base| self.get(base)))
            .ok_or_else(|| ConfigError::UnresolvedHue(role.to_string()))
    }

    /// Resolve the hues for all roles, failing on the first unresolved one.
    pub fn resolve_all<'a>(&self, roles: &[&'a str]) -> Result<Vec<(&'a str, Hue)>, ConfigError> {
        roles
            .iter()
            .map(|role| self.resolve(role).map(|hue| (*role, hue)))
            .collect()
    }
}

/// A saturation and luma shared by a set of roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub saturation: Float,
    pub luma: Float,
}

impl Tone {
    /// Create a new tone.
    pub const fn new(saturation: Float, luma: Float) -> Self {
        Self { saturation, luma }
    }
}

/// The perceptual target for one role.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleHueSpec {
    pub role: String,
    pub hue: Hue,
    pub saturation: Float,
    pub luma: Float,
    /// Log every solver step for this role.
    pub debug: bool,
}

impl RoleHueSpec {
    /// Create a new role specification.
    pub fn new<S: Into<String>>(role: S, hue: Hue, saturation: Float, luma: Float) -> Self {
        Self {
            role: role.into(),
            hue,
            saturation,
            luma,
            debug: false,
        }
    }

    /// Create a new role specification with a shared tone.
    pub fn with_tone<S: Into<String>>(role: S, hue: Hue, tone: Tone) -> Self {
        Self::new(role, hue, tone.saturation, tone.luma)
    }

    /// Turn on verbose tracing for this role.
    #[must_use = "method returns a new specification and does not mutate self"]
    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn solve_one(solver: &Solver, hue: Hue, saturation: Float, luma: Float, debug: bool) -> Option<Rgb> {
    let mut trace = if debug {
        LogTrace::verbose()
    } else {
        LogTrace::quiet()
    };

    solver
        .solve_with(hue, saturation, &[luma], &mut trace)
        .into_iter()
        .next()
        .flatten()
}

/// Solve the achromatic roles.
///
/// The four lumas are for black, bright black, white, and bright white, in
/// that order. They are solved with one solver invocation.
pub fn grays(solver: &Solver, lumas: &[Float]) -> Result<ColorScheme, ConfigError> {
    if lumas.len() != GRAY_ROLES.len() {
        return Err(ConfigError::WrongLumaCount {
            expected: GRAY_ROLES.len(),
            actual: lumas.len(),
        });
    }

    let colors = solver.solve(Hue::Achromatic, 0.0, lumas);
    Ok(GRAY_ROLES.into_iter().zip(colors).collect())
}

fn tone_set(
    solver: &Solver,
    hues: &HueTable,
    roles: &[&str],
    tone: Tone,
) -> Result<ColorScheme, ConfigError> {
    let resolved = hues.resolve_all(roles)?;
    Ok(resolved
        .into_iter()
        .map(|(role, hue)| (role, solve_one(solver, hue, tone.saturation, tone.luma, false)))
        .collect())
}

/// Solve the regular chromatic roles with the same tone.
pub fn dark_set(solver: &Solver, hues: &HueTable, tone: Tone) -> Result<ColorScheme, ConfigError> {
    tone_set(solver, hues, &DARK_ROLES, tone)
}

/// Solve the bright chromatic roles with the same tone.
pub fn light_set(solver: &Solver, hues: &HueTable, tone: Tone) -> Result<ColorScheme, ConfigError> {
    tone_set(solver, hues, &LIGHT_ROLES, tone)
}

/// Solve each role specification on its own.
pub fn from_definitions(solver: &Solver, specs: &[RoleHueSpec]) -> ColorScheme {
    specs
        .iter()
        .map(|spec| {
            let color = solve_one(solver, spec.hue, spec.saturation, spec.luma, spec.debug);
            (spec.role.clone(), color)
        })
        .collect()
}

// ====================================================================================================================

/// A complete recipe for a color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub grays: [Float; 4],
    pub dark: Tone,
    pub light: Tone,
    pub hues: HueTable,
    pub accents: Vec<RoleHueSpec>,
}

impl Preset {
    /// Get the recipe for ZDark, a dark scheme with muted accents.
    pub fn zdark() -> Self {
        let dark = Tone::new(90.0, 60.0);

        Self {
            grays: [0.0, 40.0, 70.0, 100.0],
            dark,
            light: Tone::new(60.0, 80.0),
            hues: NICER_HUES,
            accents: vec![
                RoleHueSpec::new("Background", Hue::Degrees(210.0), 10.0, 10.0),
                RoleHueSpec::new("Foreground", Hue::Degrees(30.0), 10.0, 90.0),
                RoleHueSpec::new("SelectBg", Hue::Degrees(210.0), 40.0, 60.0),
                RoleHueSpec::new("SelectFg", Hue::Achromatic, 0.0, 0.0),
                RoleHueSpec::with_tone("Links", Hue::Degrees(270.0), dark),
            ],
        }
    }

    /// Build the color scheme.
    ///
    /// The scheme has the grays first, followed by the regular and bright
    /// chromatic roles, and then the accents.
    pub fn build(&self, solver: &Solver) -> Result<ColorScheme, ConfigError> {
        // Fail before solving anything.
        self.hues.resolve_all(&DARK_ROLES)?;
        self.hues.resolve_all(&LIGHT_ROLES)?;

        log::debug!(
            "building scheme with {} luma, dark {:?}, light {:?}",
            solver.algorithm(),
            self.dark,
            self.light
        );

        let mut scheme = grays(solver, &self.grays)?;
        scheme.merge(dark_set(solver, &self.hues, self.dark)?);
        scheme.merge(light_set(solver, &self.hues, self.light)?);
        scheme.merge(from_definitions(solver, &self.accents));
        Ok(scheme)
    }
}

#[cfg(test)]
mod test {
    use super::{
        dark_set, from_definitions, grays, light_set, ColorScheme, HueTable, Preset, RoleHueSpec,
        Tone, ACCENT_ROLES, ANSI_ROLES, NICER_HUES, STANDARD_HUES,
    };
    use crate::error::{ConfigError, OutOfBoundsError};
    use crate::{Hue, LumaAlgorithm, Rgb, Solver};

    #[test]
    fn test_resolve() {
        assert_eq!(STANDARD_HUES.resolve("Blue"), Ok(Hue::Degrees(240.0)));
        assert_eq!(NICER_HUES.resolve("brBlue"), Ok(Hue::Degrees(225.0)));
        assert_eq!(NICER_HUES.resolve("brWhite"), Ok(Hue::Achromatic));
        assert_eq!(
            NICER_HUES.resolve("Orange"),
            Err(ConfigError::UnresolvedHue("Orange".to_string()))
        );
        assert_eq!(
            NICER_HUES.resolve("brOrange"),
            Err(ConfigError::UnresolvedHue("brOrange".to_string()))
        );

        const BRIGHT: HueTable = HueTable::new(&[
            ("Red", Hue::Degrees(0.0)),
            ("brRed", Hue::Degrees(330.0)),
        ]);
        assert_eq!(BRIGHT.resolve("brRed"), Ok(Hue::Degrees(330.0)));
    }

    #[test]
    fn test_unresolved_before_solving() {
        const PARTIAL: HueTable = HueTable::new(&[("Red", Hue::Degrees(0.0))]);
        let solver = Solver::new(LumaAlgorithm::Quadratic);
        assert_eq!(
            dark_set(&solver, &PARTIAL, Tone::new(90.0, 60.0)),
            Err(ConfigError::UnresolvedHue("Green".to_string()))
        );

        let mut preset = Preset::zdark();
        preset.hues = PARTIAL;
        assert_eq!(
            preset.build(&solver),
            Err(ConfigError::UnresolvedHue("Green".to_string()))
        );
    }

    #[test]
    fn test_grays() {
        let solver = Solver::new(LumaAlgorithm::Quadratic);
        assert_eq!(
            grays(&solver, &[0.0, 50.0, 100.0]),
            Err(ConfigError::WrongLumaCount {
                expected: 4,
                actual: 3
            })
        );

        let scheme = grays(&solver, &[0.0, 40.0, 70.0, 100.0]).expect("four lumas");
        assert_eq!(
            scheme.roles().collect::<Vec<_>>(),
            vec!["Black", "brBlack", "White", "brWhite"]
        );
        assert_eq!(scheme.get("Black"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(scheme.get("brWhite"), Some(Rgb::new(255, 255, 255)));
        assert!(scheme.get("White").is_some_and(|c| c.is_gray()));
    }

    #[test]
    fn test_light_set() {
        let solver = Solver::new(LumaAlgorithm::Quadratic);
        let tone = Tone::new(60.0, 80.0);
        let scheme = light_set(&solver, &NICER_HUES, tone).expect("all hues resolve");
        assert_eq!(scheme.len(), 6);

        // Bright roles fall back on the base hue.
        let direct = solver.solve(Hue::Degrees(45.0), tone.saturation, &[tone.luma])[0];
        assert_eq!(scheme.get("brYellow"), direct);
    }

    #[test]
    fn test_from_definitions() {
        let solver = Solver::new(LumaAlgorithm::Quadratic);
        let specs = vec![
            RoleHueSpec::new("SelectFg", Hue::Achromatic, 0.0, 0.0),
            RoleHueSpec::new("Trial", Hue::Degrees(270.0), 90.0, 60.0).debug(),
            RoleHueSpec::new("Nothing", Hue::Degrees(240.0), 100.0, 108.0),
        ];
        let scheme = from_definitions(&solver, &specs);

        assert_eq!(scheme.get("SelectFg"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(
            scheme.get("Trial"),
            solver.solve(Hue::Degrees(270.0), 90.0, &[60.0])[0]
        );
        assert!(scheme.contains("Nothing"));
        assert_eq!(scheme.get("Nothing"), None);
    }

    #[test]
    fn test_scheme() {
        let mut scheme: ColorScheme = [("Red", Some(Rgb::new(1, 2, 3))), ("Blue", None)]
            .into_iter()
            .collect();
        assert_eq!(
            scheme.insert("Red", Some(Rgb::new(3, 2, 1))),
            Some(Some(Rgb::new(1, 2, 3)))
        );
        assert_eq!(scheme.roles().collect::<Vec<_>>(), vec!["Red", "Blue"]);

        let update = [
            ("Green", Some(Rgb::new(0, 255, 0))),
            ("Blue", Some(Rgb::new(0, 0, 9))),
        ];
        scheme.merge(update.into_iter().collect());
        assert_eq!(scheme.roles().collect::<Vec<_>>(), vec!["Red", "Blue", "Green"]);
        assert_eq!(scheme.get("Blue"), Some(Rgb::new(0, 0, 9)));

        assert_eq!(scheme.ansi(1), Ok(Some(Rgb::new(3, 2, 1))));
        assert_eq!(scheme.ansi(4), Ok(Some(Rgb::new(0, 0, 9))));
        assert_eq!(scheme.ansi(0), Ok(None));
        assert_eq!(scheme.ansi(16), Err(OutOfBoundsError::new(16, 0..=15)));
    }

    #[test]
    fn test_zdark() {
        let solver = Solver::new(LumaAlgorithm::Quadratic);
        let scheme = Preset::zdark().build(&solver).expect("zdark resolves");

        assert_eq!(scheme.len(), 21);
        for role in ANSI_ROLES.iter().chain(ACCENT_ROLES.iter()) {
            assert!(scheme.contains(role), "scheme should contain {}", role);
        }
        assert_eq!(scheme.roles().next(), Some("Black"));
        assert_eq!(scheme.roles().last(), Some("Links"));

        let slots = scheme.to_ansi_slots();
        assert_eq!(slots[0], Some(Rgb::new(0, 0, 0)));
        assert_eq!(slots[15], Some(Rgb::new(255, 255, 255)));
        assert_eq!(slots[3], scheme.get("Yellow"));
        assert_eq!(slots[12], scheme.get("brBlue"));
        assert_eq!(scheme.get("SelectFg"), Some(Rgb::new(0, 0, 0)));

        if let Some(red) = scheme.get("Red") {
            assert!(red[1] <= red[0] && red[2] <= red[0]);
        }
    }
}
