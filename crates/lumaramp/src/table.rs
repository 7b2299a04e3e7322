//! Tables of solver results across parameter sweeps.
//!
//! A [`ColorTable`] sweeps hue, saturation, and luma across value sets and
//! lays the solver's results into a three-dimensional grid. Each of the three
//! quantities plays exactly one of the x, y, and z roles. Rendering produces
//! one block per z value, each paginated at [`ColorTable::PAGE_WIDTH`]
//! columns, with `<NotFound>` marking targets without match.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ConfigError;
use crate::{Float, Hue, Rgb, Solver};

/// One of the three swept quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Hue,
    Saturation,
    Luma,
}

impl Axis {
    /// Get this axis' name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Luma => "luma",
        }
    }

    /// Get the unit suffix for this axis' values.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Hue => "",
            Self::Saturation | Self::Luma => "%",
        }
    }

    /// Get the column header for this axis, e.g., `Luma%`.
    fn header(&self) -> String {
        let name = match self {
            Self::Hue => "Hue",
            Self::Saturation => "Sat",
            Self::Luma => "Luma",
        };
        format!("{}{}", name, self.unit())
    }
}

impl std::str::FromStr for Axis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hue" => Ok(Self::Hue),
            "saturation" | "sat" => Ok(Self::Saturation),
            "luma" => Ok(Self::Luma),
            _ => Err(ConfigError::UnknownAxis(s.to_string())),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The assignment of axes to the x, y, and z roles.
///
/// Each of hue, saturation, and luma appears exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisRoles {
    x: Axis,
    y: Axis,
    z: Axis,
}

impl AxisRoles {
    /// Create new axis roles.
    ///
    /// This associated function fails with [`ConfigError::MissingAxis`] if
    /// one of the three axes does not appear.
    pub fn new(x: Axis, y: Axis, z: Axis) -> Result<Self, ConfigError> {
        for axis in [Axis::Hue, Axis::Saturation, Axis::Luma] {
            if x != axis && y != axis && z != axis {
                return Err(ConfigError::MissingAxis(axis));
            }
        }

        Ok(Self { x, y, z })
    }

    /// Parse the names of the x, y, and z axes.
    pub fn parse(x: &str, y: &str, z: &str) -> Result<Self, ConfigError> {
        Self::new(x.parse()?, y.parse()?, z.parse()?)
    }

    /// Get the x axis.
    pub fn x(&self) -> Axis {
        self.x
    }

    /// Get the y axis.
    pub fn y(&self) -> Axis {
        self.y
    }

    /// Get the z axis.
    pub fn z(&self) -> Axis {
        self.z
    }
}

impl TryFrom<[Axis; 3]> for AxisRoles {
    type Error = ConfigError;

    fn try_from(value: [Axis; 3]) -> Result<Self, Self::Error> {
        let [x, y, z] = value;
        Self::new(x, y, z)
    }
}

/// The values for each axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisValues {
    pub hues: Vec<Hue>,
    pub saturations: Vec<Float>,
    pub lumas: Vec<Float>,
}

impl AxisValues {
    /// Get the number of values for the axis.
    pub fn len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Hue => self.hues.len(),
            Axis::Saturation => self.saturations.len(),
            Axis::Luma => self.lumas.len(),
        }
    }

    /// Get the default labels for the axis.
    fn labels(&self, axis: Axis) -> Vec<String> {
        match axis {
            Axis::Hue => self.hues.iter().map(ToString::to_string).collect(),
            Axis::Saturation => percentages(&self.saturations),
            Axis::Luma => percentages(&self.lumas),
        }
    }
}

fn percentages(values: &[Float]) -> Vec<String> {
    values.iter().map(|v| format!("{}%", v)).collect()
}

/// Custom labels for some axes.
///
/// Axes without custom labels are labelled with their values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisLabels {
    pub hues: Option<Vec<String>>,
    pub saturations: Option<Vec<String>>,
    pub lumas: Option<Vec<String>>,
}

impl AxisLabels {
    fn get(&self, axis: Axis) -> Option<&Vec<String>> {
        match axis {
            Axis::Hue => self.hues.as_ref(),
            Axis::Saturation => self.saturations.as_ref(),
            Axis::Luma => self.lumas.as_ref(),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A three-dimensional table of solver results.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    roles: AxisRoles,
    labels: [Vec<String>; 3],
    shape: [usize; 3],
    cells: Vec<Option<Rgb>>,
}

impl ColorTable {
    /// The maximum number of columns per page.
    pub const PAGE_WIDTH: usize = 10;

    /// The marker for targets without match.
    pub const NOT_FOUND: &'static str = "<NotFound>";

    /// Solve all combinations of axis values.
    ///
    /// This associated function invokes the solver once per combination of
    /// hue and saturation, with all lumas as targets. It fails if custom
    /// labels do not match the number of values.
    pub fn solve(
        solver: &Solver,
        roles: AxisRoles,
        values: &AxisValues,
        labels: &AxisLabels,
    ) -> Result<Self, ConfigError> {
        let axes = [roles.x, roles.y, roles.z];
        let mut all_labels: [Vec<String>; 3] = Default::default();
        for (slot, axis) in all_labels.iter_mut().zip(axes) {
            *slot = match labels.get(axis) {
                Some(custom) if custom.len() != values.len(axis) => {
                    return Err(ConfigError::LabelCount {
                        axis,
                        expected: values.len(axis),
                        actual: custom.len(),
                    })
                }
                Some(custom) => custom.clone(),
                None => values.labels(axis),
            };
        }

        let shape = axes.map(|axis| values.len(axis));
        let mut cells = vec![None; shape.iter().product()];

        for (hue_index, hue) in values.hues.iter().enumerate() {
            for (saturation_index, saturation) in values.saturations.iter().enumerate() {
                let colors = solver.solve(*hue, *saturation, &values.lumas);
                for (luma_index, color) in colors.into_iter().enumerate() {
                    let position = axes.map(|axis| match axis {
                        Axis::Hue => hue_index,
                        Axis::Saturation => saturation_index,
                        Axis::Luma => luma_index,
                    });
                    cells[Self::offset(&shape, &position)] = color;
                }
            }
        }

        Ok(Self {
            roles,
            labels: all_labels,
            shape,
            cells,
        })
    }

    /// Solve the classic luma chart for named hues at one saturation.
    ///
    /// The columns are the hues, labelled with the names, and the rows the
    /// lumas.
    pub fn luma_sweep(
        solver: &Solver,
        names: &[&str],
        hues: &[Hue],
        saturation: Float,
        lumas: &[Float],
    ) -> Result<Self, ConfigError> {
        let roles = AxisRoles::new(Axis::Hue, Axis::Luma, Axis::Saturation)?;
        let values = AxisValues {
            hues: hues.to_vec(),
            saturations: vec![saturation],
            lumas: lumas.to_vec(),
        };
        let labels = AxisLabels {
            hues: Some(names.iter().copied().map(String::from).collect()),
            ..Default::default()
        };

        Self::solve(solver, roles, &values, &labels)
    }

    fn offset(shape: &[usize; 3], position: &[usize; 3]) -> usize {
        (position[2] * shape[1] + position[1]) * shape[0] + position[0]
    }

    /// Get the axis roles.
    pub fn roles(&self) -> AxisRoles {
        self.roles
    }

    /// Get the number of x, y, and z values.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Get the result for the x, y, and z indices.
    ///
    /// # Panics
    ///
    /// This method panics if an index is out of bounds.
    pub fn cell(&self, x: usize, y: usize, z: usize) -> Option<Rgb> {
        assert!(
            x < self.shape[0] && y < self.shape[1] && z < self.shape[2],
            "cell ({}, {}, {}) outside table of shape {:?}",
            x,
            y,
            z,
            self.shape
        );
        self.cells[Self::offset(&self.shape, &[x, y, z])]
    }

    /// Render this table as text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ColorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x_labels, y_labels, z_labels] = &self.labels;
        let columns = self.shape[0];

        let y_header = self.roles.y.header();
        let y_width = y_labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(y_header.chars().count()))
            .max()
            .unwrap_or(0)
            + 1;
        let x_width = x_labels
            .iter()
            .map(|l| l.chars().count() + 1)
            .chain(std::iter::once(Self::NOT_FOUND.len()))
            .max()
            .unwrap_or(0);

        for (z, z_label) in z_labels.iter().enumerate() {
            writeln!(f, "{} = {}", self.roles.z.header(), z_label)?;

            for start in (0..columns).step_by(Self::PAGE_WIDTH) {
                let end = columns.min(start + Self::PAGE_WIDTH);

                write!(f, "{:<w$}", y_header, w = y_width)?;
                for label in &x_labels[start..end] {
                    write!(f, "{:>w$}", label, w = x_width)?;
                }
                writeln!(f)?;

                for (y, label) in y_labels.iter().enumerate() {
                    write!(f, "{:<w$}", label, w = y_width)?;
                    for x in start..end {
                        let text = self
                            .cell(x, y, z)
                            .map_or_else(|| Self::NOT_FOUND.to_string(), |c| c.to_string());
                        write!(f, "{:>w$}", text, w = x_width)?;
                    }
                    writeln!(f)?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

/// Solve and render a table in one go.
///
/// This function fails if the roles do not include all three axes or custom
/// labels do not match the values.
pub fn render_table(
    solver: &Solver,
    roles: [Axis; 3],
    values: &AxisValues,
    labels: Option<&AxisLabels>,
) -> Result<String, ConfigError> {
    let roles = AxisRoles::try_from(roles)?;
    let default_labels = AxisLabels::default();
    let labels = labels.unwrap_or(&default_labels);
    Ok(ColorTable::solve(solver, roles, values, labels)?.render())
}

/// Solve and render a table. <i class=python-only>Python only!</i>
///
/// The roles name the x, y, and z axes. Hues of `None` are achromatic.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "render_table")]
pub fn py_render_table(
    roles: [String; 3],
    hues: Vec<Option<Float>>,
    saturations: Vec<Float>,
    lumas: Vec<Float>,
    algorithm: crate::LumaAlgorithm,
) -> PyResult<String> {
    let [x, y, z] = roles;
    let roles = AxisRoles::parse(&x, &y, &z)?;
    let values = AxisValues {
        hues: hues.into_iter().map(Hue::from).collect(),
        saturations,
        lumas,
    };
    let table = ColorTable::solve(
        &Solver::new(algorithm),
        roles,
        &values,
        &AxisLabels::default(),
    )?;
    Ok(table.render())
}
