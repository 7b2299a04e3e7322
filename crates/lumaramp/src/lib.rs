//! # Luma 🌗 Ramp
//!
//! Lumaramp derives a terminal color palette, i.e., the 16 ANSI colors plus a
//! handful of accent colors, from perceptual targets. Instead of hand-picking
//! RGB triples, you state a hue, a saturation percentage, and one or more luma
//! percentages, and lumaramp searches the 24-bit RGB space for the closest
//! matching color.
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Lumaramp's main abstractions are:
//!
//!   * [`LumaAlgorithm`] selects one of three **brightness estimators**. The
//!     choice applies to a whole run and is part of every palette's identity.
//!   * [`Solver`] implements the **color solver**. For a [`Hue`] and a
//!     saturation, it builds two monotonic 256-step RGB ramps, keeps the steps
//!     that fall within a hue/saturation tolerance window, and then picks the
//!     candidate with the smallest weighted deviation for each target luma.
//!     A target without admissible candidate yields `None`, which is distinct
//!     from black.
//!   * The [`table`] module sweeps hue, saturation, and luma across value
//!     sets and renders the solver's results as a paginated text table.
//!   * The [`scheme`] module assembles complete [`ColorScheme`](scheme::ColorScheme)s
//!     from hue tables and presets, and the [`report`] module formats them.
//!   * [`Trace`](trace::Trace) receives the solver's diagnostics. [`LogTrace`](trace::LogTrace)
//!     forwards them to the [`log`](https://crates.io/crates/log) facade.
//!
//!
//! ## 2. Solving Colors
//!
//! ```
//! # use lumaramp::{Hue, LumaAlgorithm, Solver};
//! let solver = Solver::new(LumaAlgorithm::Quadratic);
//! let grays = solver.solve(Hue::Achromatic, 0.0, &[0.0, 40.0, 70.0, 100.0]);
//! assert_eq!(grays.len(), 4);
//! for gray in grays {
//!     let [r, g, b] = *gray.expect("grays always resolve").as_ref();
//!     assert!(r == g && g == b);
//! }
//!
//! let red = solver.solve(Hue::Degrees(0.0), 80.0, &[50.0]);
//! assert!(red[0].is_some());
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Lumaramp supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!   - **`pyffi`** controls lumaramp's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod error;
mod ramp;
pub mod report;
mod rgb;
pub mod scheme;
mod solver;
pub mod table;
pub mod trace;
mod util;

pub use core::LumaAlgorithm;
pub use ramp::{Ramp, RampStep};
pub use rgb::Rgb;
pub use solver::{solve_colors, Branch, Candidate, Candidates, Hue, Solver};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn lumaramp(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<LumaAlgorithm>()?;
    m.add_function(wrap_pyfunction!(solver::py_solve_colors, m)?)?;
    m.add_function(wrap_pyfunction!(table::py_render_table, m)?)?;
    Ok(())
}
