//! Print the luma chart for the nicer hues at full saturation.
//!
//! Any arguments are treated as color strings and described after the chart,
//! e.g., `cargo run --example luma_table -- c1deff 6F9FCF "147,183,219"`.

#![allow(clippy::print_stdout)]

use lumaramp::report::describe;
use lumaramp::scheme::NICER_HUES;
use lumaramp::table::ColorTable;
use lumaramp::{LumaAlgorithm, Solver};

const NAMES: [&str; 7] = ["Red", "Green", "Blue", "Yellow", "Cyan", "Magenta", "White"];

fn main() -> Result<(), anyhow::Error> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;

    let algorithm = LumaAlgorithm::from_environment()?;
    let hues = NAMES
        .iter()
        .map(|name| NICER_HUES.resolve(name))
        .collect::<Result<Vec<_>, _>>()?;
    let lumas = (1..10).map(|l| (10 * l) as lumaramp::Float).collect::<Vec<_>>();

    let table = ColorTable::luma_sweep(&Solver::new(algorithm), &NAMES, &hues, 100.0, &lumas)?;
    print!("{}", table);

    for color in std::env::args().skip(1) {
        print!("{}", describe(&color, algorithm)?);
    }

    Ok(())
}
