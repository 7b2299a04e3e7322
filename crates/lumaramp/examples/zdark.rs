//! Build the ZDark scheme and print its report.
//!
//! Pass `--details` for HSL, HSV, and luma readouts and `--verbose` for the
//! solver's debug log on stderr. Set `LUMARAMP_LUMA` to `w3c`, `rec709`, or
//! `quadratic` to pick the brightness estimator.

#![allow(clippy::print_stdout)]

use lumaramp::report::{SchemeDetails, SchemeReport};
use lumaramp::scheme::Preset;
use lumaramp::{LumaAlgorithm, Solver};

fn setup_logging(verbose: bool) -> Result<(), anyhow::Error> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let details = args.iter().any(|a| a == "--details");
    let verbose = args.iter().any(|a| a == "--verbose");
    setup_logging(verbose)?;

    let algorithm = LumaAlgorithm::from_environment()?;
    let mut preset = Preset::zdark();
    if verbose {
        preset.accents = preset.accents.into_iter().map(|a| a.debug()).collect();
    }

    let scheme = preset.build(&Solver::new(algorithm))?;
    print!("{}", SchemeReport::new(&scheme));
    if details {
        print!("{}", SchemeDetails::new(&scheme, algorithm));
    }

    Ok(())
}
