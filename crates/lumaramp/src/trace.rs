//! Diagnostics for the color solver.
//!
//! The solver reports what it does to a [`Trace`] passed in by the caller.
//! [`LogTrace`] forwards events to the [`log`] facade, [`NoTrace`] discards
//! them, and `Vec<TraceEvent>` records them for later inspection.

use crate::{Branch, Float, Hue, Rgb};

/// An event during solving.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// The hue has no ratio vector and falls back onto the achromatic ramp.
    UnknownHue { hue: Hue },

    /// A ramp color has a channel outside `0..=255` and is not admissible.
    OutOfRange {
        branch: Branch,
        index: u8,
        coordinates: [Float; 3],
    },

    /// A ramp color's hue or saturation is too far off.
    Filtered {
        branch: Branch,
        index: u8,
        color: Rgb,
        hue_diff: Float,
        saturation_diff: Float,
    },

    /// The number of admitted candidates per branch.
    Admitted { low: usize, high: usize },

    /// The scan of a branch stopped because all remaining candidates are too
    /// far off in luma.
    Break {
        branch: Branch,
        index: u8,
        luma: Float,
    },

    /// A candidate was skipped because its luma is too far off.
    Skip {
        branch: Branch,
        index: u8,
        luma: Float,
    },

    /// A candidate was scored.
    Scored {
        branch: Branch,
        index: u8,
        color: Rgb,
        deviation: Float,
        luma: Float,
    },

    /// No candidate is within tolerance for the target luma.
    NotFound { target: Float },
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TraceEvent::*;

        match self {
            UnknownHue { hue } => write!(f, "no ratio vector for hue {}, using grays", hue),
            OutOfRange {
                branch,
                index,
                coordinates,
            } => write!(
                f,
                "{} i={} out of range, coordinates={:?}",
                branch, index, coordinates
            ),
            Filtered {
                branch,
                index,
                color,
                hue_diff,
                saturation_diff,
            } => write!(
                f,
                "filter {} i={}, RGB={}, diff=[{:.4}, {:.4}]",
                branch, index, color, hue_diff, saturation_diff
            ),
            Admitted { low, high } => write!(f, "count(low)={}, count(high)={}", low, high),
            Break {
                branch,
                index,
                luma,
            } => write!(f, "break {} at i={}, luma={:.4}", branch, index, luma),
            Skip {
                branch,
                index,
                luma,
            } => write!(f, "skip {} at i={}, luma={:.4}", branch, index, luma),
            Scored {
                branch,
                index,
                color,
                deviation,
                luma,
            } => write!(
                f,
                "calculate {} at i={}, RGB={}, dev={:.4}, luma={:.4}",
                branch, index, color, deviation, luma
            ),
            NotFound { target } => write!(f, "no color for luma {}%", target),
        }
    }
}

/// A sink for solver events.
pub trait Trace {
    /// Record the event.
    fn record(&mut self, event: &TraceEvent);
}

/// A trace that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn record(&mut self, _: &TraceEvent) {}
}

impl Trace for Vec<TraceEvent> {
    fn record(&mut self, event: &TraceEvent) {
        self.push(event.clone());
    }
}

/// A trace that forwards events to the `log` facade.
///
/// Unknown hues and out-of-range coordinates are always logged as warnings.
/// All other events are logged as debug messages, but only if the trace is
/// verbose.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace {
    verbose: bool,
}

impl LogTrace {
    /// Create a new trace that only logs warnings.
    pub const fn quiet() -> Self {
        Self { verbose: false }
    }

    /// Create a new trace that logs all events.
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }

    /// Determine whether this trace logs all events.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Trace for LogTrace {
    fn record(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::UnknownHue { .. } | TraceEvent::OutOfRange { .. } => {
                log::warn!("{}", event)
            }
            _ if self.verbose => log::debug!("{}", event),
            _ => (),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{LogTrace, Trace, TraceEvent};
    use crate::{Branch, Hue, Rgb};

    #[test]
    fn test_display() {
        assert_eq!(
            TraceEvent::UnknownHue {
                hue: Hue::Degrees(15.0)
            }
            .to_string(),
            "no ratio vector for hue 15, using grays"
        );
        assert_eq!(
            TraceEvent::Break {
                branch: Branch::Low,
                index: 3,
                luma: 12.5
            }
            .to_string(),
            "break low at i=3, luma=12.5000"
        );
        assert_eq!(
            TraceEvent::Filtered {
                branch: Branch::High,
                index: 1,
                color: Rgb::new(1, 1, 0),
                hue_diff: 15.0,
                saturation_diff: 0.0,
            }
            .to_string(),
            "filter high i=1, RGB=#010100, diff=[15.0000, 0.0000]"
        );
    }

    #[test]
    fn test_verbosity() {
        assert!(LogTrace::verbose().is_verbose());
        assert!(!LogTrace::quiet().is_verbose());
        assert!(!LogTrace::default().is_verbose());
    }

    #[test]
    fn test_record() {
        let mut events: Vec<TraceEvent> = Vec::new();
        events.record(&TraceEvent::Admitted { low: 2, high: 3 });
        assert_eq!(events, vec![TraceEvent::Admitted { low: 2, high: 3 }]);
    }
}
