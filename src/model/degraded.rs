//! Fallback reporting
//!
//! Several steps have a sensible fallback instead of failing the run. Each one
//! that fires is recorded as a [`Degradation`] so callers and tests can see
//! which path was taken.

use std::fmt;
use std::path::PathBuf;

/// A fallback that was taken during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// The named worksheet does not exist; the first one was read instead
    WorksheetFallback { requested: String, used: String },
    /// A rank is not an integer, so rows were left in sheet order
    SortSkipped { rank: String },
    /// The configured font could not be used
    FontFallback { path: PathBuf, used: String },
    /// The configured text color could not be parsed; white was used
    ColorFallback { value: String },
    /// The base image is not the size the layout was measured on
    CanvasSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::WorksheetFallback { requested, used } => {
                write!(f, "worksheet '{}' not found, using '{}'", requested, used)
            }
            Degradation::SortSkipped { rank } => {
                write!(f, "rank '{}' is not a number, keeping sheet order", rank)
            }
            Degradation::FontFallback { path, used } => {
                write!(f, "font {} unavailable, using {}", path.display(), used)
            }
            Degradation::ColorFallback { value } => {
                write!(f, "color '{}' not recognised, using white", value)
            }
            Degradation::CanvasSizeMismatch { expected, actual } => write!(
                f,
                "base image is {}x{}, layout expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

/// A value together with the fallbacks taken to produce it
#[derive(Debug, Clone)]
pub struct Degraded<T> {
    pub value: T,
    pub degradations: Vec<Degradation>,
}

impl<T> Degraded<T> {
    /// A value produced without any fallback
    pub fn clean(value: T) -> Self {
        Self {
            value,
            degradations: Vec::new(),
        }
    }

    /// Record a fallback, logging it
    pub fn degrade(&mut self, degradation: Degradation) {
        log::warn!("{}", degradation);
        self.degradations.push(degradation);
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    /// Split into the value and its degradations
    pub fn into_parts(self) -> (T, Vec<Degradation>) {
        (self.value, self.degradations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_is_not_degraded() {
        let value = Degraded::clean(3);
        assert!(!value.is_degraded());
        assert_eq!(value.value, 3);
    }

    #[test]
    fn test_degrade_records_reason() {
        let mut value = Degraded::clean("rows");
        value.degrade(Degradation::SortSkipped {
            rank: "x".to_string(),
        });
        assert!(value.is_degraded());
        let (_, reasons) = value.into_parts();
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].to_string().contains("'x'"));
    }
}
