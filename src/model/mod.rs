pub mod degraded;
pub mod standing;

pub use degraded::{Degradation, Degraded};
pub use standing::{field, Record, StandingRow};
