
//! Exact conversion and algebra over physical quantities.
//!
//! Every unit is a value of a Rust type that stands for its quantity,
//! so converting a length into a mass, or adding a force to an
//! energy, is rejected at compile time. Magnitudes are exact
//! rationals; rounding only happens on request.

pub mod config;
pub mod decimal;
pub mod error;
pub mod units;
pub mod util;

pub use config::ConversionSettings;
pub use decimal::{Decimal, Rounding, RoundingMode, HalfUpBehavior};
pub use error::Error;
pub use units::{ScientificValue, ScientificUnit, DefinedUnit};
