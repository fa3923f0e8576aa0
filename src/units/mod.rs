
//! Physical quantities, their units, and measured values.

pub mod catalog;
pub mod convert;
pub mod dimension;
pub mod error;
pub mod ops;
pub mod quantity;
pub mod relation;
pub mod system;
pub mod undefined;
pub mod unit;
pub mod value;

#[cfg(test)]
pub(crate) mod test_utils;

pub use catalog::*;
pub use error::DimensionMismatchError;
pub use quantity::{Quantity, PhysicalQuantity, UndefinedQuantity};
pub use relation::{Multiply, Divide, Invert, DerivedFrom};
pub use system::{MeasurementSystem, MeasurementSystems};
pub use undefined::{Wrapped, Inverted, Divided, Reciprocal, UndefinedUnit, IntoUndefined, UnitAlgebra};
pub use unit::{ScientificUnit, DefinedUnit};
pub use value::ScientificValue;
