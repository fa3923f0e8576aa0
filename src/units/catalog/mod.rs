
//! The named-quantity unit catalog.
//!
//! Each quantity is an enum of its units. Every unit carries an exact
//! rational factor relative to the canonical (coherent SI) unit of
//! its quantity, so conversions within a quantity never lose
//! precision.

use crate::decimal::Decimal;

/// Factor helper for the catalog tables. Taking `i64` arguments lets
/// the tables use unsuffixed literals beyond the `i32` range.
pub(crate) fn ratio(numer: i64, denom: i64) -> Decimal {
  Decimal::ratio(numer, denom)
}

/// Declares a quantity's unit enum together with its symbols,
/// unit-system memberships, canonical factors, and natural-unit
/// policy.
macro_rules! unit_catalog {
  (
    $(#[$meta: meta])*
    pub enum $name: ident for $quantity: ident {
      $(
        $(#[$vmeta: meta])*
        $variant: ident => $symbol: literal, $systems: ident, $numer: literal / $denom: literal;
      )+
    }
    canonical: $canonical: ident;
    natural {
      metric: $metric: ident,
      imperial: $imperial: ident,
      uk_imperial: $uk: ident,
      us_customary: $us: ident $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum $name {
      $(
        $(#[$vmeta])*
        $variant,
      )+
    }

    impl $name {
      pub const ALL: &'static [$name] = &[$($name::$variant),+];

      /// The amount of the canonical unit that is equal to one of
      /// this unit.
      pub fn factor(self) -> $crate::decimal::Decimal {
        match self {
          $( $name::$variant => $crate::units::catalog::ratio($numer, $denom), )+
        }
      }
    }

    impl $crate::units::unit::ScientificUnit for $name {
      fn symbol(&self) -> String {
        match self {
          $( $name::$variant => String::from($symbol), )+
        }
      }

      fn quantity(&self) -> $crate::units::quantity::Quantity {
        $crate::units::quantity::Quantity::Defined($crate::units::quantity::PhysicalQuantity::$quantity)
      }

      fn systems(&self) -> $crate::units::system::MeasurementSystems {
        match self {
          $( $name::$variant => $crate::units::system::MeasurementSystems::$systems, )+
        }
      }

      fn to_canonical(&self, value: &$crate::decimal::Decimal) -> $crate::decimal::Decimal {
        value * &self.factor()
      }

      fn from_canonical(&self, value: &$crate::decimal::Decimal) -> $crate::decimal::Decimal {
        value / &self.factor()
      }
    }

    impl $crate::units::unit::DefinedUnit for $name {
      const QUANTITY: $crate::units::quantity::PhysicalQuantity = $crate::units::quantity::PhysicalQuantity::$quantity;
      const CANONICAL: $name = $name::$canonical;

      fn all() -> &'static [$name] {
        $name::ALL
      }

      fn natural_unit(system: Option<$crate::units::system::MeasurementSystem>) -> $name {
        use $crate::units::system::MeasurementSystem;
        match system {
          Some(MeasurementSystem::Metric) => $name::$metric,
          Some(MeasurementSystem::Imperial) => $name::$imperial,
          Some(MeasurementSystem::UkImperial) => $name::$uk,
          Some(MeasurementSystem::UsCustomary) => $name::$us,
          None => $name::$canonical,
        }
      }
    }

    impl $crate::units::undefined::IntoUndefined for $name {
      type Undefined = $crate::units::undefined::Wrapped<$name>;

      fn into_undefined(self) -> Self::Undefined {
        $crate::units::undefined::Wrapped::new(self)
      }
    }

    impl $crate::units::undefined::Reciprocal for $name {
      type Output = $crate::units::undefined::Inverted<$name>;

      fn reciprocal(self) -> Self::Output {
        $crate::units::undefined::Inverted::new(self)
      }
    }

    impl ::std::fmt::Display for $name {
      fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "{}", $crate::units::unit::ScientificUnit::symbol(self))
      }
    }
  };
}

mod area;
mod density;
mod energy;
mod force;
mod frequency;
mod kinematics;
mod length;
mod mass;
mod time;
mod volume;

pub use area::Area;
pub use density::Density;
pub use energy::{Energy, Power};
pub use force::{Force, Pressure, Momentum};
pub use frequency::{Frequency, Radioactivity};
pub use kinematics::{Speed, Acceleration};
pub use length::Length;
pub use mass::Mass;
pub use time::Time;
pub use volume::Volume;
