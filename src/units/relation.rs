
//! The table of derived quantities.
//!
//! Each entry says which quantity results from combining values of
//! other quantities. An entry makes the combination available
//! through the `*` and `/` operators, with the result in the natural
//! unit chosen by policy. It also adds a named derivation on the
//! result unit, for callers that pick the result unit themselves.
//! The [`PRODUCTS`], [`QUOTIENTS`] and [`INVERSES`] tables describe
//! the same entries at runtime.
//!
//! The policy for the natural unit of a result is as follows. The
//! operands' unit systems are intersected, and the first of metric,
//! imperial, UK imperial, and US customary in that intersection is
//! chosen. The result is expressed in that system's natural unit for
//! the result quantity. If the operands share no system, the result
//! is expressed in the canonical SI unit.

use super::catalog::*;
use super::unit::{ScientificUnit, DefinedUnit};
use super::quantity::PhysicalQuantity;
use super::system::MeasurementSystems;
use super::value::ScientificValue;
use super::undefined::{Wrapped, Inverted, Divided, Reciprocal, UndefinedUnit, IntoUndefined, UnitAlgebra};
use super::convert::{by_multiplying, by_dividing, by_inverting};

/// Units whose values can be multiplied by values of `Rhs`.
pub trait Multiply<Rhs>: ScientificUnit {
  type Output: ScientificUnit;

  /// The unit the product of `self` and `rhs` is expressed in.
  fn product_unit(&self, rhs: &Rhs) -> Self::Output;
}

/// Units whose values can be divided by values of `Rhs`.
pub trait Divide<Rhs>: ScientificUnit {
  type Output: ScientificUnit;

  /// The unit the quotient of `self` by `rhs` is expressed in.
  fn quotient_unit(&self, rhs: &Rhs) -> Self::Output;
}

/// Units whose values have a meaningful reciprocal.
pub trait Invert: ScientificUnit {
  type Output: ScientificUnit;

  fn inverse_unit(&self) -> Self::Output;
}

/// Defined units that can be computed out of a value of `L` and a
/// value of `R`, by either multiplication or division as the table
/// says.
pub trait DerivedFrom<L, R>: DefinedUnit {
  /// The derived value, expressed in `self`.
  fn derive(self, left: &ScientificValue<L>, right: &ScientificValue<R>) -> ScientificValue<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  Product,
  Quotient,
  Inverse,
}

/// A row of the derived-quantity table. For inverses, `right` is
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation {
  pub operation: Operation,
  pub left: PhysicalQuantity,
  pub right: Option<PhysicalQuantity>,
  pub output: PhysicalQuantity,
}

/// The natural unit of `O` for a result computed out of operands
/// belonging to `left` and `right`.
pub fn natural_unit<O: DefinedUnit>(left: MeasurementSystems, right: MeasurementSystems) -> O {
  O::natural_unit(left.coherent_system(right))
}

macro_rules! products {
  ($($left: ident * $right: ident => $output: ident;)+) => {
    $(
      impl Multiply<$right> for $left {
        type Output = $output;

        fn product_unit(&self, rhs: &$right) -> $output {
          natural_unit(self.systems(), rhs.systems())
        }
      }

      impl DerivedFrom<$left, $right> for $output {
        fn derive(self, left: &ScientificValue<$left>, right: &ScientificValue<$right>) -> ScientificValue<$output> {
          by_multiplying(left, right, self)
        }
      }
    )+

    pub const PRODUCTS: &[Relation] = &[
      $(
        Relation {
          operation: Operation::Product,
          left: <$left as DefinedUnit>::QUANTITY,
          right: Some(<$right as DefinedUnit>::QUANTITY),
          output: <$output as DefinedUnit>::QUANTITY,
        },
      )+
    ];
  };
}

macro_rules! quotients {
  ($($numerator: ident / $denominator: ident => $output: ident;)+) => {
    $(
      impl Divide<$denominator> for $numerator {
        type Output = $output;

        fn quotient_unit(&self, rhs: &$denominator) -> $output {
          natural_unit(self.systems(), rhs.systems())
        }
      }

      impl DerivedFrom<$numerator, $denominator> for $output {
        fn derive(self, left: &ScientificValue<$numerator>, right: &ScientificValue<$denominator>) -> ScientificValue<$output> {
          by_dividing(left, right, self)
        }
      }
    )+

    pub const QUOTIENTS: &[Relation] = &[
      $(
        Relation {
          operation: Operation::Quotient,
          left: <$numerator as DefinedUnit>::QUANTITY,
          right: Some(<$denominator as DefinedUnit>::QUANTITY),
          output: <$output as DefinedUnit>::QUANTITY,
        },
      )+
    ];
  };
}

macro_rules! inverses {
  ($($input: ident => $output: ident as $method: ident;)+) => {
    $(
      impl Invert for $input {
        type Output = $output;

        fn inverse_unit(&self) -> $output {
          natural_unit(self.systems(), self.systems())
        }
      }

      impl ScientificValue<$input> {
        pub fn $method(&self) -> ScientificValue<$output> {
          self.inverse()
        }
      }
    )+

    pub const INVERSES: &[Relation] = &[
      $(
        Relation {
          operation: Operation::Inverse,
          left: <$input as DefinedUnit>::QUANTITY,
          right: None,
          output: <$output as DefinedUnit>::QUANTITY,
        },
      )+
    ];
  };
}

/// Explicit-result-unit derivations, one method per result quantity.
macro_rules! named_derivations {
  ($($output: ident => $method: ident;)+) => {
    $(
      impl $output {
        /// Computes a value of this quantity out of `left` and
        /// `right`, expressed in `self`.
        pub fn $method<L, R>(self, left: &ScientificValue<L>, right: &ScientificValue<R>) -> ScientificValue<$output>
        where $output: DerivedFrom<L, R> {
          self.derive(left, right)
        }
      }
    )+
  };
}

// Relations between undefined units follow from the unit algebra, so
// they hold for any right-hand side.
macro_rules! undefined_relations {
  ($(impl<$($param: ident: $bound: ident),+> for $type_: ty;)+) => {
    $(
      impl<$($param: $bound,)+ R: IntoUndefined> Multiply<R> for $type_ {
        type Output = Divided<$type_, <R::Undefined as Reciprocal>::Output>;

        fn product_unit(&self, rhs: &R) -> Self::Output {
          self.clone().x(rhs.clone())
        }
      }

      impl<$($param: $bound,)+ R: IntoUndefined> Divide<R> for $type_ {
        type Output = Divided<$type_, R::Undefined>;

        fn quotient_unit(&self, rhs: &R) -> Self::Output {
          self.clone().per(rhs.clone())
        }
      }

      impl<$($param: $bound),+> Invert for $type_ {
        type Output = <$type_ as Reciprocal>::Output;

        fn inverse_unit(&self) -> Self::Output {
          self.clone().reciprocal()
        }
      }
    )+
  };
}

products! {
  Length * Length => Area;
  Length * Area => Volume;
  Area * Length => Volume;
  Speed * Time => Length;
  Time * Speed => Length;
  Acceleration * Time => Speed;
  Time * Acceleration => Speed;
  Mass * Acceleration => Force;
  Acceleration * Mass => Force;
  Mass * Speed => Momentum;
  Speed * Mass => Momentum;
  Force * Time => Momentum;
  Time * Force => Momentum;
  Pressure * Area => Force;
  Area * Pressure => Force;
  Force * Length => Energy;
  Length * Force => Energy;
  Pressure * Volume => Energy;
  Volume * Pressure => Energy;
  Power * Time => Energy;
  Time * Power => Energy;
  Force * Speed => Power;
  Speed * Force => Power;
  Density * Volume => Mass;
  Volume * Density => Mass;
}

quotients! {
  Area / Length => Length;
  Volume / Length => Area;
  Volume / Area => Length;
  Length / Time => Speed;
  Length / Speed => Time;
  Speed / Time => Acceleration;
  Speed / Acceleration => Time;
  Force / Mass => Acceleration;
  Force / Acceleration => Mass;
  Momentum / Mass => Speed;
  Momentum / Speed => Mass;
  Momentum / Time => Force;
  Momentum / Force => Time;
  Force / Area => Pressure;
  Force / Pressure => Area;
  Energy / Length => Force;
  Energy / Force => Length;
  Energy / Volume => Pressure;
  Energy / Pressure => Volume;
  Energy / Time => Power;
  Energy / Power => Time;
  Power / Force => Speed;
  Power / Speed => Force;
  Mass / Volume => Density;
  Mass / Density => Volume;
}

inverses! {
  Frequency => Time as time;
  Time => Frequency as frequency;
  Radioactivity => Time as time;
}

named_derivations! {
  Length => length;
  Mass => mass;
  Time => time;
  Area => area;
  Volume => volume;
  Speed => speed;
  Acceleration => acceleration;
  Force => force;
  Pressure => pressure;
  Energy => energy;
  Power => power;
  Momentum => momentum;
  Density => density;
}

undefined_relations! {
  impl<U: DefinedUnit> for Wrapped<U>;
  impl<U: DefinedUnit> for Inverted<U>;
  impl<N: UndefinedUnit, D: UndefinedUnit> for Divided<N, D>;
}

impl<U: Invert> ScientificValue<U> {
  /// `1 / self`, in the natural unit of the inverse quantity.
  ///
  /// # Panics
  ///
  /// Panics if `self` is zero.
  pub fn inverse(&self) -> ScientificValue<U::Output> {
    by_inverting(self, self.unit().inverse_unit())
  }

  /// `1 / self`, expressed in `unit`.
  ///
  /// # Panics
  ///
  /// Panics if `self` is zero.
  pub fn inverse_in(&self, unit: U::Output) -> ScientificValue<U::Output> {
    by_inverting(self, unit)
  }
}

/// Every row of the derived-quantity table.
pub fn relations() -> impl Iterator<Item = &'static Relation> {
  PRODUCTS.iter().chain(QUOTIENTS).chain(INVERSES)
}
