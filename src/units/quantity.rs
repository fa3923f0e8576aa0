
//! Runtime tags for physical quantities.
//!
//! The compile-time quantity of a unit is its Rust type. These tags
//! exist so that quantities can be inspected at runtime, and so that
//! composite quantities can be checked for dimensional agreement.

use super::dimension::{Dimension, BaseDimension};

use num::pow::Pow;

use std::fmt::{self, Formatter, Display};

/// The closed set of defined physical quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
  Length,
  Mass,
  Time,
  Area,
  Volume,
  Speed,
  Acceleration,
  Force,
  Pressure,
  Energy,
  Power,
  Momentum,
  Frequency,
  Radioactivity,
  Density,
}

/// A composite quantity, built out of defined quantities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UndefinedQuantity {
  Wrapped(PhysicalQuantity),
  Inverted(PhysicalQuantity),
  Divided(Box<UndefinedQuantity>, Box<UndefinedQuantity>),
}

/// Either a defined quantity or a composite one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quantity {
  Defined(PhysicalQuantity),
  Undefined(UndefinedQuantity),
}

impl PhysicalQuantity {
  pub const ALL: [PhysicalQuantity; 15] = [
    PhysicalQuantity::Length,
    PhysicalQuantity::Mass,
    PhysicalQuantity::Time,
    PhysicalQuantity::Area,
    PhysicalQuantity::Volume,
    PhysicalQuantity::Speed,
    PhysicalQuantity::Acceleration,
    PhysicalQuantity::Force,
    PhysicalQuantity::Pressure,
    PhysicalQuantity::Energy,
    PhysicalQuantity::Power,
    PhysicalQuantity::Momentum,
    PhysicalQuantity::Frequency,
    PhysicalQuantity::Radioactivity,
    PhysicalQuantity::Density,
  ];

  pub fn dimension(self) -> Dimension {
    use BaseDimension::*;
    match self {
      PhysicalQuantity::Length => Length.into(),
      PhysicalQuantity::Mass => Mass.into(),
      PhysicalQuantity::Time => Time.into(),
      PhysicalQuantity::Area => Length.pow(2),
      PhysicalQuantity::Volume => Length.pow(3),
      PhysicalQuantity::Speed => Length / Time,
      PhysicalQuantity::Acceleration => Length.pow(1) / Time.pow(2),
      PhysicalQuantity::Force => Mass * Length / Time.pow(2),
      PhysicalQuantity::Pressure => Mass.pow(1) / Length.pow(1) / Time.pow(2),
      PhysicalQuantity::Energy => Mass.pow(1) * Length.pow(2) / Time.pow(2),
      PhysicalQuantity::Power => Mass.pow(1) * Length.pow(2) / Time.pow(3),
      PhysicalQuantity::Momentum => Mass * Length / Time,
      PhysicalQuantity::Frequency => Time.pow(-1),
      PhysicalQuantity::Radioactivity => Time.pow(-1),
      PhysicalQuantity::Density => Mass.pow(1) / Length.pow(3),
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      PhysicalQuantity::Length => "length",
      PhysicalQuantity::Mass => "mass",
      PhysicalQuantity::Time => "time",
      PhysicalQuantity::Area => "area",
      PhysicalQuantity::Volume => "volume",
      PhysicalQuantity::Speed => "speed",
      PhysicalQuantity::Acceleration => "acceleration",
      PhysicalQuantity::Force => "force",
      PhysicalQuantity::Pressure => "pressure",
      PhysicalQuantity::Energy => "energy",
      PhysicalQuantity::Power => "power",
      PhysicalQuantity::Momentum => "momentum",
      PhysicalQuantity::Frequency => "frequency",
      PhysicalQuantity::Radioactivity => "radioactivity",
      PhysicalQuantity::Density => "density",
    }
  }
}

impl UndefinedQuantity {
  pub fn dimension(&self) -> Dimension {
    match self {
      UndefinedQuantity::Wrapped(q) => q.dimension(),
      UndefinedQuantity::Inverted(q) => q.dimension().recip(),
      UndefinedQuantity::Divided(n, d) => n.dimension() / d.dimension(),
    }
  }

  /// Splits the quantity into the defined quantities that appear in
  /// its numerator and denominator, in order.
  pub fn factors(&self) -> (Vec<PhysicalQuantity>, Vec<PhysicalQuantity>) {
    match self {
      UndefinedQuantity::Wrapped(q) => (vec![*q], vec![]),
      UndefinedQuantity::Inverted(q) => (vec![], vec![*q]),
      UndefinedQuantity::Divided(n, d) => {
        let (mut numer, mut denom) = n.factors();
        let (d_numer, d_denom) = d.factors();
        numer.extend(d_denom);
        denom.extend(d_numer);
        (numer, denom)
      }
    }
  }
}

impl Quantity {
  pub fn dimension(&self) -> Dimension {
    match self {
      Quantity::Defined(q) => q.dimension(),
      Quantity::Undefined(q) => q.dimension(),
    }
  }

  pub fn is_defined(&self) -> bool {
    matches!(self, Quantity::Defined(_))
  }
}

impl From<PhysicalQuantity> for Quantity {
  fn from(q: PhysicalQuantity) -> Self {
    Quantity::Defined(q)
  }
}

impl From<UndefinedQuantity> for Quantity {
  fn from(q: UndefinedQuantity) -> Self {
    Quantity::Undefined(q)
  }
}

impl Display for PhysicalQuantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl Display for UndefinedQuantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let (numer, denom) = self.factors();
    let join = |qs: Vec<PhysicalQuantity>| qs.iter().map(|q| q.name()).collect::<Vec<_>>().join(" ");
    if numer.is_empty() {
      write!(f, "1")?;
    } else {
      write!(f, "{}", join(numer))?;
    }
    if !denom.is_empty() {
      write!(f, " / {}", join(denom))?;
    }
    Ok(())
  }
}

impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Quantity::Defined(q) => write!(f, "{}", q),
      Quantity::Undefined(q) => write!(f, "{}", q),
    }
  }
}
