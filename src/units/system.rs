
//! Unit-system membership tags.

use bitflags::bitflags;

use std::fmt::{self, Formatter, Display};

/// A single unit system, as used when choosing the natural unit of a
/// derived result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementSystem {
  Metric,
  /// Units shared by the UK imperial and US customary systems.
  Imperial,
  UkImperial,
  UsCustomary,
}

bitflags! {
  /// The set of unit systems a unit belongs to.
  ///
  /// A unit that is part of the shared imperial vocabulary (the foot,
  /// the pound) is tagged `IMPERIAL`, `UK_IMPERIAL`, and
  /// `US_CUSTOMARY` at once; units that differ between the two
  /// (gallons, tons) carry only the system they belong to.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct MeasurementSystems: u8 {
    const METRIC = 0b0001;
    const IMPERIAL = 0b0010;
    const UK_IMPERIAL = 0b0100;
    const US_CUSTOMARY = 0b1000;

    const UK_IMPERIAL_ONLY = Self::UK_IMPERIAL.bits();
    const US_CUSTOMARY_ONLY = Self::US_CUSTOMARY.bits();
    const COMMON_IMPERIAL = Self::IMPERIAL.bits() | Self::UK_IMPERIAL.bits() | Self::US_CUSTOMARY.bits();
    const METRIC_AND_IMPERIAL = Self::METRIC.bits() | Self::COMMON_IMPERIAL.bits();
  }
}

impl MeasurementSystem {
  /// Systems in the order they are tried when picking a result unit.
  pub const PRECEDENCE: [MeasurementSystem; 4] = [
    MeasurementSystem::Metric,
    MeasurementSystem::Imperial,
    MeasurementSystem::UkImperial,
    MeasurementSystem::UsCustomary,
  ];

  pub fn flag(self) -> MeasurementSystems {
    match self {
      MeasurementSystem::Metric => MeasurementSystems::METRIC,
      MeasurementSystem::Imperial => MeasurementSystems::IMPERIAL,
      MeasurementSystem::UkImperial => MeasurementSystems::UK_IMPERIAL,
      MeasurementSystem::UsCustomary => MeasurementSystems::US_CUSTOMARY,
    }
  }
}

impl MeasurementSystems {
  pub fn used_in(self, system: MeasurementSystem) -> bool {
    self.contains(system.flag())
  }

  /// The first system (in [`MeasurementSystem::PRECEDENCE`] order)
  /// that both `self` and `other` belong to, or `None` if the two
  /// memberships have nothing in common.
  pub fn coherent_system(self, other: MeasurementSystems) -> Option<MeasurementSystem> {
    let common = self & other;
    MeasurementSystem::PRECEDENCE.into_iter().find(|system| common.used_in(*system))
  }
}

impl Display for MeasurementSystem {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      MeasurementSystem::Metric => write!(f, "metric"),
      MeasurementSystem::Imperial => write!(f, "imperial"),
      MeasurementSystem::UkImperial => write!(f, "UK imperial"),
      MeasurementSystem::UsCustomary => write!(f, "US customary"),
    }
  }
}
