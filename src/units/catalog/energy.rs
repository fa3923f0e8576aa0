
unit_catalog! {
  /// Units of energy. The canonical unit is the joule.
  pub enum Energy for Energy {
    Joule => "J", METRIC, 1 / 1;
    Kilojoule => "kJ", METRIC, 1_000 / 1;
    Megajoule => "MJ", METRIC, 1_000_000 / 1;
    WattHour => "Wh", METRIC, 3_600 / 1;
    KilowattHour => "kWh", METRIC, 3_600_000 / 1;
    Erg => "erg", METRIC, 1 / 10_000_000;
    /// The thermochemical calorie.
    Calorie => "cal", METRIC, 4_184 / 1_000;
    Kilocalorie => "kcal", METRIC, 4_184 / 1;
    FootPound => "ft⋅lbf", COMMON_IMPERIAL, 3_389_544_870_828_501 / 2_500_000_000_000_000;
    /// The international table British thermal unit.
    BritishThermalUnit => "BTU", COMMON_IMPERIAL, 105_505_585_262 / 100_000_000;
  }
  canonical: Joule;
  natural {
    metric: Joule,
    imperial: FootPound,
    uk_imperial: FootPound,
    us_customary: FootPound,
  }
}

unit_catalog! {
  /// Units of power. The canonical unit is the watt.
  pub enum Power for Power {
    Milliwatt => "mW", METRIC, 1 / 1_000;
    Watt => "W", METRIC, 1 / 1;
    Kilowatt => "kW", METRIC, 1_000 / 1;
    Megawatt => "MW", METRIC, 1_000_000 / 1;
    Gigawatt => "GW", METRIC, 1_000_000_000 / 1;
    MetricHorsepower => "PS", METRIC, 73_549_875 / 100_000;
    /// Mechanical horsepower, 550 foot-pounds per second.
    Horsepower => "hp", COMMON_IMPERIAL, 74_569_987_158_227_022 / 100_000_000_000_000;
    FootPoundPerSecond => "ft⋅lbf/s", COMMON_IMPERIAL, 3_389_544_870_828_501 / 2_500_000_000_000_000;
    BritishThermalUnitPerHour => "BTU/h", COMMON_IMPERIAL, 52_752_792_631 / 180_000_000_000;
  }
  canonical: Watt;
  natural {
    metric: Watt,
    imperial: FootPoundPerSecond,
    uk_imperial: FootPoundPerSecond,
    us_customary: FootPoundPerSecond,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;
  use crate::units::test_utils::dec;

  use approx::assert_relative_eq;

  #[test]
  fn test_kilowatt_hour() {
    let canonical = Energy::KilowattHour.to_canonical(&Decimal::from(1));
    assert_eq!(Energy::Kilojoule.from_canonical(&canonical), Decimal::from(3_600));
    assert_eq!(Energy::WattHour.from_canonical(&canonical), Decimal::from(1_000));
  }

  #[test]
  fn test_kilocalorie() {
    let canonical = Energy::Kilocalorie.to_canonical(&Decimal::from(2));
    assert_eq!(Energy::Calorie.from_canonical(&canonical), Decimal::from(2_000));
  }

  #[test]
  fn test_horsepower_in_foot_pounds_per_second() {
    let canonical = Power::Horsepower.to_canonical(&Decimal::from(1));
    assert_eq!(Power::FootPoundPerSecond.from_canonical(&canonical), Decimal::from(550));
  }

  #[test]
  fn test_horsepower_in_kilowatts() {
    let canonical = Power::Horsepower.to_canonical(&Decimal::from(1));
    assert_relative_eq!(Power::Kilowatt.from_canonical(&canonical), dec("0.7457"), max_relative = 1e-4);
    let canonical = Power::MetricHorsepower.to_canonical(&Decimal::from(1));
    assert_relative_eq!(Power::Kilowatt.from_canonical(&canonical), dec("0.7355"), max_relative = 1e-4);
  }

  #[test]
  fn test_british_thermal_unit() {
    let canonical = Energy::BritishThermalUnit.to_canonical(&Decimal::from(1));
    assert_relative_eq!(Energy::Kilocalorie.from_canonical(&canonical), dec("0.252164"), max_relative = 1e-5);
  }
}
