
unit_catalog! {
  /// Units of frequency. The canonical unit is the hertz.
  pub enum Frequency for Frequency {
    Millihertz => "mHz", METRIC_AND_IMPERIAL, 1 / 1_000;
    Hertz => "Hz", METRIC_AND_IMPERIAL, 1 / 1;
    Kilohertz => "kHz", METRIC_AND_IMPERIAL, 1_000 / 1;
    Megahertz => "MHz", METRIC_AND_IMPERIAL, 1_000_000 / 1;
    Gigahertz => "GHz", METRIC_AND_IMPERIAL, 1_000_000_000 / 1;
    BeatsPerMinute => "bpm", METRIC_AND_IMPERIAL, 1 / 60;
  }
  canonical: Hertz;
  natural {
    metric: Hertz,
    imperial: Hertz,
    uk_imperial: Hertz,
    us_customary: Hertz,
  }
}

unit_catalog! {
  /// Units of radioactive decay rate. The canonical unit is the
  /// becquerel.
  pub enum Radioactivity for Radioactivity {
    Becquerel => "Bq", METRIC_AND_IMPERIAL, 1 / 1;
    Kilobecquerel => "kBq", METRIC_AND_IMPERIAL, 1_000 / 1;
    Megabecquerel => "MBq", METRIC_AND_IMPERIAL, 1_000_000 / 1;
    Gigabecquerel => "GBq", METRIC_AND_IMPERIAL, 1_000_000_000 / 1;
    Curie => "Ci", METRIC_AND_IMPERIAL, 37_000_000_000 / 1;
    Millicurie => "mCi", METRIC_AND_IMPERIAL, 37_000_000 / 1;
    Microcurie => "µCi", METRIC_AND_IMPERIAL, 37_000 / 1;
    Rutherford => "Rd", METRIC_AND_IMPERIAL, 1_000_000 / 1;
    DecaysPerMinute => "dpm", METRIC_AND_IMPERIAL, 1 / 60;
  }
  canonical: Becquerel;
  natural {
    metric: Becquerel,
    imperial: Becquerel,
    uk_imperial: Becquerel,
    us_customary: Becquerel,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;

  #[test]
  fn test_beats_per_minute() {
    let canonical = Frequency::BeatsPerMinute.to_canonical(&Decimal::from(120));
    assert_eq!(Frequency::Hertz.from_canonical(&canonical), Decimal::from(2));
  }

  #[test]
  fn test_curie_in_megabecquerel() {
    let canonical = Radioactivity::Millicurie.to_canonical(&Decimal::from(1));
    assert_eq!(Radioactivity::Megabecquerel.from_canonical(&canonical), Decimal::from(37));
    assert_eq!(Radioactivity::Rutherford.from_canonical(&canonical), Decimal::from(37));
  }
}
