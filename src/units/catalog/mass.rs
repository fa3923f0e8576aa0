
unit_catalog! {
  /// Units of mass. The canonical unit is the kilogram.
  pub enum Mass for Mass {
    Microgram => "µg", METRIC, 1 / 1_000_000_000;
    Milligram => "mg", METRIC, 1 / 1_000_000;
    Gram => "g", METRIC, 1 / 1_000;
    Kilogram => "kg", METRIC, 1 / 1;
    Tonne => "t", METRIC, 1_000 / 1;
    Grain => "gr", COMMON_IMPERIAL, 6_479_891 / 100_000_000_000;
    Ounce => "oz", COMMON_IMPERIAL, 45_359_237 / 1_600_000_000;
    Pound => "lb", COMMON_IMPERIAL, 45_359_237 / 100_000_000;
    Stone => "st", UK_IMPERIAL_ONLY, 317_514_659 / 50_000_000;
    /// The long ton of 2240 pounds.
    ImperialTon => "long tn", UK_IMPERIAL_ONLY, 317_514_659 / 312_500;
    /// The short ton of 2000 pounds.
    UsTon => "sh tn", US_CUSTOMARY_ONLY, 45_359_237 / 50_000;
  }
  canonical: Kilogram;
  natural {
    metric: Kilogram,
    imperial: Pound,
    uk_imperial: Pound,
    us_customary: Pound,
  }
}
