//! Unit systems.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system used for a lookup and for rendering its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, meters per second.
    #[default]
    Metric,
    /// Fahrenheit, miles per hour.
    Imperial,
    /// Kelvin, meters per second.
    Kelvin,
}

impl UnitSystem {
    /// All unit systems, in declaration order.
    pub const ALL: [UnitSystem; 3] = [Self::Metric, Self::Imperial, Self::Kelvin];

    /// Temperature symbol shown next to every temperature.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Value of the provider's `units` query parameter.
    ///
    /// The provider calls Kelvin output "standard".
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Kelvin => "standard",
        }
    }

    /// Unit the provider reports wind speed in.
    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            Self::Imperial => "mph",
            Self::Metric | Self::Kelvin => "m/s",
        }
    }

    /// Name as accepted in tool arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Kelvin => "kelvin",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown unit system name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit system: {0}")]
pub struct UnknownUnitSystem(pub String);

impl FromStr for UnitSystem {
    type Err = UnknownUnitSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            "kelvin" => Ok(Self::Kelvin),
            other => Err(UnknownUnitSystem(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UnitSystem::Metric, "°C")]
    #[case(UnitSystem::Imperial, "°F")]
    #[case(UnitSystem::Kelvin, "K")]
    fn test_symbol(#[case] units: UnitSystem, #[case] expected: &str) {
        assert_eq!(units.symbol(), expected);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: std::collections::HashSet<_> =
            UnitSystem::ALL.iter().map(|u| u.symbol()).collect();
        assert_eq!(symbols.len(), 3);
    }

    #[rstest]
    #[case("metric", UnitSystem::Metric)]
    #[case("imperial", UnitSystem::Imperial)]
    #[case("kelvin", UnitSystem::Kelvin)]
    fn test_parse(#[case] input: &str, #[case] expected: UnitSystem) {
        assert_eq!(input.parse::<UnitSystem>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("celsius".parse::<UnitSystem>().is_err());
        assert!("Metric".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_defaults_and_provider_values() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
        assert_eq!(UnitSystem::Kelvin.query_value(), "standard");
        assert_eq!(UnitSystem::Imperial.wind_speed_unit(), "mph");
    }

    #[test]
    fn test_serde_lowercase() {
        let units: UnitSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(units, UnitSystem::Imperial);
    }
}
