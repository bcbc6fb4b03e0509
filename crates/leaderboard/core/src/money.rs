//! Money amounts with two fractional digits.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::MalformedRecord;

/// Number of fractional digits every amount is normalized to.
pub const MONEY_SCALE: u32 = 2;

/// Non-negative amount of money made by a player.
///
/// Values are rounded half away from zero to [`MONEY_SCALE`] digits on
/// construction, so `"150"`, `"150.0"` and `150.001` all compare equal and
/// display as `150.00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, MONEY_SCALE));

    /// Normalizes `value` to two fractional digits, rejecting negatives.
    pub fn from_decimal(value: Decimal) -> Result<Self, MalformedRecord> {
        if value.is_zero() {
            return Ok(Self::ZERO);
        }
        if value.is_sign_negative() {
            return Err(MalformedRecord::invalid_money(value.to_string()));
        }

        let mut rounded =
            value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(MONEY_SCALE);
        Ok(Self(rounded))
    }

    /// Parses a JSON number as it was written on the wire.
    pub fn from_json_number(number: &serde_json::Number) -> Result<Self, MalformedRecord> {
        number.to_string().parse()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Money {
    type Err = MalformedRecord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| MalformedRecord::invalid_money(s))?;
        Self::from_decimal(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_two_places() {
        let money: Money = "150".parse().unwrap();
        assert_eq!(money.to_string(), "150.00");

        let money: Money = " 12.345 ".parse().unwrap();
        assert_eq!(money.to_string(), "12.35");
    }

    #[test]
    fn equal_values_compare_equal_regardless_of_input_scale() {
        let a: Money = "200".parse().unwrap();
        let b: Money = "200.000".parse().unwrap();
        assert_eq!(a, b);
        assert!("200.01".parse::<Money>().unwrap() > a);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(matches!(
            "-1.00".parse::<Money>(),
            Err(MalformedRecord::InvalidMoney { .. })
        ));
        assert!("lots".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn negative_zero_is_zero() {
        let money: Money = "-0.00".parse().unwrap();
        assert_eq!(money, Money::ZERO);
        assert_eq!(money.to_string(), "0.00");
    }

    #[test]
    fn zero_keeps_two_places() {
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::default(), Money::ZERO);
        assert_eq!(Money::default().to_string(), "0.00");
        assert_eq!(serde_json::to_value(Money::ZERO).unwrap(), "0.00");
        assert_eq!("0".parse::<Money>().unwrap(), Money::ZERO);
    }

    #[test]
    fn parses_json_numbers() {
        let value: serde_json::Value = serde_json::from_str("[250, 99.5]").unwrap();
        let numbers: Vec<Money> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| match v {
                serde_json::Value::Number(n) => Money::from_json_number(n).unwrap(),
                other => panic!("expected number, got {other}"),
            })
            .collect();
        assert_eq!(numbers[0].to_string(), "250.00");
        assert_eq!(numbers[1].to_string(), "99.50");
    }
}
