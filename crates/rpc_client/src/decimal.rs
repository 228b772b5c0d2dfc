// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// decimal.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Decimal-preserving JSON numbers.
//!
//! Amounts travel as JSON numbers. They are written from their decimal text
//! rounded to [`DECIMAL_PLACES`] fractional digits and read back from the
//! exact text the server sent, so no binary floating point is involved in
//! either direction.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// Fractional digits kept when a decimal is written to the wire.
pub const DECIMAL_PLACES: u32 = 12;

/// Encodes a decimal as a JSON number rounded to [`DECIMAL_PLACES`]
/// (banker's rounding).
pub fn encode_decimal(value: &Decimal) -> Result<Number, serde_json::Error> {
    let rounded = value.round_dp(DECIMAL_PLACES);
    serde_json::from_str::<Number>(&rounded.to_string())
}

/// Reads a JSON number as a decimal without going through `f64`.
///
/// Returns `None` for non-numbers and for numbers outside the range of
/// [`Decimal`].
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => decimal_from_number(number),
        _ => None,
    }
}

pub fn decimal_from_number(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text).ok()
    } else {
        Decimal::from_str(&text).ok()
    }
}

/// A decimal that serializes as a 12-digit JSON number.
///
/// Use it for amounts inside call parameters:
///
/// ```
/// use monero_rpc_client::JsonDecimal;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = JsonDecimal(Decimal::from_str("0.1234567890125").unwrap());
/// assert_eq!(serde_json::to_string(&amount).unwrap(), "0.123456789012");
/// ```
///
/// A bare [`Decimal`] is not serializable, so it cannot end up on the wire
/// as a string by accident:
///
/// ```compile_fail
/// use monero_rpc_client::Decimal;
///
/// let _ = serde_json::to_string(&Decimal::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JsonDecimal(pub Decimal);

impl From<Decimal> for JsonDecimal {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<JsonDecimal> for Decimal {
    fn from(value: JsonDecimal) -> Self {
        value.0
    }
}

impl fmt::Display for JsonDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for JsonDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let number = encode_decimal(&self.0).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JsonDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = Number::deserialize(deserializer)?;
        decimal_from_number(&number)
            .map(JsonDecimal)
            .ok_or_else(|| D::Error::custom(format!("number {number} does not fit a decimal")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn encodes_integral_decimal() {
        assert_eq!(encode_decimal(&Decimal::from(2)).unwrap().to_string(), "2");
    }

    #[test]
    fn encoding_rounds_to_twelve_places() {
        let encoded = encode_decimal(&dec("1.98765432109876")).unwrap();
        assert_eq!(encoded.to_string(), "1.987654321099");

        // half-even at the 13th digit
        let encoded = encode_decimal(&dec("0.0000000000125")).unwrap();
        assert_eq!(encoded.to_string(), "0.000000000012");
    }

    #[test]
    fn encode_then_decode_yields_rounded_value() {
        for text in ["0.1", "123456.000000000001", "-7.1234567890129", "0.30000000000000004"] {
            let original = dec(text);
            let wire = serde_json::to_string(&JsonDecimal(original)).unwrap();
            let decoded: JsonDecimal = serde_json::from_str(&wire).unwrap();
            assert_eq!(decoded.0, original.round_dp(DECIMAL_PLACES), "{text}");
        }
    }

    #[test]
    fn amounts_in_params_are_numbers_not_strings() {
        let params = json!({"amount": JsonDecimal(dec("1.1234567890119"))});
        assert!(params["amount"].is_number());
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"amount":1.123456789012}"#
        );
    }

    #[test]
    fn decoding_keeps_digits_a_float_would_lose() {
        let value: Value = serde_json::from_str(r#"{"amount": 0.30000000000000004}"#).unwrap();
        assert_eq!(
            decimal_from_value(&value["amount"]),
            Some(dec("0.30000000000000004"))
        );

        let big: Value = serde_json::from_str("184467440737.095516150001").unwrap();
        assert_eq!(
            decimal_from_value(&big),
            Some(dec("184467440737.095516150001"))
        );
    }

    #[test]
    fn decodes_scientific_notation() {
        let value: Value = serde_json::from_str("1.5e-7").unwrap();
        assert_eq!(decimal_from_value(&value), Some(dec("0.00000015")));
    }

    #[test]
    fn non_numbers_are_not_decimals() {
        assert_eq!(decimal_from_value(&json!("1.5")), None);
        assert_eq!(decimal_from_value(&Value::Null), None);
    }
}
