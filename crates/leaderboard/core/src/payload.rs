//! Parsing of raw record payloads as delivered by the snapshot endpoint and
//! the push stream.
//!
//! Only `uuid` and `money_made` are required. The feed does not guarantee the
//! remaining fields on every event, so a missing or unusable `player_name`
//! becomes an empty string and a missing or unusable counter becomes `0`.

use serde_json::{Map, Value};

use crate::error::MalformedRecord;
use crate::money::Money;
use crate::record::{Identity, Record};

const IDENTITY_KEY: &str = "uuid";

impl Record {
    /// Parses one JSON-encoded payload (a single push-stream message).
    pub fn from_json(text: &str) -> Result<Self, MalformedRecord> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| MalformedRecord::InvalidJson(e.to_string()))?;
        Self::from_payload(&value)
    }

    /// Parses an already-decoded payload (one element of a snapshot).
    pub fn from_payload(value: &Value) -> Result<Self, MalformedRecord> {
        let object = value.as_object().ok_or(MalformedRecord::NotAnObject)?;

        let identity = match object.get(IDENTITY_KEY) {
            Some(Value::String(id)) => Identity::new(id.as_str())?,
            _ => return Err(MalformedRecord::MissingIdentity),
        };
        let money_made = parse_money(object.get("money_made"))?;

        Ok(Record::new(identity, money_made)
            .with_player_name(read_string(object, "player_name"))
            .with_current_day(read_count(object, "current_day"))
            .with_elves_remaining(read_count(object, "elves_remaining")))
    }
}

fn parse_money(value: Option<&Value>) -> Result<Money, MalformedRecord> {
    match value {
        Some(Value::String(text)) => text.parse(),
        Some(Value::Number(number)) => Money::from_json_number(number),
        Some(other) => Err(MalformedRecord::InvalidMoney {
            value: other.to_string(),
        }),
        None => Err(MalformedRecord::InvalidMoney {
            value: "<missing>".to_string(),
        }),
    }
}

fn read_string(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(text)) => text.clone(),
        _ => String::new(),
    }
}

fn read_count(object: &Map<String, Value>, key: &str) -> u32 {
    match object.get(key) {
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_complete_payload() {
        let record = Record::from_payload(&json!({
            "uuid": "u1",
            "player_name": "Steve",
            "current_day": 5,
            "elves_remaining": 4,
            "money_made": "150.00"
        }))
        .unwrap();

        assert_eq!(record.identity().as_str(), "u1");
        assert_eq!(record.player_name(), "Steve");
        assert_eq!(record.current_day(), 5);
        assert_eq!(record.elves_remaining(), 4);
        assert_eq!(record.money_made().to_string(), "150.00");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let record = Record::from_json(r#"{"uuid": "u9", "money_made": 12.5}"#).unwrap();

        assert_eq!(record.player_name(), "");
        assert_eq!(record.current_day(), 0);
        assert_eq!(record.elves_remaining(), 0);
        assert_eq!(record.money_made().to_string(), "12.50");
    }

    #[test]
    fn unusable_counters_fall_back_to_zero() {
        let record = Record::from_payload(&json!({
            "uuid": "u2",
            "current_day": -3,
            "elves_remaining": "7",
            "player_name": 42,
            "money_made": "0"
        }))
        .unwrap();

        assert_eq!(record.current_day(), 0);
        assert_eq!(record.elves_remaining(), 7);
        assert_eq!(record.player_name(), "");
    }

    #[test]
    fn missing_or_blank_identity_is_malformed() {
        let missing = Record::from_payload(&json!({"money_made": "1.00"}));
        assert_eq!(missing, Err(MalformedRecord::MissingIdentity));

        let blank = Record::from_payload(&json!({"uuid": "", "money_made": "1.00"}));
        assert_eq!(blank, Err(MalformedRecord::MissingIdentity));

        let numeric = Record::from_payload(&json!({"uuid": 7, "money_made": "1.00"}));
        assert_eq!(numeric, Err(MalformedRecord::MissingIdentity));
    }

    #[test]
    fn bad_money_is_malformed() {
        for money in [json!("-5.00"), json!("abc"), json!(null), json!(true)] {
            let result = Record::from_payload(&json!({"uuid": "u1", "money_made": money}));
            assert!(
                matches!(result, Err(MalformedRecord::InvalidMoney { .. })),
                "{money} should be rejected"
            );
        }

        let missing = Record::from_payload(&json!({"uuid": "u1"}));
        assert!(matches!(missing, Err(MalformedRecord::InvalidMoney { .. })));
    }

    #[test]
    fn non_object_and_invalid_json_are_malformed() {
        assert_eq!(
            Record::from_payload(&json!(["u1", "1.00"])),
            Err(MalformedRecord::NotAnObject)
        );
        assert!(matches!(
            Record::from_json("{not json"),
            Err(MalformedRecord::InvalidJson(_))
        ));
    }
}
