//! Characteristic — a named, typed property of an accessory service.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::InstanceId;

/// Characteristic type name as reported by the bridge (e.g. `"On"`, `"Brightness"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacteristicType(String);

impl CharacteristicType {
    /// The boolean power characteristic.
    pub const ON: &'static str = "On";

    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    #[must_use]
    pub fn on() -> Self {
        Self::new(Self::ON)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.0 == Self::ON
    }
}

impl fmt::Display for CharacteristicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single characteristic of a service.
///
/// `value` is whatever the bridge reported; registry snapshots may omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    #[serde(rename = "type")]
    pub kind: CharacteristicType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub iid: InstanceId,
}

impl Characteristic {
    #[must_use]
    pub fn new(kind: impl Into<String>, iid: u64) -> Self {
        Self {
            kind: CharacteristicType::new(kind),
            value: None,
            iid: InstanceId::new(iid),
        }
    }

    /// Shorthand for an `On` characteristic.
    #[must_use]
    pub fn on(iid: u64) -> Self {
        Self::new(CharacteristicType::ON, iid)
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn is_on_characteristic(&self) -> bool {
        self.kind.is_on()
    }

    /// Whether the reported value is truthy (see [`is_truthy`]).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.value.as_ref().is_some_and(is_truthy)
    }
}

/// First `On` characteristic in declaration order.
#[must_use]
pub fn find_on(characteristics: &[Characteristic]) -> Option<&Characteristic> {
    characteristics.iter().find(|c| c.is_on_characteristic())
}

/// Loose truthiness of a reported value.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy, everything else is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_recognise_on_type() {
        assert!(Characteristic::on(5).is_on_characteristic());
        assert!(!Characteristic::new("Brightness", 6).is_on_characteristic());
    }

    #[test]
    fn should_be_case_sensitive_about_on_type() {
        assert!(!Characteristic::new("on", 5).is_on_characteristic());
    }

    #[test]
    fn should_find_first_on_characteristic() {
        let cs = vec![
            Characteristic::new("Name", 1).with_value("Switch"),
            Characteristic::on(5).with_value(true),
            Characteristic::on(7).with_value(false),
        ];
        assert_eq!(find_on(&cs).map(|c| c.iid), Some(InstanceId::new(5)));
    }

    #[test]
    fn should_return_none_when_no_on_characteristic() {
        let cs = vec![Characteristic::new("Brightness", 2).with_value(80)];
        assert!(find_on(&cs).is_none());
        assert!(find_on(&[]).is_none());
    }

    #[test]
    fn should_treat_falsy_values_as_falsy() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn should_treat_other_values_as_truthy() {
        for v in [json!(true), json!(1), json!(-2.5), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn should_treat_missing_value_as_falsy() {
        assert!(!Characteristic::on(9).is_truthy());
    }

    #[test]
    fn should_deserialize_bridge_json() {
        let c: Characteristic =
            serde_json::from_value(json!({"type": "On", "value": true, "iid": 5})).unwrap();
        assert!(c.is_on_characteristic());
        assert_eq!(c.value, Some(json!(true)));
        assert_eq!(c.iid, InstanceId::new(5));
    }

    #[test]
    fn should_deserialize_without_value() {
        let c: Characteristic = serde_json::from_value(json!({"type": "On", "iid": 9})).unwrap();
        assert!(c.value.is_none());
    }
}
