use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::enums::DimmerEventKind;

/// Largest magnitude at which every integer is exactly representable in
/// an `f64` (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One decoded reading.
///
/// Numbers are already scaled and rounded. Enumerations, timestamps,
/// firmware versions, text and raw blobs all surface as `Text`; the
/// dimmer event is the only structured value.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadingValue {
    Number(f64),
    Text(String),
    Dimmer { event: DimmerEventKind, steps: u8 },
}

impl ReadingValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for ReadingValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ReadingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ReadingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Dimmer { event, steps } => write!(f, "{event} ({steps} steps)"),
        }
    }
}

impl Serialize for ReadingValue {
    /// Integral numbers serialize as JSON integers so `100` does not
    /// come out as `100.0`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
                    #[allow(clippy::cast_possible_truncation)]
                    let whole = *n as i64;
                    serializer.serialize_i64(whole)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Self::Text(s) => serializer.serialize_str(s),
            Self::Dimmer { event, steps } => {
                let mut state = serializer.serialize_struct("Dimmer", 2)?;
                state.serialize_field("event", event.as_str())?;
                state.serialize_field("steps", steps)?;
                state.end()
            }
        }
    }
}

/// Insertion-ordered map from reading key to value.
///
/// Payloads hold at most a few dozen readings, so lookups scan a `Vec`
/// and the wire order of the advertisement is kept for free.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Readings {
    entries: Vec<(String, ReadingValue)>,
}

impl Readings {
    /// An empty set of readings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: ReadingValue) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Rename an entry without moving it. Returns `false` if `from` is absent.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == from) {
            Some(slot) => {
                slot.0 = to.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ReadingValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReadingValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Readings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_wire_order() {
        let mut readings = Readings::new();
        readings.insert("temperature", ReadingValue::Number(21.5));
        readings.insert("battery", ReadingValue::Number(100.0));
        readings.insert("humidity", ReadingValue::Number(40.0));
        assert_eq!(
            readings.keys().collect::<Vec<_>>(),
            ["temperature", "battery", "humidity"]
        );
    }

    #[test]
    fn insert_existing_key_replaces_in_place() {
        let mut readings = Readings::new();
        readings.insert("a", 1.0.into());
        readings.insert("b", 2.0.into());
        readings.insert("a", 3.0.into());
        assert_eq!(readings.len(), 2);
        assert_eq!(readings.get("a"), Some(&ReadingValue::Number(3.0)));
        assert_eq!(readings.keys().next(), Some("a"));
    }

    #[test]
    fn rename_preserves_position() {
        let mut readings = Readings::new();
        readings.insert("temperature", 1.0.into());
        readings.insert("battery", 2.0.into());
        assert!(readings.rename("temperature", "temperature:1"));
        assert!(!readings.rename("missing", "x"));
        assert_eq!(
            readings.keys().collect::<Vec<_>>(),
            ["temperature:1", "battery"]
        );
        assert!(!readings.contains_key("temperature"));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut readings = Readings::new();
        readings.insert("temperature", (-0.5).into());
        readings.insert("battery", 100.0.into());
        readings.insert("button", "press".into());
        readings.insert(
            "dimmer",
            ReadingValue::Dimmer {
                event: DimmerEventKind::RotateLeft,
                steps: 3,
            },
        );
        let json = serde_json::to_string(&readings).unwrap();
        assert_eq!(
            json,
            r#"{"temperature":-0.5,"battery":100,"button":"press","dimmer":{"event":"rotate_left","steps":3}}"#
        );
    }

    #[test]
    fn display_values() {
        assert_eq!(ReadingValue::Number(25.0).to_string(), "25");
        assert_eq!(ReadingValue::Number(-0.5).to_string(), "-0.5");
        assert_eq!(ReadingValue::from("hello").to_string(), "hello");
        assert_eq!(
            ReadingValue::Dimmer {
                event: DimmerEventKind::RotateRight,
                steps: 2
            }
            .to_string(),
            "rotate_right (2 steps)"
        );
    }
}
