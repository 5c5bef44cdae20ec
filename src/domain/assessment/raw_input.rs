//! Raw request record and strict field readers.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

use super::AssessmentError;

/// The eleven attributes of an assessment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Height,
    Weight,
    Bmi,
    StressLevel,
    SleepHours,
    Gender,
    Smoker,
    Alcohol,
    Exercise,
    Diet,
}

impl Field {
    /// Every field, in request documentation order.
    pub const ALL: [Field; 11] = [
        Field::Age,
        Field::Height,
        Field::Weight,
        Field::Bmi,
        Field::StressLevel,
        Field::SleepHours,
        Field::Gender,
        Field::Smoker,
        Field::Alcohol,
        Field::Exercise,
        Field::Diet,
    ];

    /// Key of this field in the request record.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Bmi => "bmi",
            Field::StressLevel => "stressLevel",
            Field::SleepHours => "sleepHours",
            Field::Gender => "gender",
            Field::Smoker => "smoker",
            Field::Alcohol => "alcohol",
            Field::Exercise => "exercise",
            Field::Diet => "diet",
        }
    }

    /// Only `bmi` may be omitted.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Bmi)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A flat, loosely typed request record.
///
/// Values may arrive as JSON numbers or numeric strings; nothing is
/// defaulted. Blank strings and `null` count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    fields: Map<String, Value>,
}

impl RawInput {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style insert, mostly for tests and adapters.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns a copy without `key`.
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    /// Returns the value for `field` unless absent, null, or blank.
    pub fn get(&self, field: Field) -> Option<&Value> {
        match self.fields.get(field.key()) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => Some(value),
        }
    }

    fn require(&self, field: Field) -> Result<&Value, AssessmentError> {
        self.get(field)
            .ok_or_else(|| AssessmentError::missing_field(field.key()))
    }

    /// Reads a required free-text field.
    pub fn require_text(&self, field: Field) -> Result<&str, AssessmentError> {
        match self.require(field)? {
            Value::String(s) => Ok(s.as_str()),
            other => Err(AssessmentError::invalid_field(
                field.key(),
                format!("expected text, got {}", json_kind(other)),
            )),
        }
    }

    /// Reads a required whole number. Fractional values are rejected.
    pub fn require_integer(&self, field: Field) -> Result<i64, AssessmentError> {
        let value = self.require(field)?;
        let parsed = match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| {
            AssessmentError::invalid_field(field.key(), format!("expected an integer, got {}", value))
        })
    }

    /// Reads a required finite number.
    pub fn require_number(&self, field: Field) -> Result<f64, AssessmentError> {
        let value = self.require(field)?;
        parse_number(value).ok_or_else(|| {
            AssessmentError::invalid_field(field.key(), format!("expected a number, got {}", value))
        })
    }

    /// Reads an optional number. Present-but-unparsable counts as absent.
    pub fn optional_number(&self, field: Field) -> Option<f64> {
        self.get(field).and_then(parse_number)
    }

    /// Lowercased, trimmed text of a field, for rule comparisons.
    pub fn lowered_text(&self, field: Field) -> Result<String, AssessmentError> {
        Ok(self.require_text(field)?.trim().to_lowercase())
    }
}

impl From<Map<String, Value>> for RawInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
