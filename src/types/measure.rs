use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A pixel measure (column width or row height).
///
/// Hand-written documents carry numbers (`120`); documents exported from a
/// live grid carry strings (`"120"`), and older files may still have a `px`
/// suffix. All three load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Measure {
    /// The bare number as attribute text, with any `px` suffix removed.
    #[must_use]
    pub fn attr_value(&self) -> String {
        match self {
            Measure::Number(n) => n.to_string(),
            Measure::Text(s) => s.replacen("px", "", 1),
        }
    }

    /// The value as a CSS length (`"120px"`).
    #[must_use]
    pub fn css(&self) -> String {
        format!("{}px", self.attr_value())
    }

    /// Whether the measure is empty or zero.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let attr = self.attr_value();
        let trimmed = attr.trim();
        trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(|n| n == 0.0)
    }
}

impl From<u32> for Measure {
    fn from(n: u32) -> Self {
        Measure::Number(f64::from(n))
    }
}

impl From<&str> for Measure {
    fn from(s: &str) -> Self {
        Measure::Text(s.to_string())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.attr_value())
    }
}

/// Accept a span as an integer or a numeric string.
///
/// Exported documents carry the raw `td` attribute text, so `"2"` is as common
/// as `2`. Anything unparsable is treated as absent.
pub(crate) fn de_span<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Int(n)) => u32::try_from(n).ok(),
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Raw::Float(f)) if f.is_finite() && f >= 0.0 && f <= f64::from(u32::MAX) => {
            Some(f as u32)
        }
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Text form of a scalar JSON value, the way the grid would stringify it.
///
/// Arrays, objects and `null` have no text form.
pub(crate) fn js_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) => f.to_string(),
            (None, None, None) => n.to_string(),
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JavaScript truthiness of a JSON value.
pub(crate) fn js_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Accept a text field as a string, number or boolean.
///
/// Hand-written documents often carry `"value": 42`. Values with no text
/// form load as absent instead of failing the whole document.
pub(crate) fn de_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(js_text))
}

/// [`de_text`] for fields that are plain strings, absent meaning empty.
pub(crate) fn de_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_text(deserializer)?.unwrap_or_default())
}

/// Accept a flag as any JSON value, by truthiness (`"true"`, `1`, `true`).
pub(crate) fn de_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().is_some_and(js_truthy))
}
