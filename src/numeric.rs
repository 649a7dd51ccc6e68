//! Normalization of fields that DNSPod sends either as a JSON number or as a
//! JSON string.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Helper type for deserializing a value that may be a number or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    /// Renders the value in its canonical textual form.
    ///
    /// Integral floats lose their fractional part, so `9.0` becomes `"9"`.
    fn normalize(self) -> String {
        match self {
            NumberOrString::Int(i) => i.to_string(),
            NumberOrString::UInt(u) => u.to_string(),
            NumberOrString::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
            NumberOrString::Float(f) => f.to_string(),
            NumberOrString::Text(s) => s,
        }
    }
}

/// A value normalized to its textual form, whatever its wire representation.
///
/// ```
/// use dnspod::Numeric;
///
/// let a: Numeric = serde_json::from_str("9").unwrap();
/// let b: Numeric = serde_json::from_str("\"9\"").unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "9");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric(String);

impl Numeric {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Numeric> for String {
    fn from(value: Numeric) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_to_string(deserializer).map(Numeric)
    }
}

impl Serialize for Numeric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Deserializes a number or a string to its canonical string. `null` becomes
/// the empty string.
pub(crate) fn deserialize_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(value.map(NumberOrString::normalize).unwrap_or_default())
}

/// Deserializes a number or a numeric string to an i64. `null` and the empty
/// string become `None`.
pub(crate) fn deserialize_to_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let normalized = deserialize_to_string(deserializer)?;
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized.parse().map(Some).map_err(D::Error::custom)
}

/// Deserializes a value, treating `null` as the type's default.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
