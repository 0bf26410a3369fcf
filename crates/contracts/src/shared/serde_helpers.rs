//! Lenient deserializers for numbers coming from a loosely typed JSON API.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Accepts a JSON number, a numeric string or `null`.
///
/// Anything that is not a finite number ends up as `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    let value = match raw {
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };
    Ok(if value.is_finite() { value } else { 0.0 })
}

/// Page count: a positive whole number, as a JSON number or numeric string.
///
/// `null`, zero, negative or fractional values read as `1`.
pub fn lenient_page_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    let value = match raw {
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };
    let whole = value.is_finite() && value.fract() == 0.0;
    Ok(if whole && value >= 1.0 && value <= u32::MAX as f64 {
        value as u32
    } else {
        1
    })
}

/// `null` is read as the type's default instead of failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
