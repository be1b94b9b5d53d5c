//! Lenient numeric deserializers.
//!
//! The service aggregates with SQL `SUM`/`AVG`, and decimal results can come
//! back as JSON strings (`"1234.50"`) instead of numbers. These helpers accept
//! both.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    fn into_f64<E: Error>(self) -> Result<f64, E> {
        match self {
            Numeric::Integer(n) => Ok(n as f64),
            Numeric::Float(n) => finite(n),
            Numeric::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => finite(n),
                Err(_) => Err(E::custom(format!("invalid number {:?}", s))),
            },
        }
    }

    fn into_i64<E: Error>(self) -> Result<i64, E> {
        match self {
            Numeric::Integer(n) => Ok(n),
            Numeric::Float(n) => whole(n),
            Numeric::Text(s) => {
                let trimmed = s.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Ok(n);
                }
                match trimmed.parse::<f64>() {
                    Ok(n) => whole(n),
                    Err(_) => Err(E::custom(format!("invalid integer {:?}", s))),
                }
            }
        }
    }
}

fn finite<E: Error>(n: f64) -> Result<f64, E> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(E::custom(format!("expected a finite number, got {}", n)))
    }
}

/// `n` as an `i64` when it has no fractional part and fits exactly.
fn whole<E: Error>(n: f64) -> Result<i64, E> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if n.is_finite() && n.fract() == 0.0 && n >= -LIMIT && n < LIMIT {
        Ok(n as i64)
    } else {
        Err(E::custom(format!("expected an integer, got {}", n)))
    }
}

pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Numeric::deserialize(deserializer)?.into_f64()
}

pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Numeric::deserialize(deserializer)?.into_i64()
}

pub fn year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = Numeric::deserialize(deserializer)?.into_i64()?;
    i32::try_from(n).map_err(|_| D::Error::custom(format!("year out of range: {}", n)))
}

/// `null` and a missing field both map to `None`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Numeric>::deserialize(deserializer)?
        .map(Numeric::into_f64)
        .transpose()
}
