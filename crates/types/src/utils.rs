//! Scalar coercion helpers shared by every value adapter

use crate::{ConfigError, Data, Result};

/// Largest float that is still below `2^63`
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
/// `2^64`
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

/// Convert data to a string
pub fn to_string(data: &Data) -> Result<String> {
    match data {
        Data::String(s) => Ok(s.clone()),
        Data::Bool(b) => Ok(b.to_string()),
        Data::Int(n) => Ok(n.to_string()),
        Data::Uint(n) => Ok(n.to_string()),
        Data::Float(f) => Ok(f.to_string()),
        Data::Bytes(bytes) => String::from_utf8(bytes.clone())
            .map_err(|_| ConfigError::coercion("string", data.kind())),
        _ => Err(ConfigError::coercion("string", data.kind())),
    }
}

/// Convert data to a list of strings
///
/// A single string becomes a one-element list.
pub fn to_string_list(data: &Data) -> Result<Vec<String>> {
    match data {
        Data::List(items) => items.iter().map(to_string).collect(),
        Data::String(s) => Ok(vec![s.clone()]),
        _ => Err(ConfigError::coercion("string list", data.kind())),
    }
}

/// Convert data to raw bytes
pub fn to_bytes(data: &Data) -> Result<Vec<u8>> {
    match data {
        Data::Bytes(bytes) => Ok(bytes.clone()),
        Data::String(s) => Ok(s.as_bytes().to_vec()),
        _ => Err(ConfigError::coercion("bytes", data.kind())),
    }
}

/// Convert data to a boolean
pub fn to_bool(data: &Data) -> Result<bool> {
    match data {
        Data::Bool(b) => Ok(*b),
        Data::Int(n) => Ok(*n != 0),
        Data::Uint(n) => Ok(*n != 0),
        Data::String(s) => parse_bool(s).ok_or_else(|| ConfigError::coercion("bool", data.kind())),
        _ => Err(ConfigError::coercion("bool", data.kind())),
    }
}

/// Convert data to a 64-bit float
pub fn to_f64(data: &Data) -> Result<f64> {
    match data {
        Data::Float(f) => Ok(*f),
        Data::Int(n) => Ok(*n as f64),
        Data::Uint(n) => Ok(*n as f64),
        Data::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ConfigError::coercion("float64", data.kind())),
        _ => Err(ConfigError::coercion("float64", data.kind())),
    }
}

/// Convert data to a signed 64-bit integer
pub fn to_i64(data: &Data) -> Result<i64> {
    let err = || ConfigError::coercion("int64", data.kind());
    match data {
        Data::Int(n) => Ok(*n),
        Data::Uint(n) => i64::try_from(*n).map_err(|_| err()),
        Data::Float(f) if is_integral(*f) && *f >= -I64_UPPER && *f < I64_UPPER => Ok(*f as i64),
        Data::String(s) => s.trim().parse().map_err(|_| err()),
        _ => Err(err()),
    }
}

/// Convert data to an unsigned 64-bit integer
pub fn to_u64(data: &Data) -> Result<u64> {
    let err = || ConfigError::coercion("uint64", data.kind());
    match data {
        Data::Uint(n) => Ok(*n),
        Data::Int(n) => u64::try_from(*n).map_err(|_| err()),
        Data::Float(f) if is_integral(*f) && *f >= 0.0 && *f < U64_UPPER => Ok(*f as u64),
        Data::String(s) => s.trim().parse().map_err(|_| err()),
        _ => Err(err()),
    }
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
