//! Native representation of configuration data

use crate::Kind;
use indexmap::IndexMap;
use serde::Serialize;

/// Decoded native data behind a configuration value
///
/// This is what [`Value::interface`](crate::Value::interface) hands back to the
/// host. Classification through [`Data::kind`] is the only place where a value's
/// [`Kind`] is derived, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Data {
    Null,
    Bool(bool),
    /// Integer that fits in `i64`
    Int(i64),
    /// Integer above `i64::MAX`
    Uint(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Data>),
    Map(IndexMap<String, Data>),
}

impl Data {
    /// Classify the data
    pub fn kind(&self) -> Kind {
        match self {
            Data::Null => Kind::Null,
            Data::Bool(_) => Kind::Bool,
            Data::Int(_) | Data::Uint(_) => Kind::Number,
            Data::Float(_) => Kind::Decimal,
            Data::String(_) => Kind::String,
            Data::Bytes(_) => Kind::Bytes,
            Data::List(_) => Kind::List,
            Data::Map(_) => Kind::Struct,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Data::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Data>> {
        match self {
            Data::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::String(s.to_string())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::String(s)
    }
}

impl From<bool> for Data {
    fn from(b: bool) -> Self {
        Data::Bool(b)
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Data::Int(n)
    }
}

impl From<u64> for Data {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Data::Int(n),
            Err(_) => Data::Uint(n),
        }
    }
}

impl From<f64> for Data {
    fn from(n: f64) -> Self {
        Data::Float(n)
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Data::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Data::Null.kind(), Kind::Null);
        assert_eq!(Data::from(true).kind(), Kind::Bool);
        assert_eq!(Data::from(-3i64).kind(), Kind::Number);
        assert_eq!(Data::from(u64::MAX).kind(), Kind::Number);
        assert_eq!(Data::from(1.5).kind(), Kind::Decimal);
        assert_eq!(Data::from("x").kind(), Kind::String);
        assert_eq!(Data::from(vec![1u8, 2]).kind(), Kind::Bytes);
        assert_eq!(Data::List(vec![]).kind(), Kind::List);
        assert_eq!(Data::Map(IndexMap::new()).kind(), Kind::Struct);
    }

    #[test]
    fn test_small_unsigned_becomes_int() {
        assert_eq!(Data::from(7u64), Data::Int(7));
        assert_eq!(Data::from(u64::MAX), Data::Uint(u64::MAX));
    }

    #[test]
    fn test_map_equality_ignores_order() {
        let mut a = IndexMap::new();
        a.insert("x".to_string(), Data::Int(1));
        a.insert("y".to_string(), Data::Int(2));
        let mut b = IndexMap::new();
        b.insert("y".to_string(), Data::Int(2));
        b.insert("x".to_string(), Data::Int(1));
        assert_eq!(Data::Map(a), Data::Map(b));
    }
}
