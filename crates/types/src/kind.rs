//! Classification of configuration values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a configuration value, independent of the source format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Undefined,
    Null,
    String,
    Bool,
    /// Integral number
    Number,
    /// Floating point number
    Decimal,
    /// Key-value mapping
    Struct,
    List,
    Bytes,
}

impl Kind {
    /// Lowercase name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::Decimal => "decimal",
            Kind::Struct => "struct",
            Kind::List => "list",
            Kind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
