//! YAML adapter for the configuration value interface
//!
//! This crate loads YAML files from a host-supplied [`FileSet`](types::FileSet)
//! and exposes the parsed documents through the format-independent
//! [`Value`](types::Value) and [`Cursor`](types::Cursor) traits.

pub mod iterator;
pub mod loader;
pub mod node;
pub mod options;
pub mod value;

pub use iterator::{ListCursor, StructCursor};
pub use loader::{YamlLoader, NAME, PATH_PATTERN};
pub use node::{Node, NodeError};
pub use options::{KeyOrder, LoaderOptions};
pub use value::YamlValue;

/// Parse YAML bytes into a value without going through a file set
pub fn parse(content: &[u8]) -> Result<YamlValue, NodeError> {
    Node::parse(content).map(YamlValue::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Kind, Value};

    #[test]
    fn test_parse_entry_point() {
        let value = parse(b"name: demo\n").unwrap();
        assert_eq!(value.kind(), Kind::Struct);
        assert_eq!(value.lookup(&["name"]).unwrap().string().unwrap(), "demo");
        assert!(parse(b"a: [1, 2\n").is_err());
    }
}
