//! Immutable parsed YAML tree

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Number};
use std::sync::Arc;
use thiserror::Error;
use types::{Data, Kind};

/// Errors produced while turning YAML bytes into a tree
#[derive(Error, Debug)]
pub enum NodeError {
    #[error(transparent)]
    Syntax(#[from] serde_yaml::Error),

    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),

    #[error("duplicate mapping key: {0}")]
    DuplicateKey(String),
}

/// One node of a parsed document
///
/// Children sit behind `Arc` so values can alias subtrees without copying.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Sequence(Vec<Arc<Node>>),
    Mapping(IndexMap<String, Arc<Node>>),
}

impl Node {
    /// Parse the first document of a YAML stream
    pub fn parse(content: &[u8]) -> Result<Node, NodeError> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Node::Null);
        }
        match serde_yaml::Deserializer::from_slice(content).next() {
            Some(document) => Node::from_yaml(serde_yaml::Value::deserialize(document)?),
            None => Ok(Node::Null),
        }
    }

    /// Convert a serde_yaml value into a tree
    ///
    /// Tags are transparent: a tagged node becomes its inner value.
    pub fn from_yaml(value: serde_yaml::Value) -> Result<Node, NodeError> {
        Ok(match value {
            serde_yaml::Value::Null => Node::Null,
            serde_yaml::Value::Bool(b) => Node::Bool(b),
            serde_yaml::Value::Number(n) => Node::from_number(&n),
            serde_yaml::Value::String(s) => Node::String(s),
            serde_yaml::Value::Sequence(items) => Node::Sequence(
                items
                    .into_iter()
                    .map(|item| Node::from_yaml(item).map(Arc::new))
                    .collect::<Result<_, _>>()?,
            ),
            serde_yaml::Value::Mapping(mapping) => {
                let mut children = IndexMap::with_capacity(mapping.len());
                for (key, value) in mapping {
                    match children.entry(key_string(key)?) {
                        Entry::Occupied(entry) => {
                            return Err(NodeError::DuplicateKey(entry.key().clone()));
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(Arc::new(Node::from_yaml(value)?));
                        }
                    }
                }
                Node::Mapping(children)
            }
            serde_yaml::Value::Tagged(tagged) => Node::from_yaml(tagged.value)?,
        })
    }

    fn from_number(n: &Number) -> Node {
        if let Some(i) = n.as_i64() {
            Node::Int(i)
        } else if let Some(u) = n.as_u64() {
            Node::Uint(u)
        } else {
            Node::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    /// Convert back into a serde_yaml value for serialization
    pub fn to_yaml(&self) -> serde_yaml::Value {
        match self {
            Node::Null => serde_yaml::Value::Null,
            Node::Bool(b) => serde_yaml::Value::Bool(*b),
            Node::Int(i) => serde_yaml::Value::Number(Number::from(*i)),
            Node::Uint(u) => serde_yaml::Value::Number(Number::from(*u)),
            Node::Float(f) => serde_yaml::Value::Number(Number::from(*f)),
            Node::String(s) => serde_yaml::Value::String(s.clone()),
            Node::Sequence(items) => {
                serde_yaml::Value::Sequence(items.iter().map(|item| item.to_yaml()).collect())
            }
            Node::Mapping(children) => {
                let mut mapping = Mapping::with_capacity(children.len());
                for (key, value) in children {
                    mapping.insert(serde_yaml::Value::String(key.clone()), value.to_yaml());
                }
                serde_yaml::Value::Mapping(mapping)
            }
        }
    }

    /// Native data for this subtree
    pub fn to_data(&self) -> Data {
        match self {
            Node::Sequence(items) => Data::List(items.iter().map(|item| item.to_data()).collect()),
            Node::Mapping(children) => Data::Map(
                children
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_data()))
                    .collect(),
            ),
            scalar => scalar.scalar_data().unwrap_or(Data::Null),
        }
    }

    /// Native data for a scalar node, `None` for sequences and mappings
    pub fn scalar_data(&self) -> Option<Data> {
        match self {
            Node::Null => Some(Data::Null),
            Node::Bool(b) => Some(Data::Bool(*b)),
            Node::Int(i) => Some(Data::Int(*i)),
            Node::Uint(u) => Some(Data::Uint(*u)),
            Node::Float(f) => Some(Data::Float(*f)),
            Node::String(s) => Some(Data::String(s.clone())),
            Node::Sequence(_) | Node::Mapping(_) => None,
        }
    }

    /// Same classification as `self.to_data().kind()` without building the data
    pub fn kind(&self) -> Kind {
        match self {
            Node::Null => Kind::Null,
            Node::Bool(_) => Kind::Bool,
            Node::Int(_) | Node::Uint(_) => Kind::Number,
            Node::Float(_) => Kind::Decimal,
            Node::String(_) => Kind::String,
            Node::Sequence(_) => Kind::List,
            Node::Mapping(_) => Kind::Struct,
        }
    }

    /// Child addressed by one path segment
    pub fn child(&self, segment: &str) -> Option<&Arc<Node>> {
        match self {
            Node::Mapping(children) => children.get(segment),
            Node::Sequence(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

fn key_string(key: serde_yaml::Value) -> Result<String, NodeError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => key_string(tagged.value),
        other => Err(NodeError::UnsupportedKey(
            serde_yaml::to_string(&other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|_| "<complex key>".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        let node = Node::parse(b"i: -3\nu: 18446744073709551615\nf: 1.5\ns: text\nb: true\nn: ~\n").unwrap();
        assert_eq!(**node.child("i").unwrap(), Node::Int(-3));
        assert_eq!(**node.child("u").unwrap(), Node::Uint(u64::MAX));
        assert_eq!(**node.child("f").unwrap(), Node::Float(1.5));
        assert_eq!(**node.child("s").unwrap(), Node::String("text".to_string()));
        assert_eq!(**node.child("b").unwrap(), Node::Bool(true));
        assert_eq!(**node.child("n").unwrap(), Node::Null);
    }

    #[test]
    fn test_empty_document_is_null() {
        assert_eq!(Node::parse(b"").unwrap(), Node::Null);
        assert_eq!(Node::parse(b" \n\n").unwrap(), Node::Null);
    }

    #[test]
    fn test_first_document_of_stream() {
        let node = Node::parse(b"a: 1\n---\n").unwrap();
        assert_eq!(**node.child("a").unwrap(), Node::Int(1));

        let node = Node::parse(b"a: 1\n---\nb: 2\n").unwrap();
        assert_eq!(**node.child("a").unwrap(), Node::Int(1));
        assert!(node.child("b").is_none());
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let node = Node::parse(b"1: one\ntrue: yes\n").unwrap();
        assert_eq!(**node.child("1").unwrap(), Node::String("one".to_string()));
        assert!(node.child("true").is_some());
    }

    #[test]
    fn test_keys_colliding_after_stringify_rejected() {
        let err = Node::parse(b"1: int\n\"1\": str\n").unwrap_err();
        assert!(matches!(err, NodeError::DuplicateKey(ref key) if key == "1"));
    }

    #[test]
    fn test_complex_key_rejected() {
        let err = Node::parse(b"? [a, b]\n: value\n").unwrap_err();
        assert!(matches!(err, NodeError::UnsupportedKey(_)));
    }

    #[test]
    fn test_tags_are_transparent() {
        let node = Node::parse(b"b: !!binary aGVsbG8=\nc: !binary notbase64\nd: !custom text\n").unwrap();
        assert_eq!(**node.child("b").unwrap(), Node::String("aGVsbG8=".to_string()));
        assert_eq!(**node.child("c").unwrap(), Node::String("notbase64".to_string()));
        assert_eq!(**node.child("d").unwrap(), Node::String("text".to_string()));
        assert_eq!(node.child("c").unwrap().kind(), Kind::String);
    }

    #[test]
    fn test_sequence_child_by_index() {
        let node = Node::parse(b"[a, b, c]").unwrap();
        assert_eq!(**node.child("2").unwrap(), Node::String("c".to_string()));
        assert!(node.child("3").is_none());
        assert!(node.child("-1").is_none());
        assert!(node.child("x").is_none());
    }

    #[test]
    fn test_mapping_keeps_document_order() {
        let node = Node::parse(b"zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        match node {
            Node::Mapping(children) => {
                let keys: Vec<_> = children.keys().cloned().collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            }
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_data_skips_containers() {
        assert_eq!(Node::Int(3).scalar_data(), Some(Data::Int(3)));
        assert_eq!(Node::Null.scalar_data(), Some(Data::Null));
        assert!(Node::Sequence(vec![]).scalar_data().is_none());
        assert!(Node::Mapping(IndexMap::new()).scalar_data().is_none());
    }

    #[test]
    fn test_kind_matches_data() {
        let node = Node::parse(b"a: [1, 2.5, x, null, {b: true}]\n").unwrap();
        assert_eq!(node.kind(), node.to_data().kind());
        if let Node::Mapping(children) = &node {
            if let Node::Sequence(items) = children["a"].as_ref() {
                for item in items {
                    assert_eq!(item.kind(), item.to_data().kind());
                }
            }
        }
    }
}
