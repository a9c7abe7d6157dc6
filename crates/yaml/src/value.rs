//! YAML-backed configuration value

use crate::iterator::{ListCursor, StructCursor};
use crate::node::Node;
use crate::options::KeyOrder;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::trace;
use types::{utils, Capability, ConfigError, Context, Cursor, Data, DecodeTarget, Kind, Result, Value};

/// Position reported for every node; source positions are not tracked
pub const UNSUPPORTED_REF: &str = "unsupported operation";

/// File reported for every node; originating paths are not tracked
pub const PLACEHOLDER_FILE: &str = "/tmp";

/// Read-only view over one node of a parsed YAML document
#[derive(Debug, Clone)]
pub struct YamlValue {
    node: Arc<Node>,
    key_order: KeyOrder,
}

impl YamlValue {
    /// Wrap a node using document key order
    pub fn new(node: Node) -> Self {
        Self::from_shared(Arc::new(node), KeyOrder::default())
    }

    /// Wrap a node with an explicit key order for struct iteration
    pub fn with_key_order(node: Node, key_order: KeyOrder) -> Self {
        Self::from_shared(Arc::new(node), key_order)
    }

    pub(crate) fn from_shared(node: Arc<Node>, key_order: KeyOrder) -> Self {
        Self { node, key_order }
    }

    pub fn key_order(&self) -> KeyOrder {
        self.key_order
    }

    /// Descend through `path`, keeping the concrete type
    pub fn get(&self, path: &[&str]) -> Option<YamlValue> {
        let mut node = &self.node;
        for segment in path {
            node = node.child(segment)?;
        }
        Some(Self::from_shared(Arc::clone(node), self.key_order))
    }

    /// List cursor with its concrete type
    pub fn list_cursor(&self) -> Result<ListCursor> {
        match self.node.as_ref() {
            Node::Sequence(items) => Ok(ListCursor::new(items.clone(), self.key_order)),
            other => Err(ConfigError::UnsupportedIterator { kind: other.kind() }),
        }
    }

    /// Struct cursor with its concrete type
    pub fn struct_cursor(&self) -> Result<StructCursor> {
        match self.node.as_ref() {
            Node::Mapping(children) => {
                let entries = children
                    .iter()
                    .map(|(key, node)| (key.clone(), Arc::clone(node)))
                    .collect();
                Ok(StructCursor::new(entries, self.key_order))
            }
            other => Err(ConfigError::UnsupportedIterator { kind: other.kind() }),
        }
    }

    /// Deserialize this node straight into a serde type
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let document = self.marshal()?;
        serde_yaml::from_slice(&document).map_err(|e| self.decode_error(e))
    }

    fn decode_error(&self, source: impl Into<types::BoxError>) -> ConfigError {
        ConfigError::decode(self.reference(), source)
    }

    /// Run a scalar conversion; containers fail without materializing their data
    fn coerce<T>(
        &self,
        expected: &'static str,
        convert: impl FnOnce(&Data) -> Result<T>,
    ) -> Result<T> {
        match self.node.scalar_data() {
            Some(data) => convert(&data),
            None => Err(ConfigError::coercion(expected, self.node.kind())),
        }
    }
}

impl Value for YamlValue {
    fn lookup(&self, path: &[&str]) -> Option<Box<dyn Value>> {
        let found = self.get(path);
        trace!(path = ?path, found = found.is_some(), "YAML lookup");
        found.map(|v| Box::new(v) as Box<dyn Value>)
    }

    fn list(&self) -> Result<Box<dyn Cursor>> {
        Ok(Box::new(self.list_cursor()?))
    }

    fn structure(&self) -> Result<Box<dyn Cursor>> {
        Ok(Box::new(self.struct_cursor()?))
    }

    fn decode_with_ctx(&self, ctx: Option<&Context>, target: &mut dyn DecodeTarget) -> Result<()> {
        let capability = types::select(target);
        trace!(capability = capability.name(), "Decoding YAML value");

        match capability {
            Capability::PlainSelfDecode(decoder) => {
                decoder.decode(self).map_err(|e| self.decode_error(e))
            }
            Capability::ContextSelfDecode(decoder) => {
                let ctx = ctx.cloned().unwrap_or_else(Context::background);
                decoder.decode(&ctx, self).map_err(|e| self.decode_error(e))
            }
            Capability::ContextConfigDecode(decoder) => {
                let ctx = ctx.cloned().unwrap_or_else(Context::background);
                decoder
                    .decode_config(&ctx, self)
                    .map_err(|e| self.decode_error(e))
            }
            Capability::Structural(structural) => {
                let document = self.marshal().map_err(|e| self.decode_error(e))?;
                structural
                    .decode_document(&document)
                    .map_err(|e| self.decode_error(e))
            }
            Capability::None => Err(self.decode_error("target implements no decoding capability")),
        }
    }

    fn string(&self) -> Result<String> {
        self.coerce("string", utils::to_string)
    }

    fn string_list(&self) -> Result<Vec<String>> {
        match self.node.as_ref() {
            Node::Mapping(_) => Err(ConfigError::coercion("string list", Kind::Struct)),
            node => utils::to_string_list(&node.to_data()),
        }
    }

    fn bytes(&self) -> Result<Vec<u8>> {
        self.coerce("bytes", utils::to_bytes)
    }

    fn bool(&self) -> Result<bool> {
        self.coerce("bool", utils::to_bool)
    }

    fn float64(&self) -> Result<f64> {
        self.coerce("float64", utils::to_f64)
    }

    fn int64(&self) -> Result<i64> {
        self.coerce("int64", utils::to_i64)
    }

    fn uint64(&self) -> Result<u64> {
        self.coerce("uint64", utils::to_u64)
    }

    fn interface(&self) -> Result<Data> {
        Ok(self.node.to_data())
    }

    fn kind(&self) -> Kind {
        self.node.kind()
    }

    fn reference(&self) -> String {
        UNSUPPORTED_REF.to_string()
    }

    fn file(&self) -> String {
        PLACEHOLDER_FILE.to_string()
    }

    fn marshal(&self) -> Result<Vec<u8>> {
        serde_yaml::to_string(&self.node.to_yaml())
            .map(String::into_bytes)
            .map_err(|e| ConfigError::Marshal(Box::new(e)))
    }
}
