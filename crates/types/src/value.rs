//! Format-independent configuration value interface

use crate::{Context, Data, DecodeTarget, Kind, Result};
use std::fmt;

/// Read-only view over one node of a loaded configuration document
///
/// Every format adapter implements this trait identically so the host can
/// navigate and extract data without knowing where it came from.
pub trait Value: fmt::Debug + Send + Sync {
    /// Descend through keys or list indices; `None` if any segment is absent
    fn lookup(&self, path: &[&str]) -> Option<Box<dyn Value>>;

    /// Cursor over the elements of a list value
    fn list(&self) -> Result<Box<dyn Cursor>>;

    /// Cursor over the entries of a struct value
    fn structure(&self) -> Result<Box<dyn Cursor>>;

    /// Decode into `target` with no caller context
    fn decode(&self, target: &mut dyn DecodeTarget) -> Result<()> {
        self.decode_with_ctx(None, target)
    }

    /// Decode into `target`, passing `ctx` to context-aware decoders
    ///
    /// `None` means no real context was supplied; context-aware decoders then
    /// receive [`Context::background`].
    fn decode_with_ctx(&self, ctx: Option<&Context>, target: &mut dyn DecodeTarget) -> Result<()>;

    fn string(&self) -> Result<String>;
    fn string_list(&self) -> Result<Vec<String>>;
    fn bytes(&self) -> Result<Vec<u8>>;
    fn bool(&self) -> Result<bool>;
    fn float64(&self) -> Result<f64>;
    fn int64(&self) -> Result<i64>;
    fn uint64(&self) -> Result<u64>;

    /// Decoded native data of this node
    fn interface(&self) -> Result<Data>;

    /// Classify this node, consistently with [`Value::interface`]
    fn kind(&self) -> Kind {
        match self.interface() {
            Ok(data) => data.kind(),
            Err(_) => Kind::Undefined,
        }
    }

    /// Human readable source position of this node
    fn reference(&self) -> String;

    /// File this node was loaded from
    fn file(&self) -> String;

    /// Re-serialize this node in its source format
    fn marshal(&self) -> Result<Vec<u8>>;
}

/// Positioned cursor over the children of a list or struct value
///
/// A cursor starts before its first element. Each successful
/// [`Cursor::next`] moves to the following element; once past the last one
/// `next` keeps returning `false`.
pub trait Cursor: Send + Sync {
    fn next(&mut self) -> bool;

    /// Value at the current position, `None` before the first `next`
    fn value(&self) -> Option<Box<dyn Value>>;

    /// Index (lists) or key (structs) at the current position
    fn label(&self) -> Option<String>;
}

/// Adapts a [`Cursor`] into a standard iterator of `(label, value)` pairs
pub struct Entries {
    cursor: Box<dyn Cursor>,
}

impl Entries {
    pub fn new(cursor: Box<dyn Cursor>) -> Self {
        Self { cursor }
    }
}

impl Iterator for Entries {
    type Item = (String, Box<dyn Value>);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.next() {
            return None;
        }
        Some((self.cursor.label()?, self.cursor.value()?))
    }
}

impl From<Box<dyn Cursor>> for Entries {
    fn from(cursor: Box<dyn Cursor>) -> Self {
        Self::new(cursor)
    }
}
