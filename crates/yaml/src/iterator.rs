//! Cursors over list and struct values

use crate::node::Node;
use crate::options::KeyOrder;
use crate::value::YamlValue;
use std::sync::Arc;
use types::{Cursor, Value};

/// Advance `position` over `len` elements
fn advance(position: &mut Option<usize>, len: usize) -> bool {
    let next = position.map_or(0, |p| p + 1);
    if next >= len {
        return false;
    }
    *position = Some(next);
    true
}

/// Cursor over a snapshot of a sequence's children
#[derive(Debug, Clone)]
pub struct ListCursor {
    position: Option<usize>,
    items: Vec<Arc<Node>>,
    key_order: KeyOrder,
}

impl ListCursor {
    pub(crate) fn new(items: Vec<Arc<Node>>, key_order: KeyOrder) -> Self {
        Self {
            position: None,
            items,
            key_order,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current element as a concrete value
    pub fn current(&self) -> Option<YamlValue> {
        let index = self.position?;
        let node = self.items.get(index)?;
        Some(YamlValue::from_shared(Arc::clone(node), self.key_order))
    }
}

impl Cursor for ListCursor {
    fn next(&mut self) -> bool {
        advance(&mut self.position, self.items.len())
    }

    fn value(&self) -> Option<Box<dyn Value>> {
        self.current().map(|v| Box::new(v) as Box<dyn Value>)
    }

    fn label(&self) -> Option<String> {
        self.position.map(|index| index.to_string())
    }
}

/// Cursor over a snapshot of a mapping's entries
#[derive(Debug, Clone)]
pub struct StructCursor {
    position: Option<usize>,
    entries: Vec<(String, Arc<Node>)>,
    key_order: KeyOrder,
}

impl StructCursor {
    pub(crate) fn new(mut entries: Vec<(String, Arc<Node>)>, key_order: KeyOrder) -> Self {
        if key_order == KeyOrder::Sorted {
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
        Self {
            position: None,
            entries,
            key_order,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current entry as a key and a concrete value
    pub fn current(&self) -> Option<(&str, YamlValue)> {
        let index = self.position?;
        let (key, node) = self.entries.get(index)?;
        Some((key, YamlValue::from_shared(Arc::clone(node), self.key_order)))
    }
}

impl Cursor for StructCursor {
    fn next(&mut self) -> bool {
        advance(&mut self.position, self.entries.len())
    }

    fn value(&self) -> Option<Box<dyn Value>> {
        self.current().map(|(_, v)| Box::new(v) as Box<dyn Value>)
    }

    fn label(&self) -> Option<String> {
        self.current().map(|(key, _)| key.to_string())
    }
}
