use std::collections::HashMap;
use std::convert::TryFrom;

/// Resolves a `"#name"` reference to an asset slot.
///
/// Implementations may demand-load the asset; the compiler only sees the
/// returned slot. `None` means not found.
pub trait AssetResolver {
    fn resolve(&mut self, name: &str) -> Option<i32>;
}

/// Registers a plain string literal and returns its index.
///
/// The same text registered twice within one compile must yield the same
/// index.
pub trait MessageRegistrar {
    fn register(&mut self, text: &str) -> i32;
}

/// Resolver with no assets. Every reference is reported as not found.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&mut self, _name: &str) -> Option<i32> {
        None
    }
}

#[derive(Debug, Default, Clone)]
pub struct AssetTable {
    slots: HashMap<String, i32>,
}

impl AssetTable {
    pub fn new() -> AssetTable {
        AssetTable::default()
    }

    pub fn insert(&mut self, name: &str, slot: i32) -> Option<i32> {
        self.slots.insert(name.to_string(), slot)
    }
}

impl AssetResolver for AssetTable {
    fn resolve(&mut self, name: &str) -> Option<i32> {
        self.slots.get(name).copied()
    }
}

/// Insertion-ordered message store.
#[derive(Debug, Default, Clone)]
pub struct MessageTable {
    messages: Vec<String>,
    index: HashMap<String, i32>,
}

impl MessageTable {
    pub fn new() -> MessageTable {
        MessageTable::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: i32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.messages.get(i))
            .map(String::as_str)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl MessageRegistrar for MessageTable {
    fn register(&mut self, text: &str) -> i32 {
        if let Some(&index) = self.index.get(text) {
            return index;
        }
        let index = self.messages.len() as i32;
        self.messages.push(text.to_string());
        self.index.insert(text.to_string(), index);
        index
    }
}
