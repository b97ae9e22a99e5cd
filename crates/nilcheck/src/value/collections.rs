//! Slice, map and channel handles

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{check_assignable, HashableValue, Value};
use crate::error::Result;
use crate::kind::Type;

// ═══════════════════════════════════════════════════════════════════════
// Slices
// ═══════════════════════════════════════════════════════════════════════

/// A resizable sequence.
///
/// An unset slice has no backing storage. An empty slice has backing
/// storage with zero elements. Both have length zero.
#[derive(Debug, Clone)]
pub struct SliceRef {
    elem: Type,
    items: Option<Arc<Vec<Value>>>,
}

impl SliceRef {
    /// An unset slice of `elem`
    pub fn null(elem: Type) -> Self {
        Self { elem, items: None }
    }

    /// A set slice with zero elements
    pub fn empty(elem: Type) -> Self {
        Self {
            elem,
            items: Some(Arc::new(Vec::new())),
        }
    }

    /// A set slice, checking each element against `elem`.
    pub fn new(elem: Type, items: Vec<Value>) -> Result<Self> {
        for item in &items {
            check_assignable(&elem, item)?;
        }
        Ok(Self::from_checked(elem, items))
    }

    pub(super) fn from_checked(elem: Type, items: Vec<Value>) -> Self {
        Self {
            elem,
            items: Some(Arc::new(items)),
        }
    }

    /// Whether the slice has no backing storage
    pub fn is_unset(&self) -> bool {
        self.items.is_none()
    }

    /// Element type
    pub fn elem_type(&self) -> &Type {
        &self.elem
    }

    /// The slice type, `[]elem`
    pub fn declared_type(&self) -> Type {
        Type::slice(self.elem.clone())
    }

    /// Number of elements (zero when unset)
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    /// Whether there are no elements, set or not
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an element by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.as_ref().and_then(|items| items.get(index))
    }

    /// Elements as a vector (empty when unset)
    pub fn to_vec(&self) -> Vec<Value> {
        self.items
            .as_ref()
            .map(|items| items.to_vec())
            .unwrap_or_default()
    }

    fn same_storage(&self, other: &SliceRef) -> bool {
        match (&self.items, &other.items) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for SliceRef {
    fn eq(&self, other: &Self) -> bool {
        self.elem == other.elem && self.same_storage(other)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Maps
// ═══════════════════════════════════════════════════════════════════════

type Entries = HashMap<HashableValue, Value>;

/// An associative mapping with shared storage.
///
/// Reads on an unset map behave like reads on an empty one.
#[derive(Debug, Clone)]
pub struct MapRef {
    key: Type,
    value: Type,
    entries: Option<Arc<Entries>>,
}

impl MapRef {
    /// An unset map
    pub fn null(key: Type, value: Type) -> Self {
        Self {
            key,
            value,
            entries: None,
        }
    }

    /// A set map with zero entries
    pub fn new(key: Type, value: Type) -> Self {
        Self {
            key,
            value,
            entries: Some(Arc::new(HashMap::new())),
        }
    }

    /// A set map holding `entries`; later duplicates of a key win.
    pub fn from_entries(key: Type, value: Type, entries: Vec<(Value, Value)>) -> Result<Self> {
        let mut map = MapRef::new(key, value);
        let mut checked = Entries::with_capacity(entries.len());
        for (k, v) in entries {
            let k = map.lookup_key(&k)?;
            check_assignable(&map.value, &v)?;
            checked.insert(k, v);
        }
        map.entries = Some(Arc::new(checked));
        Ok(map)
    }

    /// Whether the map has no backing storage
    pub fn is_unset(&self) -> bool {
        self.entries.is_none()
    }

    /// Key type
    pub fn key_type(&self) -> &Type {
        &self.key
    }

    /// Value type
    pub fn value_type(&self) -> &Type {
        &self.value
    }

    /// The map type, `map[key]value`
    pub fn declared_type(&self) -> Type {
        Type::map(self.key.clone(), self.value.clone())
    }

    /// Number of entries (zero when unset)
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.len())
    }

    /// Whether there are no entries, set or not
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup_key(&self, key: &Value) -> Result<HashableValue> {
        check_assignable(&self.key, key)?;
        HashableValue::new(key.clone()).inspect_err(|err| {
            debug!(ty = %self.declared_type(), %err, "rejected map key");
        })
    }

    /// Look up a key.
    ///
    /// An unset map finds nothing. A key of the wrong type or an
    /// unhashable key is an error, set or not.
    pub fn get(&self, key: &Value) -> Result<Option<Value>> {
        let key = self.lookup_key(key)?;
        Ok(self
            .entries
            .as_ref()
            .and_then(|entries| entries.get(&key).cloned()))
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &Value) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// The entries, in no particular order
    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.entries
            .as_ref()
            .map(|entries| {
                entries
                    .iter()
                    .map(|(k, v)| (k.as_value().clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl PartialEq for MapRef {
    fn eq(&self, other: &Self) -> bool {
        let same_storage = match (&self.entries, &other.entries) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.key == other.key && self.value == other.value && same_storage
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Channels
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug)]
struct Channel {
    capacity: usize,
}

/// A channel handle.
///
/// Only its identity and buffer capacity are modelled; a set channel has
/// backing storage, an unset one has none.
#[derive(Debug, Clone)]
pub struct ChanRef {
    elem: Type,
    chan: Option<Arc<Channel>>,
}

impl ChanRef {
    /// An unset channel
    pub fn null(elem: Type) -> Self {
        Self { elem, chan: None }
    }

    /// A set channel buffering up to `capacity` values
    pub fn make(elem: Type, capacity: usize) -> Self {
        Self {
            elem,
            chan: Some(Arc::new(Channel { capacity })),
        }
    }

    /// Whether the channel has no backing storage
    pub fn is_unset(&self) -> bool {
        self.chan.is_none()
    }

    /// Element type
    pub fn elem_type(&self) -> &Type {
        &self.elem
    }

    /// The channel type, `chan elem`
    pub fn declared_type(&self) -> Type {
        Type::chan(self.elem.clone())
    }

    /// Buffer capacity (zero when unset)
    pub fn capacity(&self) -> usize {
        self.chan.as_ref().map_or(0, |chan| chan.capacity)
    }
}

impl PartialEq for ChanRef {
    fn eq(&self, other: &Self) -> bool {
        let same_chan = match (&self.chan, &other.chan) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.elem == other.elem && same_chan
    }
}
