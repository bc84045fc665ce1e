//! Target resolution and property access
//!
//! Animations read and write properties through the narrow collaborator
//! traits defined here. `PropertyStore` is the in-memory implementation used
//! by tests and embedding code; a host can supply its own backend (a scene
//! graph, a widget tree) by implementing the same traits.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::value::PropertyValue;

new_key_type! {
    /// Handle to a concrete animation target
    pub struct TargetId;
}

/// Ordered, deduplicated list of resolved targets
pub type TargetList = SmallVec<[TargetId; 4]>;

/// A target specifier, resolved into concrete handles before animating
#[derive(Clone, Debug)]
pub enum TargetSpec {
    /// A single handle
    Id(TargetId),
    /// An explicit list of handles
    Ids(Vec<TargetId>),
    /// All targets registered under this name
    Name(String),
    /// Every known target
    All,
}

impl From<TargetId> for TargetSpec {
    fn from(id: TargetId) -> Self {
        TargetSpec::Id(id)
    }
}

impl From<&str> for TargetSpec {
    fn from(name: &str) -> Self {
        TargetSpec::Name(name.to_string())
    }
}

/// Read and write target properties
pub trait PropertyAccess {
    /// Current value of a property, `None` if the target or property is unknown
    fn read(&self, target: TargetId, property: &str) -> Option<PropertyValue>;

    /// Apply a property value. Side-effecting write, no return.
    fn write(&mut self, target: TargetId, property: &str, value: PropertyValue);
}

/// Map a target specifier to concrete handles
pub trait ResolveTargets {
    /// Resolve to an ordered, deduplicated list.
    ///
    /// Unresolvable specifiers yield an empty list, not an error.
    fn resolve(&self, spec: &TargetSpec) -> TargetList;
}

struct TargetRecord {
    name: String,
    properties: FxHashMap<String, PropertyValue>,
}

/// In-memory target collection implementing both collaborator traits
#[derive(Default)]
pub struct PropertyStore {
    targets: SlotMap<TargetId, TargetRecord>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named target with no properties
    pub fn add_target(&mut self, name: impl Into<String>) -> TargetId {
        self.targets.insert(TargetRecord {
            name: name.into(),
            properties: FxHashMap::default(),
        })
    }

    /// Set a property directly, bypassing animation
    pub fn set(&mut self, target: TargetId, property: impl Into<String>, value: PropertyValue) {
        if let Some(record) = self.targets.get_mut(target) {
            record.properties.insert(property.into(), value);
        }
    }

    /// Read a property directly
    pub fn get(&self, target: TargetId, property: &str) -> Option<&PropertyValue> {
        self.targets.get(target)?.properties.get(property)
    }

    pub fn contains(&self, target: TargetId) -> bool {
        self.targets.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl PropertyAccess for PropertyStore {
    fn read(&self, target: TargetId, property: &str) -> Option<PropertyValue> {
        self.get(target, property).cloned()
    }

    fn write(&mut self, target: TargetId, property: &str, value: PropertyValue) {
        self.set(target, property, value);
    }
}

impl ResolveTargets for PropertyStore {
    fn resolve(&self, spec: &TargetSpec) -> TargetList {
        let mut out = TargetList::new();
        match spec {
            TargetSpec::Id(id) => {
                if self.targets.contains_key(*id) {
                    out.push(*id);
                }
            }
            TargetSpec::Ids(ids) => {
                for id in ids {
                    if self.targets.contains_key(*id) && !out.contains(id) {
                        out.push(*id);
                    }
                }
            }
            TargetSpec::Name(name) => {
                for (id, record) in &self.targets {
                    if record.name == *name {
                        out.push(id);
                    }
                }
            }
            TargetSpec::All => out.extend(self.targets.keys()),
        }
        out
    }
}
