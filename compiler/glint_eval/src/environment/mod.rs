//! Variable bindings for one program run.
//!
//! Glint has a single flat scope: assignment creates or overwrites a binding
//! and nothing ever removes one.

use rustc_hash::FxHashMap;

use glint_ir::Name;

use crate::Value;

/// Mapping from interned names to values.
///
/// Owned by the caller and threaded through evaluation by `&mut`; reusing one
/// across runs carries bindings forward.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `name`, replacing any earlier binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
