//! String interner for identifiers and string literals.
//!
//! Strings are reference-counted and owned by the interner, so they are freed
//! with it. `lookup` hands out a shared `Arc<str>` instead of holding the lock.

use std::sync::Arc;

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct Inner {
    map: FxHashMap<Arc<str>, Name>,
    strings: Vec<Arc<str>>,
}

/// String interner with O(1) interning and lookup.
///
/// Interior mutability through a `RwLock`, so the lexer and the evaluator can
/// share one interner by `&` reference.
pub struct StringInterner {
    inner: RwLock<Inner>,
}

impl StringInterner {
    /// Create a new interner with the empty string and the reserved words
    /// pre-interned.
    pub fn new() -> Self {
        let empty: Arc<str> = Arc::from("");
        let mut map = FxHashMap::default();
        map.insert(Arc::clone(&empty), Name::EMPTY);
        let interner = StringInterner {
            inner: RwLock::new(Inner {
                map,
                strings: vec![empty],
            }),
        };
        for keyword in [
            "let",
            "print",
            "Haley",
            "BlueEgg_000",
            "Nightmare_speakerman",
        ] {
            interner.intern(keyword);
        }
        interner
    }

    /// Try to intern a string, returning its `Name` or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.inner.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.inner.write();
        // Another writer may have raced us between the locks.
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let owned: Arc<str> = Arc::from(s);
        let name = Name::from_raw(index);
        guard.strings.push(Arc::clone(&owned));
        guard.map.insert(owned, name);
        Ok(name)
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity. Use `try_intern` for fallible
    /// interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a `Name`.
    ///
    /// Names from a different interner that are out of range resolve to `""`.
    pub fn lookup(&self, name: Name) -> Arc<str> {
        let inner = self.inner.read();
        inner
            .strings
            .get(name.index())
            .map_or_else(|| Arc::from(""), Arc::clone)
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
