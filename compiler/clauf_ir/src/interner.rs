//! String interner for identifier spellings.
//!
//! One interner belongs to one compilation. Insertion takes `&mut self`,
//! so the single-writer discipline is enforced by the borrow checker
//! rather than by locks.

use super::Name;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct spellings.
    Overflow { count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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

/// Maps identifier text to [`Name`] handles and back.
#[derive(Clone)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        interner.strings.push(Box::from(""));
        interner.map.insert(Box::from(""), Name::EMPTY);
        interner
    }

    /// Intern `s`, returning the existing handle when the spelling was seen before.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }
        let index = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let name = Name::from_raw(index);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        Ok(name)
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics past `u32::MAX` distinct spellings, which a source buffer
    /// accepted by the lexer cannot reach.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up a spelling without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Text for `name`; handles this interner never issued resolve to `""`.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| &**s)
    }

    /// Number of interned strings, the empty string included.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.strings.len())
            .finish()
    }
}

/// Read-only access to interned text.
///
/// Diagnostics and the AST dumper take `&impl StringLookup` so they do not
/// depend on the concrete interner.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}
