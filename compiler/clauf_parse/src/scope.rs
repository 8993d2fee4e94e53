//! Flat per-function symbol table.

use rustc_hash::FxHashMap;

use clauf_ir::{DeclId, Name};

/// Name bindings visible in the function body being parsed.
///
/// There is no block nesting: a function body is one scope, and it is
/// emptied before each function definition.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, DeclId>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Bind `name` to `decl`.
    ///
    /// Returns the binding it replaced, if any. A `Some` here means the
    /// same name was declared twice in one scope.
    pub fn insert_or_shadow(&mut self, name: Name, decl: DeclId) -> Option<DeclId> {
        self.bindings.insert(name, decl)
    }

    pub fn lookup(&self, name: Name) -> Option<DeclId> {
        self.bindings.get(&name).copied()
    }

    /// Drop every binding.
    pub fn reset(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_lookup() {
        let mut scope = Scope::new();
        let x = Name::from_raw(1);
        assert_eq!(scope.insert_or_shadow(x, DeclId::new(0)), None);
        assert_eq!(scope.lookup(x), Some(DeclId::new(0)));
        assert_eq!(scope.lookup(Name::from_raw(2)), None);
    }

    #[test]
    fn test_shadow_returns_previous_and_rebinds() {
        let mut scope = Scope::new();
        let x = Name::from_raw(1);
        scope.insert_or_shadow(x, DeclId::new(0));
        assert_eq!(scope.insert_or_shadow(x, DeclId::new(3)), Some(DeclId::new(0)));
        assert_eq!(scope.lookup(x), Some(DeclId::new(3)));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_reset_empties() {
        let mut scope = Scope::new();
        scope.insert_or_shadow(Name::from_raw(1), DeclId::new(0));
        scope.insert_or_shadow(Name::from_raw(2), DeclId::new(1));
        scope.reset();
        assert!(scope.is_empty());
        assert_eq!(scope.lookup(Name::from_raw(1)), None);
    }
}
