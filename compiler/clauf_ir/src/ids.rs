//! Node handles and ranges for the flat AST.
//!
//! Every node lives in an [`crate::AstArena`] vector; parents refer to
//! children by `u32` index and to ordered child lists by a `(start, len)`
//! range into a flattened side table.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Sentinel for "no node".
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Index into the arena vector.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Slice bounds into the side table.
            #[inline]
            pub fn to_range(&self) -> std::ops::Range<usize> {
                self.start as usize..(self.start as usize + self.len as usize)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start + self.len
                )
            }
        }
    };
}

define_id!(
    /// Handle to a [`crate::Type`] node.
    TypeId
);
define_id!(
    /// Handle to an [`crate::Expr`] node.
    ExprId
);
define_id!(
    /// Handle to a [`crate::Stmt`] node.
    StmtId
);
define_id!(
    /// Handle to a [`crate::Decl`] node.
    ///
    /// Used for the non-owning `Identifier -> declaration` reference.
    DeclId
);

define_range!(
    /// Ordered statement list of a block.
    StmtRange
);
define_range!(
    /// Ordered declaration list of a declaration statement or translation unit.
    DeclRange
);

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{DeclRange, ExprId};
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(DeclRange, 8);
}
