//! Arena that owns every node of one compilation.
//!
//! - Contiguous storage per node family
//! - Children referenced by `u32` handles
//! - Ordered child lists stored as ranges into flattened side tables
//! - Nodes are never freed individually; the arena drops as a whole

use super::ast::{BuiltinKind, Decl, Expr, Stmt, Type};
use super::{DeclId, DeclRange, ExprId, StmtId, StmtRange, TypeId};

/// Arena sizes stay below `u32::MAX`: each node consumes at least one byte
/// of a source buffer the lexer has already bounded to `u32::MAX` bytes.
#[expect(
    clippy::cast_possible_truncation,
    reason = "node counts are bounded by the u32-addressable source length"
)]
#[inline]
fn next_index(len: usize) -> u32 {
    len as u32
}

/// Storage for types, expressions, statements and declarations.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct AstArena {
    types: Vec<Type>,
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    decls: Vec<Decl>,

    /// Flattened block statement lists.
    stmt_lists: Vec<StmtId>,
    /// Flattened declaration lists.
    decl_lists: Vec<DeclId>,

    /// Shared `int` node, created on first request.
    int_type: Option<TypeId>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size vectors from the source length.
    /// Heuristic: one expression per ~8 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_exprs = source_len / 8;
        AstArena {
            types: Vec::with_capacity(4),
            exprs: Vec::with_capacity(estimated_exprs),
            stmts: Vec::with_capacity(estimated_exprs / 4),
            decls: Vec::with_capacity(estimated_exprs / 8),
            stmt_lists: Vec::with_capacity(estimated_exprs / 4),
            decl_lists: Vec::with_capacity(estimated_exprs / 8),
            int_type: None,
        }
    }

    // ===== Types =====

    /// The builtin type node for `kind`, shared by every user in this arena.
    pub fn builtin_type(&mut self, kind: BuiltinKind) -> TypeId {
        match kind {
            BuiltinKind::Int => {
                if let Some(id) = self.int_type {
                    return id;
                }
                let id = self.alloc_type(Type::Builtin(BuiltinKind::Int));
                self.int_type = Some(id);
                id
            }
        }
    }

    /// A function type returning `return_type`.
    pub fn function_type(&mut self, return_type: TypeId) -> TypeId {
        self.alloc_type(Type::Function { return_type })
    }

    fn alloc_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId::new(next_index(self.types.len()));
        self.types.push(ty);
        id
    }

    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    #[track_caller]
    pub fn get_type(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    #[inline]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Statements =====

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Store an ordered statement list, returning its range.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len();
        self.stmt_lists.extend(stmts);
        StmtRange::new(
            next_index(start),
            next_index(self.stmt_lists.len() - start),
        )
    }

    #[inline]
    #[track_caller]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    // ===== Declarations =====

    #[inline]
    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::new(next_index(self.decls.len()));
        self.decls.push(decl);
        id
    }

    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    #[track_caller]
    pub fn get_decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Store an ordered declaration list, returning its range.
    pub fn alloc_decl_list(&mut self, decls: impl IntoIterator<Item = DeclId>) -> DeclRange {
        let start = self.decl_lists.len();
        self.decl_lists.extend(decls);
        DeclRange::new(
            next_index(start),
            next_index(self.decl_lists.len() - start),
        )
    }

    #[inline]
    #[track_caller]
    pub fn get_decl_list(&self, range: DeclRange) -> &[DeclId] {
        &self.decl_lists[range.to_range()]
    }
}
