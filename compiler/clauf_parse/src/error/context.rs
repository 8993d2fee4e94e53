//! Error context for "while parsing X" notes.

/// What the parser was working on when a structural error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// A function definition at file scope.
    FunctionDef,
    /// A `{ ... }` block.
    Block,
    /// A declaration statement such as `int x, y;`.
    Declaration,
    /// A declarator: a name, `( declarator )` or `declarator ()`.
    Declarator,
    /// A `__clauf_print` or `__clauf_assert` statement.
    BuiltinStmt,
    /// An expression statement.
    ExprStmt,
    /// A parenthesized expression.
    Parenthesized,
    /// A `cond ? a : b` expression.
    Conditional,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            Self::FunctionDef => "a function definition",
            Self::Block => "a block",
            Self::Declaration => "a declaration",
            Self::Declarator => "a declarator",
            Self::BuiltinStmt => "a builtin statement",
            Self::ExprStmt => "an expression statement",
            Self::Parenthesized => "a parenthesized expression",
            Self::Conditional => "a conditional expression",
        }
    }
}
