//! Operators of the expression grammar.

/// Prefix operators: `+ - ~ !`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Neg,
    BitNot,
    LogicalNot,
}

impl UnaryOp {
    /// Source spelling of the operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::BitNot => "~",
            Self::LogicalNot => "!",
        }
    }
}

/// Binary operators whose operands are evaluated unsequenced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,

    // Shift
    Shl,
    Shr,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,

    // Bitwise
    BitAnd,
    BitXor,
    BitOr,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
        }
    }
}

/// Binary operators that fix left-to-right evaluation order.
///
/// `LogicalAnd` and `LogicalOr` also skip the right operand when the left
/// one decides the result.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SequencedOp {
    LogicalAnd,
    LogicalOr,
    Comma,
}

impl SequencedOp {
    /// Source spelling of the operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Comma => ",",
        }
    }

    /// True when the right operand may be skipped at runtime.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::LogicalAnd | Self::LogicalOr)
    }
}

/// Assignment operators. Only plain `=` exists; compound forms are not part of the language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    None,
}

impl AssignOp {
    /// Source spelling of the operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::None => "=",
        }
    }
}
