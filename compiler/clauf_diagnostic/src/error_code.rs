use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser (structural) errors
/// - E2xxx: Name resolution errors
/// - E3xxx: Unsupported constructs
/// - E9xxx: Driver notes
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated block comment
    E0001,
    /// Invalid character in source
    E0002,
    /// Integer literal does not fit in 64 bits
    E0003,
    /// Source buffer larger than 4 GiB
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,

    // Name Resolution Errors (E2xxx)
    /// Unknown identifier
    E2001,
    /// Duplicate local declaration
    E2002,

    // Unsupported Constructs (E3xxx)
    /// Function declaration without a body
    E3001,
    /// Function returning a function
    E3002,
    /// Function definition without a function declarator
    E3003,

    // Driver Notes (E9xxx)
    /// Errors dropped by the error limit
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
