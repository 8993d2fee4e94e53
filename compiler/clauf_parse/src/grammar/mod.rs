//! Grammar productions, one module per construct family.

mod declarator;
mod expr;
mod item;
mod operators;
mod stmt;

pub use declarator::{Declarator, DeclaratorShape};
