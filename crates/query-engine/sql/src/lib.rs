//! SQL AST, helpers and conversion to parameterized SQL strings.

pub mod sql;
