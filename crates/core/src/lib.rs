//! Dialect-parameterized SQL lexer and token disambiguator.
//!
//! This crate implements the bottom two layers of the formatting pipeline:
//! tokenizing a source string under a given [`Dialect`], then rewriting a
//! handful of token categories based on their immediate neighbors. It
//! never builds an AST and never fails — malformed SQL still produces a
//! token stream, on a best-effort basis.

pub mod dialect;
pub mod disambiguate;
pub mod lexer;
pub mod token;

pub use dialect::{Dialect, IdentifierQuoteStyle, KeywordTrie, StringStyle};
pub use disambiguate::disambiguate;
pub use lexer::lex;
pub use token::{Token, TokenCategory};
