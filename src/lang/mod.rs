/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language.
Source text becomes one flat token stream which the machine walks
directly; there is no syntax tree.

*/

#[macro_use]
mod error;
mod label;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::LineNumber;
pub use label::scan_labels;
pub use lex::lex;
