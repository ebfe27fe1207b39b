/*!
## Rust Machine Module

This Rust module runs BASIC by walking the token stream with a cursor.
Statements and expressions are decoded as they execute.

*/

pub type Address = usize;

mod call;
mod control;
mod expr;
mod function;
mod operation;
mod program;
mod runtime;
mod stack;
mod statement;
mod val;
mod var;

pub use operation::Operation;
pub use program::{read_definition, Cursor, Program, UserFunction};
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::{Frame, Var};
