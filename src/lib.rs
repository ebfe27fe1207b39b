//! # Label BASIC
//!
//! A BASIC without line numbers. Programs jump to `[labels]`, define
//! functions with `DEF FN`, and can draw, play sounds, read files and
//! talk HTTP through pluggable host services.
//!
//! Run a program from a terminal with:
//! ```text
//! basic game.bas
//! ```
//!
//! Add `--log-level debug` to see jumps and calls on stderr.
//!
//! Embedding takes a `Host` and some source:
//! ```
//! use basic::host::{Host, MemoryConsole};
//! use basic::mach::Runtime;
//!
//! let console = MemoryConsole::new();
//! let mut runtime = Runtime::new(Host::new(Box::new(console.clone())));
//! runtime.execute("PRINT \"HELLO\"").unwrap();
//! assert_eq!(console.output(), "HELLO\n");
//! ```

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod _Language;

#[path = "doc/functions.rs"]
#[allow(non_snake_case)]
pub mod __Functions;

pub mod host;
pub mod lang;
pub mod mach;
pub mod term;
