//! # AI Script
//!
//! A compiler for the indentation-structured scripts that drive
//! non-player characters. Source text goes in; a flat stream of 32-bit
//! instruction words comes out, with every conditional jump already
//! resolved, ready for an external interpreter.
//!
//! ```
//! let (script, diagnostics) = aiscript::mach::compile("IfSpawned\n  SetState = 5\nEnd\n", "demo");
//! assert!(!diagnostics.had_error());
//! assert_eq!(script.len(), 7);
//! ```
//!
//! The compiler never stops at the first problem. Every diagnostic for a
//! script is collected and returned; any `Error` level diagnostic makes the
//! output unusable.
//!
//! Build the `aisc` binary to compile script files from a terminal:
//! ```text
//! aisc --listing goblin.txt
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
