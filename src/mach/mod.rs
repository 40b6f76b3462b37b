/*!
## Rust Machine Module

This Rust module generates, links and lists instruction words for the
external AI interpreter.

*/

pub type Address = usize;

mod codegen;
mod instruction;
mod link;
mod listing;
mod script;
mod stack;

#[cfg(test)]
mod tests;

pub use codegen::{compile, Compiler};
pub use instruction::Instruction;
pub use link::{link, Link};
pub use listing::Listing;
pub use script::{ScriptInfo, Statement, Statements};
pub use stack::Stack;
