/*!
# Rust Language Module

This Rust module provides line loading, operator spacing, tokenizing and the
symbol table for the AI script language.

*/

pub type LineNumber = u32;

/// Source bytes accepted by a single compile.
pub const MAX_SOURCE_LEN: usize = 64 * 1024;
/// Characters kept from one source line.
pub const MAX_LINE_LEN: usize = 1024;
/// Characters kept from one word, including the quotes of a string.
pub const MAX_WORD_LEN: usize = 63;
/// Instruction words one compiled script may hold.
pub const MAX_INSTRUCTIONS: usize = 4096;

#[macro_use]
mod error;
mod lex;
mod line;
mod resolve;
mod symbol;
mod token;

#[cfg(test)]
mod tests;

pub use error::{Category, Diagnostics, Error, ErrorCode, Level};
pub use lex::Lexer;
pub use line::{load_line, space_operators, SourceLine};
pub use resolve::{AssetResolver, AssetTable, MessageRegistrar, MessageTable, NoAssets};
pub use symbol::{Kind, Symbol, SymbolTable};
pub use token::{pack_idsz, Token};

/// ## Compile bounds
///
/// Exceeding any of these is reported as a diagnostic, never a panic.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_source_len: usize,
    pub max_line_len: usize,
    pub max_word_len: usize,
    pub max_instructions: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_source_len: MAX_SOURCE_LEN,
            max_line_len: MAX_LINE_LEN,
            max_word_len: MAX_WORD_LEN,
            max_instructions: MAX_INSTRUCTIONS,
        }
    }
}
