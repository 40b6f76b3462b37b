use super::*;
use crate::lang::{Diagnostics, ErrorCode, Limits, SymbolTable};

mod codegen_test;
mod listing_test;

const F: u32 = Instruction::FUNCTION_BIT;

fn op(name: &str) -> u32 {
    SymbolTable::builtin().get(name).map(|s| s.value as u32).unwrap_or(u32::MAX)
}

fn indent(level: u32) -> u32 {
    level << Instruction::INDENT_SHIFT
}

fn words(source: &str) -> (Vec<u32>, Diagnostics) {
    let (script, diag) = compile(source, "test");
    (script.words(), diag)
}

fn words_limited(source: &str, max_instructions: usize) -> (Vec<u32>, Diagnostics) {
    let limits = Limits {
        max_instructions,
        ..Limits::default()
    };
    let (script, diag) = Compiler::new(SymbolTable::builtin())
        .limits(limits)
        .compile(source, "test");
    (script.words(), diag)
}
