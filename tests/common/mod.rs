#![allow(dead_code)]
use aiscript::lang::{Diagnostics, ErrorCode, Limits, SymbolTable};
use aiscript::mach::{compile, Compiler, ScriptInfo};

pub const F: u32 = 0x8000_0000;

pub fn op(name: &str) -> u32 {
    match SymbolTable::builtin().get(name) {
        Some(symbol) => symbol.value as u32,
        None => panic!("{} is not in the built-in table", name),
    }
}

pub fn indent(level: u32) -> u32 {
    level << 27
}

pub fn build(source: &str) -> (ScriptInfo, Diagnostics) {
    compile(source, "test")
}

pub fn build_limited(source: &str, limits: Limits) -> (ScriptInfo, Diagnostics) {
    Compiler::new(SymbolTable::builtin())
        .limits(limits)
        .compile(source, "test")
}

pub fn words(source: &str) -> Vec<u32> {
    build(source).0.words()
}

pub fn count(diagnostics: &Diagnostics, code: ErrorCode) -> usize {
    diagnostics.iter().filter(|e| e.is(code)).count()
}
