use super::{Address, Instruction, Listing};
use crate::lang::SymbolTable;

/// ## Compiled script
///
/// Only the compiler appends to or patches a script. Once returned from
/// a compile it is read-only.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInfo {
    name: String,
    instructions: Vec<Instruction>,
}

impl ScriptInfo {
    pub(crate) fn new(name: &str, instructions: Vec<Instruction>) -> ScriptInfo {
        ScriptInfo {
            name: name.to_string(),
            instructions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, addr: Address) -> Option<Instruction> {
        self.instructions.get(addr).copied()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn words(&self) -> Vec<u32> {
        self.instructions.iter().map(|i| i.word()).collect()
    }

    /// The word stream as stored on disk, little-endian.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.instructions
            .iter()
            .flat_map(|i| i.word().to_le_bytes().to_vec())
            .collect()
    }

    pub fn statements(&self) -> Statements<'_> {
        Statements {
            words: &self.instructions,
            addr: 0,
        }
    }

    pub fn listing<'a>(&'a self, symbols: &'a SymbolTable) -> Listing<'a> {
        Listing::new(self, symbols)
    }

    pub(crate) fn patch(&mut self, addr: Address, word: u32) -> bool {
        match self.instructions.get_mut(addr) {
            Some(i) => {
                *i = Instruction::raw(word);
                true
            }
            None => false,
        }
    }
}

/// A statement head with its reserved word and operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    pub addr: Address,
    pub head: Instruction,
    /// Jump target or operand count. Missing only in a truncated script.
    pub slot: Option<Instruction>,
    pub operands: &'a [Instruction],
}

impl<'a> Statement<'a> {
    pub fn is_function(&self) -> bool {
        self.head.is_function()
    }

    pub fn indent(&self) -> u8 {
        self.head.indent()
    }

    pub fn jump(&self) -> Option<Address> {
        match self.slot {
            Some(slot) if self.is_function() => Some(slot.word() as Address),
            _ => None,
        }
    }
}

/// Walks statements by their encoded sizes: two words for a function,
/// two plus the operand count for a variable.
pub struct Statements<'a> {
    words: &'a [Instruction],
    addr: Address,
}

impl<'a> Iterator for Statements<'a> {
    type Item = Statement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.addr;
        let head = *self.words.get(addr)?;
        let slot = self.words.get(addr + 1).copied();
        let count = match slot {
            Some(slot) if !head.is_function() => slot.word() as usize,
            _ => 0,
        };
        let start = (addr + 2).min(self.words.len());
        let end = start.saturating_add(count).min(self.words.len());
        self.addr = match slot {
            Some(_) => (addr + 2).saturating_add(count),
            None => self.words.len(),
        };
        Some(Statement {
            addr,
            head,
            slot,
            operands: self.words.get(start..end).unwrap_or(&[]),
        })
    }
}
