use super::{Instruction, ScriptInfo, Statement};
use crate::lang::{Kind, SymbolTable};

/// ## Human readable disassembly
///
/// One statement per line. Names come from reverse symbol lookup and fall
/// back to `#number` for values the table does not know.
///
/// ```text
/// 0000 IfSpawned -> 0005
/// 0002   SetState = 5
/// 0005 End -> 0007
/// ```

pub struct Listing<'a> {
    script: &'a ScriptInfo,
    symbols: &'a SymbolTable,
}

impl<'a> Listing<'a> {
    pub fn new(script: &'a ScriptInfo, symbols: &'a SymbolTable) -> Listing<'a> {
        Listing { script, symbols }
    }

    fn name(&self, kind: Kind, value: i32) -> String {
        match self.symbols.name_of(kind, value) {
            Some(name) => name.to_string(),
            None => format!("#{}", value),
        }
    }

    fn operand(&self, operand: Instruction) -> String {
        if operand.is_function() {
            self.name(Kind::Variable, operand.payload())
        } else {
            operand.payload().to_string()
        }
    }

    pub fn line(&self, statement: &Statement) -> String {
        let indent = "  ".repeat(usize::from(statement.indent()));
        let mut s = format!("{:04} {}", statement.addr, indent);
        if statement.is_function() {
            s.push_str(&self.name(Kind::Function, statement.head.opcode()));
            if let Some(dest) = statement.jump() {
                s.push_str(&format!(" -> {:04}", dest));
            }
        } else {
            s.push_str(&self.name(Kind::Variable, statement.head.opcode()));
            s.push_str(" =");
            for (index, operand) in statement.operands.iter().enumerate() {
                if index > 0 || operand.operator() != Instruction::NEUTRAL {
                    s.push(' ');
                    s.push_str(&self.name(Kind::Operator, operand.operator()));
                }
                s.push(' ');
                s.push_str(&self.operand(*operand));
            }
        }
        s
    }

    pub fn lines(&self) -> Vec<String> {
        self.script.statements().map(|s| self.line(&s)).collect()
    }
}

impl<'a> std::fmt::Display for Listing<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
