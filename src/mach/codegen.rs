use super::{link, Address, Instruction, ScriptInfo, Stack};
use crate::error;
use crate::lang::{
    load_line, space_operators, AssetResolver, Diagnostics, Error, Kind, Lexer, Limits,
    LineNumber, MessageRegistrar, MessageTable, NoAssets, SymbolTable, Token,
};

/// Compiles `source` against the built-in symbol table with default limits.
///
/// String literals go to a throwaway message table and every `"#name"`
/// reference is reported as not found. Use a [`Compiler`] to supply real
/// collaborators.
pub fn compile(source: &str, name: &str) -> (ScriptInfo, Diagnostics) {
    Compiler::new(SymbolTable::builtin()).compile(source, name)
}

/// ## Compile settings
///
/// Holds the shared symbol table, the limits and the collaborators for
/// string literals. A `Compiler` can be reused; each call to
/// [`Compiler::compile`] starts from a fresh context.

pub struct Compiler<'a> {
    symbols: &'a SymbolTable,
    limits: Limits,
    assets: Option<&'a mut dyn AssetResolver>,
    messages: Option<&'a mut dyn MessageRegistrar>,
}

impl<'a> Compiler<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Compiler<'a> {
        Compiler {
            symbols,
            limits: Limits::default(),
            assets: None,
            messages: None,
        }
    }

    pub fn limits(mut self, limits: Limits) -> Compiler<'a> {
        self.limits = limits;
        self
    }

    pub fn assets(mut self, assets: &'a mut dyn AssetResolver) -> Compiler<'a> {
        self.assets = Some(assets);
        self
    }

    pub fn messages(mut self, messages: &'a mut dyn MessageRegistrar) -> Compiler<'a> {
        self.messages = Some(messages);
        self
    }

    pub fn compile(&mut self, source: &str, name: &str) -> (ScriptInfo, Diagnostics) {
        let mut no_assets = NoAssets;
        let mut no_messages = MessageTable::new();
        let assets: &mut dyn AssetResolver = match self.assets.as_mut() {
            Some(assets) => &mut **assets,
            None => &mut no_assets,
        };
        let messages: &mut dyn MessageRegistrar = match self.messages.as_mut() {
            Some(messages) => &mut **messages,
            None => &mut no_messages,
        };
        let limits = self.limits;
        let mut gen = Generator {
            lexer: Lexer::new(self.symbols, assets, messages, limits.max_word_len),
            symbols: self.symbols,
            limits,
            code: Stack::new("INSTRUCTION BUFFER FULL", limits.max_instructions),
            diag: Diagnostics::new(name),
            line: 0,
            halted: false,
        };
        tracing::debug!("compiling {} ({} bytes)", name, source.len());
        gen.source(source);
        let Generator { code, diag, .. } = gen;
        let mut script = ScriptInfo::new(name, code.into_vec());
        link(&mut script);
        tracing::debug!(
            "compiled {}: {} words, {} diagnostics{}",
            name,
            script.len(),
            diag.len(),
            if diag.had_error() { ", failed" } else { "" }
        );
        (script, diag)
    }
}

/// Per-compile state. Owns the output buffer and the diagnostics.
struct Generator<'s, 'l> {
    lexer: Lexer<'l>,
    symbols: &'s SymbolTable,
    limits: Limits,
    code: Stack<Instruction>,
    diag: Diagnostics,
    line: LineNumber,
    halted: bool,
}

impl<'s, 'l> Generator<'s, 'l> {
    fn error(&mut self, error: Error) {
        let line = self.line;
        self.diag.push(error.in_line(line));
    }

    fn source(&mut self, source: &str) {
        let source = self.bounded(source);
        let mut cursor = 0;
        let mut ended = false;
        while let Some((line, next)) = load_line(source, cursor, self.limits.max_line_len) {
            cursor = next;
            self.line += 1;
            if line.tabs > 0 {
                self.error(error!(TabCharacter; format!("{} TAB(S) READ AS SPACES", line.tabs)));
            }
            if line.truncated {
                let max = self.limits.max_line_len;
                self.error(error!(LineTooLong; format!("KEPT {} CHARACTERS", max)));
            }
            if line.is_empty() {
                continue;
            }
            let indent = self.indentation(line.leading_spaces());
            if self.statement(&space_operators(&line.text), indent) {
                ended = true;
                break;
            }
        }
        if !ended {
            self.error(error!(MissingEnd));
        }
        self.terminate();
    }

    fn bounded<'a>(&mut self, source: &'a str) -> &'a str {
        let max = self.limits.max_source_len;
        if source.len() <= max {
            return source;
        }
        self.error(error!(SourceTooLarge; format!("{} BYTES, LIMIT {}", source.len(), max)));
        let mut cut = max;
        while !source.is_char_boundary(cut) {
            cut -= 1;
        }
        &source[..cut]
    }

    fn indentation(&mut self, spaces: usize) -> u8 {
        if spaces % 2 != 0 {
            self.error(error!(OddIndentation; format!("{} SPACES, MUST BE EVEN", spaces)));
        }
        let level = spaces / 2;
        let max = usize::from(Instruction::MAX_INDENT);
        if level > max {
            self.error(error!(TooDeep; format!("{} LEVELS, CLAMPED TO {}", level, max)));
            return Instruction::MAX_INDENT;
        }
        level as u8
    }

    /// Returns true when the line ends the script.
    fn statement(&mut self, text: &str, indent: u8) -> bool {
        let line = self.line;
        let (first, cursor) = match self.lexer.next_token(text, 0, line, &mut self.diag) {
            Some(t) => t,
            None => return false,
        };
        tracing::trace!("line {}: indent {} {}", line, indent, first);
        match first.kind {
            Some(Kind::Function) => {
                if indent == 0 && first.symbol.is_some() && first.symbol == self.end_index() {
                    return true;
                }
                self.function(&first, indent, text, cursor);
            }
            Some(Kind::Variable) => self.assignment(&first, indent, text, cursor),
            Some(_) => {
                let msg = format!("{} CANNOT START A STATEMENT", first.word);
                self.error(error!(InvalidStatement; msg));
            }
            // Unknown opcodes were reported by the lexer.
            None => {}
        }
        false
    }

    fn end_index(&self) -> Option<usize> {
        self.symbols
            .end()
            .and_then(|end| self.symbols.index_of(&end.name))
    }

    fn emit(&mut self, instruction: Instruction) -> Option<Address> {
        if self.halted {
            return None;
        }
        match self.code.push(instruction) {
            Ok(addr) => Some(addr),
            Err(error) => {
                tracing::warn!(
                    "{}: instruction buffer exhausted at {} words",
                    self.diag.script(),
                    self.code.max_len()
                );
                self.halted = true;
                self.error(error);
                None
            }
        }
    }

    fn patch(&mut self, addr: Option<Address>, word: u32) {
        if let Some(instruction) = addr.and_then(|addr| self.code.get_mut(addr)) {
            *instruction = Instruction::raw(word);
        }
    }

    fn function(&mut self, token: &Token, indent: u8, text: &str, cursor: usize) {
        self.emit(Instruction::statement(true, indent, token.value));
        self.emit(Instruction::default());
        let rest = text.get(cursor..).unwrap_or("").trim();
        if !rest.is_empty() {
            let msg = format!("IGNORED AFTER {}: {}", token.word, rest);
            self.error(error!(TrailingText; msg));
        }
    }

    /// `VARIABLE = OPERAND [OPERATOR OPERAND]...`
    fn assignment(&mut self, token: &Token, indent: u8, text: &str, cursor: usize) {
        let line = self.line;
        self.emit(Instruction::statement(false, indent, token.value));
        let count_addr = self.emit(Instruction::default());
        let mut cursor = cursor;
        let mut pending: Option<Token> = None;
        let mut assigned = false;
        match self.lexer.next_token(text, cursor, line, &mut self.diag) {
            Some((t, next)) if t.is_assign() => {
                cursor = next;
                assigned = true;
            }
            Some((t, next)) => {
                let msg = format!("FOUND {} AFTER {}", t.word, token.word);
                self.error(error!(ExpectedAssign; msg));
                cursor = next;
                pending = Some(t);
            }
            None => {
                let msg = format!("NOTHING AFTER {}", token.word);
                self.error(error!(ExpectedAssign; msg));
            }
        }
        let mut operator = Instruction::NEUTRAL;
        let mut expecting = true;
        let mut count: u32 = 0;
        loop {
            let t = match pending.take() {
                Some(t) => t,
                None => match self.lexer.next_token(text, cursor, line, &mut self.diag) {
                    Some((t, next)) => {
                        cursor = next;
                        t
                    }
                    None => break,
                },
            };
            if t.is_operand() {
                if expecting {
                    let operand = Instruction::operand(t.is_variable(), operator, t.value);
                    if self.emit(operand).is_some() {
                        count += 1;
                    }
                    expecting = false;
                } else {
                    let msg = format!("BEFORE {}", t.word);
                    self.error(error!(MissingOperator; msg));
                }
            } else if t.is_operator() {
                if expecting {
                    let msg = format!("BEFORE {}", t.word);
                    self.error(error!(MissingOperand; msg));
                }
                operator = t.value;
                expecting = true;
            } else if t.is_assign() {
                self.error(error!(InvalidOperand; "UNEXPECTED ="));
            } else {
                if !t.is_unknown() {
                    let msg = format!("{} IS NOT A VALUE", t.word);
                    self.error(error!(InvalidOperand; msg));
                }
                expecting = false;
            }
        }
        if expecting && (assigned || count > 0) {
            self.error(error!(MissingOperand; "AT END OF LINE"));
        }
        self.patch(count_addr, count);
    }

    fn terminate(&mut self) {
        match self.symbols.end() {
            Some(end) => {
                let value = end.value;
                self.emit(Instruction::statement(true, 0, value));
                self.emit(Instruction::default());
            }
            None => self.error(error!(InternalError; "SYMBOL TABLE HAS NO End")),
        }
    }
}
