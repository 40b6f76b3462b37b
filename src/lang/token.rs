use super::{Kind, LineNumber};

/// One classified word of a source line.
///
/// `kind` is `None` for words that could not be resolved. `symbol` is only
/// set when the kind came from a symbol table lookup.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: Option<Kind>,
    pub value: i32,
    pub symbol: Option<usize>,
    pub word: String,
    pub line: LineNumber,
}

impl Token {
    /// Value of the `=` operator token. Real operators are never negative.
    pub const ASSIGN: i32 = -1;
    /// Largest constant an operand word can carry.
    pub const MAX_VALUE: i32 = 0x007F_FFFF;
    /// Constant substituted for an asset reference that did not resolve.
    pub const NOT_FOUND: i32 = Token::MAX_VALUE;

    pub fn unknown(word: &str, line: LineNumber) -> Token {
        Token {
            kind: None,
            value: 0,
            symbol: None,
            word: word.to_string(),
            line,
        }
    }

    pub fn constant(word: &str, value: i32, line: LineNumber) -> Token {
        Token {
            kind: Some(Kind::Constant),
            value,
            symbol: None,
            word: word.to_string(),
            line,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind.is_none()
    }

    pub fn is_function(&self) -> bool {
        self.kind == Some(Kind::Function)
    }

    pub fn is_variable(&self) -> bool {
        self.kind == Some(Kind::Variable)
    }

    pub fn is_constant(&self) -> bool {
        self.kind == Some(Kind::Constant)
    }

    pub fn is_operand(&self) -> bool {
        self.is_constant() || self.is_variable()
    }

    pub fn is_assign(&self) -> bool {
        self.kind == Some(Kind::Operator) && self.value == Token::ASSIGN
    }

    pub fn is_operator(&self) -> bool {
        self.kind == Some(Kind::Operator) && self.value != Token::ASSIGN
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            None => write!(f, "UNKNOWN({})", self.word),
            Some(kind) => write!(f, "{}({}={})", kind, self.word, self.value),
        }
    }
}

/// Packs a four letter `[ABCD]` code. Each character keeps five bits of
/// its distance from `A`.
pub fn pack_idsz(code: [u8; 4]) -> i32 {
    code.iter()
        .fold(0, |acc, &c| (acc << 5) | (c.wrapping_sub(b'A') & 0x1F) as i32)
}
