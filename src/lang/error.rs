use super::LineNumber;
use std::sync::Arc;

/// ## Compiler diagnostic
///
/// Every problem found while compiling is recorded as an `Error` and the
/// compile keeps going. Warnings use the same type with `Level::Warning`.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    level: Level,
    script: Arc<str>,
    line: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lex,
    Token,
    Grammar,
    Indentation,
    Capacity,
    File,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    TabCharacter = 1,
    UnterminatedString = 2,
    WordTooLong = 3,
    LineTooLong = 4,
    ConstantOverflow = 5,
    UnknownOpcode = 10,
    AssetNotFound = 11,
    SymbolOutOfRange = 12,
    ExpectedAssign = 20,
    MissingOperand = 21,
    MissingOperator = 22,
    InvalidOperand = 23,
    InvalidStatement = 24,
    TrailingText = 25,
    MissingEnd = 26,
    OddIndentation = 30,
    TooDeep = 31,
    ProgramTooLarge = 40,
    SourceTooLarge = 41,
    FileError = 42,
    InternalError = 51,
}

impl ErrorCode {
    pub fn category(self) -> Category {
        use ErrorCode::*;
        match self {
            TabCharacter | UnterminatedString | WordTooLong | LineTooLong | ConstantOverflow => {
                Category::Lex
            }
            UnknownOpcode | AssetNotFound | SymbolOutOfRange => Category::Token,
            ExpectedAssign | MissingOperand | MissingOperator | InvalidOperand
            | InvalidStatement | TrailingText | MissingEnd => Category::Grammar,
            OddIndentation | TooDeep => Category::Indentation,
            ProgramTooLarge | SourceTooLarge => Category::Capacity,
            FileError => Category::File,
            InternalError => Category::Internal,
        }
    }

    pub fn level(self) -> Level {
        use ErrorCode::*;
        match self {
            TabCharacter | TrailingText | MissingEnd => Level::Warning,
            _ => Level::Error,
        }
    }
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            level: code.level(),
            script: Arc::from(""),
            line: 0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_warning(&self) -> bool {
        self.level == Level::Warning
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn line(&self) -> LineNumber {
        self.line
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn in_line(self, line: LineNumber) -> Error {
        debug_assert_eq!(self.line, 0);
        Error { line, ..self }
    }

    pub fn in_script(self, script: &Arc<str>) -> Error {
        Error {
            script: script.clone(),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    fn code_str(&self) -> &'static str {
        match self.code {
            1 => "TAB CHARACTER",
            2 => "UNTERMINATED STRING",
            3 => "WORD TOO LONG",
            4 => "LINE TOO LONG",
            5 => "CONSTANT OUT OF RANGE",
            10 => "UNKNOWN OPCODE",
            11 => "ASSET NOT FOUND",
            12 => "SYMBOL VALUE OUT OF RANGE",
            20 => "EXPECTED =",
            21 => "MISSING OPERAND",
            22 => "MISSING OPERATOR",
            23 => "INVALID OPERAND",
            24 => "INVALID STATEMENT",
            25 => "TRAILING TEXT",
            26 => "MISSING END",
            30 => "INVALID INDENTATION",
            31 => "TOO MANY INDENTATION LEVELS",
            40 => "PROGRAM TOO LARGE",
            41 => "SOURCE TOO LARGE",
            42 => "FILE ERROR",
            51 => "INTERNAL ERROR",
            _ => "",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = self.code_str();
        let mut suffix = String::new();
        if !self.script.is_empty() {
            suffix.push_str(&format!(" {}", self.script));
        }
        if self.line > 0 {
            suffix.push_str(&format!(" LINE {}", self.line));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "DIAGNOSTIC {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if suffix.starts_with(';') || suffix.is_empty() {
            write!(f, "{}", suffix)
        } else {
            write!(f, " IN{}", suffix)
        }
    }
}

/// ## Ordered diagnostics for one compile

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    script: Arc<str>,
    errors: Vec<Error>,
    had_error: bool,
}

impl Diagnostics {
    pub fn new(script: &str) -> Diagnostics {
        Diagnostics {
            script: Arc::from(script),
            errors: vec![],
            had_error: false,
        }
    }

    pub fn push(&mut self, error: Error) {
        let error = error.in_script(&self.script);
        match error.level() {
            Level::Error => {
                self.had_error = true;
                tracing::debug!("{}", error);
            }
            Level::Warning => tracing::trace!("{}", error),
        }
        self.errors.push(error);
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// True once any `Level::Error` has been recorded. Output from such a
    /// compile must not be handed to an interpreter.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn count(&self, level: Level) -> usize {
        self.errors.iter().filter(|e| e.level() == level).count()
    }

    pub fn contains(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.is(code))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;
    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
