use super::{
    pack_idsz, AssetResolver, Diagnostics, Kind, LineNumber, MessageRegistrar, SymbolTable, Token,
};

fn is_quote(prev: Option<char>, ch: char) -> bool {
    ch == '"' && prev != Some('\\')
}

/// ## Tokenizer
///
/// Splits a spaced line into words and classifies each one. Problems become
/// diagnostics; a token is always produced for every word.

pub struct Lexer<'a> {
    symbols: &'a SymbolTable,
    assets: &'a mut dyn AssetResolver,
    messages: &'a mut dyn MessageRegistrar,
    max_word_len: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(
        symbols: &'a SymbolTable,
        assets: &'a mut dyn AssetResolver,
        messages: &'a mut dyn MessageRegistrar,
        max_word_len: usize,
    ) -> Lexer<'a> {
        Lexer {
            symbols,
            assets,
            messages,
            max_word_len,
        }
    }

    /// Reads the word at or after `cursor`. Returns the token and the
    /// cursor just past the word, or `None` when only whitespace remains.
    pub fn next_token(
        &mut self,
        line: &str,
        cursor: usize,
        line_number: LineNumber,
        diag: &mut Diagnostics,
    ) -> Option<(Token, usize)> {
        let rest = line.get(cursor..)?;
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return None;
        }
        let start = cursor + (rest.len() - trimmed.len());
        let len = if trimmed.starts_with('"') {
            match string_len(trimmed) {
                Some(len) => len,
                None => {
                    diag.push(error!(UnterminatedString, line_number; trimmed));
                    trimmed.len()
                }
            }
        } else {
            trimmed.find(char::is_whitespace).unwrap_or_else(|| trimmed.len())
        };
        let word = self.bounded(&trimmed[..len], line_number, diag);
        let token = self.classify(word, line_number, diag);
        Some((token, start + len))
    }

    /// Collects every token left on `line`.
    pub fn tokens(
        &mut self,
        line: &str,
        line_number: LineNumber,
        diag: &mut Diagnostics,
    ) -> Vec<Token> {
        let mut cursor = 0;
        let mut v = vec![];
        while let Some((token, next)) = self.next_token(line, cursor, line_number, diag) {
            v.push(token);
            cursor = next;
        }
        v
    }

    fn bounded<'w>(&self, word: &'w str, line: LineNumber, diag: &mut Diagnostics) -> &'w str {
        match word.char_indices().nth(self.max_word_len) {
            None => word,
            Some((cut, _)) => {
                diag.push(error!(WordTooLong, line; word));
                &word[..cut]
            }
        }
    }

    fn classify(&mut self, word: &str, line: LineNumber, diag: &mut Diagnostics) -> Token {
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
            let value = match word.parse::<i32>() {
                Ok(value) if value <= Token::MAX_VALUE => value,
                _ => {
                    diag.push(error!(ConstantOverflow, line; word));
                    Token::MAX_VALUE
                }
            };
            return Token::constant(word, value, line);
        }
        if let &[b'[', a, b, c, d, b']'] = word.as_bytes() {
            return Token::constant(word, pack_idsz([a, b, c, d]), line);
        }
        if word == "=" {
            return Token {
                kind: Some(Kind::Operator),
                value: Token::ASSIGN,
                symbol: None,
                word: word.to_string(),
                line,
            };
        }
        if let Some(text) = word.strip_prefix('"') {
            let text = text.strip_suffix('"').unwrap_or(text);
            if let Some(name) = text.strip_prefix('#') {
                let slot = match self.assets.resolve(name) {
                    Some(slot) => slot,
                    None => {
                        diag.push(error!(AssetNotFound, line; name));
                        Token::NOT_FOUND
                    }
                };
                return Token::constant(word, slot, line);
            }
            let index = self.messages.register(text);
            return Token::constant(word, index, line);
        }
        match self.symbols.index_of(word) {
            Some(index) => match self.symbols.entry(index) {
                Some(symbol) if !symbol.kind.fits(symbol.value) => {
                    let msg = format!("{} {} IS {}", symbol.kind, word, symbol.value);
                    diag.push(error!(SymbolOutOfRange, line; msg));
                    Token::unknown(word, line)
                }
                Some(symbol) => Token {
                    kind: Some(symbol.kind),
                    value: symbol.value,
                    symbol: Some(index),
                    word: word.to_string(),
                    line,
                },
                None => Token::unknown(word, line),
            },
            None => {
                diag.push(error!(UnknownOpcode, line; word));
                Token::unknown(word, line)
            }
        }
    }
}

/// Byte length of the string word at the start of `s`, closing quote
/// included. `None` if the line ends first.
fn string_len(s: &str) -> Option<usize> {
    let mut prev = None;
    for (index, ch) in s.char_indices().skip(1) {
        if is_quote(prev, ch) {
            return Some(index + 1);
        }
        prev = Some(ch);
    }
    None
}
