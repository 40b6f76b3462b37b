use super::*;


fn lexer<'a>(assets: &'a mut AssetTable, messages: &'a mut MessageTable) -> Lexer<'a> {
    Lexer::new(SymbolTable::builtin(), assets, messages, MAX_WORD_LEN)
}

fn first(line: &str) -> (Token, Diagnostics) {
    let mut assets = AssetTable::new();
    let mut messages = MessageTable::new();
    let mut diag = Diagnostics::new("test");
    let token = lexer(&mut assets, &mut messages)
        .next_token(line, 0, 1, &mut diag)
        .map(|(t, _)| t)
        .unwrap_or_else(|| Token::unknown("", 1));
    (token, diag)
}
