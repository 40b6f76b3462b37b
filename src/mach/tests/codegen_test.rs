use super::*;

#[test]
fn test_end_only() {
    let (w, diag) = words("End");
    assert_eq!(w, [F | op("End"), 2]);
    assert!(diag.is_empty());
}

#[test]
fn test_end_stops_parsing() {
    let (w, diag) = words("End\nIfSpawned\nnonsense here");
    assert_eq!(w, [F | op("End"), 2]);
    assert!(!diag.had_error());
}

#[test]
fn test_missing_end_warns() {
    let (w, diag) = words("IfSpawned\n");
    assert_eq!(w, [F | op("IfSpawned"), 2, F | op("End"), 4]);
    assert!(diag.contains(ErrorCode::MissingEnd));
    assert!(!diag.had_error());
}

#[test]
fn test_nested_end_is_a_function() {
    let (w, _) = words("IfKilled\n  End\nEnd");
    assert_eq!(
        w,
        [F | op("IfKilled"), 4, F | indent(1) | op("End"), 4, F | op("End"), 6]
    );
}

#[test]
fn test_assignment_operands() {
    let (w, diag) = words("tmpx = tmpy + 2 * selfx\nEnd");
    assert_eq!(
        w,
        [
            op("tmpx"),
            3,
            F | op("tmpy"),
            (op("+") << Instruction::OPERATOR_SHIFT) | 2,
            F | (op("*") << Instruction::OPERATOR_SHIFT) | op("selfx"),
            F | op("End"),
            7
        ]
    );
    assert!(diag.is_empty());
}

#[test]
fn test_operators_spaced_before_tokenizing() {
    let (a, _) = words("tmpx=tmpy-2\nEnd");
    let (b, _) = words("tmpx = tmpy - 2\nEnd");
    assert_eq!(a, b);
}

#[test]
fn test_missing_assign() {
    let (w, diag) = words("tmpx 5\nEnd");
    assert_eq!(w[..3], [op("tmpx"), 1, 5]);
    assert!(diag.contains(ErrorCode::ExpectedAssign));
    assert!(diag.had_error());
}

#[test]
fn test_trailing_operator() {
    let (w, diag) = words("tmpx = 1 +\nEnd");
    assert_eq!(w[..3], [op("tmpx"), 1, 1]);
    assert!(diag.contains(ErrorCode::MissingOperand));
}

#[test]
fn test_empty_expression() {
    let (w, diag) = words("tmpx =\nEnd");
    assert_eq!(w[..2], [op("tmpx"), 0]);
    assert!(diag.contains(ErrorCode::MissingOperand));
}

#[test]
fn test_two_operands_without_operator() {
    let (w, diag) = words("tmpx = 1 2\nEnd");
    assert_eq!(w[..3], [op("tmpx"), 1, 1]);
    assert!(diag.contains(ErrorCode::MissingOperator));
}

#[test]
fn test_unknown_operand_skipped() {
    let (w, diag) = words("tmpx = 1 + bogus + 3\nEnd");
    assert_eq!(
        w[..4],
        [op("tmpx"), 2, 1, (op("+") << Instruction::OPERATOR_SHIFT) | 3]
    );
    assert_eq!(diag.len(), 1);
    assert!(diag.contains(ErrorCode::UnknownOpcode));
}

#[test]
fn test_function_as_operand() {
    let (_, diag) = words("tmpx = IfSpawned\nEnd");
    assert!(diag.contains(ErrorCode::InvalidOperand));
}

#[test]
fn test_constant_cannot_lead() {
    let (w, diag) = words("5\nSTATEPARRY\n=\nEnd");
    assert_eq!(w, [F | op("End"), 2]);
    assert_eq!(diag.len(), 3);
    assert!(diag.iter().all(|e| e.is(ErrorCode::InvalidStatement)));
}

#[test]
fn test_unknown_leading_word_skips_line() {
    let (w, diag) = words("Bogus = 5\nEnd");
    assert_eq!(w, [F | op("End"), 2]);
    assert_eq!(diag.len(), 1);
    assert!(diag.contains(ErrorCode::UnknownOpcode));
}

#[test]
fn test_trailing_text_after_function() {
    let (w, diag) = words("IfSpawned please\nEnd");
    assert_eq!(w.len(), 4);
    assert!(diag.contains(ErrorCode::TrailingText));
    assert!(!diag.had_error());
}

#[test]
fn test_odd_indentation() {
    let (w, diag) = words("IfSpawned\n   tmpx = 1\nEnd");
    assert_eq!(w[2], indent(1) | op("tmpx"));
    assert!(diag.contains(ErrorCode::OddIndentation));
    assert_eq!(diag.errors()[0].line(), 2);
}

#[test]
fn test_tab_warning() {
    let (_, diag) = words("IfSpawned\n\t\ttmpx = 1\nEnd");
    assert!(diag.contains(ErrorCode::TabCharacter));
    assert!(!diag.had_error());
}

#[test]
fn test_line_numbers_count_blank_and_comment_lines() {
    let (_, diag) = words("// header\n\nIfSpawned\n  nope\nEnd");
    assert_eq!(diag.errors()[0].line(), 4);
}

#[test]
fn test_capacity_stops_at_limit() {
    let (w, diag) = words_limited("IfSpawned\n  tmpx = 1 + 2 + 3\nEnd", 4);
    assert_eq!(w.len(), 4);
    assert!(diag.contains(ErrorCode::ProgramTooLarge));
    assert!(diag.had_error());
    assert_eq!(diag.iter().filter(|e| e.is(ErrorCode::ProgramTooLarge)).count(), 1);
}

#[test]
fn test_capacity_leaves_synthetic_end_out() {
    let (w, diag) = words_limited("IfSpawned\nIfKilled\nEnd", 4);
    assert_eq!(w, [F | op("IfSpawned"), 2, F | op("IfKilled"), 4]);
    assert!(diag.had_error());
}

#[test]
fn test_source_too_large() {
    let limits = Limits {
        max_source_len: 12,
        ..Limits::default()
    };
    let (script, diag) = Compiler::new(SymbolTable::builtin())
        .limits(limits)
        .compile("IfSpawned\nEnd\n", "test");
    assert!(diag.contains(ErrorCode::SourceTooLarge));
    assert!(diag.had_error());
    assert_eq!(script.len(), 4);
}

#[test]
fn test_table_without_end() {
    let table = SymbolTable::from_entries(vec![("Go", crate::lang::Kind::Function, 1)]);
    let (script, diag) = Compiler::new(&table).compile("Go", "test");
    assert_eq!(script.words(), [F | 1, 2]);
    assert!(diag.contains(ErrorCode::InternalError));
}

#[test]
fn test_symbol_values_out_of_range() {
    use crate::lang::Kind::*;
    let table = SymbolTable::from_entries(vec![
        ("Neg", Function, -1),
        ("Huge", Variable, 0x0100_0000),
        ("Bang", Operator, 300),
        ("hp", Variable, 3),
        ("End", Function, 2),
    ]);
    let (script, diag) = Compiler::new(&table).compile("Neg\nhp = 1 Bang\nHuge = 1\nEnd", "test");
    assert_eq!(script.words(), [3, 1, 1, F | 2, 5]);
    assert_eq!(diag.len(), 3);
    assert!(diag.iter().all(|e| e.is(ErrorCode::SymbolOutOfRange)));
    let lines: Vec<_> = diag.iter().map(|e| e.line()).collect();
    assert_eq!(lines, [1, 2, 3]);
}
