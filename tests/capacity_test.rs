mod common;
use aiscript::lang::{ErrorCode, Limits};
use common::*;

fn long_script(statements: usize) -> String {
    let mut src = String::from("IfSpawned\n");
    for _ in 0..statements {
        src.push_str("  tmpx = tmpx + 1\n");
    }
    src.push_str("End\n");
    src
}

#[test]
fn test_stops_exactly_at_limit() {
    let src = long_script(50);
    for max in 0..40 {
        let limits = Limits {
            max_instructions: max,
            ..Limits::default()
        };
        let (script, diag) = build_limited(&src, limits);
        assert_eq!(script.len(), max);
        assert!(diag.had_error());
        assert_eq!(count(&diag, ErrorCode::ProgramTooLarge), 1);
    }
}

#[test]
fn test_exact_fit() {
    let src = long_script(3);
    let needed = 2 + 3 * 4 + 2;
    let limits = Limits {
        max_instructions: needed,
        ..Limits::default()
    };
    let (script, diag) = build_limited(&src, limits);
    assert!(!diag.had_error(), "{:?}", diag);
    assert_eq!(script.len(), needed);
    assert_eq!(script.words()[1] as usize, needed - 2);
}

#[test]
fn test_truncated_jumps_stay_in_bounds() {
    let limits = Limits {
        max_instructions: 7,
        ..Limits::default()
    };
    let (script, _) = build_limited(&long_script(10), limits);
    let words = script.words();
    assert_eq!(words[0], F | op("IfSpawned"));
    assert_eq!(words[1], 7);
}

#[test]
fn test_long_line() {
    let limits = Limits {
        max_line_len: 16,
        ..Limits::default()
    };
    let (_, diag) = build_limited("tmpx = 1 + 2 + 3 + 4 + 5\nEnd", limits);
    assert!(diag.had_error());
    assert_eq!(count(&diag, ErrorCode::LineTooLong), 1);
}

#[test]
fn test_long_word() {
    let limits = Limits {
        max_word_len: 4,
        ..Limits::default()
    };
    let (_, diag) = build_limited("tmpx = 123456\nEnd", limits);
    assert_eq!(count(&diag, ErrorCode::WordTooLong), 1);
}

#[test]
fn test_default_limits() {
    let limits = Limits::default();
    assert_eq!(limits.max_source_len, aiscript::lang::MAX_SOURCE_LEN);
    assert_eq!(limits.max_instructions, aiscript::lang::MAX_INSTRUCTIONS);
    let (script, diag) = build(&long_script(1100));
    assert_eq!(script.len(), limits.max_instructions);
    assert!(diag.contains(ErrorCode::ProgramTooLarge));
}
