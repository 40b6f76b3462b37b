mod common;
use aiscript::lang::{pack_idsz, space_operators, ErrorCode, Token};
use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[char] = &[
    'a', 'Z', '7', ' ', '+', '-', '/', '*', '%', '>', '<', '&', '=', '"', '#', '[', ']',
];

fn random_line(rng: &mut StdRng, max: usize) -> String {
    let len = rng.gen_range(0..=max);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn test_spacing_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..2000 {
        let line = random_line(&mut rng, 40);
        let once = space_operators(&line);
        assert_eq!(space_operators(&once), once, "{:?}", line);
    }
}

#[test]
fn test_strings_survive_spacing() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let inner: String = random_line(&mut rng, 20).replace('"', "");
        let line = format!(
            "{}\"{}\"{}",
            random_line(&mut rng, 10).replace('"', ""),
            inner,
            random_line(&mut rng, 10).replace('"', "")
        );
        let spaced = space_operators(&line);
        let quoted = format!("\"{}\"", inner);
        assert!(spaced.contains(&quoted), "{:?} -> {:?}", line, spaced);
    }
}

#[test]
fn test_numeric_constants() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let n = rng.gen_range(0..=Token::MAX_VALUE);
        let (script, diag) = build(&format!("tmpx = {}\nEnd", n));
        assert!(diag.is_empty(), "{}: {:?}", n, diag);
        assert_eq!(script.words()[2], n as u32);
    }
}

#[test]
fn test_constants_out_of_range() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..200 {
        let n: u64 = rng.gen_range(Token::MAX_VALUE as u64 + 1..100_000_000_000);
        let (script, diag) = build(&format!("tmpx = {}\nEnd", n));
        assert_eq!(count(&diag, ErrorCode::ConstantOverflow), 1, "{}", n);
        assert_eq!(script.words()[2], Token::MAX_VALUE as u32);
    }
}

#[test]
fn test_idsz_constants() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..500 {
        let mut code = [0u8; 4];
        for byte in code.iter_mut() {
            *byte = rng.gen_range(b'A'..=b'Z');
        }
        let text = std::str::from_utf8(&code).unwrap_or("AAAA").to_string();
        let (script, diag) = build(&format!("tmpargument = [{}]\nEnd", text));
        assert!(diag.is_empty(), "{}: {:?}", text, diag);
        let expected = code
            .iter()
            .fold(0u32, |acc, &c| (acc << 5) | u32::from(c - b'A'));
        assert_eq!(pack_idsz(code) as u32, expected);
        assert_eq!(script.words()[2], expected);
    }
}

#[test]
fn test_jump_target_is_next_sibling() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let mut src = String::from("IfSpawned\n");
        let mut size = 0;
        for _ in 0..rng.gen_range(0..12) {
            let depth = rng.gen_range(1..=4);
            src.push_str(&"  ".repeat(depth));
            if rng.gen_bool(0.5) {
                src.push_str("IfKilled\n");
                size += 2;
            } else {
                let operands = rng.gen_range(1..6);
                let expression = vec!["selfx"; operands].join(" * ");
                src.push_str(&format!("tmpx = {}\n", expression));
                size += 2 + operands;
            }
        }
        src.push_str("IfBored\nEnd\n");
        let (script, diag) = build(&src);
        assert!(diag.is_empty(), "{}: {:?}", src, diag);
        let w = script.words();
        assert_eq!(w[1] as usize, 2 + size, "{}", src);
        assert_eq!(w[2 + size], F | op("IfBored"));
    }
}
