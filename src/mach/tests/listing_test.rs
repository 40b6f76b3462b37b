use super::*;

#[test]
fn test_listing() {
    let source = "IfSpawned\n  SetState = 5\n  tmpx = rand % 4\nEnd";
    let (script, _) = compile(source, "test");
    let listing = script.listing(SymbolTable::builtin()).to_string();
    assert_eq!(
        listing,
        "0000 IfSpawned -> 0009\n\
         0002   SetState = 5\n\
         0005   tmpx = rand % 4\n\
         0009 End -> 0011\n"
    );
}

#[test]
fn test_listing_unknown_values() {
    let table = SymbolTable::from_entries(vec![("End", crate::lang::Kind::Function, 7)]);
    let script = ScriptInfo::new("t", vec![Instruction::statement(true, 0, 99), Instruction::raw(2)]);
    assert_eq!(script.listing(&table).lines(), ["0000 #99 -> 0002"]);
}
