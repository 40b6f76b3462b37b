/*!
# Statements and Indentation

Each non-empty line holds one statement. A statement starts with either a
function or a variable.

## Functions

A function is usually a condition. The lines indented beneath it run only
when the condition holds.

```text
IfAttacked
  IfTargetIsOldTarget
    tmpx = 1
  tmpy = 2
End
```

Indentation is two spaces per level. An odd count is an error and tabs are
read as single spaces with a warning. Fifteen levels is the deepest a
statement can go.

Anything written after a function on the same line is ignored with a
warning. Functions take no arguments; they read their inputs from the
temporary variables set before them.

## Assignments

A variable is followed by `=` and an expression.

```text
tmpx = selfx + 100
tmpy = rand % 4 + 1
SetState = STATEPARRY
```

Operands may be numbers, variables, named constants, IDSZ codes, asset
names or strings. Operators are `+ - & > < * / %`. They need not be
surrounded by spaces; `tmpx=tmpx+1` is read the same as `tmpx = tmpx + 1`.

Operators are stored in the order they are written, one per operand word.
The compiler applies no precedence and there are no parentheses; how the
chain is evaluated is up to the interpreter.

```
let (script, _) = aiscript::mach::compile("tmpx = 1 + 2 * 3\nEnd", "demo");
let operators: Vec<i32> = script.instructions()[2..5]
    .iter()
    .map(|operand| operand.operator())
    .collect();
// The first operand carries the neutral code, then `+` and `*` as written.
assert_eq!(operators, [0, 0, 5]);
```

## Literals

| Form         | Meaning                                      |
|--------------|----------------------------------------------|
| `42`         | Decimal number, at most 8388607              |
| `[IDSZ]`     | Four capital letters packed into one number  |
| `"#name"`    | Asset slot looked up by name                 |
| `"text"`     | Message registered with the game             |

Inside a string, spaces are stored as `_` and tabs as `~`. A `//` outside
of a string starts a comment running to the end of the line.

*/
