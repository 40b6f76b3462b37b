/*!
# Diagnostics

Every diagnostic names the script and the line it was found on.

```text
INVALID INDENTATION IN goblin.txt LINE 12; 3 SPACES, MUST BE EVEN
```

Errors make the output unusable. Warnings do not.

| Code | Name                 | Level   |
|------|----------------------|---------|
| 1    | TAB CHARACTER        | Warning |
| 2    | UNTERMINATED STRING  | Error   |
| 3    | WORD TOO LONG        | Error   |
| 4    | LINE TOO LONG        | Error   |
| 5    | CONSTANT OUT OF RANGE | Error   |
| 10   | UNKNOWN OPCODE       | Error   |
| 11   | ASSET NOT FOUND      | Error   |
| 12   | SYMBOL VALUE OUT OF RANGE | Error |
| 20   | EXPECTED =           | Error   |
| 21   | MISSING OPERAND      | Error   |
| 22   | MISSING OPERATOR     | Error   |
| 23   | INVALID OPERAND      | Error   |
| 24   | INVALID STATEMENT    | Error   |
| 25   | TRAILING TEXT        | Warning |
| 26   | MISSING END          | Warning |
| 30   | INVALID INDENTATION  | Error   |
| 31   | TOO MANY INDENTATION LEVELS | Error   |
| 40   | PROGRAM TOO LARGE    | Error   |
| 41   | SOURCE TOO LARGE     | Error   |
| 42   | FILE ERROR           | Error   |
| 51   | INTERNAL ERROR       | Error   |

## PROGRAM TOO LARGE

The compiled script would not fit in the instruction buffer. Compiling
stops at that point. Split the script or raise `--max-instructions`.

## SYMBOL VALUE OUT OF RANGE

A caller-supplied symbol table gave a name a value its instruction field
cannot hold. Functions take 27 bits, variables and constants 23 bits and
operators 8 bits. Negative values are never valid. The word is treated as
unknown.

## FILE ERROR

`aisc` could not read a script or write its word file. The other files in
the batch are still compiled.

## UNKNOWN OPCODE

A word that is not a function, variable, constant or operator. Names are
case sensitive: `IfSpawned` is a function, `ifspawned` is not.

*/
