/*!
# The Language

Programs are plain text. There are no line numbers; a jump goes to a
label written in square brackets at the start of a statement. Statements
are separated by new lines or colons. Keywords are not case sensitive.

```text
[top]
PRINT "HELLO"
GOTO [top]
```

## Names

Every name ends in a decoration. A `$` name is a variable and a `#` name
is a constant. Constants are assigned once; a second assignment stops the
program with `CONSTANT REDEFINED`.

```text
LET PI# = 3.14159
r$ = 2
PRINT PI# * r$ * r$
```

Values are numbers or strings and any name holds either. A `$` name that
was never assigned is an error, not zero. Assignment may name several
targets. Only the last one receives the value; the others are reset to
an empty string, or zero for constants.

```text
LET a$, b$, total$ = 10
```

`+` joins strings when either side is a string. The other arithmetic
operators read strings as numbers, so `"5" - 3` is 2 and `"5" + 3` is
"53". Comparisons give 1 or 0. Division by zero gives 0.

## Arrays

`DIM` declares an array, or empties one that already exists. Subscripts
can be any values and any number of them; the array only stores the
keys that have been assigned.

```text
DIM score$
score$("alice") = 10
score$(3, 4) = 5
PRINT LEN(score$())       ' 2 keys
PRINT HASKEY(score$, "bob")
DELKEY score$, "alice"
DELARRAY score$
```

Reading a key that was never assigned gives an empty string. Reading an
array that was never declared is `ARRAY NOT DECLARED`.

## Blocks

`IF` with nothing after `THEN` opens a block closed by `END IF`. Anything
after `THEN` makes a one-line `IF` with an optional `ELSE` on the same line.

```text
IF x$ > 10 THEN
  PRINT "big"
ELSEIF x$ > 5 THEN
  PRINT "medium"
ELSE
  PRINT "small"
END IF
IF done$ THEN [finish] ELSE PRINT "again"
```

`FOR` loops run zero or more times and leave the variable one step past
the end. `WHILE` tests before every pass.

```text
FOR i$ = 10 TO 1 STEP -1: PRINT i$: NEXT i$
WHILE lives$ > 0: GOSUB [turn]: WEND
```

## Functions

`DEF FN` defines a function anywhere in the program; it can be called
before its definition is reached. Parameters and names first assigned
inside the body are local. Names that already exist globally are updated
in place. `RETURN` with a value ends the call.

```text
DEF FN square(n$)
  RETURN n$ * n$
END DEF
PRINT FN square(12)
```

A `GOTO` out of a function body is `ILLEGAL JUMP`.

*/
