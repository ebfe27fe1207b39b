/*!
# Built-in Functions and Commands

## Math

`ABS SGN INT FIX ROUND FLOOR CEIL SQR SIN COS TAN ATN LOG EXP` take one
number. `POW MIN MAX` take two. `RND()` is a fraction from 0 up to 1 and
`RND(n)` is a whole number from 0 up to n. `RANDOMIZE seed` repeats a
sequence; `RANDOMIZE` alone seeds from the system.

## Strings

Positions count from 1.

```text
PRINT LEFT$("BASIC", 2), RIGHT$("BASIC", 3), MID$("BASIC", 2, 3)
PRINT INSTR("BASIC", "SI")     ' 3, or 0 when absent
PRINT UPPER$("a"), LOWER$("A"), TRIM$("  x  ")
PRINT STR$(5) + "!", VAL("12") + 1, CHR$(65), ASC("A")
PRINT REPLACE$("a-b-c", "-", "+")
```

## Time

`TIMER` is seconds and `TICKS` milliseconds since the program started.
`DATE$` is `YYYY-MM-DD` and `TIME$` is `HH:MM:SS`. `SLEEP ms` pauses.

## Screen

Without a window, `CLS`, `LOCATE row, col` and `COLOR fg, bg` drive the
terminal. `SCREEN(w, h, title$)` opens a window; from then on `PRINT` draws
there and these graphics commands work:

```text
SETCOLOR(255, 0, 0)
PSET(10, 10)
LINE(0, 0, 100, 100)
RECT(20, 20, 50, 30, 1)
CIRCLE(160, 100, 40)
PRESENT
```

`GETKEY`, `MOUSEX`, `MOUSEY` and `MOUSEB` poll input. Compare with the
predefined constants `KEY_ESC#`, `KEY_UP#`, `KEY_A#`, `MOUSE_LEFT#` and
friends.

## Sound

```text
boom$ = LOADSOUND("boom.wav")
PLAYONCE(boom$)
PLAYREPEAT(boom$)
STOPSOUND(boom$)
STOPALLSOUNDS
```

## Files and Network

Paths are relative to the program's directory, also available as
`BASEPATH#`. File functions never stop the program: a failed read is an
empty string and a failed write is 0.

```text
IF FILEEXISTS("save.txt") THEN data$ = READFILE$("save.txt")
ok$ = WRITEFILE("save.txt", "level 3")
ok$ = APPENDFILE("log.txt", "played" + CHR$(10))
ok$ = DELETEFILE("old.txt")
```

`HTTPGET$(url$)` and `HTTPPOST$(url$, body$)` return the response body.
A failed request stops the program with `NETWORK ERROR`.

*/
