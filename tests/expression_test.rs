mod common;
use common::*;

#[test]
fn test_precedence() {
    assert_eq!(exec("PRINT 2 + 3 * 4"), "14\n");
    assert_eq!(exec("PRINT (2 + 3) * 4"), "20\n");
    assert_eq!(exec("PRINT 10 - 4 - 3"), "3\n");
    assert_eq!(exec("PRINT -2 * 3"), "-6\n");
    assert_eq!(exec("PRINT 7 MOD 3 + 1"), "2\n");
    assert_eq!(exec("PRINT 1 + 1 = 2 AND 3 > 2"), "1\n");
}

#[test]
fn test_plus_concatenates_strings() {
    assert_eq!(exec("PRINT \"5\" + 3"), "53\n");
    assert_eq!(exec("PRINT 5 + \"3\""), "53\n");
    assert_eq!(exec("PRINT \"5\" - 3"), "2\n");
    assert_eq!(exec("PRINT \"4\" * \"2\""), "8\n");
}

#[test]
fn test_comparison_coercion() {
    assert_eq!(exec("PRINT \"10\" > \"9\""), "1\n");
    assert_eq!(exec("PRINT \"abc\" > \"abd\""), "0\n");
    assert_eq!(exec("PRINT \"abc\" < \"abd\""), "1\n");
    assert_eq!(exec("PRINT \"ABC\" = \"abc\""), "1\n");
    assert_eq!(exec("PRINT 3 <> 3, 3 <= 3"), "0\t1\n");
}

#[test]
fn test_non_basic_number_text_compares_as_text() {
    let src = "x$ = \"nan\"\nIF x$ = 5 THEN PRINT \"equal\" ELSE PRINT \"different\"";
    assert_eq!(exec(src), "different\n");
    assert_eq!(exec("PRINT \"1e5\" = 100000; \"inf\" > 1"), "01\n");
}

#[test]
fn test_division_by_zero_is_zero() {
    assert_eq!(exec("PRINT 1 / 0; 5 MOD 0"), "00\n");
    assert_eq!(exec("PRINT 7 / 2"), "3.5\n");
}

#[test]
fn test_logic() {
    assert_eq!(exec("PRINT NOT 0; NOT 5; 1 OR 0; 0 AND 1"), "1010\n");
    assert_eq!(exec("a$ = \"\": PRINT NOT a$"), "1\n");
}

#[test]
fn test_undefined_variable_stops_program() {
    assert_eq!(
        exec("PRINT \"before\"\nPRINT nope$\nPRINT \"after\""),
        "before\n?UNDEFINED VARIABLE IN LINE 2; NOPE$\n"
    );
}

#[test]
fn test_builtins() {
    assert_eq!(exec("PRINT LEFT$(\"BASIC\", 2); RIGHT$(\"BASIC\", 3)"), "BASIC\n");
    assert_eq!(exec("PRINT MID$(\"BASIC\", 2, 3)"), "ASI\n");
    assert_eq!(exec("PRINT INSTR(\"BASIC\", \"SI\"); INSTR(\"BASIC\", \"Z\")"), "30\n");
    assert_eq!(exec("PRINT LEN(\"hello\"); UPPER$(\"a\"); LOWER$(\"B\")"), "5Ab\n");
    assert_eq!(exec("PRINT \"[\" + TRIM$(\"  x  \") + \"]\""), "[x]\n");
    assert_eq!(exec("PRINT STR$(5) + \"!\"; VAL(\"12\") + 1"), "5!13\n");
    assert_eq!(exec("PRINT CHR$(65); ASC(\"B\")"), "A66\n");
    assert_eq!(exec("PRINT REPLACE$(\"a-b-c\", \"-\", \"+\")"), "a+b+c\n");
    assert_eq!(exec("PRINT ABS(-3); SGN(-2); INT(2.7); FIX(-2.7)"), "3-12-2\n");
    assert_eq!(exec("PRINT POW(2, 8); MIN(3, 4); MAX(3, 4); SQR(81)"), "256349\n");
    assert_eq!(exec("PRINT ROUND(2.5); FLOOR(-0.5); CEIL(0.2)"), "3-11\n");
}

#[test]
fn test_builtin_arity() {
    assert_eq!(
        exec("PRINT LEFT$(\"x\")"),
        "?ILLEGAL FUNCTION CALL IN LINE 1; LEFT$ GIVEN 1 ARGUMENTS\n"
    );
}

#[test]
fn test_random() {
    let r = run("RANDOMIZE 7\na$ = RND(10)\nb$ = RND()\nRANDOMIZE 7\nc$ = RND(10)");
    let a = r.variable("a$").unwrap().to_number();
    let b = r.variable("b$").unwrap().to_number();
    assert!((0.0..10.0).contains(&a) && a.fract() == 0.0);
    assert!((0.0..1.0).contains(&b));
    assert_eq!(r.variable("c$").unwrap().to_number(), a);
}

#[test]
fn test_clock() {
    let r = run("t$ = TIMER\nk$ = TICKS\nd$ = DATE$\nh$ = TIME$");
    assert!(r.variable("t$").unwrap().to_number() >= 0.0);
    assert!(r.variable("k$").unwrap().to_number() >= 0.0);
    assert_eq!(r.variable("d$").unwrap().to_string().len(), 10);
    assert_eq!(r.variable("h$").unwrap().to_string().len(), 8);
}
