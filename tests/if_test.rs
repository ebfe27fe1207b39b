mod common;
use common::*;

#[test]
fn test_one_line_if() {
    assert_eq!(exec("IF 1 THEN PRINT \"one\""), "one\n");
    assert_eq!(exec("IF 0 THEN PRINT \"one\"\nPRINT \"next\""), "next\n");
    assert_eq!(exec("IF 1 THEN PRINT \"a\";: PRINT \"b\""), "ab\n");
    assert_eq!(exec("IF 0 THEN PRINT \"a\";: PRINT \"b\""), "");
}

#[test]
fn test_one_line_if_else() {
    assert_eq!(exec("IF 0 THEN PRINT \"one\" ELSE PRINT \"two\";: PRINT 2"), "two2\n");
    assert_eq!(exec("IF 1 THEN PRINT \"one\" ELSE PRINT \"two\": PRINT 2"), "one\n");
}

#[test]
fn test_nested_one_line_if() {
    let src = "a$ = 1: b$ = 0\nIF a$ THEN IF b$ THEN PRINT \"ab\" ELSE PRINT \"a\" ELSE PRINT \"none\"";
    assert_eq!(exec(src), "a\n");
    let src = "a$ = 0: b$ = 1\nIF a$ THEN IF b$ THEN PRINT \"ab\" ELSE PRINT \"a\" ELSE PRINT \"none\"";
    assert_eq!(exec(src), "none\n");
}

#[test]
fn test_if_then_label() {
    let src = "IF 1 THEN [yes]\nPRINT \"no\"\n[yes]\nPRINT \"yes\"";
    assert_eq!(exec(src), "yes\n");
    let src = "IF 0 THEN [no] ELSE [yes]\n[no]\nPRINT \"no\"\n[yes]\nPRINT \"yes\"";
    assert_eq!(exec(src), "yes\n");
}

#[test]
fn test_block_if() {
    let src = "
x$ = 7
IF x$ > 10 THEN
  PRINT \"big\"
ELSEIF x$ > 5 THEN
  PRINT \"medium\"
ELSEIF x$ > 1 THEN
  PRINT \"small\"
ELSE
  PRINT \"tiny\"
END IF
PRINT \"done\"";
    assert_eq!(exec(src), "medium\ndone\n");
    assert_eq!(exec(&src.replace("x$ = 7", "x$ = 0")), "tiny\ndone\n");
    assert_eq!(exec(&src.replace("x$ = 7", "x$ = 20")), "big\ndone\n");
}

#[test]
fn test_taken_branch_skips_later_elseif() {
    let src = "
IF 1 THEN
  PRINT \"first\"
ELSEIF 1 THEN
  PRINT \"second\"
ELSE
  PRINT \"third\"
END IF";
    assert_eq!(exec(src), "first\n");
}

#[test]
fn test_nested_block_if() {
    let src = "
IF 0 THEN
  IF 1 THEN
    PRINT \"inner\"
  ELSE
    PRINT \"inner else\"
  END IF
  IF 1 THEN PRINT \"one line\" ELSE PRINT \"x\"
ELSE
  IF 1 THEN
    PRINT \"else inner\"
  END IF
END IF
PRINT \"after\"";
    assert_eq!(exec(src), "else inner\nafter\n");
}

#[test]
fn test_block_if_inside_loop() {
    let src = "
FOR i$ = 1 TO 4
  IF i$ MOD 2 = 0 THEN
    PRINT \"even\";
  ELSE
    PRINT \"odd\";
  END IF
NEXT";
    assert_eq!(exec(src), "oddevenoddeven");
}

#[test]
fn test_unterminated_block_if() {
    assert_eq!(exec("IF 0 THEN\nPRINT 1"), "?IF WITHOUT ENDIF IN LINE 1\n");
}

#[test]
fn test_stray_else_and_endif() {
    assert_eq!(exec("ELSE"), "?ELSE WITHOUT IF IN LINE 1\n");
    assert_eq!(exec("END IF"), "?ENDIF WITHOUT IF IN LINE 1\n");
}

#[test]
fn test_goto_out_of_block_if_in_a_loop() {
    let src = "
n$ = 0
[loop]
n$ = n$ + 1
IF n$ < 70000 THEN
  GOTO [loop]
END IF
PRINT n$";
    assert_eq!(exec(src), "70000\n");
}

#[test]
fn test_block_else_followed_by_colon() {
    let src = "IF 0 THEN\nPRINT 1\nELSE: PRINT 2\nEND IF";
    assert_eq!(exec(src), "2\n");
    let src = "IF 1 THEN\nPRINT 1\nELSE: PRINT 2\nEND IF";
    assert_eq!(exec(src), "1\n");
}
