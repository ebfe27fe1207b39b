mod common;
use common::*;

#[test]
fn test_input_with_prompt() {
    let src = "INPUT \"Name\"; n$\nPRINT \"Hi \" + n$";
    assert_eq!(exec_with_input(src, &["Ada"]), "NameAda\nHi Ada\n");
}

#[test]
fn test_input_default_prompt_and_numbers() {
    let src = "INPUT a$\nPRINT a$ + 1";
    assert_eq!(exec_with_input(src, &["41"]), "? 41\n42\n");
    assert_eq!(exec_with_input(src, &["x"]), "? x\nx1\n");
}

#[test]
fn test_input_several_targets() {
    let src = "DIM b$\nINPUT a$, b$(1)\nPRINT a$; \"/\"; b$(1)";
    assert_eq!(exec_with_input(src, &["3, four"]), "? 3, four\n3/four\n");
}

#[test]
fn test_input_at_end_of_input_is_empty() {
    let src = "INPUT \"> \", a$\nPRINT \"[\" + a$ + \"]\"";
    assert_eq!(exec_with_input(src, &[]), "> []\n");
}

#[test]
fn test_input_only_takes_basic_numbers() {
    let src = "INPUT n$\nPRINT n$ + 1";
    assert_eq!(exec_with_input(src, &["Nan"]), "? Nan\nNan1\n");
    assert_eq!(exec_with_input(src, &["1e5"]), "? 1e5\n1e51\n");
    assert_eq!(exec_with_input(src, &["-2.5"]), "? -2.5\n-1.5\n");
}
