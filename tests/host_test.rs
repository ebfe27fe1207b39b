mod common;
use basic::host::{Host, MemoryConsole};
use common::*;
use std::collections::HashMap;

fn graphics_host(console: &MemoryConsole, calls: &Calls) -> Host {
    Host::new(Box::new(console.clone()))
        .with_graphics(Box::new(RecordingGraphics::new(calls).with_keys(&[27])))
        .with_sound(Box::new(RecordingSound::new(calls)))
}

#[test]
fn test_drawing_commands() {
    let console = MemoryConsole::new();
    let calls = calls();
    let src = "
SCREEN(640, 480, \"Demo\")
SETCOLOR(255, 0, 0)
PSET(1, 2)
LINE 0, 0, 10, 10
RECT(5, 5, 20, 10, 1)
CIRCLE(50, 50, 8)
PRESENT";
    assert_eq!(exec_host(&console, graphics_host(&console, &calls), src), "");
    assert_eq!(
        *calls.borrow(),
        vec![
            "open 640x480 Demo",
            "color 255,0,0,255",
            "pixel 1,2",
            "line 0,0 10,10",
            "rect 5,5 20x10 true",
            "circle 50,50 8 false",
            "present",
        ]
    );
}

#[test]
fn test_text_goes_to_open_window() {
    let console = MemoryConsole::new();
    let calls = calls();
    let src = "PRINT \"console\"\nSCREEN 320, 200\nCLS\nLOCATE 2, 3\nCOLOR 4\nPRINT \"window\";";
    assert_eq!(exec_host(&console, graphics_host(&console, &calls), src), "console\n");
    assert_eq!(
        *calls.borrow(),
        vec![
            "open 320x200 BASIC",
            "clear",
            "locate 2,3",
            "color 170,0,0,255",
            "print \"window\" false",
        ]
    );
}

#[test]
fn test_input_polling() {
    let console = MemoryConsole::new();
    let calls = calls();
    let src = "IF GETKEY = KEY_ESC# THEN PRINT \"esc\"\nPRINT GETKEY; MOUSEX; MOUSEY; MOUSEB = MOUSE_LEFT#";
    assert_eq!(
        exec_host(&console, graphics_host(&console, &calls), src),
        "esc\n03202001\n"
    );
    assert!(calls.borrow().iter().all(|c| c == "pump"));
    assert_eq!(calls.borrow().len(), 5);
}

#[test]
fn test_sound_commands() {
    let console = MemoryConsole::new();
    let calls = calls();
    let src = "s$ = LOADSOUND(\"boom.wav\")\nPLAYONCE(s$)\nPLAYREPEAT s$\nPLAYONCEWAIT(s$)\nSTOPSOUND(s$)\nSTOPALLSOUNDS";
    exec_host(&console, graphics_host(&console, &calls), src);
    assert_eq!(
        *calls.borrow(),
        vec!["load boom.wav", "once 7", "repeat 7", "wait 7", "stop 7", "stop all"]
    );
}

#[test]
fn test_command_arity() {
    let console = MemoryConsole::new();
    let calls = calls();
    assert_eq!(
        exec_host(&console, graphics_host(&console, &calls), "PSET(1)"),
        "?ILLEGAL FUNCTION CALL IN LINE 1; PSET GIVEN 1 ARGUMENTS\n"
    );
}

#[test]
fn test_file_failures_are_silent() {
    let console = MemoryConsole::new();
    let files = MemoryFiles::default();
    let host = Host::new(Box::new(console.clone())).with_files(Box::new(files.clone()));
    let src = "
PRINT FILEEXISTS(\"save.txt\"); \"[\" + READFILE$(\"save.txt\") + \"]\"
PRINT WRITEFILE(\"save.txt\", \"level \"); APPENDFILE(\"save.txt\", 3)
PRINT READFILE$(\"save.txt\")
PRINT WRITEFILE(\"locked/x.txt\", \"no\"); DELETEFILE(\"missing.txt\"); DELETEFILE(\"save.txt\")
PRINT \"still running\"";
    assert_eq!(exec_host(&console, host, src), "0[]\n11\nlevel 3\n001\nstill running\n");
    assert!(files.files.borrow().is_empty());
}

#[test]
fn test_network_failures_are_fatal() {
    let console = MemoryConsole::new();
    let calls = calls();
    let mut pages = HashMap::new();
    pages.insert("http://example.test/hi".to_string(), "hello".to_string());
    let network = FakeNetwork {
        pages,
        calls: calls.clone(),
    };
    let host = Host::new(Box::new(console.clone())).with_network(Box::new(network));
    let src = "
PRINT HTTPGET$(\"http://example.test/hi\")
PRINT HTTPPOST$(\"http://example.test/hi\", \"x=1\")
PRINT HTTPGET$(\"http://example.test/missing\")
PRINT \"unreachable\"";
    assert_eq!(
        exec_host(&console, host, src),
        "hello\nhello\n?NETWORK ERROR IN LINE 4; 404 http://example.test/missing\n"
    );
    assert_eq!(calls.borrow().len(), 3);
}
