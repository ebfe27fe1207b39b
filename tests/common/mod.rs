#![allow(dead_code)]

use basic::host::{FileSystem, Graphics, Host, MemoryConsole, Network, Sound, MOUSE_LEFT};
use basic::mach::Runtime;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Host calls in the order they happened.
pub type Calls = Rc<RefCell<Vec<String>>>;

pub fn calls() -> Calls {
    Rc::new(RefCell::new(vec![]))
}

/// Console output, followed by the error if the program failed.
pub fn exec(source: &str) -> String {
    exec_with_input(source, &[])
}

pub fn exec_with_input(source: &str, input: &[&str]) -> String {
    let console = MemoryConsole::with_input(input.iter().copied());
    let host = Host::new(Box::new(console.clone()));
    exec_host(&console, host, source)
}

pub fn exec_host(console: &MemoryConsole, host: Host, source: &str) -> String {
    let mut runtime = Runtime::new(host);
    match runtime.execute(source) {
        Ok(()) => console.output(),
        Err(error) => format!("{}?{}\n", console.output(), error),
    }
}

/// Runs to completion or failure and hands back the runtime for inspection.
pub fn run(source: &str) -> Runtime {
    let mut runtime = Runtime::default();
    let _ = runtime.execute(source);
    runtime
}

pub struct RecordingGraphics {
    calls: Calls,
    open: bool,
    keys: VecDeque<i64>,
}

impl RecordingGraphics {
    pub fn new(calls: &Calls) -> RecordingGraphics {
        RecordingGraphics {
            calls: Rc::clone(calls),
            open: false,
            keys: VecDeque::new(),
        }
    }

    pub fn with_keys(mut self, keys: &[i64]) -> RecordingGraphics {
        self.keys.extend(keys);
        self
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Graphics for RecordingGraphics {
    fn open(&mut self, width: u32, height: u32, title: &str) -> bool {
        self.record(format!("open {}x{} {}", width, height, title));
        self.open = true;
        true
    }
    fn is_initialized(&self) -> bool {
        self.open
    }
    fn clear(&mut self) {
        self.record("clear".to_string());
    }
    fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.record(format!("color {},{},{},{}", r, g, b, a));
    }
    fn set_pixel(&mut self, x: i32, y: i32) {
        self.record(format!("pixel {},{}", x, y));
    }
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.record(format!("line {},{} {},{}", x1, y1, x2, y2));
    }
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, filled: bool) {
        self.record(format!("rect {},{} {}x{} {}", x, y, width, height, filled));
    }
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, filled: bool) {
        self.record(format!("circle {},{} {} {}", x, y, radius, filled));
    }
    fn print(&mut self, text: &str, newline: bool) {
        self.record(format!("print {:?} {}", text, newline));
    }
    fn locate(&mut self, row: usize, column: usize) {
        self.record(format!("locate {},{}", row, column));
    }
    fn present(&mut self) {
        self.record("present".to_string());
    }
    fn pump_events(&mut self) {
        self.record("pump".to_string());
    }
    fn last_key(&mut self) -> i64 {
        self.keys.pop_front().unwrap_or(0)
    }
    fn mouse_position(&mut self) -> (i32, i32) {
        (320, 200)
    }
    fn mouse_buttons(&mut self) -> u32 {
        MOUSE_LEFT
    }
}

pub struct RecordingSound {
    calls: Calls,
}

impl RecordingSound {
    pub fn new(calls: &Calls) -> RecordingSound {
        RecordingSound {
            calls: Rc::clone(calls),
        }
    }
}

impl Sound for RecordingSound {
    fn load(&mut self, path: &str) -> i64 {
        self.calls.borrow_mut().push(format!("load {}", path));
        7
    }
    fn play_once(&mut self, id: i64) {
        self.calls.borrow_mut().push(format!("once {}", id));
    }
    fn play_repeat(&mut self, id: i64) {
        self.calls.borrow_mut().push(format!("repeat {}", id));
    }
    fn play_once_wait(&mut self, id: i64) {
        self.calls.borrow_mut().push(format!("wait {}", id));
    }
    fn stop(&mut self, id: i64) {
        self.calls.borrow_mut().push(format!("stop {}", id));
    }
    fn stop_all(&mut self) {
        self.calls.borrow_mut().push("stop all".to_string());
    }
}

/// Files in a map. Paths under `locked/` refuse every write.
#[derive(Clone, Default)]
pub struct MemoryFiles {
    pub files: Rc<RefCell<HashMap<String, String>>>,
}

impl FileSystem for MemoryFiles {
    fn read(&mut self, path: &str) -> String {
        self.files.borrow().get(path).cloned().unwrap_or_default()
    }
    fn exists(&mut self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }
    fn write(&mut self, path: &str, content: &str) -> bool {
        if path.starts_with("locked/") {
            return false;
        }
        self.files
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
        true
    }
    fn append(&mut self, path: &str, content: &str) -> bool {
        if path.starts_with("locked/") {
            return false;
        }
        self.files
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_str(content);
        true
    }
    fn delete(&mut self, path: &str) -> bool {
        self.files.borrow_mut().remove(path).is_some()
    }
}

/// Answers from a fixed table; any other URL fails.
pub struct FakeNetwork {
    pub pages: HashMap<String, String>,
    pub calls: Calls,
}

impl Network for FakeNetwork {
    fn http_get(&mut self, url: &str) -> Result<String, String> {
        self.calls.borrow_mut().push(format!("GET {}", url));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| format!("404 {}", url))
    }
    fn http_post(&mut self, url: &str, body: &str) -> Result<String, String> {
        self.calls.borrow_mut().push(format!("POST {} {}", url, body));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| format!("404 {}", url))
    }
}
