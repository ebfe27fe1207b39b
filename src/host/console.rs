use log::trace;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Plain text I/O used whenever the graphics window is not open.
pub trait Console {
    fn print(&mut self, text: &str);
    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
    fn clear(&mut self);
    /// One-based row and column.
    fn locate(&mut self, row: usize, column: usize);
    /// Colour numbers index the 16-entry palette.
    fn color(&mut self, foreground: u8, background: Option<u8>);
}

/// In-memory console. Clones share one output buffer and one input queue,
/// so a caller can keep a handle while the runtime owns the boxed console.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    output: Rc<RefCell<String>>,
    input: Rc<RefCell<VecDeque<String>>>,
}

impl MemoryConsole {
    pub fn new() -> MemoryConsole {
        MemoryConsole::default()
    }

    pub fn with_input<I, S>(lines: I) -> MemoryConsole
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let console = MemoryConsole::default();
        console
            .input
            .borrow_mut()
            .extend(lines.into_iter().map(|s| s.into()));
        console
    }

    pub fn output(&self) -> String {
        self.output.borrow().clone()
    }
}

impl Console for MemoryConsole {
    fn print(&mut self, text: &str) {
        self.output.borrow_mut().push_str(text);
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.output.borrow_mut().push_str(prompt);
        let line = self.input.borrow_mut().pop_front()?;
        self.output.borrow_mut().push_str(&line);
        self.output.borrow_mut().push('\n');
        Some(line)
    }

    fn clear(&mut self) {
        self.output.borrow_mut().clear();
    }

    fn locate(&mut self, row: usize, column: usize) {
        trace!("locate {},{}", row, column);
    }

    fn color(&mut self, foreground: u8, background: Option<u8>) {
        trace!("color {} {:?}", foreground, background);
    }
}
