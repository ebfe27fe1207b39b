use super::call::CallFrame;
use super::control::{ForLoop, IfBlock};
use super::{Address, Cursor, Program, Stack, Val, Var};
use crate::error;
use crate::host::{input_constants, Host};
use crate::lang::token::{Operator, TokenKind, Word};
use crate::lang::{Error, ErrorCode};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter
///
/// Owns the loaded program, all variable state, the control stacks and
/// the host collaborators. One statement executes at a time, decoded from
/// the token stream at the cursor.

pub struct Runtime {
    pub(super) program: Rc<Program>,
    pub(super) pc: Cursor,
    pub(super) var: Var,
    pub(super) host: Host,
    pub(super) if_stack: Stack<IfBlock>,
    pub(super) for_stack: Stack<ForLoop>,
    pub(super) while_stack: Stack<Address>,
    pub(super) gosub_stack: Stack<Address>,
    pub(super) call: Option<CallFrame>,
    pub(super) depth: usize,
    pub(super) running: bool,
    errored: bool,
    error: Option<Error>,
    /// Source line of the statement being executed.
    pub(super) line: usize,
    /// Address of the statement being executed.
    pub(super) statement_start: Address,
    pub(super) started: Instant,
    pub(super) rng: StdRng,
    base_path: PathBuf,
    interrupted: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Host::default())
    }
}

impl Runtime {
    pub fn new(host: Host) -> Runtime {
        Runtime {
            program: Rc::new(Program::default()),
            pc: Cursor::default(),
            var: Var::new(),
            host,
            if_stack: Stack::new("IF NESTING TOO DEEP", ErrorCode::EndIfWithoutIf),
            for_stack: Stack::new("FOR NESTING TOO DEEP", ErrorCode::NextWithoutFor),
            while_stack: Stack::new("WHILE NESTING TOO DEEP", ErrorCode::WendWithoutWhile),
            gosub_stack: Stack::new("GOSUB NESTING TOO DEEP", ErrorCode::ReturnWithoutGosub),
            call: None,
            depth: 0,
            running: false,
            errored: false,
            error: None,
            line: 1,
            statement_start: 0,
            started: Instant::now(),
            rng: StdRng::from_entropy(),
            base_path: PathBuf::from("."),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Directory of the running program, published as `BASEPATH#`.
    pub fn set_base_path<P: AsRef<Path>>(&mut self, path: P) {
        self.base_path = path.as_ref().to_path_buf();
    }

    /// Setting the flag stops the program with `BREAK` before its next
    /// statement.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    pub fn load(&mut self, source: &str) -> Result<()> {
        match Program::compile(source) {
            Ok(program) => {
                self.program = Rc::new(program);
                self.pc = Cursor::new(&self.program);
                self.error = None;
                self.errored = false;
                Ok(())
            }
            Err(error) => {
                log::error!("{}", error);
                self.errored = true;
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    pub fn execute(&mut self, source: &str) -> Result<()> {
        self.load(source)?;
        self.run()
    }

    /// Runs the loaded program from the top with fresh state.
    pub fn run(&mut self) -> Result<()> {
        self.reset()?;
        info!("running {} tokens", self.program.tokens().len());
        self.running = true;
        if let Err(error) = self.run_until(self.program.last()) {
            self.fail(error);
        }
        self.running = false;
        match &self.error {
            Some(error) => Err(error.clone()),
            None => {
                info!("program ended");
                Ok(())
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_errored(&self) -> bool {
        self.errored
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn variable(&self, var_name: &str) -> Option<Val> {
        self.var.get(&var_name.to_uppercase()).cloned()
    }

    pub fn array_len(&self, var_name: &str) -> usize {
        self.var.array_len(&var_name.to_uppercase())
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }

    fn reset(&mut self) -> Result<()> {
        self.var.clear();
        self.if_stack.clear();
        self.for_stack.clear();
        self.while_stack.clear();
        self.gosub_stack.clear();
        self.call = None;
        self.depth = 0;
        self.error = None;
        self.errored = false;
        self.line = 1;
        self.pc = Cursor::new(&self.program);
        self.started = Instant::now();
        self.interrupted.store(false, Ordering::SeqCst);
        for (name, code) in input_constants() {
            self.var.define_constant(&name, Val::Number(code))?;
        }
        let base = self.base_path.display().to_string();
        self.var.define_constant("BASEPATH#", Val::String(base))?;
        Ok(())
    }

    /// Executes statements until `end`, the end of the program, `END`, or
    /// a `RETURN` from the innermost user function.
    pub(super) fn run_until(&mut self, end: Address) -> Result<()> {
        while self.running {
            if self.call.as_ref().map_or(false, |call| call.returned) {
                break;
            }
            self.skip_separators();
            if self.pc.pos() >= end || *self.peek() == TokenKind::Eof {
                break;
            }
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Err(error!(Break));
            }
            self.statement_start = self.pc.pos();
            self.line = self.current_line();
            self.statement()?;
        }
        Ok(())
    }

    fn fail(&mut self, error: Error) {
        let error = if error.is_located() {
            error
        } else {
            error.in_line_number(self.line)
        };
        log::error!("{}", error);
        self.running = false;
        self.errored = true;
        self.error = Some(error);
    }

    pub(super) fn peek(&self) -> &TokenKind {
        &self.program.token(self.pc.pos()).kind
    }

    pub(super) fn peek_at(&self, offset: usize) -> &TokenKind {
        &self.program.token(self.pc.pos() + offset).kind
    }

    pub(super) fn advance(&mut self) {
        self.pc.advance();
    }

    pub(super) fn current_line(&self) -> usize {
        self.program.token(self.pc.pos()).line
    }

    pub(super) fn at_statement_end(&self) -> bool {
        self.peek().is_statement_end()
    }

    pub(super) fn accept(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn accept_word(&mut self, word: Word) -> bool {
        if self.peek().is_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if self.accept(&kind) {
            Ok(())
        } else {
            Err(error!(SyntaxError; format!("EXPECTED {} FOUND {}", kind, self.peek())))
        }
    }

    pub(super) fn expect_word(&mut self, word: Word) -> Result<()> {
        self.expect(TokenKind::Word(word))
    }

    pub(super) fn expect_operator(&mut self, op: Operator) -> Result<()> {
        self.expect(TokenKind::Operator(op))
    }

    pub(super) fn skip_separators(&mut self) {
        while matches!(self.peek(), TokenKind::Newline | TokenKind::Colon) {
            self.advance();
        }
    }

    /// Moves to the end of the current line without consuming the newline.
    pub(super) fn skip_line(&mut self) {
        while !self.peek().is_line_end() {
            self.advance();
        }
    }

    pub(super) fn jump(&mut self, addr: Address) {
        debug!("line {}: jump to {}", self.line, addr);
        self.pc.jump(addr);
    }

    /// PRINT output: the window once it is open, else the console.
    pub(super) fn write_text(&mut self, text: &str, newline: bool) {
        if self.host.graphics.is_initialized() {
            self.host.graphics.print(text, newline);
        } else if newline {
            self.host.console.print(&format!("{}\n", text));
        } else {
            self.host.console.print(text);
        }
    }

    pub(super) fn trace_statement(&self) {
        trace!("{}: {}", self.line, self.peek());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryConsole;

    #[test]
    fn test_runtime_reports_line_of_failure() {
        let console = MemoryConsole::new();
        let mut r = Runtime::new(Host::new(Box::new(console.clone())));
        let err = r.execute("PRINT 1\nPRINT x$\n").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UndefinedVariable);
        assert_eq!(err.line_number(), Some(2));
        assert!(r.has_errored());
        assert!(!r.is_running());
        assert_eq!(console.output(), "1\n");
    }

    #[test]
    fn test_constants_injected() {
        let mut r = Runtime::default();
        r.set_base_path("/games");
        r.execute("x$ = KEY_ESC#").unwrap();
        assert_eq!(r.variable("x$"), Some(Val::Number(27.0)));
        assert_eq!(r.variable("BASEPATH#"), Some(Val::from("/games")));
    }

    #[test]
    fn test_interrupt_breaks() {
        let mut r = Runtime::default();
        r.load("[top]\nGOTO [top]").unwrap();
        let flag = r.interrupt_handle();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            flag.store(true, Ordering::SeqCst);
        });
        assert_eq!(r.run().unwrap_err().code(), ErrorCode::Break);
    }
}
