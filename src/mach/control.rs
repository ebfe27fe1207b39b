use super::{Address, Runtime, Val};
use crate::error;
use crate::lang::token::{Operator, TokenKind, Word};
use crate::lang::Error;
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// One active `FOR`. The body starts right after the loop header.
#[derive(Debug, Clone)]
pub struct ForLoop {
    pub var_name: String,
    pub end: f64,
    pub step: f64,
    pub body: Address,
}

impl ForLoop {
    fn runs(&self, value: f64) -> bool {
        (self.step > 0.0 && value <= self.end) || (self.step < 0.0 && value >= self.end)
    }
}

/// One open block `IF`. `taken` is set once any branch has run.
#[derive(Debug, Clone, Copy)]
pub struct IfBlock {
    pub at: Address,
    pub taken: bool,
}

/// ## Structured control flow
///
/// Conditional and loop statements keep their state on the runtime's
/// stacks. Skipping an untaken branch or a loop that never runs is a
/// forward scan over the token stream, counting nested blocks.

impl Runtime {
    pub(super) fn r#if(&mut self) -> Result<()> {
        let block = self.is_block_if(self.statement_start);
        let cond = self.expression()?.is_truthy();
        self.expect_word(Word::Then)?;
        if block {
            let at = self.statement_start;
            let base = self.call_bases().if_blocks;
            self.if_stack.unwind_to(base, |open| open.at == at);
            self.if_stack.push(IfBlock { at, taken: cond })?;
            if !cond {
                self.skip_if_block(true)?;
            }
            return Ok(());
        }
        if let TokenKind::Label(_) = self.peek() {
            if cond {
                return self.goto();
            }
        }
        if !cond {
            self.skip_to_line_else();
            if let TokenKind::Label(_) = self.peek() {
                if self.peek_at(1).is_line_end() {
                    return self.goto();
                }
            }
        }
        Ok(())
    }

    pub(super) fn else_if(&mut self) -> Result<()> {
        let taken = match self.if_stack.last() {
            Some(open) => open.taken,
            None => return Err(error!(ElseWithoutIf)),
        };
        if taken {
            return self.skip_if_block(false);
        }
        let cond = self.expression()?.is_truthy();
        self.expect_word(Word::Then)?;
        if let Some(open) = self.if_stack.last_mut() {
            open.taken = cond;
        }
        if !cond {
            self.skip_if_block(true)?;
        }
        Ok(())
    }

    pub(super) fn r#else(&mut self) -> Result<()> {
        // Only reached on a one-line IF after its THEN branch ran.
        if !self.peek().is_line_end() && *self.peek() != TokenKind::Colon {
            self.skip_line();
            return Ok(());
        }
        let taken = match self.if_stack.last() {
            Some(open) => open.taken,
            None => return Err(error!(ElseWithoutIf)),
        };
        if taken {
            return self.skip_if_block(false);
        }
        if let Some(open) = self.if_stack.last_mut() {
            open.taken = true;
        }
        Ok(())
    }

    pub(super) fn end_if(&mut self) -> Result<()> {
        if self.if_stack.len() <= self.call_bases().if_blocks {
            return Err(error!(EndIfWithoutIf));
        }
        self.if_stack.pop()?;
        Ok(())
    }

    /// `IF ... THEN` with nothing after `THEN` on its line.
    pub(super) fn is_block_if(&self, at: Address) -> bool {
        let tokens = self.program.tokens();
        for index in at + 1..tokens.len() {
            match &tokens[index].kind {
                TokenKind::Newline | TokenKind::Eof => return false,
                TokenKind::Word(Word::Then) => {
                    return self.program.token(index + 1).kind.is_line_end();
                }
                _ => {}
            }
        }
        false
    }

    /// Moves to the `ENDIF` closing the current block, or with
    /// `stop_at_branch` to an `ELSE`/`ELSEIF` at the same depth. The cursor
    /// lands on that token so it executes next.
    fn skip_if_block(&mut self, stop_at_branch: bool) -> Result<()> {
        let mut depth = 0;
        loop {
            match self.peek() {
                TokenKind::Eof => return Err(error!(IfWithoutEndIf)),
                TokenKind::Word(Word::If) => {
                    if self.is_block_if(self.pc.pos()) {
                        depth += 1;
                    } else {
                        self.skip_line();
                        continue;
                    }
                }
                TokenKind::Word(Word::EndIf) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                TokenKind::Word(Word::Else) | TokenKind::Word(Word::ElseIf)
                    if depth == 0 && stop_at_branch =>
                {
                    return Ok(());
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Untaken one-line IF: continue after its own `ELSE`, or at the next
    /// line when there is none.
    fn skip_to_line_else(&mut self) {
        let mut depth = 0;
        loop {
            match self.peek() {
                TokenKind::Newline | TokenKind::Eof => return,
                TokenKind::Word(Word::If) => depth += 1,
                TokenKind::Word(Word::Else) => {
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    pub(super) fn r#for(&mut self) -> Result<()> {
        let var_name = match self.peek() {
            TokenKind::Variable(name) => name.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED LOOP VARIABLE")),
        };
        self.advance();
        self.expect_operator(Operator::Equal)?;
        let start = self.expression()?.to_number();
        self.expect_word(Word::To)?;
        let end = self.expression()?.to_number();
        let step = if self.accept_word(Word::Step) {
            self.expression()?.to_number()
        } else {
            1.0
        };
        self.var.store(&var_name, Val::Number(start))?;
        let base = self.call_bases().for_loops;
        self.for_stack.unwind_to(base, |open| open.var_name == var_name);
        let frame = ForLoop {
            var_name,
            end,
            step,
            body: self.pc.pos(),
        };
        if frame.runs(start) {
            self.for_stack.push(frame)
        } else {
            debug!("line {}: FOR {} skipped", self.line, frame.var_name);
            self.skip_past_next()
        }
    }

    pub(super) fn next(&mut self) -> Result<()> {
        let var_name = match self.peek() {
            TokenKind::Variable(name) => Some(name.clone()),
            _ => None,
        };
        if var_name.is_some() {
            self.advance();
        }
        let base = self.call_bases().for_loops;
        let frame = loop {
            if self.for_stack.len() <= base {
                return Err(error!(NextWithoutFor));
            }
            let frame = self.for_stack.pop()?;
            match &var_name {
                Some(name) if *name != frame.var_name => continue,
                _ => break frame,
            }
        };
        let value = self.var.fetch(&frame.var_name)?.to_number() + frame.step;
        self.var.store(&frame.var_name, Val::Number(value))?;
        if frame.runs(value) {
            let body = frame.body;
            self.for_stack.push(frame)?;
            self.pc.jump(body);
        }
        Ok(())
    }

    fn skip_past_next(&mut self) -> Result<()> {
        let mut depth = 0;
        loop {
            match self.peek() {
                TokenKind::Eof => return Err(error!(ForWithoutNext)),
                TokenKind::Word(Word::For) => depth += 1,
                TokenKind::Word(Word::Next) => {
                    if depth == 0 {
                        self.advance();
                        if let TokenKind::Variable(_) = self.peek() {
                            self.advance();
                        }
                        return Ok(());
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    pub(super) fn r#while(&mut self) -> Result<()> {
        let at = self.statement_start;
        let base = self.call_bases().while_loops;
        self.while_stack.unwind_to(base, |open| *open == at);
        if self.expression()?.is_truthy() {
            self.while_stack.push(at)
        } else {
            self.skip_past_wend()
        }
    }

    pub(super) fn wend(&mut self) -> Result<()> {
        if self.while_stack.len() <= self.call_bases().while_loops {
            return Err(error!(WendWithoutWhile));
        }
        let at = self.while_stack.pop()?;
        self.pc.jump(at);
        Ok(())
    }

    fn skip_past_wend(&mut self) -> Result<()> {
        let mut depth = 0;
        loop {
            match self.peek() {
                TokenKind::Eof => return Err(error!(WhileWithoutWend)),
                TokenKind::Word(Word::While) => depth += 1,
                TokenKind::Word(Word::Wend) => {
                    if depth == 0 {
                        self.advance();
                        return Ok(());
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// A literal `[label]`, or any expression naming one.
    fn jump_target(&mut self) -> Result<Address> {
        let name = match self.peek() {
            TokenKind::Label(name) => {
                let name = name.clone();
                self.advance();
                name
            }
            _ => {
                let text = self.expression()?.to_string();
                text.trim()
                    .trim_start_matches('[')
                    .trim_end_matches(']')
                    .trim()
                    .to_uppercase()
            }
        };
        let addr = match self.program.label(&name) {
            Some(addr) => addr,
            None => return Err(error!(UndefinedLabel; name)),
        };
        if let Some(call) = &self.call {
            if !call.body.contains(&addr) {
                return Err(error!(IllegalJump; format!("[{}] IS OUTSIDE FN {}", name, call.name)));
            }
        }
        Ok(addr)
    }

    pub(super) fn goto(&mut self) -> Result<()> {
        let addr = self.jump_target()?;
        self.jump(addr);
        Ok(())
    }

    pub(super) fn gosub(&mut self) -> Result<()> {
        let addr = self.jump_target()?;
        self.gosub_stack.push(self.pc.pos())?;
        self.jump(addr);
        Ok(())
    }

    /// Inside a user function a bare `RETURN` first unwinds a `GOSUB` made
    /// by that call; otherwise it ends the call with a result.
    pub(super) fn r#return(&mut self) -> Result<()> {
        let gosub_base = match &self.call {
            Some(call) => call.bases.gosubs,
            None => {
                let addr = self.gosub_stack.pop()?;
                self.jump(addr);
                return Ok(());
            }
        };
        let bare = self.at_statement_end();
        if bare && self.gosub_stack.len() > gosub_base {
            let addr = self.gosub_stack.pop()?;
            self.jump(addr);
            return Ok(());
        }
        let result = if bare {
            Val::default()
        } else {
            self.expression()?
        };
        if let Some(call) = self.call.as_mut() {
            call.result = result;
            call.returned = true;
        }
        Ok(())
    }
}
