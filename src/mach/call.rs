use super::{Address, Frame, Runtime, Val};
use crate::error;
use crate::lang::token::TokenKind;
use crate::lang::Error;
use log::trace;
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

const MAX_CALL_DEPTH: usize = 256;

/// Control stack heights on entry to a call. The call may not pop below
/// them, and everything above them is discarded when it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bases {
    pub if_blocks: usize,
    pub for_loops: usize,
    pub while_loops: usize,
    pub gosubs: usize,
}

#[derive(Debug)]
pub struct CallFrame {
    pub name: String,
    pub body: Range<Address>,
    pub bases: Bases,
    pub result: Val,
    pub returned: bool,
}

impl Runtime {
    pub(super) fn call_bases(&self) -> Bases {
        self.call.as_ref().map_or(Bases::default(), |call| call.bases)
    }

    fn stack_heights(&self) -> Bases {
        Bases {
            if_blocks: self.if_stack.len(),
            for_loops: self.for_stack.len(),
            while_loops: self.while_stack.len(),
            gosubs: self.gosub_stack.len(),
        }
    }

    /// `FN name(args)`, with the cursor on the name. Arguments are
    /// evaluated in the caller's scope; the body then runs in a fresh
    /// local scope until `RETURN` or `END DEF`.
    pub(super) fn call_user_function(&mut self) -> Result<Val> {
        let name = match self.peek() {
            TokenKind::FnName(name) => name.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED FUNCTION NAME")),
        };
        self.advance();
        let args = if *self.peek() == TokenKind::LParen {
            self.arguments()?
        } else {
            vec![]
        };
        let function = match self.program.function(&name) {
            Some(function) => function.clone(),
            None => return Err(error!(UndefinedUserFunction; name)),
        };
        if self.depth >= MAX_CALL_DEPTH {
            return Err(error!(OutOfMemory; "CALL STACK OVERFLOW"));
        }
        trace!("FN {} depth {}", function.name, self.depth + 1);

        let saved_scope = self.var.enter_scope(Frame::new());
        for (index, param) in function.params.iter().enumerate() {
            let value = args.get(index).cloned().unwrap_or_default();
            self.var.bind_local(param, value);
        }
        let frame = CallFrame {
            name: function.name.clone(),
            body: function.body.clone(),
            bases: self.stack_heights(),
            result: Val::default(),
            returned: false,
        };
        let saved_call = self.call.replace(frame);
        let (return_to, line, statement_start) = (self.pc.pos(), self.line, self.statement_start);
        self.depth += 1;
        self.pc.jump(function.body.start);

        let outcome = self.run_until(function.body.end).map_err(|error| {
            if error.is_located() {
                error
            } else {
                error.in_line_number(self.line)
            }
        });

        self.depth -= 1;
        let finished = std::mem::replace(&mut self.call, saved_call);
        self.var.leave_scope(saved_scope);
        self.pc.jump(return_to);
        self.line = line;
        self.statement_start = statement_start;
        if let Some(frame) = &finished {
            self.if_stack.truncate(frame.bases.if_blocks);
            self.for_stack.truncate(frame.bases.for_loops);
            self.while_stack.truncate(frame.bases.while_loops);
            self.gosub_stack.truncate(frame.bases.gosubs);
        }
        outcome?;
        Ok(finished.map(|frame| frame.result).unwrap_or_default())
    }
}
