use super::{Operation, Runtime, Val};
use crate::error;
use crate::lang::token::{Function, Operator, TokenKind, Word};
use crate::lang::Error;
use chrono::Local;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// ## Expressions
///
/// Recursive descent straight off the token stream, loosest binding first:
/// `OR`, `AND`, comparisons, `+ -`, `* / MOD`, then unary `- NOT`.

impl Runtime {
    pub(super) fn expression(&mut self) -> Result<Val> {
        let mut lhs = self.and()?;
        while self.accept(&TokenKind::Operator(Operator::Or)) {
            let rhs = self.and()?;
            lhs = Operation::binary(Operator::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Val> {
        let mut lhs = self.comparison()?;
        while self.accept(&TokenKind::Operator(Operator::And)) {
            let rhs = self.comparison()?;
            lhs = Operation::binary(Operator::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn comparison(&mut self) -> Result<Val> {
        let mut lhs = self.additive()?;
        loop {
            let op = match self.peek() {
                TokenKind::Operator(op) if op.is_comparison() => *op,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.additive()?;
            lhs = Operation::binary(op, lhs, rhs);
        }
    }

    fn additive(&mut self) -> Result<Val> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek() {
                TokenKind::Operator(op @ Operator::Plus) | TokenKind::Operator(op @ Operator::Minus) => *op,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.multiplicative()?;
            lhs = Operation::binary(op, lhs, rhs);
        }
    }

    fn multiplicative(&mut self) -> Result<Val> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                TokenKind::Operator(op @ Operator::Multiply)
                | TokenKind::Operator(op @ Operator::Divide)
                | TokenKind::Operator(op @ Operator::Modulus) => *op,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = Operation::binary(op, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<Val> {
        if self.accept(&TokenKind::Operator(Operator::Minus)) {
            return Ok(Operation::negate(self.unary()?));
        }
        if self.accept_word(Word::Not) {
            return Ok(Operation::not(self.unary()?));
        }
        if self.accept(&TokenKind::Operator(Operator::Plus)) {
            return self.unary();
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Val> {
        match self.peek().clone() {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Val::Number(n))
            }
            TokenKind::String(s) => {
                self.advance();
                Ok(Val::String(s))
            }
            TokenKind::LParen => {
                self.advance();
                let val = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(val)
            }
            TokenKind::Variable(name) | TokenKind::Constant(name) => {
                self.advance();
                if *self.peek() != TokenKind::LParen {
                    return self.var.fetch(&name);
                }
                if *self.peek_at(1) == TokenKind::RParen {
                    self.advance();
                    self.advance();
                    return Ok(Val::Number(self.var.array_len(&name) as f64));
                }
                let subscripts = self.arguments()?;
                self.var.fetch_array(&name, &subscripts)
            }
            TokenKind::Function(function) => {
                self.advance();
                self.function(function)
            }
            TokenKind::Word(Word::Fn) => {
                self.advance();
                self.call_user_function()
            }
            other => Err(error!(SyntaxError; format!("EXPECTED EXPRESSION FOUND {}", other))),
        }
    }

    /// `( expr, ... )`, possibly empty. The cursor must be on the `(`.
    pub(super) fn arguments(&mut self) -> Result<Vec<Val>> {
        self.expect(TokenKind::LParen)?;
        let mut args = vec![];
        if self.accept(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if self.accept(&TokenKind::Comma) {
                continue;
            }
            self.expect(TokenKind::RParen)?;
            return Ok(args);
        }
    }

    /// `name` or `name()` naming an array, then any key expressions, all
    /// optionally wrapped in one set of parentheses.
    pub(super) fn array_reference(&mut self) -> Result<(String, Vec<Val>)> {
        let wrapped = self.accept(&TokenKind::LParen);
        let name = match self.peek() {
            TokenKind::Variable(name) | TokenKind::Constant(name) => name.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED ARRAY NAME")),
        };
        self.advance();
        if *self.peek() == TokenKind::LParen && *self.peek_at(1) == TokenKind::RParen {
            self.advance();
            self.advance();
        }
        let mut keys = vec![];
        while self.accept(&TokenKind::Comma) {
            keys.push(self.expression()?);
        }
        if wrapped {
            self.expect(TokenKind::RParen)?;
        }
        Ok((name, keys))
    }

    fn function(&mut self, function: Function) -> Result<Val> {
        if function == Function::HasKey {
            let (name, keys) = self.array_reference()?;
            return Ok(Val::from(self.var.has_key(&name, &keys)));
        }
        if function == Function::Len && self.is_array_length() {
            let (name, _) = self.array_reference()?;
            return Ok(Val::Number(self.var.array_len(&name) as f64));
        }
        let args = if *self.peek() == TokenKind::LParen {
            self.arguments()?
        } else {
            vec![]
        };
        if !function.arity().contains(&args.len()) {
            return Err(error!(IllegalFunctionCall; format!(
                "{} GIVEN {} ARGUMENTS",
                function,
                args.len()
            )));
        }
        if let Some(val) = function.evaluate(&args) {
            return Ok(val);
        }
        let n = |i: usize| args.get(i).map_or(0.0, |v| v.to_number());
        let s = |i: usize| args.get(i).map(|v| v.to_string()).unwrap_or_default();
        Ok(match function {
            Function::Rnd => {
                let r: f64 = self.rng.gen();
                if args.is_empty() {
                    Val::Number(r)
                } else {
                    Val::Number((r * n(0)).floor())
                }
            }
            Function::Timer => Val::Number(self.started.elapsed().as_secs_f64()),
            Function::Ticks => Val::Number(self.started.elapsed().as_millis() as f64),
            Function::Date => Val::String(Local::now().format("%Y-%m-%d").to_string()),
            Function::Time => Val::String(Local::now().format("%H:%M:%S").to_string()),
            Function::GetKey => {
                self.host.graphics.pump_events();
                Val::Number(self.host.graphics.last_key() as f64)
            }
            Function::MouseX => {
                self.host.graphics.pump_events();
                Val::Number(self.host.graphics.mouse_position().0 as f64)
            }
            Function::MouseY => {
                self.host.graphics.pump_events();
                Val::Number(self.host.graphics.mouse_position().1 as f64)
            }
            Function::MouseB => {
                self.host.graphics.pump_events();
                Val::Number(self.host.graphics.mouse_buttons() as f64)
            }
            Function::LoadSound => Val::Number(self.host.sound.load(&s(0)) as f64),
            Function::ReadFile => Val::String(self.host.files.read(&s(0))),
            Function::FileExists => Val::from(self.host.files.exists(&s(0))),
            Function::WriteFile => Val::from(self.host.files.write(&s(0), &s(1))),
            Function::AppendFile => Val::from(self.host.files.append(&s(0), &s(1))),
            Function::DeleteFile => Val::from(self.host.files.delete(&s(0))),
            Function::HttpGet => match self.host.network.http_get(&s(0)) {
                Ok(body) => Val::String(body),
                Err(e) => return Err(error!(NetworkError; e)),
            },
            Function::HttpPost => match self.host.network.http_post(&s(0), &s(1)) {
                Ok(body) => Val::String(body),
                Err(e) => return Err(error!(NetworkError; e)),
            },
            _ => return Err(error!(InternalError; format!("{} HAS NO IMPLEMENTATION", function))),
        })
    }

    // LEN(name()) counts array keys instead of characters.
    fn is_array_length(&self) -> bool {
        *self.peek() == TokenKind::LParen
            && matches!(self.peek_at(1), TokenKind::Variable(_) | TokenKind::Constant(_))
            && *self.peek_at(2) == TokenKind::LParen
            && *self.peek_at(3) == TokenKind::RParen
            && *self.peek_at(4) == TokenKind::RParen
    }
}
