use super::{read_definition, Runtime, Val};
use crate::error;
use crate::host::PALETTE;
use crate::lang::token::{Operator, TokenKind, Word};
use crate::lang::Error;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::RangeInclusive;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// Where an assignment or `INPUT` stores its value.
#[derive(Debug)]
enum Target {
    Scalar(String),
    Element(String, Vec<Val>),
}

impl Target {
    fn name(&self) -> &str {
        match self {
            Target::Scalar(name) | Target::Element(name, _) => name,
        }
    }
}

impl Runtime {
    pub(super) fn statement(&mut self) -> Result<()> {
        self.trace_statement();
        match self.peek().clone() {
            TokenKind::Word(Word::Fn) | TokenKind::Function(_) => {
                self.expression()?;
                Ok(())
            }
            TokenKind::Word(word) => {
                self.advance();
                self.word(word)
            }
            TokenKind::Variable(_) | TokenKind::Constant(_) => self.r#let(),
            TokenKind::Label(_) => {
                self.advance();
                Ok(())
            }
            other => Err(error!(SyntaxError; format!("UNEXPECTED {}", other))),
        }
    }

    fn word(&mut self, word: Word) -> Result<()> {
        match word {
            Word::Let => self.r#let(),
            Word::Print => self.print(),
            Word::Input => self.input(),
            Word::If => self.r#if(),
            Word::ElseIf => self.else_if(),
            Word::Else => self.r#else(),
            Word::EndIf => self.end_if(),
            Word::For => self.r#for(),
            Word::Next => self.next(),
            Word::While => self.r#while(),
            Word::Wend => self.wend(),
            Word::Goto => self.goto(),
            Word::Gosub => self.gosub(),
            Word::Return => self.r#return(),
            Word::End => {
                debug!("line {}: END", self.line);
                self.running = false;
                Ok(())
            }
            Word::Dim => self.dim(),
            Word::Def => self.def(),
            Word::DelKey => {
                let (name, keys) = self.array_reference()?;
                self.var.delete_key(&name, &keys)
            }
            Word::DelArray => {
                let (name, _) = self.array_reference()?;
                self.var.delete_array(&name);
                Ok(())
            }
            Word::Cls => self.cls(),
            Word::Locate => self.locate(),
            Word::Color => self.color(),
            Word::Sleep => self.sleep(),
            Word::Randomize => self.randomize(),
            Word::Screen => self.screen(),
            Word::Pset => {
                let a = self.command_args(word, 2..=2)?;
                self.host.graphics.set_pixel(int(&a[0]), int(&a[1]));
                Ok(())
            }
            Word::Line => {
                let a = self.command_args(word, 4..=4)?;
                self.host
                    .graphics
                    .draw_line(int(&a[0]), int(&a[1]), int(&a[2]), int(&a[3]));
                Ok(())
            }
            Word::Rect => {
                let a = self.command_args(word, 4..=5)?;
                let filled = a.get(4).map_or(false, Val::is_truthy);
                self.host
                    .graphics
                    .draw_rect(int(&a[0]), int(&a[1]), int(&a[2]), int(&a[3]), filled);
                Ok(())
            }
            Word::Circle => {
                let a = self.command_args(word, 3..=4)?;
                let filled = a.get(3).map_or(false, Val::is_truthy);
                self.host
                    .graphics
                    .draw_circle(int(&a[0]), int(&a[1]), int(&a[2]), filled);
                Ok(())
            }
            Word::SetColor => {
                let a = self.command_args(word, 3..=4)?;
                let alpha = a.get(3).map_or(255, byte);
                self.host
                    .graphics
                    .set_color(byte(&a[0]), byte(&a[1]), byte(&a[2]), alpha);
                Ok(())
            }
            Word::Present => {
                self.command_args(word, 0..=0)?;
                self.host.graphics.present();
                Ok(())
            }
            Word::PlayOnce | Word::PlayRepeat | Word::PlayOnceWait | Word::StopSound => {
                let a = self.command_args(word, 1..=1)?;
                let id = a[0].to_number() as i64;
                match word {
                    Word::PlayOnce => self.host.sound.play_once(id),
                    Word::PlayRepeat => self.host.sound.play_repeat(id),
                    Word::PlayOnceWait => self.host.sound.play_once_wait(id),
                    _ => self.host.sound.stop(id),
                }
                Ok(())
            }
            Word::StopAllSounds => {
                self.command_args(word, 0..=0)?;
                self.host.sound.stop_all();
                Ok(())
            }
            Word::EndDef => Err(error!(SyntaxError; "END DEF WITHOUT DEF")),
            Word::Then | Word::To | Word::Step | Word::Fn | Word::Not | Word::Rem => {
                Err(error!(SyntaxError; format!("UNEXPECTED {}", word)))
            }
        }
    }

    /// `target [, target ...] = expr`. Every target but the last is reset
    /// to its type's default; the last receives the value.
    fn r#let(&mut self) -> Result<()> {
        let mut targets = vec![self.target()?];
        while self.accept(&TokenKind::Comma) {
            targets.push(self.target()?);
        }
        self.expect_operator(Operator::Equal)?;
        let value = self.expression()?;
        if let Some((last, rest)) = targets.split_last() {
            for target in rest {
                self.assign(target, Val::default_for(target.name()))?;
            }
            self.assign(last, value)?;
        }
        Ok(())
    }

    fn target(&mut self) -> Result<Target> {
        let name = match self.peek() {
            TokenKind::Variable(name) | TokenKind::Constant(name) => name.clone(),
            other => return Err(error!(SyntaxError; format!("EXPECTED VARIABLE FOUND {}", other))),
        };
        self.advance();
        if *self.peek() != TokenKind::LParen {
            return Ok(Target::Scalar(name));
        }
        let subscripts = self.arguments()?;
        if subscripts.is_empty() {
            return Err(error!(SyntaxError; "EXPECTED SUBSCRIPT"));
        }
        Ok(Target::Element(name, subscripts))
    }

    fn assign(&mut self, target: &Target, value: Val) -> Result<()> {
        match target {
            Target::Scalar(name) => self.var.store(name, value),
            Target::Element(name, subscripts) => self.var.store_array(name, subscripts, value),
        }
    }

    /// `;` joins, `,` adds a tab. A trailing separator holds the line open.
    fn print(&mut self) -> Result<()> {
        let mut text = String::new();
        let mut newline = true;
        while !self.at_statement_end() {
            if self.accept(&TokenKind::Semicolon) {
                newline = false;
            } else if self.accept(&TokenKind::Comma) {
                text.push('\t');
                newline = false;
            } else {
                text.push_str(&self.expression()?.to_string());
                newline = true;
            }
        }
        self.write_text(&text, newline);
        Ok(())
    }

    /// `INPUT ["prompt";] target [, target ...]`. Several targets take
    /// comma separated answers from one line. Answers that read as numbers
    /// are stored as numbers.
    fn input(&mut self) -> Result<()> {
        let mut prompt = String::from("? ");
        if let TokenKind::String(s) = self.peek() {
            prompt = s.clone();
            self.advance();
            if !self.accept(&TokenKind::Semicolon) {
                self.expect(TokenKind::Comma)?;
            }
        }
        let mut targets = vec![self.target()?];
        while self.accept(&TokenKind::Comma) {
            targets.push(self.target()?);
        }
        let line = self.host.console.read_line(&prompt).unwrap_or_default();
        let answers: Vec<&str> = if targets.len() == 1 {
            vec![line.as_str()]
        } else {
            line.split(',').collect()
        };
        for (index, target) in targets.iter().enumerate() {
            let answer = answers.get(index).map_or("", |a| a.trim());
            let value = match Val::parse_number(answer) {
                Some(n) => Val::Number(n),
                None => Val::from(answer),
            };
            self.assign(target, value)?;
        }
        Ok(())
    }

    fn dim(&mut self) -> Result<()> {
        loop {
            let name = match self.peek() {
                TokenKind::Variable(name) | TokenKind::Constant(name) => name.clone(),
                _ => return Err(error!(SyntaxError; "EXPECTED ARRAY NAME")),
            };
            self.advance();
            if *self.peek() == TokenKind::LParen {
                self.arguments()?;
            }
            debug!("line {}: DIM {}", self.line, name);
            self.var.dimension_array(&name);
            if !self.accept(&TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// Definitions are registered before the program starts, so reaching
    /// one only steps over its body.
    fn def(&mut self) -> Result<()> {
        let function = read_definition(self.program.tokens(), self.statement_start)?;
        self.pc.jump(function.body.end);
        self.advance();
        Ok(())
    }

    fn cls(&mut self) -> Result<()> {
        if self.host.graphics.is_initialized() {
            self.host.graphics.clear();
        } else {
            self.host.console.clear();
        }
        Ok(())
    }

    fn locate(&mut self) -> Result<()> {
        let a = self.command_args(Word::Locate, 2..=2)?;
        let (row, column) = (count(&a[0]), count(&a[1]));
        if self.host.graphics.is_initialized() {
            self.host.graphics.locate(row, column);
        } else {
            self.host.console.locate(row, column);
        }
        Ok(())
    }

    fn color(&mut self) -> Result<()> {
        let a = self.command_args(Word::Color, 1..=2)?;
        let foreground = (int(&a[0]) & 15) as u8;
        if self.host.graphics.is_initialized() {
            let (r, g, b) = PALETTE[foreground as usize];
            self.host.graphics.set_color(r, g, b, 255);
        } else {
            let background = a.get(1).map(|v| (int(v) & 15) as u8);
            self.host.console.color(foreground, background);
        }
        Ok(())
    }

    fn sleep(&mut self) -> Result<()> {
        let a = self.command_args(Word::Sleep, 1..=1)?;
        let millis = a[0].to_number().max(0.0) as u64;
        std::thread::sleep(Duration::from_millis(millis));
        Ok(())
    }

    fn randomize(&mut self) -> Result<()> {
        let a = self.command_args(Word::Randomize, 0..=1)?;
        self.rng = match a.get(0) {
            Some(seed) => StdRng::seed_from_u64(seed.to_number() as i64 as u64),
            None => StdRng::from_entropy(),
        };
        Ok(())
    }

    fn screen(&mut self) -> Result<()> {
        let a = self.command_args(Word::Screen, 2..=3)?;
        let title = a.get(2).map_or_else(|| "BASIC".to_string(), |v| v.to_string());
        let (width, height) = (count(&a[0]) as u32, count(&a[1]) as u32);
        if !self.host.graphics.open(width, height, &title) {
            debug!("line {}: SCREEN unavailable, staying on console", self.line);
        }
        Ok(())
    }

    /// Arguments of a host command, written either bare or in parentheses.
    fn command_args(&mut self, word: Word, arity: RangeInclusive<usize>) -> Result<Vec<Val>> {
        let args = if *self.peek() == TokenKind::LParen {
            self.arguments()?
        } else {
            let mut args = vec![];
            if !self.at_statement_end() {
                args.push(self.expression()?);
                while self.accept(&TokenKind::Comma) {
                    args.push(self.expression()?);
                }
            }
            args
        };
        if !arity.contains(&args.len()) {
            return Err(error!(IllegalFunctionCall; format!(
                "{} GIVEN {} ARGUMENTS",
                word,
                args.len()
            )));
        }
        Ok(args)
    }
}

fn int(val: &Val) -> i32 {
    val.to_number() as i32
}

fn count(val: &Val) -> usize {
    val.to_number().max(0.0) as usize
}

fn byte(val: &Val) -> u8 {
    val.to_number().max(0.0).min(255.0) as u8
}
