use super::Address;
use crate::error;
use crate::lang::token::{Token, TokenKind, Word};
use crate::lang::{lex, scan_labels, Error};
use log::debug;
use std::collections::HashMap;
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

static EOF: TokenKind = TokenKind::Eof;

/// ## Program
///
/// The lexed token stream with its jump table and user functions.
/// Immutable once compiled; the runtime walks it with a `Cursor`.

#[derive(Debug)]
pub struct Program {
    tokens: Vec<Token>,
    labels: HashMap<String, Address>,
    functions: HashMap<String, UserFunction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub name: String,
    pub params: Vec<String>,
    /// From just past the parameter list to the `END DEF` token.
    pub body: Range<Address>,
}

impl Default for Program {
    fn default() -> Program {
        Program::from_tokens(vec![])
    }
}

impl Program {
    pub fn compile(source: &str) -> Result<Program> {
        Ok(Program::from_tokens(lex(source)?))
    }

    pub fn from_tokens(mut tokens: Vec<Token>) -> Program {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenKind::Eof, line));
        }
        let labels = scan_labels(&tokens);
        let functions = scan_functions(&tokens);
        debug!(
            "compiled {} tokens, {} labels, {} functions",
            tokens.len(),
            labels.len(),
            functions.len()
        );
        Program {
            tokens,
            labels,
            functions,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Out of range addresses read the final `Eof`.
    pub fn token(&self, addr: Address) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[addr.min(last)]
    }

    pub fn last(&self) -> Address {
        self.tokens.len() - 1
    }

    pub fn label(&self, name: &str) -> Option<Address> {
        self.labels.get(&name.to_uppercase()).copied()
    }

    pub fn function(&self, name: &str) -> Option<&UserFunction> {
        self.functions.get(&name.to_uppercase())
    }
}

/// ## Program counter
///
/// An index into the token stream that never moves past the final `Eof`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pos: Address,
    last: Address,
}

impl Cursor {
    pub fn new(program: &Program) -> Cursor {
        Cursor {
            pos: 0,
            last: program.last(),
        }
    }

    pub fn pos(&self) -> Address {
        self.pos
    }

    pub fn advance(&mut self) {
        if self.pos < self.last {
            self.pos += 1;
        }
    }

    pub fn jump(&mut self, addr: Address) {
        self.pos = addr.min(self.last);
    }
}

/// Registers every `DEF FN` before execution. Malformed definitions are
/// left for the `DEF` statement to report when it runs.
fn scan_functions(tokens: &[Token]) -> HashMap<String, UserFunction> {
    let mut functions = HashMap::new();
    for (index, token) in tokens.iter().enumerate() {
        if token.kind.is_word(Word::Def) {
            match read_definition(tokens, index) {
                Ok(function) => {
                    debug!("function {} at {:?}", function.name, function.body);
                    functions.insert(function.name.clone(), function);
                }
                Err(e) => debug!("skipping definition: {}", e),
            }
        }
    }
    functions
}

/// Parses `DEF FN name(p, ...)` at `at` and finds the matching `END DEF`.
pub fn read_definition(tokens: &[Token], at: Address) -> Result<UserFunction> {
    let line = tokens[at].line;
    let kind = |i: usize| tokens.get(i).map(|t| &t.kind).unwrap_or(&EOF);
    let mut i = at + 1;
    if !kind(i).is_word(Word::Fn) {
        return Err(error!(SyntaxError, line; "EXPECTED FN AFTER DEF"));
    }
    i += 1;
    let name = match kind(i) {
        TokenKind::FnName(name) => name.clone(),
        _ => return Err(error!(SyntaxError, line; "EXPECTED FUNCTION NAME")),
    };
    i += 1;
    let mut params = vec![];
    if *kind(i) == TokenKind::LParen {
        i += 1;
        loop {
            match kind(i) {
                TokenKind::RParen => break,
                TokenKind::Variable(p) | TokenKind::Constant(p) => params.push(p.clone()),
                _ => return Err(error!(SyntaxError, line; "EXPECTED PARAMETER NAME")),
            }
            i += 1;
            match kind(i) {
                TokenKind::Comma => i += 1,
                TokenKind::RParen => break,
                _ => return Err(error!(SyntaxError, line; "EXPECTED , OR )")),
            }
        }
        i += 1;
    }
    let start = i;
    let mut depth = 0;
    loop {
        match kind(i) {
            TokenKind::Eof => return Err(error!(SyntaxError, line; "DEF FN WITHOUT END DEF")),
            TokenKind::Word(Word::Def) => depth += 1,
            TokenKind::Word(Word::EndDef) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
        i += 1;
    }
    Ok(UserFunction {
        name,
        params,
        body: start..i,
    })
}
