use super::{token::*, Error};

type Result<T> = std::result::Result<T, Error>;

/// Converts source text into a flat token stream ending with `Eof`.
///
/// Malformed expressions are left for the runtime to report. The only
/// lexical failure is a bare word that is not a keyword and does not
/// end in `$` or `#`.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    /// Discards through end of line. The newline itself is kept.
    fn comment(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if *pk == '\n' {
                break;
            }
            self.chars().next();
        }
    }

    fn number(&mut self) -> TokenKind {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(pk) = self.chars().peek() {
            let ch = *pk;
            if is_basic_digit(ch) || (ch == '.' && !decimal) {
                if ch == '.' {
                    decimal = true;
                }
                s.push(ch);
                self.chars().next();
                continue;
            }
            break;
        }
        match s.parse::<f64>() {
            Ok(n) => TokenKind::Number(n),
            Err(_) => TokenKind::Unknown(s),
        }
    }

    fn string(&mut self) -> TokenKind {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().peek() {
                None | Some('\n') => break,
                Some('"') => {
                    self.chars().next();
                    break;
                }
                Some('\\') => {
                    self.chars().next();
                    match self.chars().peek() {
                        Some('"') => s.push('"'),
                        Some('\\') => s.push('\\'),
                        Some('n') => s.push('\n'),
                        Some('t') => s.push('\t'),
                        Some('r') => s.push('\r'),
                        None | Some('\n') => {
                            s.push('\\');
                            continue;
                        }
                        Some(other) => {
                            s.push('\\');
                            s.push(*other);
                        }
                    }
                    self.chars().next();
                }
                Some(ch) => {
                    s.push(*ch);
                    self.chars().next();
                }
            }
        }
        TokenKind::String(s)
    }

    fn label(&mut self) -> TokenKind {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().peek() {
                None | Some('\n') => break,
                Some(']') => {
                    self.chars().next();
                    break;
                }
                Some(ch) => {
                    s.push(*ch);
                    self.chars().next();
                }
            }
        }
        TokenKind::Label(s.trim().to_uppercase())
    }

    /// Identifier characters plus an optional `$` or `#` suffix, upper cased.
    fn word(&mut self) -> String {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            let ch = *pk;
            if is_basic_alphabetic(ch) || is_basic_digit(ch) {
                s.push(ch.to_ascii_uppercase());
                self.chars().next();
                continue;
            }
            if ch == '$' || ch == '#' {
                s.push(ch);
                self.chars().next();
            }
            break;
        }
        s
    }

    fn minutia(&mut self) -> TokenKind {
        use Operator::*;
        let ch = match self.chars().next() {
            Some(ch) => ch,
            None => return TokenKind::Eof,
        };
        let pk = self.chars().peek().copied();
        let (kind, pair) = match (ch, pk) {
            ('<', Some('=')) => (TokenKind::Operator(LessEqual), true),
            ('<', Some('>')) => (TokenKind::Operator(NotEqual), true),
            ('>', Some('=')) => (TokenKind::Operator(GreaterEqual), true),
            ('!', Some('=')) => (TokenKind::Operator(NotEqual), true),
            ('=', Some('=')) => (TokenKind::Operator(Equal), true),
            ('<', _) => (TokenKind::Operator(Less), false),
            ('>', _) => (TokenKind::Operator(Greater), false),
            ('=', _) => (TokenKind::Operator(Equal), false),
            ('+', _) => (TokenKind::Operator(Plus), false),
            ('-', _) => (TokenKind::Operator(Minus), false),
            ('*', _) => (TokenKind::Operator(Multiply), false),
            ('/', _) => (TokenKind::Operator(Divide), false),
            ('%', _) => (TokenKind::Operator(Modulus), false),
            ('(', _) => (TokenKind::LParen, false),
            (')', _) => (TokenKind::RParen, false),
            (',', _) => (TokenKind::Comma, false),
            (':', _) => (TokenKind::Colon, false),
            (';', _) => (TokenKind::Semicolon, false),
            (other, _) => (TokenKind::Unknown(other.to_string()), false),
        };
        if pair {
            self.chars().next();
        }
        kind
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    after_fn: bool,
    done: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.whitespace();
            let line = self.line;
            let pk = match self.chars.peek() {
                Some(pk) => *pk,
                None => {
                    if self.done {
                        return None;
                    }
                    self.done = true;
                    return Some(Ok(Token::new(TokenKind::Eof, line)));
                }
            };
            let kind = if pk == '\n' {
                self.chars.next();
                self.line += 1;
                TokenKind::Newline
            } else if pk == '\'' {
                self.comment();
                continue;
            } else if is_basic_digit(pk) || pk == '.' {
                self.number()
            } else if is_basic_alphabetic(pk) {
                match self.alphabetic() {
                    Ok(Some(kind)) => kind,
                    Ok(None) => continue,
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            } else if pk == '"' {
                self.string()
            } else if pk == '[' {
                self.label()
            } else {
                self.minutia()
            };
            self.after_fn = kind.is_word(Word::Fn);
            return Some(Ok(Token::new(kind, line)));
        }
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<Vec<Token>> {
        let mut tokens = BasicLexer {
            chars: s.chars().peekable(),
            line: 1,
            after_fn: false,
            done: false,
        }
        .collect::<Result<Vec<Token>>>()?;
        BasicLexer::collapse_end(&mut tokens);
        Ok(tokens)
    }

    /// Returns `None` for `REM`, whose remark has been discarded.
    fn alphabetic(&mut self) -> Result<Option<TokenKind>> {
        let word = self.word();
        if self.after_fn {
            return Ok(Some(TokenKind::FnName(word)));
        }
        if let Some(kind) = TokenKind::from_string(&word) {
            if kind.is_word(Word::Rem) {
                self.comment();
                return Ok(None);
            }
            return Ok(Some(kind));
        }
        if word.ends_with('$') {
            return Ok(Some(TokenKind::Variable(word)));
        }
        if word.ends_with('#') {
            return Ok(Some(TokenKind::Constant(word)));
        }
        Err(error!(UnknownIdentifier, self.line; format!("{} MUST END WITH $ OR #", word)))
    }

    fn collapse_end(tokens: &mut Vec<Token>) {
        let mut locs: Vec<(usize, Token)> = vec![];
        let mut tokens_iter = tokens.windows(2).enumerate();
        while let Some((index, tt)) = tokens_iter.next() {
            if !tt[0].kind.is_word(Word::End) {
                continue;
            }
            let word = match tt[1].kind {
                TokenKind::Word(Word::If) => Word::EndIf,
                TokenKind::Word(Word::Def) => Word::EndDef,
                _ => continue,
            };
            locs.push((index, Token::new(TokenKind::Word(word), tt[0].line)));
            tokens_iter.next();
        }
        while let Some((index, token)) = locs.pop() {
            tokens.splice(index..index + 2, Some(token));
        }
    }
}
