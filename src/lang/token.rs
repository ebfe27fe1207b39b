use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<String, TokenKind> = Word::ALL
        .iter()
        .map(|w| TokenKind::Word(*w))
        .chain(Operator::WORDS.iter().map(|o| TokenKind::Operator(*o)))
        .chain(Function::ALL.iter().map(|f| TokenKind::Function(*f)))
        .map(|t| (t.to_string(), t))
        .collect();
);

/// A lexed token and the source line it came from.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Token {
        Token { kind, line }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Number(f64),
    String(String),
    Variable(String),
    Constant(String),
    Label(String),
    FnName(String),
    Word(Word),
    Operator(Operator),
    Function(Function),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    Newline,
    Unknown(String),
    Eof,
}

impl TokenKind {
    /// Keyword lookup. `s` must already be upper case.
    pub fn from_string(s: &str) -> Option<TokenKind> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    pub fn is_word(&self, word: Word) -> bool {
        matches!(self, TokenKind::Word(w) if *w == word)
    }

    /// Newline or end of input.
    pub fn is_line_end(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }

    /// Anything that terminates a statement.
    pub fn is_statement_end(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Eof | TokenKind::Colon | TokenKind::Word(Word::Else)
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Number(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
            Variable(s) | Constant(s) | FnName(s) | Unknown(s) => write!(f, "{}", s),
            Label(s) => write!(f, "[{}]", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Function(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            Newline => write!(f, "NEWLINE"),
            Eof => write!(f, "END OF PROGRAM"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Circle,
    Cls,
    Color,
    Def,
    DelArray,
    DelKey,
    Dim,
    Else,
    ElseIf,
    End,
    EndDef,
    EndIf,
    Fn,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Line,
    Locate,
    Next,
    Not,
    PlayOnce,
    PlayOnceWait,
    PlayRepeat,
    Present,
    Print,
    Pset,
    Randomize,
    Rect,
    Rem,
    Return,
    Screen,
    SetColor,
    Sleep,
    Step,
    StopAllSounds,
    StopSound,
    Then,
    To,
    Wend,
    While,
}

impl Word {
    pub const ALL: [Word; 43] = [
        Word::Circle,
        Word::Cls,
        Word::Color,
        Word::Def,
        Word::DelArray,
        Word::DelKey,
        Word::Dim,
        Word::Else,
        Word::ElseIf,
        Word::End,
        Word::EndDef,
        Word::EndIf,
        Word::Fn,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::Line,
        Word::Locate,
        Word::Next,
        Word::Not,
        Word::PlayOnce,
        Word::PlayOnceWait,
        Word::PlayRepeat,
        Word::Present,
        Word::Print,
        Word::Pset,
        Word::Randomize,
        Word::Rect,
        Word::Rem,
        Word::Return,
        Word::Screen,
        Word::SetColor,
        Word::Sleep,
        Word::Step,
        Word::StopAllSounds,
        Word::StopSound,
        Word::Then,
        Word::To,
        Word::Wend,
        Word::While,
    ];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        let s = match self {
            Circle => "CIRCLE",
            Cls => "CLS",
            Color => "COLOR",
            Def => "DEF",
            DelArray => "DELARRAY",
            DelKey => "DELKEY",
            Dim => "DIM",
            Else => "ELSE",
            ElseIf => "ELSEIF",
            End => "END",
            EndDef => "ENDDEF",
            EndIf => "ENDIF",
            Fn => "FN",
            For => "FOR",
            Gosub => "GOSUB",
            Goto => "GOTO",
            If => "IF",
            Input => "INPUT",
            Let => "LET",
            Line => "LINE",
            Locate => "LOCATE",
            Next => "NEXT",
            Not => "NOT",
            PlayOnce => "PLAYONCE",
            PlayOnceWait => "PLAYONCEWAIT",
            PlayRepeat => "PLAYREPEAT",
            Present => "PRESENT",
            Print => "PRINT",
            Pset => "PSET",
            Randomize => "RANDOMIZE",
            Rect => "RECT",
            Rem => "REM",
            Return => "RETURN",
            Screen => "SCREEN",
            SetColor => "SETCOLOR",
            Sleep => "SLEEP",
            Step => "STEP",
            StopAllSounds => "STOPALLSOUNDS",
            StopSound => "STOPSOUND",
            Then => "THEN",
            To => "TO",
            Wend => "WEND",
            While => "WHILE",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

impl Operator {
    /// Operators spelled as words.
    pub const WORDS: [Operator; 3] = [
        Operator::Modulus,
        Operator::And,
        Operator::Or,
    ];

    pub fn is_comparison(&self) -> bool {
        use Operator::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "MOD"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
        }
    }
}

/// Built-in functions. Each one consumes its own argument list.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Abs,
    AppendFile,
    Asc,
    Atn,
    Ceil,
    Chr,
    Cos,
    Date,
    DeleteFile,
    Exp,
    FileExists,
    Fix,
    Floor,
    GetKey,
    HasKey,
    HttpGet,
    HttpPost,
    Instr,
    Int,
    Left,
    Len,
    LoadSound,
    Log,
    Lower,
    Max,
    Mid,
    Min,
    MouseB,
    MouseX,
    MouseY,
    Pow,
    ReadFile,
    Replace,
    Right,
    Rnd,
    Round,
    Sgn,
    Sin,
    Sqr,
    Str,
    Tan,
    Ticks,
    Time,
    Timer,
    Trim,
    Upper,
    Val,
    WriteFile,
}

impl Function {
    pub const ALL: [Function; 48] = [
        Function::Abs,
        Function::AppendFile,
        Function::Asc,
        Function::Atn,
        Function::Ceil,
        Function::Chr,
        Function::Cos,
        Function::Date,
        Function::DeleteFile,
        Function::Exp,
        Function::FileExists,
        Function::Fix,
        Function::Floor,
        Function::GetKey,
        Function::HasKey,
        Function::HttpGet,
        Function::HttpPost,
        Function::Instr,
        Function::Int,
        Function::Left,
        Function::Len,
        Function::LoadSound,
        Function::Log,
        Function::Lower,
        Function::Max,
        Function::Mid,
        Function::Min,
        Function::MouseB,
        Function::MouseX,
        Function::MouseY,
        Function::Pow,
        Function::ReadFile,
        Function::Replace,
        Function::Right,
        Function::Rnd,
        Function::Round,
        Function::Sgn,
        Function::Sin,
        Function::Sqr,
        Function::Str,
        Function::Tan,
        Function::Ticks,
        Function::Time,
        Function::Timer,
        Function::Trim,
        Function::Upper,
        Function::Val,
        Function::WriteFile,
    ];
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        let s = match self {
            Abs => "ABS",
            AppendFile => "APPENDFILE",
            Asc => "ASC",
            Atn => "ATN",
            Ceil => "CEIL",
            Chr => "CHR$",
            Cos => "COS",
            Date => "DATE$",
            DeleteFile => "DELETEFILE",
            Exp => "EXP",
            FileExists => "FILEEXISTS",
            Fix => "FIX",
            Floor => "FLOOR",
            GetKey => "GETKEY",
            HasKey => "HASKEY",
            HttpGet => "HTTPGET$",
            HttpPost => "HTTPPOST$",
            Instr => "INSTR",
            Int => "INT",
            Left => "LEFT$",
            Len => "LEN",
            LoadSound => "LOADSOUND",
            Log => "LOG",
            Lower => "LOWER$",
            Max => "MAX",
            Mid => "MID$",
            Min => "MIN",
            MouseB => "MOUSEB",
            MouseX => "MOUSEX",
            MouseY => "MOUSEY",
            Pow => "POW",
            ReadFile => "READFILE$",
            Replace => "REPLACE$",
            Right => "RIGHT$",
            Rnd => "RND",
            Round => "ROUND",
            Sgn => "SGN",
            Sin => "SIN",
            Sqr => "SQR",
            Str => "STR$",
            Tan => "TAN",
            Ticks => "TICKS",
            Time => "TIME$",
            Timer => "TIMER",
            Trim => "TRIM$",
            Upper => "UPPER$",
            Val => "VAL",
            WriteFile => "WRITEFILE",
        };
        write!(f, "{}", s)
    }
}
