/// Source line of the offending token. Lines start at 1.
pub type LineNumber = Option<usize>;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn is_located(&self) -> bool {
        self.line_number.is_some()
    }

    pub fn in_line_number(self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor,
    SyntaxError,
    ReturnWithoutGosub,
    IllegalFunctionCall,
    OutOfMemory,
    UndefinedLabel,
    UndefinedVariable,
    UndefinedUserFunction,
    ArrayNotDeclared,
    ConstantRedefined,
    UnknownIdentifier,
    IllegalJump,
    ForWithoutNext,
    WhileWithoutWend,
    WendWithoutWhile,
    IfWithoutEndIf,
    ElseWithoutIf,
    EndIfWithoutIf,
    NetworkError,
    FileNotFound,
    Break,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLabel => "UNDEFINED LABEL",
            UndefinedVariable => "UNDEFINED VARIABLE",
            UndefinedUserFunction => "UNDEFINED USER FUNCTION",
            ArrayNotDeclared => "ARRAY NOT DECLARED",
            ConstantRedefined => "CONSTANT REDEFINED",
            UnknownIdentifier => "UNKNOWN IDENTIFIER",
            IllegalJump => "ILLEGAL JUMP",
            ForWithoutNext => "FOR WITHOUT NEXT",
            WhileWithoutWend => "WHILE WITHOUT WEND",
            WendWithoutWhile => "WEND WITHOUT WHILE",
            IfWithoutEndIf => "IF WITHOUT ENDIF",
            ElseWithoutIf => "ELSE WITHOUT IF",
            EndIfWithoutIf => "ENDIF WITHOUT IF",
            NetworkError => "NETWORK ERROR",
            FileNotFound => "FILE NOT FOUND",
            Break => "BREAK",
            InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN LINE {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(
            error!(UndefinedVariable, 12; "A$").to_string(),
            "UNDEFINED VARIABLE IN LINE 12; A$"
        );
        assert_eq!(
            error!(ReturnWithoutGosub, 3).to_string(),
            "RETURN WITHOUT GOSUB IN LINE 3"
        );
    }

    #[test]
    fn test_code() {
        let e = error!(ConstantRedefined; "PI#");
        assert_eq!(e.code(), ErrorCode::ConstantRedefined);
        assert!(!e.is_located());
        assert_eq!(e.in_line_number(4).line_number(), Some(4));
    }
}
