use super::token::{Token, TokenKind};
use std::collections::HashMap;

/// Index of statement-start labels. A `[name]` is a jump target only when it
/// opens the program or follows a newline. Duplicates are not rejected; the
/// last definition wins.
pub fn scan_labels(tokens: &[Token]) -> HashMap<String, usize> {
    let mut labels = HashMap::new();
    for (index, token) in tokens.iter().enumerate() {
        if let TokenKind::Label(name) = &token.kind {
            let at_statement_start = match index.checked_sub(1) {
                None => true,
                Some(prev) => tokens[prev].kind == TokenKind::Newline,
            };
            if at_statement_start {
                labels.insert(name.to_uppercase(), index);
            }
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::lex;

    #[test]
    fn test_statement_start_only() {
        let tokens = lex("[top]\nGOTO [top]\n  [ next ]\nx$ = [inline]").unwrap();
        let labels = scan_labels(&tokens);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("TOP"), Some(&0));
        assert!(labels.contains_key("NEXT"));
        assert!(!labels.contains_key("INLINE"));
    }

    #[test]
    fn test_last_wins() {
        let tokens = lex("[a]\n[A]").unwrap();
        let labels = scan_labels(&tokens);
        assert_eq!(labels.get("A"), Some(&2));
    }
}
