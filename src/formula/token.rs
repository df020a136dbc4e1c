/// Operator glyphs that commit directly as operator tokens.
pub const OPERATOR_KEYS: [char; 7] = ['+', '-', '*', '/', '^', '(', ')'];

pub fn is_operator_key(c: char) -> bool {
    OPERATOR_KEYS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Value,
    Operator,
}

/// One committed unit of the formula. Immutable after creation; tokens are
/// identified only by their position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Text shown in the chip.
    pub display: String,
    /// Text substituted into the expression string for evaluation.
    pub eval_text: String,
}

impl Token {
    pub fn value(display: &str, eval_text: &str) -> Self {
        Self {
            kind: TokenKind::Value,
            display: display.to_string(),
            eval_text: eval_text.to_string(),
        }
    }

    pub fn operator(glyph: char) -> Self {
        Self {
            kind: TokenKind::Operator,
            display: glyph.to_string(),
            eval_text: glyph.to_string(),
        }
    }

    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_keys_recognized() {
        for c in ['+', '-', '*', '/', '^', '(', ')'] {
            assert!(is_operator_key(c), "expected {} to be an operator key", c);
        }
    }

    #[test]
    fn test_plain_chars_not_operator_keys() {
        assert!(!is_operator_key('5'));
        assert!(!is_operator_key('a'));
        assert!(!is_operator_key(' '));
    }

    #[test]
    fn test_value_token_fields() {
        let token = Token::value("Apple", "42");
        assert_eq!(token.kind, TokenKind::Value);
        assert_eq!(token.display, "Apple");
        assert_eq!(token.eval_text, "42");
        assert!(!token.is_operator());
    }

    #[test]
    fn test_operator_token_display_equals_eval_text() {
        let token = Token::operator('+');
        assert_eq!(token.display, "+");
        assert_eq!(token.eval_text, "+");
        assert!(token.is_operator());
    }
}
