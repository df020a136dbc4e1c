use evalexpr::{eval, EvalexprError, Value};

use super::token::Token;

pub const SYNTAX_ERROR_TEXT: &str = "Syntax Error: Please check your formula.";
pub const TYPE_ERROR_TEXT: &str = "Type Error: Invalid input or formula type.";

/// Result of evaluating the current token sequence.
///
/// Errors are data, not `Err`: every outcome renders as a line of text in the
/// result panel and never escapes further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalOutcome {
    Value(String),
    SyntaxError,
    TypeError,
    Other(String),
}

impl EvalOutcome {
    pub fn display_text(&self) -> &str {
        match self {
            EvalOutcome::Value(text) => text,
            EvalOutcome::SyntaxError => SYNTAX_ERROR_TEXT,
            EvalOutcome::TypeError => TYPE_ERROR_TEXT,
            EvalOutcome::Other(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, EvalOutcome::Value(_))
    }
}

/// Flatten the token sequence into the expression string: each token
/// contributes its eval text, joined by single spaces, in commit order.
pub fn expression(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.eval_text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evaluate an expression string and map the evaluator's answer onto a
/// displayable outcome.
///
/// The empty expression evaluates to `Value::Empty`, which displays as an
/// empty result line rather than the evaluator's `()` rendering.
pub fn evaluate(expr: &str) -> EvalOutcome {
    match eval(expr) {
        Ok(Value::Empty) => EvalOutcome::Value(String::new()),
        Ok(value) => EvalOutcome::Value(value.to_string()),
        Err(err) => classify(err),
    }
}

/// Sort evaluator errors into the three display buckets. The renderer
/// switches on the bucket, never on the evaluator's own error type.
fn classify(err: EvalexprError) -> EvalOutcome {
    match err {
        EvalexprError::UnmatchedLBrace
        | EvalexprError::UnmatchedRBrace
        | EvalexprError::MissingOperatorOutsideOfBrace
        | EvalexprError::UnmatchedPartialToken { .. }
        | EvalexprError::AppendedToLeafNode
        | EvalexprError::PrecedenceViolation
        | EvalexprError::WrongOperatorArgumentAmount { .. } => EvalOutcome::SyntaxError,
        EvalexprError::ExpectedString { .. }
        | EvalexprError::ExpectedInt { .. }
        | EvalexprError::ExpectedFloat { .. }
        | EvalexprError::ExpectedNumber { .. }
        | EvalexprError::ExpectedNumberOrString { .. }
        | EvalexprError::ExpectedBoolean { .. }
        | EvalexprError::WrongTypeCombination { .. } => EvalOutcome::TypeError,
        other => EvalOutcome::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::token::Token;

    #[test]
    fn test_expression_joins_eval_text_with_spaces() {
        let tokens = vec![
            Token::value("3", "3"),
            Token::operator('+'),
            Token::value("4", "4"),
        ];
        assert_eq!(expression(&tokens), "3 + 4");
    }

    #[test]
    fn test_expression_uses_eval_text_not_display() {
        let tokens = vec![
            Token::value("Apple", "42"),
            Token::operator('*'),
            Token::value("2", "2"),
        ];
        assert_eq!(expression(&tokens), "42 * 2");
    }

    #[test]
    fn test_expression_empty_tokens_is_empty_string() {
        assert_eq!(expression(&[]), "");
    }

    #[test]
    fn test_evaluate_simple_addition() {
        assert_eq!(evaluate("3 + 4"), EvalOutcome::Value("7".to_string()));
    }

    #[test]
    fn test_evaluate_five_plus_three() {
        assert_eq!(evaluate("5 + 3"), EvalOutcome::Value("8".to_string()));
    }

    #[test]
    fn test_evaluate_exponent() {
        assert_eq!(evaluate("2 ^ 10"), EvalOutcome::Value("1024".to_string()));
    }

    #[test]
    fn test_evaluate_parentheses() {
        assert_eq!(
            evaluate("( 1 + 2 ) * 3"),
            EvalOutcome::Value("9".to_string())
        );
    }

    #[test]
    fn test_evaluate_empty_string_displays_empty() {
        assert_eq!(evaluate(""), EvalOutcome::Value(String::new()));
    }

    #[test]
    fn test_lone_operator_is_syntax_error() {
        assert_eq!(evaluate("+"), EvalOutcome::SyntaxError);
    }

    #[test]
    fn test_unmatched_paren_is_syntax_error() {
        assert_eq!(evaluate("( 1 + 2"), EvalOutcome::SyntaxError);
    }

    #[test]
    fn test_number_plus_bool_is_type_error() {
        assert_eq!(evaluate("1 + true"), EvalOutcome::TypeError);
    }

    #[test]
    fn test_unknown_name_falls_through_to_other() {
        match evaluate("banana + 1") {
            EvalOutcome::Other(_) => {}
            other => panic!("expected generic error, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let first = evaluate("5 + 3");
        let second = evaluate("5 + 3");
        assert_eq!(first, second);
    }

    #[test]
    fn test_syntax_error_display_text() {
        assert_eq!(EvalOutcome::SyntaxError.display_text(), SYNTAX_ERROR_TEXT);
        assert!(EvalOutcome::SyntaxError.is_error());
    }

    #[test]
    fn test_value_outcome_not_error() {
        assert!(!EvalOutcome::Value("7".to_string()).is_error());
    }
}
