pub mod eval;
pub mod token;

pub use eval::{evaluate, expression, EvalOutcome};
pub use token::{is_operator_key, Token, TokenKind};
