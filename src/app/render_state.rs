use crate::formula::{EvalOutcome, Token};
use crate::suggest::Suggestion;

/// Per-frame snapshot for the UI layer.
pub struct RenderState {
    pub tokens: Vec<Token>,
    pub current_text: String,
    pub cursor: usize,
    pub input_visible: bool,
    pub suggestions: Vec<Suggestion>,
    pub selected: usize,
    pub result: EvalOutcome,
}
