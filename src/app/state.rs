use crate::formula::Token;

/// The sole persistent state of the widget: the ordered token sequence,
/// insertion order = formula left-to-right order.
///
/// Single writer: all mutations happen on the UI thread in response to one
/// user event at a time. Validation (e.g. no doubled operators) is the
/// caller's responsibility, not the store's.
pub struct TokenStore {
    tokens: Vec<Token>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn append(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Positional removal; out-of-range indices are a silent no-op to match
    /// forgiving UI semantics.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.tokens.len() {
            self.tokens.remove(index);
        }
    }

    pub fn remove_last(&mut self) {
        self.tokens.pop();
    }

    /// Bulk reset primitive.
    pub fn replace_all(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
