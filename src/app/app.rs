use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::render_state::RenderState;
use super::state::TokenStore;
use crate::formula::{evaluate, expression, EvalOutcome, Token};
use crate::input::{InputController, KeyAction};
use crate::suggest::{Suggestion, SuggestionFetcher};

/// The composed widget: token store, input controller, suggestion fetcher,
/// dropdown state and the last evaluation result.
///
/// Every token mutation triggers one synchronous re-evaluation; there is no
/// debouncing. Suggestion lookups are the only asynchronous path and are
/// applied through `poll_fetches` on the UI thread.
pub struct App {
    store: TokenStore,
    input: InputController,
    fetcher: SuggestionFetcher,
    suggestions: Vec<Suggestion>,
    selected: usize,
    result: EvalOutcome,
    should_quit: bool,
}

impl App {
    pub fn new(fetcher: SuggestionFetcher) -> Self {
        Self {
            store: TokenStore::new(),
            input: InputController::new(),
            fetcher,
            suggestions: Vec::new(),
            selected: 0,
            result: evaluate(""),
            should_quit: false,
        }
    }

    pub fn from_env() -> Self {
        Self::new(SuggestionFetcher::from_env())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// First interaction with the formula area: show the input box.
    pub fn activate(&mut self) {
        self.input.activate();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Down => {
                if !self.suggestions.is_empty() {
                    self.selected = (self.selected + 1).min(self.suggestions.len() - 1);
                }
                return;
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                return;
            }
            KeyCode::Tab => {
                self.select_suggestion(self.selected);
                return;
            }
            _ => {}
        }

        let last_is_operator = self.store.last().map(Token::is_operator).unwrap_or(false);
        match self.input.interpret(&key, last_is_operator) {
            KeyAction::CommitOperator(glyph) => self.commit(Token::operator(glyph)),
            KeyAction::CommitValue(text) => self.commit(Token::value(&text, &text)),
            KeyAction::RemoveLastToken => {
                self.store.remove_last();
                self.reevaluate();
            }
            KeyAction::TextEdited => self.refresh_suggestions(),
            KeyAction::Ignore => {}
        }
    }

    /// Commit a suggestion from the dropdown: one value token with the
    /// suggestion's name as display text and its value as eval text. The
    /// typed text is discarded; focus stays in the input box. Out-of-range
    /// indices (empty dropdown included) are a no-op.
    pub fn select_suggestion(&mut self, index: usize) {
        let Some(suggestion) = self.suggestions.get(index) else {
            return;
        };
        let token = Token::value(&suggestion.name, &suggestion.value);
        self.input.clear_after_commit();
        self.commit(token);
    }

    /// Chip delete control; silent no-op out of range.
    pub fn remove_chip(&mut self, index: usize) {
        self.store.remove_at(index);
        self.reevaluate();
    }

    /// Drain finished suggestion lookups; called every event-loop tick.
    pub fn poll_fetches(&mut self) {
        if let Some(list) = self.fetcher.poll() {
            self.apply_suggestions(list);
        }
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            tokens: self.store.tokens().to_vec(),
            current_text: self.input.current_text().to_string(),
            cursor: self.input.cursor(),
            input_visible: self.input.input_visible(),
            suggestions: self.suggestions.clone(),
            selected: self.selected,
            result: self.result.clone(),
        }
    }

    pub fn expression(&self) -> String {
        expression(self.store.tokens())
    }

    pub fn result(&self) -> &EvalOutcome {
        &self.result
    }

    pub fn tokens(&self) -> &[Token] {
        self.store.tokens()
    }

    fn commit(&mut self, token: Token) {
        self.store.append(token);
        self.reevaluate();
        // The commit cleared the typed text, so this empties the dropdown.
        self.refresh_suggestions();
    }

    fn reevaluate(&mut self) {
        self.result = evaluate(&self.expression());
    }

    fn refresh_suggestions(&mut self) {
        if let Some(list) = self.fetcher.request(self.input.current_text()) {
            self.apply_suggestions(list);
        }
    }

    fn apply_suggestions(&mut self, list: Vec<Suggestion>) {
        self.suggestions = list;
        if self.selected >= self.suggestions.len() {
            self.selected = 0;
        }
    }
}
