use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::formula::{EvalOutcome, Token};
use crate::suggest::Suggestion;
use crate::ui::theme::colors;

/// Rows reserved for the suggestion dropdown.
pub const MAX_DROPDOWN_ROWS: usize = 6;

fn chip_label(token: &Token) -> String {
    format!(" {} ", token.display)
}

/// Map a click column on the chip row to the chip under it, if any.
/// Must stay in step with the span layout of `render_chip_row`.
pub fn chip_at(tokens: &[Token], column: u16) -> Option<usize> {
    let mut x = 0u16;
    for (i, token) in tokens.iter().enumerate() {
        let width = UnicodeWidthStr::width(chip_label(token).as_str()) as u16;
        if column >= x && column < x + width {
            return Some(i);
        }
        x += width + 1;
    }
    None
}

/// Chip row: committed tokens as inverse-video chips, followed by the typed
/// text with a block cursor when the input box is visible.
pub fn render_chip_row(
    tokens: &[Token],
    current_text: &str,
    cursor: usize,
    input_visible: bool,
) -> Paragraph<'static> {
    let mut spans = Vec::new();

    for token in tokens {
        let color = if token.is_operator() {
            colors::operator()
        } else {
            colors::chip()
        };
        spans.push(Span::styled(
            chip_label(token),
            Style::default()
                .fg(colors::background())
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ", Style::default().bg(colors::background())));
    }

    if input_visible {
        let graphemes: Vec<&str> = current_text.graphemes(true).collect();
        let before: String = graphemes[..cursor.min(graphemes.len())].concat();
        let at: String = graphemes.get(cursor).copied().unwrap_or(" ").to_string();
        let after: String = if cursor < graphemes.len() {
            graphemes[cursor + 1..].concat()
        } else {
            String::new()
        };

        spans.push(Span::styled(before, Style::default().fg(colors::text())));
        spans.push(Span::styled(
            at,
            Style::default()
                .fg(colors::text())
                .add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(after, Style::default().fg(colors::text())));
    } else {
        spans.push(Span::styled(
            "click or type to edit",
            Style::default().fg(colors::dimmed()),
        ));
    }

    Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::background()))
}

/// Suggestion dropdown; empty lists render as blank rows so the layout does
/// not jump while results are in flight.
pub fn render_suggestions(suggestions: &[Suggestion], selected: usize) -> Paragraph<'static> {
    let mut lines = Vec::new();

    for (i, suggestion) in suggestions.iter().take(MAX_DROPDOWN_ROWS).enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(colors::background())
                .bg(colors::highlight())
        } else {
            Style::default().fg(colors::text()).bg(colors::background())
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", suggestion.name), style),
            Span::styled(
                format!("({})", suggestion.value),
                Style::default().fg(colors::dimmed()).bg(colors::background()),
            ),
        ]));
    }

    Paragraph::new(lines).style(Style::default().bg(colors::background()))
}

/// Result panel: the evaluated value, or the bucketed error message.
pub fn render_result(result: &EvalOutcome) -> Paragraph<'static> {
    let text = result.display_text();
    let line = if result.is_error() {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(colors::error()),
        ))
    } else if text.is_empty() {
        Line::from("")
    } else {
        Line::from(vec![
            Span::styled("= ", Style::default().fg(colors::dimmed())),
            Span::styled(
                text.to_string(),
                Style::default()
                    .fg(colors::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };

    Paragraph::new(line).style(Style::default().bg(colors::background()))
}

pub fn render_footer() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "space/enter commit  +-*/^() operator  backspace delete  up/down+tab suggestions  esc quit",
        Style::default().fg(colors::dimmed()),
    )))
    .style(Style::default().bg(colors::background()))
}
