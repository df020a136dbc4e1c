use crate::app::App;
use crate::ui::render::{
    chip_at, render_chip_row, render_footer, render_result, render_suggestions, MAX_DROPDOWN_ROWS,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Screen rows, top to bottom: chip row, dropdown, result, filler, footer.
const CHIP_ROW: u16 = 0;
const DROPDOWN_FIRST_ROW: u16 = 1;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut last_tick = Instant::now();
        let render_tick = Duration::from_millis(1000 / 30);

        app.activate();
        self.render_frame(app)?;

        loop {
            if app.should_quit() {
                return Ok(());
            }

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        app.handle_key(key);
                    }
                    Event::Mouse(mouse) => handle_mouse(app, mouse),
                    _ => {}
                }
            }

            // Apply any suggestion lookups that resolved since the last turn.
            app.poll_fetches();

            if last_tick.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_tick = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(MAX_DROPDOWN_ROWS as u16),
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(area);

            let chip_row = render_chip_row(
                &state.tokens,
                &state.current_text,
                state.cursor,
                state.input_visible,
            );
            frame.render_widget(chip_row, chunks[0]);

            let dropdown = render_suggestions(&state.suggestions, state.selected);
            frame.render_widget(dropdown, chunks[1]);

            let result = render_result(&state.result);
            frame.render_widget(result, chunks[2]);

            frame.render_widget(render_footer(), chunks[4]);
        })?;

        Ok(())
    }
}

/// Pointer wiring: a click on a chip removes it, a click elsewhere on the
/// chip row activates the input box, a click on a dropdown row selects that
/// suggestion.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if mouse.row == CHIP_ROW {
        match chip_at(app.tokens(), mouse.column) {
            Some(index) => app.remove_chip(index),
            None => app.activate(),
        }
    } else if (DROPDOWN_FIRST_ROW..DROPDOWN_FIRST_ROW + MAX_DROPDOWN_ROWS as u16)
        .contains(&mouse.row)
    {
        app.select_suggestion((mouse.row - DROPDOWN_FIRST_ROW) as usize);
    }
}
