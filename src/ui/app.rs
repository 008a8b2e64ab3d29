//! Main TUI application state and logic

use super::keypad::{Keypad, Position};
use super::theme::DEFAULT_THEME;
use crate::controller::{Controller, Rendered};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};
use std::io;
use std::time::{Duration, Instant};

/// How long a pressed button stays highlighted
const FLASH_DURATION: Duration = Duration::from_millis(150);

/// The main application state
pub struct App {
    /// The calculator state machine
    pub controller: Controller,

    /// Button grid and cursor
    pub keypad: Keypad,

    /// Title shown on the screen border
    pub title: String,

    /// Output of the last transition
    pub rendered: Rendered,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Most recently pressed button and when it was pressed
    pub last_press: Option<(Position, Instant)>,
}

impl App {
    /// Create a new app around the given controller
    pub fn new(controller: Controller, title: impl Into<String>) -> Self {
        let rendered = controller.render();
        App {
            controller,
            keypad: Keypad::new(),
            title: title.into(),
            rendered,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_press: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the press highlight can expire
            if event::poll(Duration::from_millis(50))? {
                if let TermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(DEFAULT_THEME.bg)), size);

        // Screen on top, keypad filling the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let is_error = self.controller.state().display.is_error();

        super::panes::render_display_pane(
            frame,
            chunks[0],
            &self.title,
            &self.rendered,
            is_error,
        );

        let flashed = self
            .last_press
            .filter(|(_, at)| at.elapsed() < FLASH_DURATION)
            .map(|(pos, _)| pos);
        super::panes::render_keypad_pane(frame, chunks[1], &self.keypad, flashed);

        let state = self.controller.state();
        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            state.pending_operator.or(state.last_operator),
            is_error,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            // Raw mode swallows SIGINT
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up => self.keypad.move_up(),
            KeyCode::Down => self.keypad.move_down(),
            KeyCode::Left => self.keypad.move_left(),
            KeyCode::Right => self.keypad.move_right(),
            KeyCode::Enter => {
                self.press(self.keypad.cursor());
            }
            KeyCode::Char(c) => match self.keypad.accelerator(c) {
                Some(pos) => self.press(pos),
                None => {
                    self.status_message = format!("No key for '{}'", c);
                }
            },
            _ => {}
        }
    }

    /// Activate the button at `pos`
    fn press(&mut self, pos: Position) {
        let Some(button) = self.keypad.get(pos) else {
            return;
        };
        let (label, event) = (button.label, button.event);

        tracing::debug!(label, ?event, "button pressed");
        self.rendered = self.controller.dispatch(event);
        self.last_press = Some((pos, Instant::now()));
        self.status_message = if self.controller.state().display.is_error() {
            "Press a digit or C to continue".to_string()
        } else {
            format!("Pressed {}", label)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DIVIDE_BY_ZERO_MESSAGE;
    use ratatui::backend::TestBackend;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key_event(key(c));
        }
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_accelerators_drive_controller() {
        let mut app = App::new(Controller::default(), "Calculator");
        type_keys(&mut app, "5+3=");
        assert_eq!(app.rendered.display, "8");
        assert_eq!(app.status_message, "Pressed =");
    }

    #[test]
    fn test_cursor_press() {
        let mut app = App::new(Controller::default(), "Calculator");
        // Row 1 starts with "7"
        app.handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.rendered.display, "7");
        assert_eq!(app.last_press.map(|(pos, _)| pos), Some((1, 0)));
    }

    #[test]
    fn test_unknown_key_and_quit() {
        let mut app = App::new(Controller::default(), "Calculator");
        app.handle_key_event(key('x'));
        assert_eq!(app.status_message, "No key for 'x'");
        assert!(!app.should_quit);
        app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_display_and_memory() {
        let mut app = App::new(Controller::default(), "Calculator");
        type_keys(&mut app, "42m");
        let text = screen_text(&mut app);
        assert!(text.contains("Calculator"));
        assert!(text.contains("42"));
        assert!(text.contains(" M  42"));
        assert!(text.contains("Keypad"));
    }

    #[test]
    fn test_render_divide_by_zero() {
        let mut app = App::new(Controller::default(), "Calculator");
        type_keys(&mut app, "7/0=");
        let text = screen_text(&mut app);
        assert!(text.contains(DIVIDE_BY_ZERO_MESSAGE));
    }
}
