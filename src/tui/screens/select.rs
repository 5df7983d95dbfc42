//! Generic selection screen.

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    event::TuiEvent,
    run,
    widgets::{SelectAction, SelectList},
    AppResult, TuiApp,
};

/// Pick one entry from a list.
struct SelectScreen {
    list: SelectList,
    prompt: String,
    /// Column labels shown above the list
    header: Option<String>,
}

impl SelectScreen {
    fn new(prompt: &str, options: Vec<String>, header: Option<&str>) -> Self {
        Self {
            list: SelectList::new(options),
            prompt: prompt.to_string(),
            header: header.map(String::from),
        }
    }
}

impl TuiApp for SelectScreen {
    type Output = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        let TuiEvent::Key(key) = event else {
            return None;
        };
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppResult::Cancelled);
        }

        match self.list.handle_key(*key) {
            SelectAction::Confirm => self.list.selected_index().map(AppResult::Done),
            SelectAction::Cancel => Some(AppResult::Cancelled),
            SelectAction::None => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let header_height = u16::from(self.header.is_some());
        let chunks = Layout::vertical([
            Constraint::Length(3),             // Prompt
            Constraint::Length(header_height), // Column header
            Constraint::Min(5),                // List
            Constraint::Length(3),             // Help
        ])
        .split(frame.area());

        let prompt = Paragraph::new(self.prompt.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(prompt, chunks[0]);

        if let Some(header) = &self.header {
            // border + "> " prefix
            let header = Paragraph::new(format!("   {header}")).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_widget(header, chunks[1]);
        }

        self.list.render(chunks[2], frame.buffer_mut(), true);

        let key = Style::default().fg(Color::Cyan);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", key),
            Span::raw(" Select  "),
            Span::styled("Esc", key),
            Span::raw(" Cancel"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, chunks[3]);
    }
}

fn run_select<T: ToString>(prompt: &str, header: Option<&str>, options: &[T]) -> Result<Option<usize>> {
    if options.is_empty() {
        bail!("No items to select from");
    }
    let options = options.iter().map(ToString::to_string).collect();
    run(SelectScreen::new(prompt, options, header))
}

/// Select from a list of options.
///
/// Returns `Some(index)` if an item was selected, `None` if cancelled.
pub fn select_from_list<T: ToString>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    run_select(prompt, None, options)
}

/// Select from a list of options with a column header above the rows.
pub fn select_from_list_with_header<T: ToString>(
    prompt: &str,
    header: &str,
    options: &[T],
) -> Result<Option<usize>> {
    run_select(prompt, Some(header), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_select_returns_index() {
        let mut screen = SelectScreen::new("Pick", vec!["a".into(), "b".into()], None);
        screen.handle_event(&key(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(
            screen.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppResult::Done(1))
        );
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let mut screen = SelectScreen::new("Pick", vec!["a".into()], Some("Title"));
        assert_eq!(
            screen.handle_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppResult::Cancelled)
        );
        assert_eq!(screen.handle_event(&TuiEvent::Tick), None);
    }

    #[test]
    fn test_empty_options_error() {
        assert!(select_from_list::<String>("Pick", &[]).is_err());
    }
}
