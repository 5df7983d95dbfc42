//! Multi-select list widget with checkboxes.
//!
//! Checked items are reported in the order they were checked, not list order.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::reading::state::toggle;

/// Actions from multi-select interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiSelectAction {
    None,
    /// Enter on the trailing action row (e.g. "+ Add new...")
    Activate,
    Confirm,
    Cancel,
}

/// Multi-select list with checkboxes and an optional trailing action row.
#[derive(Debug, Clone)]
pub struct MultiSelect {
    items: Vec<String>,
    /// Indices into `items`, in the order they were checked
    checked: Vec<usize>,
    state: ListState,
    title: String,
    action: Option<String>,
}

impl MultiSelect {
    pub fn new<T: ToString>(items: Vec<T>) -> Self {
        let items: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            items,
            checked: Vec::new(),
            state,
            title: String::new(),
            action: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append an action row with no checkbox.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        if self.state.selected().is_none() {
            self.state.select(Some(0));
        }
        self
    }

    /// Pre-check items by label, in the given order.
    #[must_use]
    pub fn with_checked(mut self, labels: &[String]) -> Self {
        for label in labels {
            self.check(label);
        }
        self
    }

    /// Rows including the action row.
    fn row_count(&self) -> usize {
        self.items.len() + usize::from(self.action.is_some())
    }

    fn on_action_row(&self) -> bool {
        self.action.is_some() && self.state.selected() == Some(self.items.len())
    }

    /// Checked labels in check order.
    pub fn checked_items(&self) -> Vec<&str> {
        self.checked.iter().map(|&i| self.items[i].as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks `label`, adding it to the list if it is new.
    pub fn check(&mut self, label: &str) {
        let index = match self.items.iter().position(|i| i == label) {
            Some(index) => index,
            None => {
                self.items.push(label.to_string());
                self.items.len() - 1
            }
        };
        if !self.checked.contains(&index) {
            self.checked.push(index);
        }
        self.state.select(Some(index));
    }

    /// Toggles the highlighted item (the action row has no checkbox).
    pub fn toggle_current(&mut self) {
        if let Some(i) = self.state.selected() {
            if i < self.items.len() {
                toggle(&mut self.checked, i);
            }
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some((current + len - 1) % len));
    }

    pub fn select_next(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some((current + 1) % len));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> MultiSelectAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                MultiSelectAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                MultiSelectAction::None
            }
            KeyCode::Char(' ') => {
                self.toggle_current();
                MultiSelectAction::None
            }
            KeyCode::Enter if self.on_action_row() => MultiSelectAction::Activate,
            KeyCode::Enter => MultiSelectAction::Confirm,
            KeyCode::Esc => MultiSelectAction::Cancel,
            _ => MultiSelectAction::None,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(if self.title.is_empty() {
                String::new()
            } else {
                format!(" {} ", self.title)
            });

        let cursor_row = self.state.selected();
        let row_style = |row: usize| {
            if !focused {
                Style::default().fg(Color::DarkGray)
            } else if cursor_row == Some(row) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        };
        let cursor = |row: usize| {
            if focused && cursor_row == Some(row) {
                "> "
            } else {
                "  "
            }
        };

        let mut rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = row_style(i);
                let checkbox = if self.checked.contains(&i) { "[x] " } else { "[ ] " };
                ListItem::new(Line::from(vec![
                    Span::styled(cursor(i), style),
                    Span::styled(checkbox, style),
                    Span::styled(item.as_str(), style),
                ]))
            })
            .collect();

        if let Some(action) = &self.action {
            let row = self.items.len();
            let style = row_style(row);
            rows.push(ListItem::new(Line::from(vec![
                Span::styled(cursor(row), style),
                Span::styled("    ", style),
                Span::styled(action.as_str(), style),
            ])));
        }

        StatefulWidget::render(List::new(rows).block(block), area, buf, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_checked_in_toggle_order() {
        let mut ms = MultiSelect::new(vec!["a", "b", "c"]);
        ms.handle_key(key(KeyCode::Down));
        ms.handle_key(key(KeyCode::Down));
        ms.handle_key(key(KeyCode::Char(' '))); // c
        ms.handle_key(key(KeyCode::Up));
        ms.handle_key(key(KeyCode::Up));
        ms.handle_key(key(KeyCode::Char(' '))); // a
        assert_eq!(ms.checked_items(), vec!["c", "a"]);

        ms.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(ms.checked_items(), vec!["c"]);
    }

    #[test]
    fn test_action_row() {
        let mut ms = MultiSelect::new(vec!["rust"]).with_action("+ Add new...");
        assert_eq!(ms.handle_key(key(KeyCode::Enter)), MultiSelectAction::Confirm);

        ms.handle_key(key(KeyCode::Down));
        ms.handle_key(key(KeyCode::Char(' ')));
        assert!(ms.checked_items().is_empty());
        assert_eq!(ms.handle_key(key(KeyCode::Enter)), MultiSelectAction::Activate);
    }

    #[test]
    fn test_action_only_list_is_navigable() {
        let mut ms = MultiSelect::new(Vec::<String>::new()).with_action("+ Add new...");
        assert_eq!(ms.handle_key(key(KeyCode::Enter)), MultiSelectAction::Activate);
    }

    #[test]
    fn test_check_adds_new_items() {
        let mut ms = MultiSelect::new(vec!["rust"]).with_checked(&["rust".to_string()]);
        ms.check("zig");
        ms.check("rust");
        assert_eq!(ms.checked_items(), vec!["rust", "zig"]);
    }
}
