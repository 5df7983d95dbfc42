//! Facet checklist for the reading browser.
//!
//! Sections for status, type, source, year and tags. Toggling a row updates
//! a [`FilterState`] directly.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::reading::{
    source_options, tag_options, type_options, year_options, FilterState, ReadingItem,
    ReadingStatus, ReadingType,
};

/// A single filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    Status(ReadingStatus),
    Type(ReadingType),
    Source(String),
    Year(i32),
    Tag(String),
}

impl Facet {
    fn label(&self) -> String {
        match self {
            Self::Status(status) => status.label().to_string(),
            Self::Type(kind) => format!("{} {}", kind.icon(), kind.label()),
            Self::Source(source) => source.clone(),
            Self::Year(year) => year.to_string(),
            Self::Tag(tag) => format!("#{tag}"),
        }
    }

    fn is_active(&self, state: &FilterState) -> bool {
        match self {
            Self::Status(status) => state.statuses.contains(status),
            Self::Type(kind) => state.types.contains(kind),
            Self::Source(source) => state.sources.contains(source),
            Self::Year(year) => state.year == Some(*year),
            Self::Tag(tag) => state.tags.contains(tag),
        }
    }

    fn apply(&self, state: &mut FilterState) {
        match self {
            Self::Status(status) => state.toggle_status(*status),
            Self::Type(kind) => state.toggle_type(*kind),
            Self::Source(source) => state.toggle_source(source),
            Self::Year(year) => state.toggle_year(*year),
            Self::Tag(tag) => state.toggle_tag(tag),
        }
    }
}

#[derive(Debug, Clone)]
enum Row {
    Header(&'static str),
    Option(Facet),
}

/// Scrollable facet list. Headers are skipped by the cursor.
#[derive(Debug, Clone)]
pub struct FacetPanel {
    rows: Vec<Row>,
    state: ListState,
}

impl FacetPanel {
    /// Builds sections from the options present in `items`.
    ///
    /// Every status is always listed; other sections appear only when the
    /// list has values for them.
    pub fn new(items: &[ReadingItem]) -> Self {
        let mut rows = Vec::new();
        let mut section = |title: &'static str, facets: Vec<Facet>| {
            if !facets.is_empty() {
                rows.push(Row::Header(title));
                rows.extend(facets.into_iter().map(Row::Option));
            }
        };

        section(
            "Status",
            ReadingStatus::ALL.into_iter().map(Facet::Status).collect(),
        );
        section(
            "Type",
            type_options(items).into_iter().map(Facet::Type).collect(),
        );
        section(
            "Source",
            source_options(items).into_iter().map(Facet::Source).collect(),
        );
        section(
            "Year",
            year_options(items).into_iter().map(Facet::Year).collect(),
        );
        section(
            "Tags",
            tag_options(items).into_iter().map(Facet::Tag).collect(),
        );

        let mut state = ListState::default();
        state.select(rows.iter().position(|r| matches!(r, Row::Option(_))));
        Self { rows, state }
    }

    /// Facet under the cursor.
    pub fn current(&self) -> Option<&Facet> {
        match self.rows.get(self.state.selected()?)? {
            Row::Option(facet) => Some(facet),
            Row::Header(_) => None,
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let len = self.rows.len();
        let Some(mut index) = self.state.selected() else {
            return;
        };
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if matches!(self.rows[index], Row::Option(_)) {
                self.state.select(Some(index));
                return;
            }
        }
    }

    /// Handles navigation and toggling. Returns true when `filters` changed.
    pub fn handle_key(&mut self, key: KeyEvent, filters: &mut FilterState) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false);
                false
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true);
                false
            }
            KeyCode::Char(' ') | KeyCode::Enter => match self.current() {
                Some(facet) => {
                    facet.apply(filters);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, filters: &FilterState, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Filters ");

        let cursor = self.state.selected();
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| match row {
                Row::Header(title) => ListItem::new(Line::from(Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ))),
                Row::Option(facet) => {
                    let active = facet.is_active(filters);
                    let marker = match (facet, active) {
                        (Facet::Year(_), true) => "(•) ",
                        (Facet::Year(_), false) => "( ) ",
                        (_, true) => "[x] ",
                        (_, false) => "[ ] ",
                    };
                    let is_cursor = focused && cursor == Some(i);
                    let style = if is_cursor {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else if active {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(if is_cursor { "> " } else { "  " }, style),
                        Span::styled(marker, style),
                        Span::styled(facet.label(), style),
                    ]))
                }
            })
            .collect();

        StatefulWidget::render(List::new(items).block(block), area, buf, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;

    use crate::reading::ReadingMeta;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn item(year: i32, source: Option<&str>, tags: &[&str]) -> ReadingItem {
        let mut meta = ReadingMeta::new("x", Utc.with_ymd_and_hms(year, 5, 1, 0, 0, 0).unwrap());
        meta.source = source.map(String::from);
        meta.tags = tags.iter().map(|t| (*t).to_string()).collect();
        ReadingItem::new(meta)
    }

    #[test]
    fn test_cursor_starts_on_first_status() {
        let panel = FacetPanel::new(&[]);
        assert_eq!(panel.current(), Some(&Facet::Status(ReadingStatus::Inbox)));
    }

    #[test]
    fn test_cursor_skips_headers() {
        let items = [item(2024, None, &[])];
        let mut panel = FacetPanel::new(&items);
        let mut filters = FilterState::new();

        for _ in 0..3 {
            panel.handle_key(key(KeyCode::Down), &mut filters);
        }
        assert_eq!(panel.current(), Some(&Facet::Type(ReadingType::Other)));

        panel.handle_key(key(KeyCode::Down), &mut filters);
        assert_eq!(panel.current(), Some(&Facet::Year(2024)));

        // wraps past the Status header
        panel.handle_key(key(KeyCode::Down), &mut filters);
        assert_eq!(panel.current(), Some(&Facet::Status(ReadingStatus::Inbox)));
    }

    #[test]
    fn test_space_toggles_filters() {
        let items = [item(2023, Some("HN"), &["rust"])];
        let mut panel = FacetPanel::new(&items);
        let mut filters = FilterState::new();

        assert!(panel.handle_key(key(KeyCode::Char(' ')), &mut filters));
        assert_eq!(filters.statuses, vec![ReadingStatus::Inbox]);

        while panel.current() != Some(&Facet::Year(2023)) {
            panel.handle_key(key(KeyCode::Down), &mut filters);
        }
        panel.handle_key(key(KeyCode::Enter), &mut filters);
        assert_eq!(filters.year, Some(2023));
        panel.handle_key(key(KeyCode::Enter), &mut filters);
        assert_eq!(filters.year, None);

        panel.handle_key(key(KeyCode::Down), &mut filters);
        panel.handle_key(key(KeyCode::Char(' ')), &mut filters);
        assert_eq!(filters.tags, vec!["rust"]);
    }
}
