//! Reading list browser.
//!
//! Live search, a facet checklist and year-grouped results in one screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::{
    constants::{UI_TAGS_TRUNCATE_LEN, UI_TITLE_TRUNCATE_LEN},
    reading::{filter_readings, group_by_year, FilterState, ReadingItem},
    tui::{
        event::TuiEvent,
        widgets::{FacetPanel, TextInput},
        AppResult, TuiApp,
    },
    ui::truncate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Search,
    Facets,
    Results,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::Search => Self::Facets,
            Self::Facets => Self::Results,
            Self::Results => Self::Search,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Facets => Self::Search,
            Self::Results => Self::Facets,
        }
    }
}

enum ResultRow<'a> {
    Year(i32, usize),
    Item(&'a ReadingItem),
}

/// Interactive reading list browser. Completes with the picked item.
pub struct ReadingBrowser<'a> {
    items: &'a [ReadingItem],
    filters: FilterState,
    search: TextInput,
    facets: FacetPanel,
    rows: Vec<ResultRow<'a>>,
    results: ListState,
    shown: usize,
    focus: Focus,
}

impl<'a> ReadingBrowser<'a> {
    /// Create a browser over `items` starting from `filters`.
    pub fn new(items: &'a [ReadingItem], filters: FilterState) -> Self {
        let search = TextInput::new("Search")
            .with_placeholder("title, description, author, source, tags")
            .with_initial(filters.query.as_str());

        let mut browser = Self {
            items,
            filters,
            search,
            facets: FacetPanel::new(items),
            rows: Vec::new(),
            results: ListState::default(),
            shown: 0,
            focus: Focus::Search,
        };
        browser.refresh();
        browser
    }

    /// Current filter selection.
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Number of items passing the filters.
    pub const fn shown(&self) -> usize {
        self.shown
    }

    fn refresh(&mut self) {
        self.filters.query = self.search.content().to_string();
        let filtered = filter_readings(self.items, &self.filters.filters());
        self.shown = filtered.len();

        self.rows.clear();
        for (year, group) in group_by_year(filtered) {
            self.rows.push(ResultRow::Year(year, group.len()));
            self.rows.extend(group.into_iter().map(ResultRow::Item));
        }

        let first = self
            .rows
            .iter()
            .position(|r| matches!(r, ResultRow::Item(_)));
        self.results.select(first);
    }

    fn clear_filters(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.refresh();
    }

    fn selected_item(&self) -> Option<&'a ReadingItem> {
        match self.rows.get(self.results.selected()?)? {
            ResultRow::Item(item) => Some(item),
            ResultRow::Year(..) => None,
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let Some(mut index) = self.results.selected() else {
            return;
        };
        let len = self.rows.len();
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if matches!(self.rows[index], ResultRow::Item(_)) {
                self.results.select(Some(index));
                return;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppResult<&'a ReadingItem>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return Some(AppResult::Cancelled),
            KeyCode::Char('x') if ctrl => {
                self.clear_filters();
                return None;
            }
            KeyCode::Esc => return Some(AppResult::Cancelled),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => match key.code {
                KeyCode::Down | KeyCode::Enter => self.focus = Focus::Results,
                _ => {
                    if self.search.handle_key(key) {
                        self.refresh();
                    }
                }
            },
            Focus::Facets => {
                if self.facets.handle_key(key, &mut self.filters) {
                    self.refresh();
                }
            }
            Focus::Results => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
                KeyCode::Enter => return self.selected_item().map(AppResult::Done),
                _ => {}
            },
        }
        None
    }
}

impl<'a> TuiApp for ReadingBrowser<'a> {
    type Output = &'a ReadingItem;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Key(key) => self.handle_key(*key),
            TuiEvent::Paste(text) if self.focus == Focus::Search => {
                self.search.insert_text(text);
                self.refresh();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Search
            Constraint::Min(6),    // Facets and results
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        self.search
            .render(chunks[0], frame.buffer_mut(), self.focus == Focus::Search);

        let body = Layout::horizontal([Constraint::Percentage(32), Constraint::Percentage(68)])
            .split(chunks[1]);
        self.facets.render(
            body[0],
            frame.buffer_mut(),
            &self.filters,
            self.focus == Focus::Facets,
        );
        self.render_results(frame, body[1]);
        self.render_footer(frame, chunks[2]);
    }
}

impl ReadingBrowser<'_> {
    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Results;
        let selected = self.results.selected();

        let items: Vec<ListItem> = if self.rows.is_empty() {
            vec![ListItem::new(Span::styled(
                "  No matching items",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.rows
                .iter()
                .enumerate()
                .map(|(i, row)| match row {
                    ResultRow::Year(year, count) => ListItem::new(Line::from(vec![
                        Span::styled(
                            year.to_string(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!(" ({count})"), Style::default().fg(Color::DarkGray)),
                    ])),
                    ResultRow::Item(item) => result_line(item, focused && selected == Some(i)),
                })
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .title(" Reading ");

        frame.render_stateful_widget(List::new(items).block(block), area, &mut self.results);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Cyan);
        let mut spans = vec![
            Span::styled(
                FilterState::summary(self.shown, self.items.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Tab", key),
            Span::raw(" Focus  "),
            Span::styled("Space", key),
            Span::raw(" Toggle  "),
            Span::styled("Enter", key),
            Span::raw(" Open  "),
        ];
        if !self.filters.is_empty() {
            spans.push(Span::styled("Ctrl+X", key));
            spans.push(Span::raw(" Clear  "));
        }
        spans.push(Span::styled("Esc", key));
        spans.push(Span::raw(" Quit"));

        let footer = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(footer, area);
    }
}

fn result_line(item: &ReadingItem, highlighted: bool) -> ListItem<'static> {
    let style = if highlighted {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let dim = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(if highlighted { "> " } else { "  " }, style),
        Span::styled(format!("{} ", item.meta.kind.icon()), style),
        Span::styled(truncate(item.title(), UI_TITLE_TRUNCATE_LEN), style),
        Span::styled(format!("  {}", item.meta.status.label()), dim),
    ];
    if let Some(source) = &item.meta.source {
        spans.push(Span::styled(format!("  {source}"), dim));
    }
    if !item.tags().is_empty() {
        let tags = item
            .tags()
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        spans.push(Span::styled(
            format!("  {}", truncate(&tags, UI_TAGS_TRUNCATE_LEN)),
            Style::default().fg(Color::Green),
        ));
    }
    ListItem::new(Line::from(spans))
}
