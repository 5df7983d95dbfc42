//! New reading item wizard screen.
//!
//! Multi-step wizard that collects the fields of a reading list entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    intake::{validate_link, validate_title, RawReadingInput},
    reading::{ReadingStatus, ReadingType},
    tui::{
        event::TuiEvent,
        widgets::{MultiSelect, MultiSelectAction, SelectList, TextInput},
        AppResult, TuiApp,
    },
};

const ADD_TAG_ACTION: &str = "+ Add new...";

/// Wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Title,
    Link,
    Description,
    Type,
    Status,
    Source,
    Author,
    Tags,
}

impl WizardStep {
    const ALL: [Self; 8] = [
        Self::Title,
        Self::Link,
        Self::Description,
        Self::Type,
        Self::Status,
        Self::Source,
        Self::Author,
        Self::Tags,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn is_last(self) -> bool {
        self.index() == Self::ALL.len() - 1
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Link => "Link",
            Self::Description => "Description",
            Self::Type => "Type",
            Self::Status => "Status",
            Self::Source => "Source",
            Self::Author => "Author",
            Self::Tags => "Tags",
        }
    }
}

/// Wizard for adding a reading item.
pub struct ReadingWizard {
    step: WizardStep,
    title_input: TextInput,
    link_input: TextInput,
    description_input: TextInput,
    type_list: SelectList,
    status_list: SelectList,
    source_input: TextInput,
    author_input: TextInput,
    tags_list: MultiSelect,
    tag_input: TextInput,
    tag_input_mode: bool,
}

impl ReadingWizard {
    /// Create a wizard offering `existing_tags` for selection.
    pub fn new(existing_tags: Vec<String>) -> Self {
        let type_labels: Vec<String> = ReadingType::ALL
            .iter()
            .map(|t| format!("{} {}", t.icon(), t.label()))
            .collect();
        let status_labels: Vec<&str> = ReadingStatus::ALL.iter().map(|s| s.label()).collect();

        Self {
            step: WizardStep::Title,
            title_input: TextInput::new("Title"),
            link_input: TextInput::new("Link").with_placeholder("https://"),
            description_input: TextInput::new("Description"),
            type_list: SelectList::new(type_labels).with_title("Type"),
            status_list: SelectList::new(status_labels).with_title("Status"),
            source_input: TextInput::new("Source")
                .with_placeholder("e.g. Twitter, Medium, GitHub"),
            author_input: TextInput::new("Author"),
            tags_list: MultiSelect::new(existing_tags)
                .with_title("Tags")
                .with_action(ADD_TAG_ACTION),
            tag_input: TextInput::new("New tag"),
            tag_input_mode: false,
        }
    }

    /// Pre-populate fields from values given on the command line.
    #[must_use]
    pub fn with_defaults(mut self, raw: &RawReadingInput) -> Self {
        self.title_input = self.title_input.with_initial(raw.title.as_str());
        self.link_input = self.link_input.with_initial(raw.link.as_str());
        self.description_input = self
            .description_input
            .with_initial(raw.description.as_str());
        self.source_input = self.source_input.with_initial(raw.source.as_str());
        self.author_input = self.author_input.with_initial(raw.author.as_str());

        let type_index = ReadingType::ALL.iter().position(|t| *t == raw.kind).unwrap_or(0);
        self.type_list = self.type_list.with_selected(type_index);
        let status_index = ReadingStatus::ALL
            .iter()
            .position(|s| *s == raw.status)
            .unwrap_or(0);
        self.status_list = self.status_list.with_selected(status_index);

        let tags = crate::intake::parse_tags(&raw.tags);
        self.tags_list = self.tags_list.with_checked(&tags);
        self
    }

    /// Current step.
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Validates the current step, showing the error on its input.
    fn validate_step(&mut self) -> bool {
        let result = match self.step {
            WizardStep::Title => validate_title(self.title_input.content()),
            WizardStep::Link => validate_link(self.link_input.content()),
            _ => return true,
        };

        if let Err(e) = result {
            if let Some(input) = self.current_input() {
                input.set_error(Some(e.to_string()));
            }
            return false;
        }
        true
    }

    fn try_advance(&mut self) {
        if self.validate_step() && !self.step.is_last() {
            self.step = self.step.next();
        }
    }

    fn go_back(&mut self) {
        self.step = self.step.prev();
    }

    fn complete(&self) -> RawReadingInput {
        let kind = self
            .type_list
            .selected_index()
            .and_then(|i| ReadingType::ALL.get(i).copied())
            .unwrap_or_default();
        let status = self
            .status_list
            .selected_index()
            .and_then(|i| ReadingStatus::ALL.get(i).copied())
            .unwrap_or_default();

        RawReadingInput {
            title: self.title_input.content().to_string(),
            link: self.link_input.content().to_string(),
            description: self.description_input.content().to_string(),
            kind,
            status,
            source: self.source_input.content().to_string(),
            author: self.author_input.content().to_string(),
            tags: self.tags_list.checked_items().join(", "),
        }
    }

    fn current_input(&mut self) -> Option<&mut TextInput> {
        match self.step {
            WizardStep::Title => Some(&mut self.title_input),
            WizardStep::Link => Some(&mut self.link_input),
            WizardStep::Description => Some(&mut self.description_input),
            WizardStep::Source => Some(&mut self.source_input),
            WizardStep::Author => Some(&mut self.author_input),
            WizardStep::Tags if self.tag_input_mode => Some(&mut self.tag_input),
            WizardStep::Type | WizardStep::Status | WizardStep::Tags => None,
        }
    }

    fn handle_tag_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let tag = self.tag_input.content().trim().to_string();
                if !tag.is_empty() {
                    self.tags_list.check(&tag);
                }
                self.tag_input_mode = false;
                self.tag_input.clear();
            }
            KeyCode::Esc => {
                self.tag_input_mode = false;
                self.tag_input.clear();
            }
            _ => {
                self.tag_input.handle_key(key);
            }
        }
    }

    fn handle_step_key(&mut self, key: KeyEvent) {
        match self.step {
            WizardStep::Type | WizardStep::Status if key.code == KeyCode::Enter => {
                self.try_advance();
            }
            WizardStep::Type => {
                self.type_list.handle_key(key);
            }
            WizardStep::Status => {
                self.status_list.handle_key(key);
            }
            WizardStep::Tags => match self.tags_list.handle_key(key) {
                MultiSelectAction::Activate => self.tag_input_mode = true,
                MultiSelectAction::Confirm => self.tags_list.toggle_current(),
                MultiSelectAction::None | MultiSelectAction::Cancel => {}
            },
            _ => {
                if key.code == KeyCode::Enter {
                    self.try_advance();
                } else if let Some(input) = self.current_input() {
                    input.handle_key(key);
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppResult<RawReadingInput>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if key.code == KeyCode::Char('c') && ctrl {
            return Some(AppResult::Cancelled);
        }
        if self.tag_input_mode {
            self.handle_tag_input_key(key);
            return None;
        }

        match key.code {
            KeyCode::Char('n') if ctrl => {
                if self.step.is_last() {
                    return Some(AppResult::Done(self.complete()));
                }
                self.try_advance();
            }
            KeyCode::Char('p') if ctrl => self.go_back(),
            KeyCode::Esc => return Some(AppResult::Cancelled),
            _ => self.handle_step_key(key),
        }
        None
    }
}

impl TuiApp for ReadingWizard {
    type Output = RawReadingInput;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Paste(text) => {
                if let Some(input) = self.current_input() {
                    input.insert_text(text);
                }
                None
            }
            TuiEvent::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Step
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_step(frame, chunks[1]);
        self.render_help(frame, chunks[2]);
    }
}

impl ReadingWizard {
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let current = self.step.index();
        let total = WizardStep::ALL.len();

        let indicators: Vec<Span> = WizardStep::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, step)| {
                let style = match i.cmp(&current) {
                    std::cmp::Ordering::Equal => Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    std::cmp::Ordering::Less => Style::default().fg(Color::Green),
                    std::cmp::Ordering::Greater => Style::default().fg(Color::DarkGray),
                };
                let sep = if i < total - 1 { " > " } else { "" };
                vec![Span::styled(step.name(), style), Span::raw(sep)]
            })
            .collect();

        let header = Paragraph::new(Line::from(indicators)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" New Reading - Step {} of {total} ", current + 1)),
        );
        frame.render_widget(header, area);
    }

    fn render_step(&mut self, frame: &mut Frame, area: Rect) {
        match self.step {
            WizardStep::Type => self.type_list.render(area, frame.buffer_mut(), true),
            WizardStep::Status => self.status_list.render(area, frame.buffer_mut(), true),
            WizardStep::Tags => self.render_tags_step(frame, area),
            _ => {
                let chunks =
                    Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
                if let Some(input) = self.current_input() {
                    input.render(chunks[0], frame.buffer_mut(), true);
                }
            }
        }
    }

    fn render_tags_step(&mut self, frame: &mut Frame, area: Rect) {
        if self.tag_input_mode {
            let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).split(area);
            self.tags_list.render(chunks[0], frame.buffer_mut(), false);
            self.tag_input.render(chunks[1], frame.buffer_mut(), true);
        } else {
            let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).split(area);

            let checked = self.tags_list.checked_items();
            let current = if checked.is_empty() {
                "(none)".to_string()
            } else {
                checked.join(", ")
            };
            let selected = Paragraph::new(format!("Selected: {current}"))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(selected, chunks[0]);

            self.tags_list.render(chunks[1], frame.buffer_mut(), true);
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let key_on = Style::default().fg(Color::Cyan);
        let key_off = Style::default().fg(Color::DarkGray);
        let txt_off = Style::default().fg(Color::DarkGray);

        let can_go_back = self.step.index() > 0 && !self.tag_input_mode;
        let next_label = if self.step.is_last() { "Finish" } else { "Next" };

        let mut spans = vec![
            Span::styled("Ctrl+P", if can_go_back { key_on } else { key_off }),
            Span::styled(
                " Back  ",
                if can_go_back { Style::default() } else { txt_off },
            ),
            Span::styled("Ctrl+N", key_on),
            Span::raw(format!(" {next_label}  ")),
            Span::styled("Esc", key_on),
            Span::raw(" Cancel"),
        ];

        let panel = match self.step {
            WizardStep::Tags if self.tag_input_mode => " Enter Add  Esc Back",
            WizardStep::Tags => " Space Toggle",
            WizardStep::Type | WizardStep::Status => " Enter Select",
            _ => " Enter Confirm",
        };
        spans.push(Span::styled("   |", key_off));
        spans.push(Span::raw(panel));

        let help = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(wizard: &mut ReadingWizard, text: &str) {
        for c in text.chars() {
            wizard.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_title_is_required() {
        let mut wizard = ReadingWizard::new(vec![]);
        wizard.handle_event(&key(KeyCode::Enter));
        assert_eq!(wizard.step(), WizardStep::Title);
        assert_eq!(wizard.title_input.error(), Some("Title is required"));

        type_text(&mut wizard, "A");
        assert_eq!(wizard.title_input.error(), None);
        wizard.handle_event(&key(KeyCode::Enter));
        assert_eq!(wizard.step(), WizardStep::Link);
    }

    #[test]
    fn test_link_must_be_a_url() {
        let mut wizard = ReadingWizard::new(vec![]);
        type_text(&mut wizard, "Title");
        wizard.handle_event(&key(KeyCode::Enter));

        type_text(&mut wizard, "not a url");
        wizard.handle_event(&ctrl('n'));
        assert_eq!(wizard.step(), WizardStep::Link);
        assert_eq!(wizard.link_input.error(), Some("Please enter a valid URL"));
    }

    #[test]
    fn test_full_walkthrough() {
        let mut wizard = ReadingWizard::new(vec!["rust".to_string(), "web".to_string()]);

        type_text(&mut wizard, "Async Rust");
        wizard.handle_event(&key(KeyCode::Enter));
        wizard.handle_event(&TuiEvent::Paste("https://example.com/async".to_string()));
        wizard.handle_event(&key(KeyCode::Enter));
        type_text(&mut wizard, "Deep dive");
        wizard.handle_event(&key(KeyCode::Enter));

        // Type: Video
        wizard.handle_event(&key(KeyCode::Down));
        wizard.handle_event(&key(KeyCode::Enter));
        // Status: Finished
        wizard.handle_event(&key(KeyCode::Up));
        wizard.handle_event(&key(KeyCode::Enter));

        type_text(&mut wizard, "YouTube");
        wizard.handle_event(&key(KeyCode::Enter));
        wizard.handle_event(&key(KeyCode::Enter)); // no author
        assert_eq!(wizard.step(), WizardStep::Tags);

        // check "web", then add "async"
        wizard.handle_event(&key(KeyCode::Down));
        wizard.handle_event(&key(KeyCode::Char(' ')));
        wizard.handle_event(&key(KeyCode::Down));
        wizard.handle_event(&key(KeyCode::Enter));
        type_text(&mut wizard, "async");
        wizard.handle_event(&key(KeyCode::Enter));

        let Some(AppResult::Done(raw)) = wizard.handle_event(&ctrl('n')) else {
            panic!("wizard did not finish");
        };
        assert_eq!(raw.title, "Async Rust");
        assert_eq!(raw.link, "https://example.com/async");
        assert_eq!(raw.kind, ReadingType::Video);
        assert_eq!(raw.status, ReadingStatus::Finished);
        assert_eq!(raw.source, "YouTube");
        assert_eq!(raw.tags, "web, async");

        let input = raw.normalize().unwrap();
        assert_eq!(input.author, None);
        assert_eq!(input.tags, vec!["web", "async"]);
    }

    #[test]
    fn test_back_and_cancel() {
        let mut wizard = ReadingWizard::new(vec![]);
        type_text(&mut wizard, "T");
        wizard.handle_event(&key(KeyCode::Enter));
        wizard.handle_event(&ctrl('p'));
        assert_eq!(wizard.step(), WizardStep::Title);
        assert_eq!(wizard.handle_event(&key(KeyCode::Esc)), Some(AppResult::Cancelled));
    }

    #[test]
    fn test_defaults_prefill() {
        let raw = RawReadingInput {
            title: "Given".to_string(),
            link: "https://example.com".to_string(),
            kind: ReadingType::Book,
            status: ReadingStatus::Reading,
            tags: "rust".to_string(),
            ..Default::default()
        };
        let wizard = ReadingWizard::new(vec![]).with_defaults(&raw);
        let out = wizard.complete();
        assert_eq!(out.title, "Given");
        assert_eq!(out.kind, ReadingType::Book);
        assert_eq!(out.status, ReadingStatus::Reading);
        assert_eq!(out.tags, "rust");
    }
}
